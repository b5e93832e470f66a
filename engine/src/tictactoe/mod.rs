mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{
    Board, CELL_COUNT, CENTER, CORNERS, WIN_LINES, empty_board, get_available_moves,
    is_board_full, is_valid_move,
};
pub use bot_controller::{
    BotType, FallbackPolicy, calculate_heuristic_move, calculate_minimax_move, calculate_move,
};
pub use game_state::TicTacToeGameState;
pub use settings::BotSettings;
pub use types::{Cell, GameStatus, Mark, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate, has_win, is_draw};
