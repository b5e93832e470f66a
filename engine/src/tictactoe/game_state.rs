use super::board::{Board, empty_board};
use super::bot_controller::calculate_move;
use super::settings::BotSettings;
use super::types::{GameStatus, Mark};
use super::win_detector::{check_win, is_draw};
use crate::log;
use crate::session_rng::SessionRng;

/// `Mark::X` always opens, so the player's symbol choice decides who
/// moves first.
#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub player_mark: Mark,
    pub bot_mark: Mark,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(player_mark: Mark) -> Self {
        Self {
            board: empty_board(),
            player_mark,
            bot_mark: player_mark.opponent(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if index >= self.board.len() {
            return Err("Position out of bounds".to_string());
        }

        if self.board[index].is_some() {
            return Err("Cell is already marked".to_string());
        }

        self.board[index] = Some(mark);
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn play_bot_move(
        &mut self,
        settings: &BotSettings,
        rng: &mut SessionRng,
    ) -> Result<usize, String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if self.current_mark != self.bot_mark {
            return Err("Not the bot's turn".to_string());
        }

        let index = calculate_move(settings, &self.board, self.bot_mark, rng)
            .ok_or_else(|| "No moves available".to_string())?;

        self.place_mark(self.bot_mark, index)?;
        log!("Bot ({:?}) placed mark at cell {}", settings.bot_type, index);
        Ok(index)
    }

    fn switch_turn(&mut self) {
        self.current_mark = self.current_mark.opponent();
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
            };
            return;
        }

        if is_draw(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }
}
