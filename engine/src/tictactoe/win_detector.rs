use super::board::{Board, WIN_LINES, is_board_full};
use super::types::{GameStatus, Mark, WinningLine};

pub fn has_win(board: &Board, mark: Mark) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board[index] == Some(mark)))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|winning| winning.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(mark) = board[a] {
            if board[b] == Some(mark) && board[c] == Some(mark) {
                return Some(WinningLine::new(mark, line));
            }
        }
    }
    None
}

/// Does not look for wins; callers check those first.
pub fn is_draw(board: &Board) -> bool {
    is_board_full(board)
}

pub fn evaluate(board: &Board) -> GameStatus {
    if has_win(board, Mark::X) {
        return GameStatus::XWon;
    }
    if has_win(board, Mark::O) {
        return GameStatus::OWon;
    }
    if is_draw(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}
