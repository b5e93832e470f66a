use serde::{Deserialize, Serialize};

use super::board::{Board, CENTER, CORNERS, get_available_moves};
use super::settings::BotSettings;
use super::types::Mark;
use super::win_detector::{has_win, is_draw};
use crate::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    Random,
    Mixed,
    Heuristic,
    Minimax,
}

/// What the heuristic plays once win, block, center and corners are all
/// unavailable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackPolicy {
    FirstAvailable,
    Random,
}

/// Returns `None` only when the board has no empty cell.
pub fn calculate_move(
    settings: &BotSettings,
    board: &Board,
    mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    match settings.bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Mixed => {
            if rng.random::<f64>() < settings.mixed_random_chance {
                calculate_random_move(board, rng)
            } else {
                calculate_heuristic_move(board, mark, settings.fallback_policy, rng)
            }
        }
        BotType::Heuristic => calculate_heuristic_move(board, mark, settings.fallback_policy, rng),
        BotType::Minimax => calculate_minimax_move(board, mark),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

pub fn calculate_minimax_move(board: &Board, mark: Mark) -> Option<usize> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }

    let mut probe = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        probe[index] = Some(mark);
        let score = minimax(&mut probe, 0, false, mark);
        probe[index] = None;

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

// Depth-biased scores: faster wins rank higher, slower losses less negative.
fn minimax(board: &mut Board, depth: usize, is_maximizing: bool, bot_mark: Mark) -> i32 {
    let opponent_mark = bot_mark.opponent();

    if has_win(board, bot_mark) {
        return 10 - depth as i32;
    }
    if has_win(board, opponent_mark) {
        return depth as i32 - 10;
    }
    if is_draw(board) {
        return 0;
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for index in 0..board.len() {
            if board[index].is_some() {
                continue;
            }
            board[index] = Some(bot_mark);
            let score = minimax(board, depth + 1, false, bot_mark);
            board[index] = None;
            best = best.max(score);
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in 0..board.len() {
            if board[index].is_some() {
                continue;
            }
            board[index] = Some(opponent_mark);
            let score = minimax(board, depth + 1, true, bot_mark);
            board[index] = None;
            best = best.min(score);
        }
        best
    }
}

// Priority order: win now, block, center, corner, fallback. One-ply only,
// so forks go unseen.
pub fn calculate_heuristic_move(
    board: &Board,
    mark: Mark,
    fallback_policy: FallbackPolicy,
    rng: &mut SessionRng,
) -> Option<usize> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }

    let mut probe = *board;

    if let Some(index) = find_winning_move(&mut probe, mark, &available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&mut probe, mark.opponent(), &available_moves) {
        return Some(index);
    }

    if probe[CENTER].is_none() {
        return Some(CENTER);
    }

    if let Some(&corner) = CORNERS.iter().find(|&&corner| probe[corner].is_none()) {
        return Some(corner);
    }

    match fallback_policy {
        FallbackPolicy::FirstAvailable => available_moves.first().copied(),
        FallbackPolicy::Random => {
            let idx = rng.random_range(0..available_moves.len());
            Some(available_moves[idx])
        }
    }
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board[index] = Some(mark);
        let wins = has_win(board, mark);
        board[index] = None;

        if wins {
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::empty_board;
    use crate::tictactoe::types::GameStatus;
    use crate::tictactoe::win_detector::evaluate;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = empty_board();
        for &(index, mark) in marks {
            board[index] = Some(mark);
        }
        board
    }

    fn heuristic_settings(fallback_policy: FallbackPolicy) -> BotSettings {
        BotSettings {
            bot_type: BotType::Heuristic,
            fallback_policy,
            ..BotSettings::default()
        }
    }

    #[test]
    fn test_minimax_takes_immediate_win() {
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (3, Mark::O),
            (4, Mark::O),
        ]);

        assert_eq!(calculate_minimax_move(&board, Mark::X), Some(2));
    }

    #[test]
    fn test_minimax_blocks_immediate_loss() {
        let board = board_with(&[
            (0, Mark::O),
            (1, Mark::O),
            (4, Mark::X),
        ]);

        assert_eq!(calculate_minimax_move(&board, Mark::X), Some(2));
    }

    #[test]
    fn test_minimax_prefers_faster_win() {
        // Winning outright at 8 outscores blocking at 2 and winning later,
        // even though 2 is scanned first.
        let board = board_with(&[
            (6, Mark::X),
            (7, Mark::X),
            (0, Mark::O),
            (1, Mark::O),
        ]);

        assert_eq!(calculate_minimax_move(&board, Mark::X), Some(8));
    }

    #[test]
    fn test_minimax_restores_caller_board() {
        let board = board_with(&[(4, Mark::X), (0, Mark::O)]);
        let snapshot = board;

        calculate_minimax_move(&board, Mark::X);

        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_minimax_returns_none_on_full_board() {
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);

        assert_eq!(calculate_minimax_move(&board, Mark::X), None);
    }

    #[test]
    fn test_minimax_self_play_always_draws() {
        let mut board = empty_board();
        let mut current_mark = Mark::X;

        while evaluate(&board) == GameStatus::InProgress {
            let index = calculate_minimax_move(&board, current_mark).unwrap();
            board[index] = Some(current_mark);
            current_mark = current_mark.opponent();
        }

        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_minimax_never_loses_to_perfect_opponent() {
        // The opponent opens anywhere and plays perfectly from there; the
        // minimax side must never end up losing.
        for opening in 0..9 {
            let mut board = empty_board();
            board[opening] = Some(Mark::X);
            let mut current_mark = Mark::O;

            while evaluate(&board) == GameStatus::InProgress {
                let index = calculate_minimax_move(&board, current_mark).unwrap();
                board[index] = Some(current_mark);
                current_mark = current_mark.opponent();
            }

            assert_ne!(
                evaluate(&board),
                GameStatus::XWon,
                "minimax as O lost after opening {}",
                opening
            );
        }
    }

    #[test]
    fn test_heuristic_wins_over_blocking() {
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (3, Mark::O),
            (4, Mark::O),
        ]);
        let mut rng = SessionRng::new(1);

        let index =
            calculate_heuristic_move(&board, Mark::X, FallbackPolicy::FirstAvailable, &mut rng);
        assert_eq!(index, Some(2));
    }

    #[test]
    fn test_heuristic_blocks_opponent_win() {
        let board = board_with(&[
            (0, Mark::O),
            (1, Mark::O),
            (4, Mark::X),
        ]);
        let mut rng = SessionRng::new(1);

        let index =
            calculate_heuristic_move(&board, Mark::X, FallbackPolicy::FirstAvailable, &mut rng);
        assert_eq!(index, Some(2));
    }

    #[test]
    fn test_heuristic_takes_center_on_empty_board() {
        let board = empty_board();
        let mut rng = SessionRng::new(1);

        let index =
            calculate_heuristic_move(&board, Mark::X, FallbackPolicy::FirstAvailable, &mut rng);
        assert_eq!(index, Some(CENTER));
    }

    #[test]
    fn test_heuristic_takes_first_corner_when_center_taken() {
        let board = board_with(&[(4, Mark::O)]);
        let mut rng = SessionRng::new(1);

        let index =
            calculate_heuristic_move(&board, Mark::X, FallbackPolicy::FirstAvailable, &mut rng);
        assert_eq!(index, Some(0));
    }

    // Corners and center occupied, no one-move win for either side, edges
    // 3 and 5 free.
    fn fallback_board() -> Board {
        board_with(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (4, Mark::X),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::O),
        ])
    }

    #[test]
    fn test_heuristic_fallback_first_available() {
        let board = fallback_board();
        let mut rng = SessionRng::new(1);

        let index =
            calculate_heuristic_move(&board, Mark::O, FallbackPolicy::FirstAvailable, &mut rng);
        assert_eq!(index, Some(3));
    }

    #[test]
    fn test_heuristic_fallback_random_is_legal_and_seeded() {
        let board = fallback_board();

        let mut rng = SessionRng::new(9);
        let first = calculate_heuristic_move(&board, Mark::O, FallbackPolicy::Random, &mut rng);
        assert!(matches!(first, Some(3) | Some(5)));

        let mut replay = SessionRng::new(9);
        let second =
            calculate_heuristic_move(&board, Mark::O, FallbackPolicy::Random, &mut replay);
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_move_is_legal() {
        let board = board_with(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
        let mut rng = SessionRng::new(3);

        for _ in 0..50 {
            let index = calculate_random_move(&board, &mut rng).unwrap();
            assert!(board[index].is_none());
        }
    }

    #[test]
    fn test_mixed_with_zero_chance_matches_heuristic() {
        let board = board_with(&[(0, Mark::O)]);
        let settings = BotSettings {
            bot_type: BotType::Mixed,
            mixed_random_chance: 0.0,
            ..BotSettings::default()
        };
        let mut rng = SessionRng::new(5);

        let index = calculate_move(&settings, &board, Mark::X, &mut rng);
        assert_eq!(index, Some(CENTER));
    }

    #[test]
    fn test_mixed_with_full_chance_stays_legal() {
        let board = board_with(&[(4, Mark::O), (0, Mark::X)]);
        let settings = BotSettings {
            bot_type: BotType::Mixed,
            mixed_random_chance: 1.0,
            ..BotSettings::default()
        };
        let mut rng = SessionRng::new(11);

        for _ in 0..20 {
            let index = calculate_move(&settings, &board, Mark::X, &mut rng).unwrap();
            assert!(board[index].is_none());
        }
    }

    #[test]
    fn test_calculate_move_dispatches_minimax() {
        let board = board_with(&[(0, Mark::O), (1, Mark::O), (4, Mark::X)]);
        let settings = BotSettings {
            bot_type: BotType::Minimax,
            ..BotSettings::default()
        };
        let mut rng = SessionRng::new(1);

        assert_eq!(calculate_move(&settings, &board, Mark::X, &mut rng), Some(2));
    }

    #[test]
    fn test_heuristic_settings_dispatch() {
        let board = empty_board();
        let settings = heuristic_settings(FallbackPolicy::Random);
        let mut rng = SessionRng::new(1);

        assert_eq!(calculate_move(&settings, &board, Mark::O, &mut rng), Some(CENTER));
    }
}
