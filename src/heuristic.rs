//! Positional evaluation of a board based on runs of discs
//!
//! Every cell anchors a handful of 4-cell windows. A window that leaves the
//! board or contains an opposing disc is worth nothing; otherwise it is worth
//! an amount that grows steeply with the number of the player's discs inside
//! it. A player's score is the sum over every anchored window, and the value
//! of a board for a player is their score minus their opponent's.
//!
//! Vertical windows are only scanned downwards and horizontal windows only
//! leftwards from their anchor, while diagonals are scanned both up-right and
//! down-right. The totals this produces are what [`WIN_THRESHOLD`] is tuned
//! against, so the window set must stay exactly as it is.

use crate::board::{Board, Player};

/// A heuristic score
pub type Score = i64;

/// The number of discs in a row needed to win
pub const RUN_LENGTH: usize = 4;

/// Value of a clear window by the number of the player's discs in it
pub const RUN_SCORES: [Score; RUN_LENGTH + 1] = [0, 1, 10, 100, 100_000];

/// A board scoring at least this much for a player contains a completed run
/// of four for that player
///
/// The check is approximate: 900 three-disc windows would also reach it,
/// which cannot happen on any practical board size.
pub const WIN_THRESHOLD: Score = 90_000;

// (column step, row step) of each window scanned from an anchor cell
const VERTICAL: (isize, isize) = (0, -1);
const HORIZONTAL: (isize, isize) = (-1, 0);
const DIAGONAL_UP: (isize, isize) = (1, 1);
const DIAGONAL_DOWN: (isize, isize) = (1, -1);

/// Scores the window of [`RUN_LENGTH`] cells starting at `(column, row)` and
/// stepping by `direction`
fn window_score(
    board: &Board,
    column: usize,
    row: usize,
    direction: (isize, isize),
    player: Player,
) -> Score {
    let own = player.to_cell();
    let enemy = player.opponent().to_cell();
    let mut count = 0;

    for i in 0..RUN_LENGTH as isize {
        let x = column as isize + i * direction.0;
        let y = row as isize + i * direction.1;
        if x < 0 || y < 0 || x >= board.columns() as isize || y >= board.rows() as isize {
            return 0;
        }
        let cell = board.get(x as usize, y as usize);
        if cell == own {
            count += 1;
        } else if cell == enemy {
            return 0;
        }
    }

    RUN_SCORES[count]
}

pub fn vertical_points(board: &Board, column: usize, row: usize, player: Player) -> Score {
    window_score(board, column, row, VERTICAL, player)
}

pub fn horizontal_points(board: &Board, column: usize, row: usize, player: Player) -> Score {
    window_score(board, column, row, HORIZONTAL, player)
}

/// Sum of the up-right and down-right windows anchored at a cell
pub fn diagonal_points(board: &Board, column: usize, row: usize, player: Player) -> Score {
    window_score(board, column, row, DIAGONAL_UP, player)
        + window_score(board, column, row, DIAGONAL_DOWN, player)
}

/// The total run score of `player` on `board`, ignoring the opponent's runs
pub fn player_score(board: &Board, player: Player) -> Score {
    let mut points = 0;
    for column in 0..board.columns() {
        for row in 0..board.rows() {
            points += vertical_points(board, column, row, player);
            points += horizontal_points(board, column, row, player);
            points += diagonal_points(board, column, row, player);
        }
    }
    points
}

/// Evaluates `board` from the point of view of `player`
pub fn evaluate(board: &Board, player: Player) -> Score {
    player_score(board, player) - player_score(board, player.opponent())
}

/// Whether either player has completed a run of four, judged by the
/// evaluation crossing [`WIN_THRESHOLD`]
pub fn is_terminal(board: &Board) -> bool {
    evaluate(board, Player::One) >= WIN_THRESHOLD || evaluate(board, Player::Two) >= WIN_THRESHOLD
}
