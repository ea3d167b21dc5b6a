//! A fixed-depth negamax agent for Connect 4

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::board::{Board, Player};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::heuristic::{evaluate, is_terminal, Score};

/// Performs game tree search
///
/// Returns the score of `board` from the point of view of `player`, who is
/// about to move. Positions at the depth limit, positions with no legal move
/// and positions where someone already has four in a row are scored with the
/// heuristic; every other position is worth the best of its children, each
/// child's score being negated since it is seen from the opponent's side.
///
/// Every node up to `depth` plies is visited. `node_count` is incremented
/// once per node (for diagnostics only).
pub fn negamax(depth: u32, board: &Board, player: Player, node_count: &mut usize) -> Result<Score> {
    *node_count += 1;

    let moves = board.legal_moves();
    if depth == 0 || moves.is_empty() || is_terminal(board) {
        return Ok(evaluate(board, player));
    }

    let mut best = Score::MIN;
    for column in moves {
        // each child gets its own copy of the board
        let child = board.play(column, player)?;
        let score = -negamax(depth - 1, &child, player.opponent(), node_count)?;
        if score > best {
            best = score;
        }
    }
    Ok(best)
}

/// Scores a single root move for `player`, returning the score and the number
/// of nodes searched below it
fn score_move(board: &Board, column: usize, player: Player, depth: u32) -> Result<(Score, usize)> {
    let remaining = depth
        .checked_sub(1)
        .ok_or_else(|| EngineError::config("search depth must be at least 1 ply"))?;
    let mut node_count = 0;
    let child = board.play(column, player)?;
    // the search window is flipped for the other player
    let score = -negamax(remaining, &child, player.opponent(), &mut node_count)?;
    trace!(column, score, nodes = node_count, "scored root move");
    Ok((score, node_count))
}

/// Picks a column from scored root moves
///
/// The candidates are shuffled and then scanned in order, each one replacing
/// the running best whenever its score is at least as high. A unique maximum
/// is therefore always chosen, and among several columns sharing the maximum
/// score each is equally likely. Returns `None` only when `scored` is empty.
pub fn select_move<R: Rng + ?Sized>(scored: &mut [(usize, Score)], rng: &mut R) -> Option<usize> {
    scored.shuffle(rng);

    let mut best: Option<(usize, Score)> = None;
    for &(column, score) in scored.iter() {
        match best {
            Some((_, best_score)) if score < best_score => {}
            _ => best = Some((column, score)),
        }
    }
    best.map(|(column, _)| column)
}

/// An agent choosing Connect 4 moves by fixed-depth negamax search
///
/// # Notes
/// Each legal column is played for the configured player and the resulting
/// position is searched for the remaining `depth - 1` plies. There is no
/// pruning, so the cost grows as `columns ^ depth`.
///
/// Ties between equally scored columns are broken at random. The random
/// source is seeded from the operating system unless a seed is given with
/// [`Solver::with_seed`].
#[derive(Clone, Debug)]
pub struct Solver {
    config: EngineConfig,
    rng: StdRng,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` with an entropy-seeded random source
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
            node_count: 0,
        }
    }

    /// Creates a new `Solver` whose tie-breaking is reproducible
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            node_count: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scores every legal move on `board` for the configured player
    ///
    /// Returns `(column, score)` pairs in ascending column order. With
    /// [`EngineConfig::parallel`] enabled, root moves are searched on the rayon
    /// thread pool; the result is the same either way.
    pub fn score_moves(&mut self, board: &Board) -> Result<Vec<(usize, Score)>> {
        let (player, depth) = (self.config.player(), self.config.depth());
        let moves = board.legal_moves();

        let results: Vec<(Score, usize)> = if self.config.parallel() {
            moves
                .par_iter()
                .map(|&column| score_move(board, column, player, depth))
                .collect::<Result<_>>()?
        } else {
            moves
                .iter()
                .map(|&column| score_move(board, column, player, depth))
                .collect::<Result<_>>()?
        };

        self.node_count += results.iter().map(|&(_, nodes)| nodes).sum::<usize>();
        Ok(moves
            .into_iter()
            .zip(results)
            .map(|(column, (score, _))| (column, score))
            .collect())
    }

    /// Chooses the column to play on `board`
    ///
    /// Fails with [`EngineError::NoLegalMoves`] if every column is full.
    pub fn pick_move(&mut self, board: &Board) -> Result<usize> {
        let mut scored = self.score_moves(board)?;
        debug!(
            player = self.config.player().id(),
            depth = self.config.depth(),
            scores = ?scored,
            "scored root moves"
        );

        let column = select_move(&mut scored, &mut self.rng).ok_or(EngineError::NoLegalMoves)?;
        debug!(column, nodes = self.node_count, "picked move");
        Ok(column)
    }

    /// Chooses the column to play on a column-major rack of `0`/`1`/`2` cell
    /// values, listed bottom-first
    pub fn pick_move_rack(&mut self, rack: &[Vec<u8>]) -> Result<usize> {
        let board = Board::from_rack(rack)?;
        self.pick_move(&board)
    }
}
