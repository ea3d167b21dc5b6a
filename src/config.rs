//! Engine configuration

use std::convert::TryFrom;

use crate::board::Player;
use crate::error::{EngineError, Result};

/// Search depth used by [`EngineConfig::default`]
pub const DEFAULT_DEPTH: u32 = 4;

/// Immutable settings of a [`Solver`](crate::solver::Solver)
///
/// Only [`EngineConfig::new`] and [`Default`] build one, so the depth is
/// always at least one ply.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EngineConfig {
    player: Player,
    depth: u32,
    parallel: bool,
}

impl EngineConfig {
    /// Creates a configuration from a wire player id (1 or 2) and a search
    /// depth of at least one ply
    pub fn new(player_id: u8, depth: u32) -> Result<Self> {
        let player = Player::try_from(player_id)?;
        if depth == 0 {
            return Err(EngineError::config("search depth must be at least 1 ply"));
        }
        Ok(Self {
            player,
            depth,
            parallel: false,
        })
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The player the engine moves for
    pub fn player(&self) -> Player {
        self.player
    }

    /// Number of plies searched, counting the engine's own move
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether root moves are scored on the rayon thread pool
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            player: Player::One,
            depth: DEFAULT_DEPTH,
            parallel: false,
        }
    }
}
