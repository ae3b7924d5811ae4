//! Configuration for a game engine instance.

use std::path::PathBuf;

/// Configuration for a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible shuffles and draws; `None` seeds from
    /// OS entropy.
    pub seed: Option<u64>,
    /// Directory holding the session snapshot and settings slots.
    pub state_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            state_dir: PathBuf::from(".tod"),
        }
    }
}

impl GameConfig {
    /// Set a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the state directory.
    pub fn with_state_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.state_dir = dir.into();
        self
    }
}
