//! Procedural board generation with a reachability guarantee.
//!
//! [`generate_board`] classifies every cell as floor, wall or hole, repairs the
//! grid until every floor cell is reachable from the spawn at `(0, 0)`, and then
//! places the player and a quota of enemies.

pub mod board;
pub mod config;
pub mod error;
pub mod grid;
pub mod random;
pub mod types;

pub use board::{BoardGenerator, ConnectivityReport, GeneratedBoard, generate_board};
pub use config::BoardConfig;
pub use error::{BoardError, ConfigError};
pub use grid::Grid;
pub use random::{RandomSource, SeededRandom, derive_board_seed};
pub use types::*;
