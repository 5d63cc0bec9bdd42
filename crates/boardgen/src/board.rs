//! Board generation pipeline split into one submodule per stage.

pub mod model;

mod classify;
mod connectivity;
mod entities;
mod generator;
#[cfg(test)]
pub(crate) mod test_support;

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::random::RandomSource;

pub use generator::BoardGenerator;
pub use model::{ConnectivityReport, GeneratedBoard};

pub fn generate_board(
    config: BoardConfig,
    rng: &mut impl RandomSource,
) -> Result<GeneratedBoard, BoardError> {
    BoardGenerator::new(config)?.generate(rng)
}
