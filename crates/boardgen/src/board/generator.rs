//! Board generation orchestration: classify, connect, then populate.

use log::debug;

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::random::RandomSource;

use super::classify::classify_tiles;
use super::connectivity::enforce_connectivity;
use super::entities::place_entities;
use super::model::GeneratedBoard;

#[derive(Clone, Debug)]
pub struct BoardGenerator {
    config: BoardConfig,
}

impl BoardGenerator {
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn generate(&self, rng: &mut impl RandomSource) -> Result<GeneratedBoard, BoardError> {
        let mut tiles = classify_tiles(&self.config, rng);
        let connectivity = enforce_connectivity(&mut tiles);
        let entities = place_entities(&self.config, &tiles, rng)?;

        let board = GeneratedBoard { config: self.config, tiles, entities, connectivity };
        debug!(
            "generated {}x{} board: floor={} enemies={} fingerprint={:016x}",
            board.width(),
            board.height(),
            board.floor_count(),
            self.config.enemy_count,
            board.fingerprint()
        );
        Ok(board)
    }
}
