//! Board parameters supplied by the caller for each generation run.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub wall_percent: u8,
    pub hole_percent: u8,
    pub enemy_count: usize,
    /// Enemies never spawn on a cell whose larger coordinate is below this value.
    #[serde(default)]
    pub spawn_clearance: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 12,
            wall_percent: 20,
            hole_percent: 20,
            enemy_count: 5,
            spawn_clearance: 2,
        }
    }
}

impl BoardConfig {
    pub fn new(
        rows: usize,
        cols: usize,
        wall_percent: u8,
        hole_percent: u8,
        enemy_count: usize,
    ) -> Self {
        Self { rows, cols, wall_percent, hole_percent, enemy_count, spawn_clearance: 0 }
    }

    pub fn with_spawn_clearance(self, spawn_clearance: usize) -> Self {
        Self { spawn_clearance, ..self }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if self.wall_percent > 100 {
            return Err(ConfigError::WallPercentOutOfRange(self.wall_percent));
        }
        if self.hole_percent > 100 {
            return Err(ConfigError::HolePercentOutOfRange(self.hole_percent));
        }
        if u16::from(self.wall_percent) + u16::from(self.hole_percent) > 100 {
            return Err(ConfigError::PercentSumExceeded {
                wall: self.wall_percent,
                hole: self.hole_percent,
            });
        }
        Ok(())
    }

    pub(crate) fn within_spawn_clearance(&self, pos: Pos) -> bool {
        (pos.x.max(pos.y) as usize) < self.spawn_clearance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_game_preset_and_is_valid() {
        let config = BoardConfig::default();
        assert_eq!((config.rows, config.cols), (8, 12));
        assert_eq!((config.wall_percent, config.hole_percent), (20, 20));
        assert_eq!(config.enemy_count, 5);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(BoardConfig::new(0, 4, 0, 0, 0).validate(), Err(ConfigError::ZeroRows));
        assert_eq!(BoardConfig::new(4, 0, 0, 0, 0).validate(), Err(ConfigError::ZeroCols));
    }

    #[test]
    fn rejects_out_of_range_percentages() {
        assert_eq!(
            BoardConfig::new(4, 4, 101, 0, 0).validate(),
            Err(ConfigError::WallPercentOutOfRange(101))
        );
        assert_eq!(
            BoardConfig::new(4, 4, 0, 200, 0).validate(),
            Err(ConfigError::HolePercentOutOfRange(200))
        );
        assert_eq!(
            BoardConfig::new(4, 4, 60, 41, 0).validate(),
            Err(ConfigError::PercentSumExceeded { wall: 60, hole: 41 })
        );
        assert_eq!(BoardConfig::new(4, 4, 60, 40, 0).validate(), Ok(()));
    }

    #[test]
    fn spawn_clearance_covers_corner_square() {
        let config = BoardConfig::new(6, 6, 0, 0, 0).with_spawn_clearance(2);
        assert!(config.within_spawn_clearance(Pos { y: 1, x: 1 }));
        assert!(config.within_spawn_clearance(Pos { y: 0, x: 1 }));
        assert!(!config.within_spawn_clearance(Pos { y: 0, x: 2 }));
        assert!(!config.within_spawn_clearance(Pos { y: 2, x: 0 }));
    }

    #[test]
    fn missing_clearance_deserializes_as_zero() {
        let json = r#"{"rows":3,"cols":4,"wall_percent":10,"hole_percent":5,"enemy_count":1}"#;
        let config: BoardConfig = serde_json::from_str(json).expect("config should parse");
        assert_eq!(config, BoardConfig::new(3, 4, 10, 5, 1));
    }
}
