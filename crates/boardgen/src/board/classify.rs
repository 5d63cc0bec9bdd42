//! Initial random tile classification.

use crate::config::BoardConfig;
use crate::grid::Grid;
use crate::random::RandomSource;
use crate::types::{Pos, Tile, TileKind};

const PERCENT_ROLL_BOUND: usize = 100;

/// Draws one kind per cell in row-major order, then forces the spawn cell to floor.
pub(super) fn classify_tiles(config: &BoardConfig, rng: &mut impl RandomSource) -> Grid<Tile> {
    let mut tiles = Grid::from_fn(config.cols, config.rows, |_| {
        Tile::new(roll_tile_kind(config, rng.below(PERCENT_ROLL_BOUND)))
    });
    tiles[Pos::SPAWN] = Tile::new(TileKind::Floor);
    tiles
}

fn roll_tile_kind(config: &BoardConfig, roll: usize) -> TileKind {
    let wall = usize::from(config.wall_percent);
    let hole = usize::from(config.hole_percent);
    if roll < wall {
        TileKind::Wall
    } else if roll - wall < hole {
        TileKind::Hole
    } else {
        TileKind::Floor
    }
}
