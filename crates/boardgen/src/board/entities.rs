//! Player and enemy placement on a connected tile grid.

use log::warn;

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::grid::Grid;
use crate::random::RandomSource;
use crate::types::{EntityMark, Pos, Tile, TileKind};

/// Rejection-sampling budget per board cell before falling back to a scan.
pub(super) const PLACEMENT_ATTEMPTS_PER_CELL: usize = 64;

pub(super) fn place_entities(
    config: &BoardConfig,
    tiles: &Grid<Tile>,
    rng: &mut impl RandomSource,
) -> Result<Grid<EntityMark>, BoardError> {
    let mut entities = Grid::filled(tiles.width(), tiles.height(), EntityMark::Empty);
    entities[Pos::SPAWN] = EntityMark::Player;

    let available =
        tiles.positions().filter(|&pos| accepts_enemy(config, tiles, &entities, pos)).count();
    if config.enemy_count > available {
        return Err(BoardError::UnsatisfiableEnemyQuota {
            requested: config.enemy_count,
            available,
        });
    }

    let mut remaining = config.enemy_count;
    let max_attempts = tiles.len() * PLACEMENT_ATTEMPTS_PER_CELL;
    let mut attempts = 0;
    while remaining > 0 && attempts < max_attempts {
        attempts += 1;
        let x = rng.below(tiles.width());
        let y = rng.below(tiles.height());
        let pos = Pos { y: y as i32, x: x as i32 };
        if accepts_enemy(config, tiles, &entities, pos) {
            entities[pos] = EntityMark::Enemy;
            remaining -= 1;
        }
    }

    if remaining > 0 {
        warn!(
            "enemy sampling gave up after {attempts} attempts with {remaining} of {} left; \
             filling in row-major order",
            config.enemy_count
        );
        for pos in tiles.positions() {
            if remaining == 0 {
                break;
            }
            if accepts_enemy(config, tiles, &entities, pos) {
                entities[pos] = EntityMark::Enemy;
                remaining -= 1;
            }
        }
    }

    Ok(entities)
}

fn accepts_enemy(
    config: &BoardConfig,
    tiles: &Grid<Tile>,
    entities: &Grid<EntityMark>,
    pos: Pos,
) -> bool {
    tiles[pos].kind == TileKind::Floor
        && entities[pos] == EntityMark::Empty
        && !config.within_spawn_clearance(pos)
}
