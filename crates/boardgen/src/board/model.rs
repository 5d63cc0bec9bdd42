//! Public data models for generated boards.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::config::BoardConfig;
use crate::grid::Grid;
use crate::types::{EntityMark, Pos, Tile, TileKind};

/// Work done by one connectivity run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConnectivityReport {
    /// Flood-fill passes, including the final one that found the board connected.
    pub iterations: usize,
    pub repaired: usize,
    pub forced: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedBoard {
    pub config: BoardConfig,
    pub tiles: Grid<Tile>,
    pub entities: Grid<EntityMark>,
    pub connectivity: ConnectivityReport,
}

impl GeneratedBoard {
    pub fn width(&self) -> usize {
        self.tiles.width()
    }

    pub fn height(&self) -> usize {
        self.tiles.height()
    }

    pub fn tile_kind_at(&self, pos: Pos) -> TileKind {
        self.tiles.get(pos).map_or(TileKind::Wall, |tile| tile.kind)
    }

    pub fn mark_at(&self, pos: Pos) -> EntityMark {
        self.entities.get(pos).copied().unwrap_or_default()
    }

    pub fn enemy_positions(&self) -> Vec<Pos> {
        self.entities.positions().filter(|&pos| self.entities[pos] == EntityMark::Enemy).collect()
    }

    pub fn floor_count(&self) -> usize {
        self.tiles.count(|tile| tile.kind == TileKind::Floor)
    }

    pub fn into_grids(self) -> (Grid<Tile>, Grid<EntityMark>) {
        (self.tiles, self.entities)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len() * 2);
        bytes.extend((self.width() as u32).to_le_bytes());
        bytes.extend((self.height() as u32).to_le_bytes());
        for tile in self.tiles.iter() {
            bytes.push(match tile.kind {
                TileKind::Floor => 0,
                TileKind::Wall => 1,
                TileKind::Hole => 2,
            });
        }
        for mark in self.entities.iter() {
            bytes.push(match mark {
                EntityMark::Empty => 0,
                EntityMark::Player => 1,
                EntityMark::Enemy => 2,
            });
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
