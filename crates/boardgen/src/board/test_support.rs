//! Fixtures shared by the board pipeline tests.

use std::collections::{BTreeSet, VecDeque};

use crate::grid::Grid;
use crate::random::RandomSource;
use crate::types::{Pos, Tile, TileKind};

/// Replays a fixed list of draws. `cycle` repeats the list forever.
pub(crate) struct ScriptedRandom {
    values: Vec<usize>,
    cursor: usize,
    cycle: bool,
}

impl ScriptedRandom {
    pub(crate) fn new(values: &[usize]) -> Self {
        Self { values: values.to_vec(), cursor: 0, cycle: false }
    }

    pub(crate) fn cycle(values: &[usize]) -> Self {
        Self { values: values.to_vec(), cursor: 0, cycle: true }
    }

    pub(crate) fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: usize) -> usize {
        let slot = if self.cycle { self.cursor % self.values.len() } else { self.cursor };
        let value = *self
            .values
            .get(slot)
            .unwrap_or_else(|| panic!("script exhausted after {} draws", self.cursor));
        assert!(value < bound, "scripted draw {value} is outside 0..{bound}");
        self.cursor += 1;
        value
    }
}

/// `.` floor, `#` wall, `O` hole. Row 0 comes first.
pub(crate) fn tiles_from_rows(rows: &[&str]) -> Grid<Tile> {
    let width = rows.first().map_or(0, |row| row.len());
    let cells: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
    Grid::from_fn(width, rows.len(), |pos| {
        let kind = match cells[pos.y as usize][pos.x as usize] {
            '.' => TileKind::Floor,
            '#' => TileKind::Wall,
            'O' => TileKind::Hole,
            other => panic!("unknown tile glyph {other:?}"),
        };
        Tile::new(kind)
    })
}

pub(crate) fn render_kinds(tiles: &Grid<Tile>) -> Vec<String> {
    (0..tiles.height())
        .map(|y| {
            (0..tiles.width())
                .map(|x| match tiles[Pos { y: y as i32, x: x as i32 }].kind {
                    TileKind::Floor => '.',
                    TileKind::Wall => '#',
                    TileKind::Hole => 'O',
                })
                .collect()
        })
        .collect()
}

/// Independent breadth-first check that ignores the `visited` scratch flags.
pub(crate) fn all_floor_reachable_from_spawn(tiles: &Grid<Tile>) -> bool {
    if tiles[Pos::SPAWN].kind != TileKind::Floor {
        return false;
    }
    let mut open = VecDeque::from([Pos::SPAWN]);
    let mut seen = BTreeSet::from([Pos::SPAWN]);
    while let Some(pos) = open.pop_front() {
        for next in tiles.neighbors(pos) {
            if tiles[next].kind == TileKind::Floor && seen.insert(next) {
                open.push_back(next);
            }
        }
    }
    seen.len() == tiles.count(|tile| tile.kind == TileKind::Floor)
}
