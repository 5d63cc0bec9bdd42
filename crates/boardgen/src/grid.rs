//! Dense row-major grid storage shared by the tile and entity layers.

use std::ops::{Index, IndexMut};

use serde::Serialize;

use crate::types::Pos;

/// Fixed neighbor order used everywhere a tie has to be broken: +x, +y, -x, -y.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self { width, height, cells: vec![value; width * height] }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by calling `init` once per cell in row-major order.
    pub fn from_fn(width: usize, height: usize, mut init: impl FnMut(Pos) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(init(Pos { y: y as i32, x: x as i32 }));
            }
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        in_bounds(self.width, self.height, pos)
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.index_of(pos).map(|index| &self.cells[index])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.index_of(pos).map(|index| &mut self.cells[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    /// All coordinates in row-major order (y outer, x inner).
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let width = self.width;
        let height = self.height;
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos { y: y as i32, x: x as i32 }))
    }

    /// In-bounds 4-neighbors of `pos` in [`NEIGHBOR_OFFSETS`] order.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + use<T> {
        let width = self.width;
        let height = self.height;
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| pos.offset(dx, dy))
            .filter(move |&next| in_bounds(width, height, next))
    }

    pub fn count(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|&cell| predicate(cell)).count()
    }

    fn index_of(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        match self.index_of(pos) {
            Some(index) => &self.cells[index],
            None => panic!("{pos:?} outside {}x{} grid", self.width, self.height),
        }
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        let (width, height) = (self.width, self.height);
        match self.index_of(pos) {
            Some(index) => &mut self.cells[index],
            None => panic!("{pos:?} outside {width}x{height} grid"),
        }
    }
}

fn in_bounds(width: usize, height: usize, pos: Pos) -> bool {
    pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < width && (pos.y as usize) < height
}
