use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const SPAWN: Pos = Pos { y: 0, x: 0 };

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Floor,
    Wall,
    Hole,
}

impl TileKind {
    /// Walls and holes both block traversal; only their rendering differs.
    pub fn is_obstacle(self) -> bool {
        matches!(self, Self::Wall | Self::Hole)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    /// Scratch flag owned by the connectivity pass; reset at the start of every pass.
    #[serde(skip)]
    pub visited: bool,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        Self { kind, visited: false }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityMark {
    #[default]
    Empty,
    Player,
    Enemy,
}
