//! Plain-text board dump for terminals and logs.

use boardgen::{EntityMark, GeneratedBoard, Pos, TileKind};

pub fn tile_glyph(kind: TileKind) -> char {
    match kind {
        TileKind::Floor => '.',
        TileKind::Wall => '#',
        TileKind::Hole => 'O',
    }
}

/// One line per row, row 0 first. Entity marks are drawn over their tile.
pub fn render_board(board: &GeneratedBoard) -> String {
    let mut out = String::with_capacity((board.width() + 1) * board.height());
    for y in 0..board.height() {
        for x in 0..board.width() {
            let pos = Pos { y: y as i32, x: x as i32 };
            out.push(match board.mark_at(pos) {
                EntityMark::Player => '@',
                EntityMark::Enemy => 'E',
                EntityMark::Empty => tile_glyph(board.tile_kind_at(pos)),
            });
        }
        out.push('\n');
    }
    out
}
