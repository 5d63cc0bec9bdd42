//! Independent checks run by the fuzz harness against every generated board.

use std::collections::{BTreeSet, VecDeque};

use boardgen::{EntityMark, GeneratedBoard, Pos, TileKind};

/// Returns a description of every broken board invariant; empty when the board is sound.
pub fn board_violations(board: &GeneratedBoard) -> Vec<String> {
    let mut violations = Vec::new();
    let config = &board.config;

    if (board.width(), board.height()) != (config.cols, config.rows)
        || (board.entities.width(), board.entities.height()) != (config.cols, config.rows)
    {
        violations.push(format!(
            "grid is {}x{} but config asks for {}x{}",
            board.width(),
            board.height(),
            config.cols,
            config.rows
        ));
        return violations;
    }

    if board.tile_kind_at(Pos::SPAWN) != TileKind::Floor {
        violations.push("spawn is not floor".to_string());
    }
    if board.mark_at(Pos::SPAWN) != EntityMark::Player {
        violations.push("spawn is not marked as player".to_string());
    }
    let players = board.entities.count(|mark| *mark == EntityMark::Player);
    if players != 1 {
        violations.push(format!("expected one player, found {players}"));
    }

    let enemies = board.enemy_positions();
    if enemies.len() != config.enemy_count {
        violations.push(format!(
            "expected {} enemies, found {}",
            config.enemy_count,
            enemies.len()
        ));
    }
    for pos in enemies {
        if board.tile_kind_at(pos) != TileKind::Floor {
            violations.push(format!("enemy at {pos:?} is not on floor"));
        }
        if (pos.x.max(pos.y) as usize) < config.spawn_clearance {
            violations.push(format!("enemy at {pos:?} is inside spawn clearance"));
        }
    }

    let unreachable = unreachable_floor(board);
    if !unreachable.is_empty() {
        violations.push(format!(
            "{} floor cells unreachable from spawn, first at {:?}",
            unreachable.len(),
            unreachable[0]
        ));
    }

    if board.connectivity.iterations > config.cell_count() {
        violations.push(format!(
            "connectivity took {} iterations on {} cells",
            board.connectivity.iterations,
            config.cell_count()
        ));
    }

    violations
}

fn unreachable_floor(board: &GeneratedBoard) -> Vec<Pos> {
    let mut seen = BTreeSet::new();
    if board.tile_kind_at(Pos::SPAWN) == TileKind::Floor {
        let mut open = VecDeque::from([Pos::SPAWN]);
        seen.insert(Pos::SPAWN);
        while let Some(pos) = open.pop_front() {
            for next in [
                Pos { y: pos.y, x: pos.x + 1 },
                Pos { y: pos.y + 1, x: pos.x },
                Pos { y: pos.y, x: pos.x - 1 },
                Pos { y: pos.y - 1, x: pos.x },
            ] {
                if board.tile_kind_at(next) == TileKind::Floor && seen.insert(next) {
                    open.push_back(next);
                }
            }
        }
    }

    board
        .tiles
        .positions()
        .filter(|pos| board.tile_kind_at(*pos) == TileKind::Floor && !seen.contains(pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use boardgen::{BoardConfig, Grid, SeededRandom, Tile, generate_board};

    use super::*;

    fn sample_board() -> GeneratedBoard {
        let config = BoardConfig::new(6, 6, 30, 10, 3);
        generate_board(config, &mut SeededRandom::new(8)).expect("fits")
    }

    #[test]
    fn generated_board_has_no_violations() {
        assert_eq!(board_violations(&sample_board()), Vec::<String>::new());
    }

    #[test]
    fn detects_enemy_on_obstacle() {
        let mut board = sample_board();
        let enemy = board.enemy_positions()[0];
        board.tiles[enemy].kind = TileKind::Hole;

        let violations = board_violations(&board);
        assert!(
            violations.iter().any(|violation| violation.contains("not on floor")),
            "{violations:?}"
        );
    }

    #[test]
    fn detects_isolated_floor_cell() {
        let mut board = sample_board();
        board.tiles = Grid::filled(6, 6, Tile::new(TileKind::Wall));
        board.tiles[Pos::SPAWN].kind = TileKind::Floor;
        board.tiles[Pos { y: 5, x: 5 }].kind = TileKind::Floor;

        let violations = board_violations(&board);
        assert!(
            violations.iter().any(|violation| violation.contains("unreachable from spawn")),
            "{violations:?}"
        );
    }

    #[test]
    fn detects_missing_player() {
        let mut board = sample_board();
        board.entities[Pos::SPAWN] = EntityMark::Empty;

        let violations = board_violations(&board);
        assert!(violations.iter().any(|v| v == "spawn is not marked as player"), "{violations:?}");
        assert!(violations.iter().any(|v| v == "expected one player, found 0"), "{violations:?}");
    }
}
