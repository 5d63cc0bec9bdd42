//! Convergence loop that makes every floor cell reachable from spawn.
//!
//! Each iteration flood-fills from spawn, then converts obstacles on the
//! visited frontier into floor until no floor cell is left unvisited:
//!
//! 1. reset every `visited` flag,
//! 2. flood-fill from spawn, marking obstacles but not expanding through them,
//! 3. stop if every floor cell was visited,
//! 4. repair: every visited obstacle touching an unvisited floor becomes floor,
//! 5. fallback: if the repair converted nothing, the first visited obstacle
//!    touching any unvisited cell becomes floor.
//!
//! Every iteration that does not stop converts at least one obstacle, so the
//! loop runs at most `rows * cols` times.

use log::{debug, trace};

use crate::grid::Grid;
use crate::types::{Pos, Tile, TileKind};

use super::model::ConnectivityReport;

pub(super) fn enforce_connectivity(tiles: &mut Grid<Tile>) -> ConnectivityReport {
    let mut report = ConnectivityReport::default();
    let mut stack = Vec::with_capacity(tiles.len());

    loop {
        report.iterations += 1;
        reset_visited(tiles);
        flood_fill_from_spawn(tiles, &mut stack);

        let unvisited_floor = count_unvisited_floor(tiles);
        if unvisited_floor == 0 {
            debug!(
                "connectivity settled on {}x{} board: iterations={} repaired={} forced={}",
                tiles.width(),
                tiles.height(),
                report.iterations,
                report.repaired,
                report.forced
            );
            return report;
        }

        let repaired = repair_frontier(tiles);
        report.repaired += repaired;
        if repaired == 0 {
            let forced = force_frontier_conversion(tiles)
                .expect("unvisited floor always leaves a visited obstacle on the frontier");
            report.forced += 1;
            trace!(
                "iteration {}: {unvisited_floor} unreachable floor cells, forced {forced:?}",
                report.iterations
            );
        } else {
            trace!(
                "iteration {}: {unvisited_floor} unreachable floor cells, repaired {repaired}",
                report.iterations
            );
        }
    }
}

fn reset_visited(tiles: &mut Grid<Tile>) {
    for tile in tiles.iter_mut() {
        tile.visited = false;
    }
}

/// Marks every cell reached from spawn. Obstacles are marked but never expanded.
fn flood_fill_from_spawn(tiles: &mut Grid<Tile>, stack: &mut Vec<Pos>) {
    stack.clear();
    stack.push(Pos::SPAWN);

    while let Some(pos) = stack.pop() {
        let tile = &mut tiles[pos];
        if tile.visited {
            continue;
        }
        tile.visited = true;
        if tile.kind.is_obstacle() {
            continue;
        }
        for next in tiles.neighbors(pos) {
            if !tiles[next].visited {
                stack.push(next);
            }
        }
    }
}

fn count_unvisited_floor(tiles: &Grid<Tile>) -> usize {
    tiles.count(|tile| tile.kind == TileKind::Floor && !tile.visited)
}

/// Converts each visited obstacle that borders an unvisited floor cell.
///
/// Visited flags are left untouched while scanning, so a cell converted earlier
/// in the pass never qualifies a later one. Returns the number of conversions.
fn repair_frontier(tiles: &mut Grid<Tile>) -> usize {
    let mut converted = 0;
    for pos in tiles.positions() {
        let tile = tiles[pos];
        if !tile.visited || !tile.kind.is_obstacle() {
            continue;
        }
        let touches_unvisited_floor = tiles.neighbors(pos).any(|next| {
            let neighbor = tiles[next];
            neighbor.kind == TileKind::Floor && !neighbor.visited
        });
        if touches_unvisited_floor {
            tiles[pos].kind = TileKind::Floor;
            converted += 1;
        }
    }
    converted
}

/// Converts the first visited obstacle, in row-major order, that borders any
/// unvisited cell. Used only when the repair pass made no progress.
fn force_frontier_conversion(tiles: &mut Grid<Tile>) -> Option<Pos> {
    let target = tiles.positions().find(|&pos| {
        let tile = tiles[pos];
        tile.visited
            && tile.kind.is_obstacle()
            && tiles.neighbors(pos).any(|next| !tiles[next].visited)
    })?;
    tiles[target].kind = TileKind::Floor;
    Some(target)
}
