//! Turns raw search paths into final corridor paths.
//!
//! The passes run in a fixed order on a grid whose room and hallway cells are
//! already marked:
//! 1. [`split_paths`] cuts every path at room cells,
//! 2. [`place_doors`] records doors where a path steps between a room and a hallway,
//! 3. [`merge_paths`] folds together paths sharing a hallway cell,
//! 4. [`remove_degenerate`] drops paths without any hallway cell.

use std::collections::HashSet;

use crate::geometry::Point;
use crate::grid::Grid;
use crate::map::{Cell, CellType, Direction, Path, WallType};

/// Runs all passes. The index of a path in the returned list is its hallway id.
pub fn refine_paths(raw: &[Path], grid: &Grid<CellType>, cells: &mut Grid<Cell>) -> Vec<Path> {
    let mut paths = split_paths(raw, grid);
    let split_count = paths.len();
    place_doors(&paths, grid, cells);
    merge_paths(&mut paths, grid);
    let merged_count = paths.len();
    remove_degenerate(&mut paths, grid);
    tracing::info!(
        "[refine] {} raw paths -> {split_count} segments -> {merged_count} after merge -> {} hallways",
        raw.len(),
        paths.len()
    );
    paths
}

fn cell_type(grid: &Grid<CellType>, p: Point) -> CellType {
    grid.get(p).copied().unwrap_or_default()
}

/// Splits each path into segments running from one room cell to the next.
///
/// A room cell closes the open segment (it becomes its last point) and opens
/// a new one starting at the same cell. Hallway cells extend the open segment;
/// those before the first room cell are dropped. A trailing segment is kept
/// only if it has more than one point.
pub fn split_paths(paths: &[Path], grid: &Grid<CellType>) -> Vec<Path> {
    let mut result = Vec::new();

    for path in paths {
        let mut current: Option<Vec<Point>> = None;

        for &point in &path.points {
            match cell_type(grid, point) {
                CellType::Room => {
                    if let Some(mut segment) = current.take() {
                        segment.push(point);
                        result.push(Path {
                            points: segment,
                            rooms: path.rooms,
                        });
                    }
                    current = Some(vec![point]);
                }
                CellType::Hallway => {
                    if let Some(segment) = current.as_mut() {
                        segment.push(point);
                    }
                }
                CellType::Empty => {}
            }
        }

        if let Some(segment) = current.filter(|s| s.len() > 1) {
            result.push(Path {
                points: segment,
                rooms: path.rooms,
            });
        }
    }

    result
}

/// Marks a door on the room side of every room/hallway step.
///
/// # Panics
/// If two consecutive points are not grid neighbours.
pub fn place_doors(paths: &[Path], grid: &Grid<CellType>, cells: &mut Grid<Cell>) {
    for path in paths {
        for pair in path.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (room, hallway) = match (cell_type(grid, a), cell_type(grid, b)) {
                (CellType::Room, CellType::Hallway) => (a, b),
                (CellType::Hallway, CellType::Room) => (b, a),
                _ => continue,
            };

            let Some(direction) = Direction::from_delta(hallway - room) else {
                panic!("door step from {room} to {hallway} is not a cardinal move");
            };
            if let Some(cell) = cells.get_mut(room) {
                *cell.wall_mut(direction) = WallType::Door;
            }
        }
    }
}

fn shares_hallway(a: &Path, b: &Path, grid: &Grid<CellType>) -> bool {
    let hallway_points = a
        .points
        .iter()
        .filter(|&&p| cell_type(grid, p) == CellType::Hallway)
        .collect::<HashSet<_>>();
    b.points.iter().any(|p| hallway_points.contains(p))
}

/// Merges every later path that shares a hallway cell into the earlier one.
///
/// After a merge the absorbed path is removed and the scan continues at the
/// same index, so the grown path is compared against everything after it.
pub fn merge_paths(paths: &mut Vec<Path>, grid: &Grid<CellType>) {
    let mut i = 0;
    while i < paths.len() {
        let mut j = i + 1;
        while j < paths.len() {
            if shares_hallway(&paths[i], &paths[j], grid) {
                let absorbed = paths.remove(j);
                tracing::debug!("[refine] merging segment {j} into {i}");
                paths[i].merge(&absorbed);
            } else {
                j += 1;
            }
        }
        i += 1;
    }
}

/// Drops paths that contain no hallway cell.
pub fn remove_degenerate(paths: &mut Vec<Path>, grid: &Grid<CellType>) {
    paths.retain(|path| {
        path.points
            .iter()
            .any(|&p| cell_type(grid, p) == CellType::Hallway)
    });
}
