use crate::geometry::{Point, Rect};
use crate::grid::Grid;
use crate::map::{Cell, CellType, Direction, Path};

/// Closes the outer boundary of every room and every hallway.
///
/// Room cells get a wall on each side that leaves the room. Hallway cells get
/// a wall on each side facing a cell that is neither room nor hallway, the map
/// edge included. Existing doors are kept, so running this twice changes nothing.
pub fn assign_walls(rooms: &[Rect], paths: &[Path], grid: &Grid<CellType>, cells: &mut Grid<Cell>) {
    for room in rooms {
        close_room(room, cells);
    }

    let mut hallway_cells = 0;
    for path in paths {
        for &point in &path.points {
            if grid.get(point) != Some(&CellType::Hallway) {
                continue;
            }
            close_hallway_cell(point, grid, cells);
            hallway_cells += 1;
        }
    }

    tracing::info!(
        "[walls] closed {} room(s) and {hallway_cells} hallway cell(s)",
        rooms.len()
    );
}

fn close_room(room: &Rect, cells: &mut Grid<Cell>) {
    for point in room.positions() {
        let Some(cell) = cells.get_mut(point) else {
            continue;
        };
        for direction in Direction::ALL {
            if !room.contains(point + direction.offset()) {
                cell.close(direction);
            }
        }
    }
}

fn close_hallway_cell(point: Point, grid: &Grid<CellType>, cells: &mut Grid<Cell>) {
    let Some(cell) = cells.get_mut(point) else {
        return;
    };
    for direction in Direction::ALL {
        let open = matches!(
            grid.get(point + direction.offset()),
            Some(CellType::Room | CellType::Hallway)
        );
        if !open {
            cell.close(direction);
        }
    }
}
