use serde::Serialize;
use std::hash::{Hash, Hasher};

use crate::geometry::{Point, Rect};
use crate::grid::Grid;
use crate::map::cell::Cell;

/// A placed rectangular room and the wall state of every cell inside it.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: usize,
    pub bounds: Rect,
    /// Dense, row-major local cells: index `y * width + x`.
    cells: Vec<Cell>,
}

impl Room {
    /// Copies the room's rectangle out of the map-wide cell grid.
    pub fn from_cells(id: usize, bounds: Rect, cells: &Grid<Cell>) -> Self {
        let cells = bounds
            .positions()
            .map(|p| cells.get(p).copied().unwrap_or_default())
            .collect();
        Room { id, bounds, cells }
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Cell at local coordinate `(x, y)`, with `(0, 0)` at the room's min corner.
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        self.cells.get((y * self.width() + x) as usize)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates `(local point, cell)` pairs row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Point, &Cell)> {
        let width = self.width();
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (Point::new(i as i32 % width, i as i32 / width), c))
    }

    pub fn local_point(&self, global: Point) -> Point {
        global - self.bounds.position
    }

    pub fn global_point(&self, local: Point) -> Point {
        local + self.bounds.position
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Room {}

impl Hash for Room {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::map::cell::WallType;

    #[test]
    fn test_from_cells_copies_rectangle() {
        let mut grid = Grid::new(Size::new(6, 6), Point::new(0, 0), Cell::default());
        grid[Point::new(3, 2)].right = WallType::Door;
        let room = Room::from_cells(0, Rect::new(Point::new(2, 2), Size::new(2, 3)), &grid);
        assert_eq!(room.cells().len(), 6);
        assert_eq!(room.cell(1, 0).map(|c| c.right), Some(WallType::Door));
        assert_eq!(room.cell(2, 0), None);
        assert_eq!(room.local_point(Point::new(3, 4)), Point::new(1, 2));
        assert_eq!(room.global_point(Point::new(1, 2)), Point::new(3, 4));
    }

    #[test]
    fn test_identity_is_id() {
        let grid = Grid::new(Size::new(6, 6), Point::new(0, 0), Cell::default());
        let a = Room::from_cells(1, Rect::new(Point::new(0, 0), Size::new(1, 1)), &grid);
        let b = Room::from_cells(1, Rect::new(Point::new(3, 3), Size::new(2, 2)), &grid);
        let c = Room::from_cells(2, Rect::new(Point::new(0, 0), Size::new(1, 1)), &grid);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
