use serde::Serialize;
use std::hash::{Hash, Hasher};

use crate::geometry::{Point, Rect};
use crate::grid::Grid;
use crate::map::{CellType, cell::Cell, path::Path};

/// A finalized corridor. Only cells the grid marks as hallway are present;
/// the rest of the bounding box is `None`.
#[derive(Debug, Clone, Serialize)]
pub struct Hallway {
    pub id: usize,
    pub bounds: Rect,
    /// Sparse, row-major local cells: index `y * width + x`.
    cells: Vec<Option<Cell>>,
    /// Map coordinates of the hallway cells, in path order.
    points: Vec<Point>,
}

impl Hallway {
    /// Builds the hallway from a refined path. Returns `None` for an empty path.
    pub fn from_path(
        id: usize,
        path: &Path,
        cells: &Grid<Cell>,
        grid: &Grid<CellType>,
    ) -> Option<Self> {
        let bounds = path.bounds()?;
        let mut local = vec![None; bounds.size.area()];
        let mut points = Vec::new();
        for &p in &path.points {
            if grid.get(p) != Some(&CellType::Hallway) {
                continue;
            }
            let l = p - bounds.position;
            local[(l.y * bounds.width() + l.x) as usize] = cells.get(p).copied();
            points.push(p);
        }
        Some(Hallway {
            id,
            bounds,
            cells: local,
            points,
        })
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Cell at local coordinate `(x, y)`; `None` outside the corridor.
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        self.cells
            .get((y * self.width() + x) as usize)
            .and_then(Option::as_ref)
    }

    pub fn cells(&self) -> &[Option<Cell>] {
        &self.cells
    }

    /// Iterates the present `(local point, cell)` pairs row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Point, &Cell)> {
        let width = self.width();
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.as_ref()
                .map(|c| (Point::new(i as i32 % width, i as i32 / width), c))
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn local_point(&self, global: Point) -> Point {
        global - self.bounds.position
    }

    pub fn global_point(&self, local: Point) -> Point {
        local + self.bounds.position
    }
}

impl PartialEq for Hallway {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Hallway {}

impl Hash for Hallway {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
