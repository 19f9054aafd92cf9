use crate::geometry::{Point, Size};

/// Dense 2D storage addressed by logical coordinates.
///
/// Logical coordinates are shifted by `offset` before being raveled into the
/// backing slice, so a grid can be addressed from a non-zero origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    data: Box<[T]>,
    size: Size,
    offset: Point,
}

impl<T: Clone> Grid<T> {
    pub fn new(size: Size, offset: Point, fill: T) -> Self {
        let data = vec![fill; size.area()].into_boxed_slice();
        Grid { data, size, offset }
    }
}

impl<T> Grid<T> {
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Checks if the logical coordinate maps inside the storage.
    pub fn in_bounds(&self, pos: Point) -> bool {
        let p = pos + self.offset;
        p.x >= 0 && p.y >= 0 && p.x < self.size.width && p.y < self.size.height
    }

    /// Translates a logical coordinate to a storage index.
    /// Callers must check `in_bounds` first.
    pub fn ravel_index(&self, pos: Point) -> usize {
        let p = pos + self.offset;
        p.y as usize * self.size.width as usize + p.x as usize
    }

    pub fn get(&self, pos: Point) -> Option<&T> {
        self.in_bounds(pos).then(|| &self.data[self.ravel_index(pos)])
    }

    pub fn get_mut(&mut self, pos: Point) -> Option<&mut T> {
        if self.in_bounds(pos) {
            let idx = self.ravel_index(pos);
            Some(&mut self.data[idx])
        } else {
            None
        }
    }

    /// All logical coordinates of the grid, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Point> + use<T> {
        let (w, h, off) = (self.size.width, self.size.height, self.offset);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x - off.x, y - off.y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> std::ops::Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Point) -> &Self::Output {
        &self.data[self.ravel_index(pos)]
    }
}

impl<T> std::ops::IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, pos: Point) -> &mut Self::Output {
        let idx = self.ravel_index(pos);
        &mut self.data[idx]
    }
}
