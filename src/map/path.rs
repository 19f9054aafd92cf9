use std::collections::HashSet;
use std::fmt;

use crate::geometry::{Point, Rect};

/// An ordered run of grid coordinates, start to end, with no repeated point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub points: Vec<Point>,
    /// Ids of the two rooms whose connection produced this path, if known.
    pub rooms: Option<(usize, usize)>,
}

impl Path {
    pub fn new(points: Vec<Point>) -> Self {
        Path { points, rooms: None }
    }

    pub fn between(points: Vec<Point>, from: usize, to: usize) -> Self {
        Path {
            points,
            rooms: Some((from, to)),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Appends every point of `other` not already present, keeping order.
    pub fn merge(&mut self, other: &Path) {
        let mut seen = self.points.iter().copied().collect::<HashSet<_>>();
        for &p in &other.points {
            if seen.insert(p) {
                self.points.push(p);
            }
        }
    }

    /// Component-wise minimum over all points.
    pub fn min_point(&self) -> Option<Point> {
        self.bounds().map(|b| b.position)
    }

    /// Tight bounding box of the points.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.points.iter().copied())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path_[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_merge_skips_duplicates() {
        let mut a = Path::new(pts(&[(0, 0), (1, 0), (2, 0)]));
        let b = Path::new(pts(&[(2, 0), (2, 1), (1, 0), (2, 2)]));
        a.merge(&b);
        assert_eq!(a.points, pts(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]));
    }

    #[test]
    fn test_bounds_and_min_point() {
        let path = Path::new(pts(&[(4, 2), (4, 3), (3, 3), (2, 3)]));
        assert_eq!(
            path.bounds(),
            Some(Rect::new(Point::new(2, 2), Size::new(3, 2)))
        );
        assert_eq!(path.min_point(), Some(Point::new(2, 2)));
        assert_eq!(Path::new(vec![]).bounds(), None);
    }

    #[test]
    fn test_display() {
        let path = Path::new(pts(&[(1, 2), (1, 3)]));
        assert_eq!(path.to_string(), "path_[(1, 2), (1, 3)]");
    }
}
