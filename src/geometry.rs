use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a rectangle or of the map, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl std::str::FromStr for Size {
    type Err = String;

    /// Parses `WxH`, e.g. `8x6`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let width = w
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid width '{w}': {e}"))?;
        let height = h
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid height '{h}': {e}"))?;
        Ok(Size::new(width, height))
    }
}

/// Real-valued point, used for room centres in the connectivity graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Vec2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned integer rectangle. `x_max`/`y_max` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub position: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    pub fn x_min(&self) -> i32 {
        self.position.x
    }

    pub fn y_min(&self) -> i32 {
        self.position.y
    }

    pub fn x_max(&self) -> i32 {
        self.position.x + self.size.width
    }

    pub fn y_max(&self) -> i32 {
        self.position.y + self.size.height
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Real-valued midpoint of the rectangle.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.position.x as f64 + self.size.width as f64 / 2.0,
            self.position.y as f64 + self.size.height as f64 / 2.0,
        )
    }

    /// Centre truncated onto the grid.
    pub fn center_cell(&self) -> Point {
        let c = self.center();
        Point::new(c.x as i32, c.y as i32)
    }

    /// The rectangle grown by `amount` cells on every side.
    pub fn expanded(&self, amount: i32) -> Rect {
        Rect::new(
            Point::new(self.position.x - amount, self.position.y - amount),
            Size::new(self.size.width + 2 * amount, self.size.height + 2 * amount),
        )
    }

    /// Overlap test treating the max edges as exclusive, so touching rectangles do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x_min() >= other.x_max()
            || self.x_max() <= other.x_min()
            || self.y_min() >= other.y_max()
            || self.y_max() <= other.y_min())
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min() && p.x < self.x_max() && p.y >= self.y_min() && p.y < self.y_max()
    }

    /// All cells inside the rectangle, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Point> + use<> {
        let (x0, x1, y0, y1) = (self.x_min(), self.x_max(), self.y_min(), self.y_max());
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| Point::new(x, y)))
    }

    /// Tight bounding box of a set of points; `None` if empty.
    pub fn bounding<I: IntoIterator<Item = Point>>(points: I) -> Option<Rect> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for p in iter {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        Some(Rect::new(
            min,
            Size::new(max.x - min.x + 1, max.y - min.y + 1),
        ))
    }
}
