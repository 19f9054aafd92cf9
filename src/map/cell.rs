use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// State of one wall slot of a cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallType {
    /// Open side.
    #[default]
    None,
    Wall,
    /// Passage between a room and a hallway.
    Door,
}

/// The four sides of a cell. `Forward` faces +y, `Backward` faces -y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Forward,
        Direction::Backward,
    ];

    /// Unit step towards the neighbour across this side.
    pub fn offset(self) -> Point {
        match self {
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
            Direction::Forward => Point::new(0, 1),
            Direction::Backward => Point::new(0, -1),
        }
    }

    /// Maps a unit cardinal step to its side. Any other delta has no side.
    pub fn from_delta(delta: Point) -> Option<Direction> {
        match (delta.x, delta.y) {
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Forward),
            (0, -1) => Some(Direction::Backward),
            _ => None,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Wall-slot descriptor for one grid unit. Carries no behaviour; renderers
/// switch on the slot values.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub left: WallType,
    pub right: WallType,
    pub forward: WallType,
    pub backward: WallType,
}

impl Cell {
    pub fn wall(&self, direction: Direction) -> WallType {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Forward => self.forward,
            Direction::Backward => self.backward,
        }
    }

    pub fn wall_mut(&mut self, direction: Direction) -> &mut WallType {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Forward => &mut self.forward,
            Direction::Backward => &mut self.backward,
        }
    }

    /// Sets the slot to `Wall` unless it already holds a door.
    pub fn close(&mut self, direction: Direction) {
        let slot = self.wall_mut(direction);
        if *slot != WallType::Door {
            *slot = WallType::Wall;
        }
    }

    pub fn doors(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&d| self.wall(d) == WallType::Door)
    }
}
