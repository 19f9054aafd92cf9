pub mod cell;
mod hallway;
mod path;
mod room;

use serde::Serialize;

use crate::geometry::Size;

pub use cell::{Cell, Direction, WallType};
pub use hallway::Hallway;
pub use path::Path;
pub use room::Room;

/// Category of a grid cell during generation.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CellType {
    #[default]
    Empty,
    Room,
    Hallway,
}

/// Final output of one generation run. Read-only once produced.
#[derive(Debug, Clone, Serialize)]
pub struct MapData {
    seed: u64,
    size: Size,
    rooms: Vec<Room>,
    hallways: Vec<Hallway>,
}

/// Summary counts of a generated map.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapStats {
    pub room_count: usize,
    pub hallway_count: usize,
    pub hallway_cell_count: usize,
    pub door_count: usize,
}

impl MapData {
    pub fn new(seed: u64, size: Size, rooms: Vec<Room>, hallways: Vec<Hallway>) -> Self {
        MapData {
            seed,
            size,
            rooms,
            hallways,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn hallways(&self) -> &[Hallway] {
        &self.hallways
    }

    pub fn stats(&self) -> MapStats {
        MapStats {
            room_count: self.rooms.len(),
            hallway_count: self.hallways.len(),
            hallway_cell_count: self.hallways.iter().map(|h| h.iter_cells().count()).sum(),
            door_count: self
                .rooms
                .iter()
                .flat_map(|r| r.cells().iter())
                .map(|c| c.doors().count())
                .sum(),
        }
    }
}
