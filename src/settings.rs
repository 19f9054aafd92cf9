use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DungenError, SettingsError};
use crate::geometry::Size;

/// Everything a generation run depends on. Identical settings produce identical maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub seed: u64,
    pub size: Size,
    /// Number of placement attempts; the map may end up with fewer rooms.
    pub room_count: u32,
    pub room_min_size: Size,
    pub room_max_size: Size,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            size: Size::new(30, 30),
            room_count: 10,
            room_min_size: Size::new(3, 3),
            room_max_size: Size::new(8, 8),
        }
    }
}

impl MapSettings {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Loads settings from a JSON file. Missing fields fall back to defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DungenError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Checks the preconditions the generator relies on.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.size.width <= 0 || self.size.height <= 0 {
            return Err(SettingsError::InvalidMapSize(self.size));
        }
        if self.room_min_size.width < 1 || self.room_min_size.height < 1 {
            return Err(SettingsError::RoomTooSmall(self.room_min_size));
        }
        if self.room_max_size.width < self.room_min_size.width
            || self.room_max_size.height < self.room_min_size.height
        {
            return Err(SettingsError::InvertedRoomSize {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        // Rooms may not touch the last row or column, so even the smallest
        // room needs one spare cell on each axis.
        if self.room_min_size.width >= self.size.width
            || self.room_min_size.height >= self.size.height
        {
            return Err(SettingsError::RoomLargerThanMap {
                room: self.room_min_size,
                map: self.size,
            });
        }
        Ok(())
    }
}
