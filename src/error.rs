use thiserror::Error;

use crate::geometry::Size;

/// Settings rejected at the configuration boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("map size must be positive on both axes, got {0}")]
    InvalidMapSize(Size),

    #[error("minimum room size must be at least 1x1, got {0}")]
    RoomTooSmall(Size),

    #[error("maximum room size {max} is below minimum room size {min}")]
    InvertedRoomSize { min: Size, max: Size },

    #[error("rooms of size {room} can never fit inside a {map} map")]
    RoomLargerThanMap { room: Size, map: Size },
}

/// Errors surfaced by the library outside the generation core.
#[derive(Debug, Error)]
pub enum DungenError {
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
