use rand::Rng;

use crate::geometry::{Point, Rect, Size};
use crate::settings::MapSettings;

/// Rejection-samples `room_count` rooms. A candidate is rejected when its
/// 1-cell buffer overlaps the buffer of an accepted room or when it leaves
/// the map. A rejected attempt is skipped, not retried, so fewer rooms than
/// requested may come back. Accepted rooms are returned in acceptance order,
/// which defines their ids.
///
/// Draw order per attempt is width, height, x, y; changing it changes every map.
pub fn place_rooms<R: Rng>(settings: &MapSettings, rng: &mut R) -> Vec<Rect> {
    let mut rooms: Vec<Rect> = Vec::new();

    for attempt in 0..settings.room_count {
        let size = Size::new(
            rng.random_range(settings.room_min_size.width..=settings.room_max_size.width),
            rng.random_range(settings.room_min_size.height..=settings.room_max_size.height),
        );

        // Rooms must stay clear of the last row and column.
        let free_x = settings.size.width - size.width;
        let free_y = settings.size.height - size.height;
        if free_x <= 0 || free_y <= 0 {
            tracing::debug!("[placement] attempt {attempt}: room {size} cannot fit, skipped");
            continue;
        }
        let location = Point::new(rng.random_range(0..free_x), rng.random_range(0..free_y));

        let candidate = Rect::new(location, size);
        let buffer = candidate.expanded(1);

        if let Some(other) = rooms
            .iter()
            .position(|room| room.expanded(1).intersects(&buffer))
        {
            tracing::debug!(
                "[placement] attempt {attempt}: {candidate:?} rejected, too close to room {other}"
            );
            continue;
        }
        if !in_map(&candidate, settings.size) {
            tracing::debug!("[placement] attempt {attempt}: {candidate:?} rejected, out of bounds");
            continue;
        }

        rooms.push(candidate);
    }

    tracing::info!(
        "[placement] placed {} of {} requested rooms",
        rooms.len(),
        settings.room_count
    );
    rooms
}

/// Rooms may not reach the final row or column of the map.
fn in_map(room: &Rect, size: Size) -> bool {
    room.x_min() >= 0 && room.x_max() < size.width && room.y_min() >= 0 && room.y_max() < size.height
}
