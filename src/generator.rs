use crate::corridors::refine_paths;
use crate::generators::{ConnectivityGraph, build_graph, get_rng, place_rooms};
use crate::geometry::{Point, Rect};
use crate::grid::Grid;
use crate::map::{Cell, CellType, Hallway, MapData, Path, Room};
use crate::settings::MapSettings;
use crate::solvers::{Pathfinder, dungeon_cost};
use crate::walls::assign_walls;

/// Everything one run produced on the way to [`MapData`].
#[derive(Debug, Clone)]
pub struct Generation {
    pub rooms: Vec<Rect>,
    pub graph: ConnectivityGraph,
    /// One path per successful search, in selected edge order.
    pub raw_paths: Vec<Path>,
    /// Refined corridors; the index is the hallway id.
    pub paths: Vec<Path>,
    pub grid: Grid<CellType>,
    pub cells: Grid<Cell>,
}

impl Generation {
    pub fn into_map_data(self, seed: u64) -> MapData {
        let rooms = self
            .rooms
            .iter()
            .enumerate()
            .map(|(id, &bounds)| Room::from_cells(id, bounds, &self.cells))
            .collect();
        let hallways = self
            .paths
            .iter()
            .enumerate()
            .filter_map(|(id, path)| Hallway::from_path(id, path, &self.cells, &self.grid))
            .collect();
        MapData::new(seed, self.grid.size(), rooms, hallways)
    }
}

/// Runs the whole pipeline for one set of settings.
///
/// A single generator seeded from [`MapSettings::seed`] feeds room placement
/// first and edge retention second, so equal settings give equal maps.
#[derive(Debug, Clone)]
pub struct MapGenerator {
    settings: MapSettings,
}

impl MapGenerator {
    /// `settings` are expected to have passed [`MapSettings::validate`].
    pub fn new(settings: MapSettings) -> Self {
        MapGenerator { settings }
    }

    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    pub fn generate(&self) -> MapData {
        let map = self.run().into_map_data(self.settings.seed);
        let stats = map.stats();
        tracing::info!(
            "[generator] seed {}: {} rooms, {} hallways, {} doors",
            self.settings.seed,
            stats.room_count,
            stats.hallway_count,
            stats.door_count
        );
        map
    }

    /// Switches to `seed` and builds a new map from scratch.
    pub fn regenerate(&mut self, seed: u64) -> MapData {
        tracing::debug!("[generator] regenerating with seed {seed}");
        self.settings.seed = seed;
        self.generate()
    }

    /// Runs every stage and keeps the intermediate results.
    pub fn run(&self) -> Generation {
        let settings = &self.settings;
        let mut rng = get_rng(Some(settings.seed));

        let rooms = place_rooms(settings, &mut rng);
        let mut grid = Grid::new(settings.size, Point::new(0, 0), CellType::Empty);
        for room in &rooms {
            for p in room.positions() {
                if let Some(cell) = grid.get_mut(p) {
                    *cell = CellType::Room;
                }
            }
        }

        let graph = build_graph(&rooms, &mut rng);
        let raw_paths = find_corridors(&rooms, &graph, &mut grid);

        let mut cells = Grid::new(settings.size, Point::new(0, 0), Cell::default());
        let paths = refine_paths(&raw_paths, &grid, &mut cells);
        assign_walls(&rooms, &paths, &grid, &mut cells);

        Generation {
            rooms,
            graph,
            raw_paths,
            paths,
            grid,
            cells,
        }
    }
}

/// Searches a corridor for every selected edge, marking the empty cells of
/// each found path as hallway before the next search. Unreachable pairs are
/// skipped.
fn find_corridors(rooms: &[Rect], graph: &ConnectivityGraph, grid: &mut Grid<CellType>) -> Vec<Path> {
    let mut pathfinder = Pathfinder::new(grid.size());
    let mut paths = Vec::with_capacity(graph.selected.len());

    for edge in &graph.selected {
        let start = rooms[edge.u].center_cell();
        let end = rooms[edge.v].center_cell();

        let Some(points) = pathfinder.find_path(start, end, dungeon_cost(grid, end)) else {
            tracing::warn!("[pathfind] no path between rooms {} and {}", edge.u, edge.v);
            continue;
        };

        for &p in &points {
            match grid.get_mut(p) {
                Some(cell) if *cell == CellType::Empty => *cell = CellType::Hallway,
                _ => {}
            }
        }
        tracing::debug!(
            "[pathfind] rooms {} -> {}: {} steps",
            edge.u,
            edge.v,
            points.len()
        );
        paths.push(Path::between(points, edge.u, edge.v));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::map::WallType;

    fn settings(seed: u64) -> MapSettings {
        MapSettings {
            seed,
            size: Size::new(24, 24),
            room_count: 8,
            room_min_size: Size::new(2, 2),
            room_max_size: Size::new(5, 5),
        }
    }

    #[test]
    fn test_single_room_is_fully_walled() {
        let generator = MapGenerator::new(MapSettings {
            seed: 42,
            size: Size::new(10, 10),
            room_count: 1,
            ..MapSettings::default()
        });
        let map = generator.generate();
        assert_eq!(map.rooms().len(), 1);
        assert!(map.hallways().is_empty());

        let room = &map.rooms()[0];
        for (local, cell) in room.iter_cells() {
            assert_eq!(cell.doors().count(), 0);
            if local.x == 0 {
                assert_eq!(cell.left, WallType::Wall);
            }
            if local.x == room.width() - 1 {
                assert_eq!(cell.right, WallType::Wall);
            }
            if local.y == 0 {
                assert_eq!(cell.backward, WallType::Wall);
            }
            if local.y == room.height() - 1 {
                assert_eq!(cell.forward, WallType::Wall);
            }
        }
    }

    #[test]
    fn test_raw_paths_join_room_centres() {
        let run = MapGenerator::new(settings(3)).run();
        assert_eq!(run.raw_paths.len(), run.graph.selected.len());
        for path in &run.raw_paths {
            let (u, v) = path.rooms.unwrap();
            assert_eq!(path.points.first(), Some(&run.rooms[u].center_cell()));
            assert_eq!(path.points.last(), Some(&run.rooms[v].center_cell()));
        }
    }

    #[test]
    fn test_regenerate_matches_fresh_generator() {
        let mut generator = MapGenerator::new(settings(1));
        let _ = generator.generate();
        let regenerated = generator.regenerate(9);
        let fresh = MapGenerator::new(settings(9)).generate();
        assert_eq!(
            serde_json::to_string(&regenerated).unwrap(),
            serde_json::to_string(&fresh).unwrap()
        );
        assert_eq!(generator.settings().seed, 9);
    }
}
