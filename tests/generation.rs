use dungen::corridors::refine_paths;
use dungen::generator::MapGenerator;
use dungen::geometry::{Point, Rect, Size};
use dungen::grid::Grid;
use dungen::map::{Cell, CellType, Direction, Hallway, Path, WallType};
use dungen::settings::MapSettings;
use dungen::solvers::{Pathfinder, dungeon_cost};
use dungen::walls::assign_walls;

fn settings(seed: u64, width: i32, height: i32, rooms: u32) -> MapSettings {
    MapSettings {
        seed,
        size: Size::new(width, height),
        room_count: rooms,
        room_min_size: Size::new(2, 2),
        room_max_size: Size::new(6, 6),
    }
}

fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn same_seed_gives_identical_maps() {
    for seed in [0, 1, 42, 1234] {
        let a = MapGenerator::new(settings(seed, 40, 30, 15)).generate();
        let b = MapGenerator::new(settings(seed, 40, 30, 15)).generate();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap(),
            "seed {seed}"
        );
    }
}

#[test]
fn ids_are_dense_and_ordered() {
    let map = MapGenerator::new(settings(5, 40, 40, 20)).generate();
    for (i, room) in map.rooms().iter().enumerate() {
        assert_eq!(room.id, i);
    }
    for (i, hallway) in map.hallways().iter().enumerate() {
        assert_eq!(hallway.id, i);
    }
}

#[test]
fn doors_only_between_room_and_hallway() {
    for seed in 0..20 {
        let run = MapGenerator::new(settings(seed, 32, 32, 12)).run();
        for p in run.grid.positions() {
            let cell = run.cells[p];
            for direction in cell.doors() {
                let across = p + direction.offset();
                assert_eq!(run.grid[p], CellType::Room, "seed {seed}: door at {p}");
                assert_eq!(
                    run.grid.get(across),
                    Some(&CellType::Hallway),
                    "seed {seed}: door at {p} facing {direction:?}"
                );
            }
        }
    }
}

#[test]
fn wall_assignment_is_idempotent_on_generated_maps() {
    for seed in 0..10 {
        let run = MapGenerator::new(settings(seed, 32, 32, 12)).run();
        let mut cells = run.cells.clone();
        assign_walls(&run.rooms, &run.paths, &run.grid, &mut cells);
        assert_eq!(cells, run.cells, "seed {seed}");
    }
}

#[test]
fn hallways_are_enclosed_except_at_junctions() {
    let run = MapGenerator::new(settings(8, 32, 32, 12)).run();
    for path in &run.paths {
        for &p in &path.points {
            if run.grid[p] != CellType::Hallway {
                continue;
            }
            for direction in Direction::ALL {
                let open = matches!(
                    run.grid.get(p + direction.offset()),
                    Some(CellType::Room | CellType::Hallway)
                );
                let expected = if open { WallType::None } else { WallType::Wall };
                assert_eq!(run.cells[p].wall(direction), expected, "{p} {direction:?}");
            }
        }
    }
}

/// Size 10x10, one room, seed 42.
#[test]
fn scenario_single_room() {
    let generator = MapGenerator::new(MapSettings {
        seed: 42,
        size: Size::new(10, 10),
        room_count: 1,
        ..MapSettings::default()
    });
    let map = generator.generate();
    assert_eq!(map.rooms().len(), 1);
    assert!(map.hallways().is_empty());
    assert_eq!(map.stats().door_count, 0);

    let room = &map.rooms()[0];
    let (w, h) = (room.width(), room.height());
    for x in 0..w {
        assert_eq!(room.cell(x, 0).unwrap().backward, WallType::Wall);
        assert_eq!(room.cell(x, h - 1).unwrap().forward, WallType::Wall);
    }
    for y in 0..h {
        assert_eq!(room.cell(0, y).unwrap().left, WallType::Wall);
        assert_eq!(room.cell(w - 1, y).unwrap().right, WallType::Wall);
    }
}

/// Two 3x3 rooms on a 20x20 map, starting from seed 7. A seed whose second
/// attempt is rejected is skipped.
#[test]
fn scenario_two_rooms_get_one_hallway() {
    let base = MapSettings {
        seed: 7,
        size: Size::new(20, 20),
        room_count: 2,
        room_min_size: Size::new(3, 3),
        room_max_size: Size::new(3, 3),
    };
    let run = (7..200)
        .map(|seed| MapGenerator::new(base.clone().with_seed(seed)).run())
        .find(|run| run.rooms.len() == 2)
        .expect("some seed places both rooms");

    assert!(!run.rooms[0].expanded(1).intersects(&run.rooms[1].expanded(1)));
    assert_eq!(run.graph.spanning_tree.len(), 1);
    assert_eq!(run.raw_paths.len(), 1);
    assert!(!run.raw_paths[0].is_empty());
    assert_eq!(run.paths.len(), 1);

    for room in &run.rooms {
        let doors = room
            .positions()
            .map(|p| run.cells[p].doors().count())
            .sum::<usize>();
        assert!(doors >= 1, "room {room:?} has no door");
    }
}

/// A long, thin room sits on the straight line between two rooms; stepping
/// around it is cheaper than crossing it.
#[test]
fn scenario_corridor_avoids_room_in_the_way() {
    let size = Size::new(21, 7);
    let mut grid = Grid::new(size, Point::new(0, 0), CellType::Empty);
    let rooms = [
        Rect::new(Point::new(0, 2), Size::new(3, 3)),
        Rect::new(Point::new(5, 3), Size::new(11, 1)),
        Rect::new(Point::new(18, 2), Size::new(3, 3)),
    ];
    for room in &rooms {
        for p in room.positions() {
            grid[p] = CellType::Room;
        }
    }

    let start = rooms[0].center_cell();
    let goal = rooms[2].center_cell();
    let path = Pathfinder::new(size)
        .find_path(start, goal, dungeon_cost(&grid, goal))
        .unwrap();
    assert!(path.iter().all(|&p| !rooms[1].contains(p)));
}

/// Two raw paths sharing two hallway cells end up as one hallway.
#[test]
fn scenario_shared_hallway_cells_merge() {
    let size = Size::new(9, 7);
    let mut grid = Grid::new(size, Point::new(0, 0), CellType::Empty);
    let rooms = [
        Rect::new(Point::new(0, 0), Size::new(2, 3)),
        Rect::new(Point::new(6, 0), Size::new(2, 3)),
        Rect::new(Point::new(3, 5), Size::new(3, 2)),
    ];
    for room in &rooms {
        for p in room.positions() {
            grid[p] = CellType::Room;
        }
    }
    for p in pts(&[(2, 1), (3, 1), (4, 1), (5, 1), (4, 2), (4, 3), (4, 4)]) {
        grid[p] = CellType::Hallway;
    }

    let raw = vec![
        Path::between(pts(&[(1, 1), (2, 1), (3, 1), (4, 1), (5, 1), (6, 1)]), 0, 1),
        Path::between(
            pts(&[(4, 5), (4, 4), (4, 3), (4, 2), (4, 1), (5, 1), (6, 1)]),
            2,
            1,
        ),
    ];
    let mut cells = Grid::new(size, Point::new(0, 0), Cell::default());
    let paths = refine_paths(&raw, &grid, &mut cells);

    assert_eq!(paths.len(), 1);
    assert_eq!(
        paths[0].points,
        pts(&[
            (1, 1),
            (2, 1),
            (3, 1),
            (4, 1),
            (5, 1),
            (6, 1),
            (4, 5),
            (4, 4),
            (4, 3),
            (4, 2)
        ])
    );

    assert_eq!(cells[Point::new(1, 1)].right, WallType::Door);
    assert_eq!(cells[Point::new(6, 1)].left, WallType::Door);
    assert_eq!(cells[Point::new(4, 5)].backward, WallType::Door);

    let hallway = Hallway::from_path(0, &paths[0], &cells, &grid).unwrap();
    assert_eq!(hallway.id, 0);
    assert_eq!(hallway.points().len(), 7);
    assert_eq!(hallway.bounds, Rect::new(Point::new(1, 1), Size::new(6, 5)));
}
