use crate::geometry::{Point, Size};
use crate::grid::Grid;
use crate::map::{CellType, Direction};
use crate::solvers::queue::PriorityQueue;

/// Step penalty for entering a room cell.
pub const ROOM_PENALTY: f64 = 10.0;
/// Step penalty for entering an empty cell.
pub const EMPTY_PENALTY: f64 = 5.0;
/// Step penalty for entering an existing hallway cell.
pub const HALLWAY_PENALTY: f64 = 1.0;

/// Search state of one grid cell.
#[derive(Debug, Clone)]
pub struct Node {
    pub position: Point,
    pub previous: Option<Point>,
    /// Cumulative cost from the start, infinite until reached.
    pub cost: f64,
}

/// Result of the caller-supplied step cost function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCost {
    pub traversable: bool,
    pub cost: f64,
}

/// Best-first search over a fixed-size grid. Node storage is reused between
/// searches and reset at the start of each one.
pub struct Pathfinder {
    nodes: Grid<Node>,
    queue: PriorityQueue,
    closed: Vec<bool>,
    stack: Vec<Point>,
}

impl Pathfinder {
    pub fn new(size: Size) -> Self {
        let mut nodes = Grid::new(
            size,
            Point::new(0, 0),
            Node {
                position: Point::new(0, 0),
                previous: None,
                cost: f64::INFINITY,
            },
        );
        for p in nodes.positions().collect::<Vec<_>>() {
            nodes[p].position = p;
        }
        Pathfinder {
            nodes,
            queue: PriorityQueue::new(size.area()),
            closed: vec![false; size.area()],
            stack: Vec::new(),
        }
    }

    fn reset_nodes(&mut self) {
        for p in self.nodes.positions().collect::<Vec<_>>() {
            let node = &mut self.nodes[p];
            node.previous = None;
            node.cost = f64::INFINITY;
        }
        self.queue.clear();
        self.closed.iter_mut().for_each(|c| *c = false);
    }

    /// Searches from `start` to `end` with 4-way steps. `cost(current, neighbor)`
    /// prices each step. Returns the start-to-end points, or `None` if `end`
    /// cannot be reached.
    pub fn find_path<F>(&mut self, start: Point, end: Point, mut cost: F) -> Option<Vec<Point>>
    where
        F: FnMut(&Node, &Node) -> PathCost,
    {
        if !self.nodes.in_bounds(start) || !self.nodes.in_bounds(end) {
            return None;
        }
        self.reset_nodes();

        self.nodes[start].cost = 0.0;
        self.queue.push(self.nodes.ravel_index(start), 0.0);

        while let Some((index, _)) = self.queue.pop() {
            self.closed[index] = true;
            let position = self.position_of(index);

            if position == end {
                return Some(self.reconstruct_path(end));
            }

            for direction in Direction::ALL {
                let next = position + direction.offset();
                if !self.nodes.in_bounds(next) {
                    continue;
                }
                let next_index = self.nodes.ravel_index(next);
                if self.closed[next_index] {
                    continue;
                }

                let step = cost(&self.nodes[position], &self.nodes[next]);
                if !step.traversable {
                    continue;
                }

                let new_cost = self.nodes[position].cost + step.cost;
                if new_cost < self.nodes[next].cost {
                    let neighbor = &mut self.nodes[next];
                    neighbor.previous = Some(position);
                    neighbor.cost = new_cost;
                    self.queue.push(next_index, new_cost);
                }
            }
        }

        None
    }

    fn position_of(&self, index: usize) -> Point {
        let width = self.nodes.width() as usize;
        Point::new((index % width) as i32, (index / width) as i32)
    }

    fn reconstruct_path(&mut self, end: Point) -> Vec<Point> {
        let mut current = Some(end);
        while let Some(p) = current {
            self.stack.push(p);
            current = self.nodes[p].previous;
        }

        let mut result = Vec::with_capacity(self.stack.len());
        while let Some(p) = self.stack.pop() {
            result.push(p);
        }
        result
    }
}

/// Step penalty for entering a cell of the given type.
pub fn terrain_penalty(cell: CellType) -> f64 {
    match cell {
        CellType::Room => ROOM_PENALTY,
        CellType::Empty => EMPTY_PENALTY,
        CellType::Hallway => HALLWAY_PENALTY,
    }
}

/// Corridor cost model: straight-line distance from the entered cell to the
/// goal plus its terrain penalty. Favours reusing hallways and avoids rooms.
pub fn dungeon_cost(grid: &Grid<CellType>, goal: Point) -> impl Fn(&Node, &Node) -> PathCost + '_ {
    move |_current, neighbor| PathCost {
        traversable: true,
        cost: neighbor.position.distance_to(goal)
            + terrain_penalty(grid.get(neighbor.position).copied().unwrap_or_default()),
    }
}
