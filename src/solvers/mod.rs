pub mod astar;
pub mod queue;

pub use astar::{Node, PathCost, Pathfinder, dungeon_cost, terrain_penalty};
pub use queue::PriorityQueue;
