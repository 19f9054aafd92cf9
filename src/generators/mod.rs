use rand::{SeedableRng, rngs::StdRng};

pub mod connectivity;
pub mod delaunay;
pub mod placement;
pub mod prim;
pub mod union_find;

pub use connectivity::{ConnectivityGraph, EXTRA_EDGE_CHANCE, build_graph};
pub use delaunay::{Edge, triangulate};
pub use placement::place_rooms;
pub use prim::minimum_spanning_tree;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
