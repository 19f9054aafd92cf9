use std::collections::HashSet;

use rand::Rng;

use crate::generators::delaunay::{Edge, triangulate};
use crate::generators::prim::minimum_spanning_tree;
use crate::geometry::{Rect, Vec2};

/// Chance that a triangulation edge left out of the spanning tree is kept anyway.
pub const EXTRA_EDGE_CHANCE: f64 = 0.125;

/// Candidate and selected connections between rooms. Vertex `i` is the centre
/// of room `i`, so edge endpoints are room ids.
#[derive(Debug, Clone, Default)]
pub struct ConnectivityGraph {
    pub vertices: Vec<Vec2>,
    /// Every edge of the triangulation, in a deterministic order.
    pub triangulation: Vec<Edge>,
    /// Tree edges in the order Prim added them.
    pub spanning_tree: Vec<Edge>,
    /// Tree edges followed by the retained extra edges.
    pub selected: Vec<Edge>,
}

/// Triangulates the room centres, reduces them to a spanning tree and then
/// re-adds each remaining edge with probability [`EXTRA_EDGE_CHANCE`].
///
/// Draws exactly one value from `rng` per non-tree edge, in triangulation order.
pub fn build_graph<R: Rng>(rooms: &[Rect], rng: &mut R) -> ConnectivityGraph {
    let vertices = rooms.iter().map(Rect::center).collect::<Vec<_>>();
    let triangulation = triangulate(&vertices);

    let Some(first) = triangulation.first() else {
        tracing::debug!("[graph] {} room(s), no edges", rooms.len());
        return ConnectivityGraph {
            vertices,
            ..Default::default()
        };
    };

    let spanning_tree = minimum_spanning_tree(&vertices, &triangulation, first.u);
    let in_tree = spanning_tree.iter().copied().collect::<HashSet<_>>();

    let mut selected = spanning_tree.clone();
    for edge in triangulation.iter().filter(|e| !in_tree.contains(e)) {
        if rng.random_bool(EXTRA_EDGE_CHANCE) {
            selected.push(*edge);
        }
    }

    tracing::info!(
        "[graph] {} candidate edges, {} in spanning tree, {} selected",
        triangulation.len(),
        spanning_tree.len(),
        selected.len()
    );

    ConnectivityGraph {
        vertices,
        triangulation,
        spanning_tree,
        selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use crate::generators::union_find::UnionFind;
    use crate::geometry::{Point, Size};

    fn room(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn test_no_rooms_or_one_room() {
        let mut rng = get_rng(Some(1));
        assert!(build_graph(&[], &mut rng).selected.is_empty());
        let graph = build_graph(&[room(1, 1, 3, 3)], &mut rng);
        assert!(graph.triangulation.is_empty());
        assert!(graph.selected.is_empty());
    }

    #[test]
    fn test_two_rooms_single_edge() {
        let mut rng = get_rng(Some(1));
        let graph = build_graph(&[room(1, 1, 3, 3), room(10, 8, 3, 3)], &mut rng);
        assert_eq!(graph.spanning_tree, vec![Edge::new(0, 1)]);
        assert_eq!(graph.selected, vec![Edge::new(0, 1)]);
    }

    #[test]
    fn test_selected_contains_spanning_tree() {
        let rooms = [
            room(1, 1, 3, 3),
            room(10, 2, 4, 3),
            room(3, 10, 3, 5),
            room(14, 12, 3, 3),
            room(22, 4, 2, 2),
            room(20, 20, 5, 4),
        ];
        let graph = build_graph(&rooms, &mut get_rng(Some(5)));
        assert_eq!(graph.spanning_tree.len(), rooms.len() - 1);
        assert_eq!(&graph.selected[..graph.spanning_tree.len()], &graph.spanning_tree[..]);

        let mut uf = UnionFind::new(rooms.len());
        assert!(graph.spanning_tree.iter().all(|e| uf.unite(e.u, e.v)));
        assert_eq!(uf.count(), 1);

        let candidates = graph.triangulation.iter().collect::<HashSet<_>>();
        assert!(graph.selected.iter().all(|e| candidates.contains(e)));
    }

    #[test]
    fn test_same_seed_same_selection() {
        let rooms = [
            room(1, 1, 3, 3),
            room(10, 2, 4, 3),
            room(3, 10, 3, 5),
            room(14, 12, 3, 3),
            room(22, 4, 2, 2),
        ];
        let a = build_graph(&rooms, &mut get_rng(Some(9)));
        let b = build_graph(&rooms, &mut get_rng(Some(9)));
        assert_eq!(a.selected, b.selected);
    }
}
