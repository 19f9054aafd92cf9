use crate::generators::delaunay::Edge;
use crate::geometry::Vec2;

/// Prim's minimum spanning tree over `edges`, weighted by the Euclidean
/// length between vertices, grown from `start`.
///
/// Each round scans the edges in order and picks the shortest one with exactly
/// one endpoint in the tree; ties go to the earlier edge. Stops when no such
/// edge is left, so a disconnected input yields the tree of `start`'s component.
pub fn minimum_spanning_tree(vertices: &[Vec2], edges: &[Edge], start: usize) -> Vec<Edge> {
    if vertices.is_empty() || edges.is_empty() {
        return Vec::new();
    }

    let weights = edges.iter().map(|e| e.length(vertices)).collect::<Vec<_>>();
    let mut in_tree = vec![false; vertices.len()];
    in_tree[start] = true;
    let mut tree = Vec::with_capacity(vertices.len() - 1);

    loop {
        let mut best: Option<usize> = None;
        let mut best_weight = f64::INFINITY;

        for (i, e) in edges.iter().enumerate() {
            // Only edges crossing the cut
            if in_tree[e.u] == in_tree[e.v] {
                continue;
            }
            if weights[i] < best_weight {
                best_weight = weights[i];
                best = Some(i);
            }
        }

        let Some(i) = best else {
            break;
        };
        let chosen = edges[i];
        in_tree[chosen.u] = true;
        in_tree[chosen.v] = true;
        tree.push(chosen);
    }

    tree
}
