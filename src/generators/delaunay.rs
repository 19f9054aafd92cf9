use std::collections::{HashMap, HashSet};

use crate::generators::union_find::UnionFind;
use crate::geometry::Vec2;

/// Undirected edge between two vertex indices, stored with `u < v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        Edge {
            u: a.min(b),
            v: a.max(b),
        }
    }

    pub fn length(&self, vertices: &[Vec2]) -> f64 {
        vertices[self.u].distance_to(&vertices[self.v])
    }
}

#[derive(Debug, Clone, Copy)]
struct Triangle {
    a: usize,
    b: usize,
    c: usize,
    center: Vec2,
    radius_sq: f64,
}

impl Triangle {
    /// Returns `None` for a degenerate (zero-area) triangle.
    fn new(a: usize, b: usize, c: usize, points: &[Vec2]) -> Option<Self> {
        let (pa, pb, pc) = (points[a], points[b], points[c]);
        let d = 2.0 * (pa.x * (pb.y - pc.y) + pb.x * (pc.y - pa.y) + pc.x * (pa.y - pb.y));
        if d.abs() < f64::EPSILON {
            return None;
        }
        let sa = pa.x * pa.x + pa.y * pa.y;
        let sb = pb.x * pb.x + pb.y * pb.y;
        let sc = pc.x * pc.x + pc.y * pc.y;
        let center = Vec2::new(
            (sa * (pb.y - pc.y) + sb * (pc.y - pa.y) + sc * (pa.y - pb.y)) / d,
            (sa * (pc.x - pb.x) + sb * (pa.x - pc.x) + sc * (pb.x - pa.x)) / d,
        );
        let dx = pa.x - center.x;
        let dy = pa.y - center.y;
        Some(Triangle {
            a,
            b,
            c,
            center,
            radius_sq: dx * dx + dy * dy,
        })
    }

    fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    fn circumcircle_contains(&self, p: Vec2) -> bool {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        dx * dx + dy * dy <= self.radius_sq * (1.0 + 1e-9)
    }

    fn has_vertex_from(&self, first: usize) -> bool {
        self.a >= first || self.b >= first || self.c >= first
    }
}

/// Triangulates the vertices and returns the unique edges in a deterministic
/// order. Fewer than two vertices give no edges, exactly two give one, and
/// collinear vertices are chained along their line.
pub fn triangulate(vertices: &[Vec2]) -> Vec<Edge> {
    match vertices.len() {
        0 | 1 => return Vec::new(),
        2 => return vec![Edge::new(0, 1)],
        _ => {}
    }

    if all_collinear(vertices) {
        tracing::debug!("[graph] {} collinear vertices, chaining", vertices.len());
        return chain(vertices);
    }

    let edges = bowyer_watson(vertices);

    let mut uf = UnionFind::new(vertices.len());
    edges.iter().for_each(|e| {
        uf.unite(e.u, e.v);
    });
    if uf.count() != 1 {
        // Only reachable through floating point trouble on near-degenerate input.
        tracing::warn!("[graph] triangulation left vertices disconnected, chaining the rest");
        let mut edges = edges;
        for e in chain(vertices) {
            if uf.unite(e.u, e.v) {
                edges.push(e);
            }
        }
        return edges;
    }
    edges
}

fn bowyer_watson(vertices: &[Vec2]) -> Vec<Edge> {
    let n = vertices.len();

    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for v in vertices {
        min_x = min_x.min(v.x);
        min_y = min_y.min(v.y);
        max_x = max_x.max(v.x);
        max_y = max_y.max(v.y);
    }
    let delta = (max_x - min_x).max(max_y - min_y).max(1.0);
    let (mid_x, mid_y) = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);

    // Super triangle vertices live at indices n, n + 1, n + 2.
    let mut points = vertices.to_vec();
    points.push(Vec2::new(mid_x - 20.0 * delta, mid_y - delta));
    points.push(Vec2::new(mid_x, mid_y + 20.0 * delta));
    points.push(Vec2::new(mid_x + 20.0 * delta, mid_y - delta));

    let mut triangles = Triangle::new(n, n + 1, n + 2, &points)
        .into_iter()
        .collect::<Vec<_>>();

    for (i, &p) in vertices.iter().enumerate() {
        let (bad, good): (Vec<Triangle>, Vec<Triangle>) = triangles
            .into_iter()
            .partition(|t| t.circumcircle_contains(p));
        triangles = good;

        // Cavity boundary: edges owned by exactly one bad triangle, in first-seen order.
        let mut counts: HashMap<Edge, usize> = HashMap::new();
        let mut order = Vec::new();
        for e in bad.iter().flat_map(Triangle::edges) {
            let count = counts.entry(e).or_insert(0);
            if *count == 0 {
                order.push(e);
            }
            *count += 1;
        }

        for e in order.into_iter().filter(|e| counts[e] == 1) {
            if let Some(t) = Triangle::new(e.u, e.v, i, &points) {
                triangles.push(t);
            }
        }
    }

    let mut seen = HashSet::new();
    triangles
        .iter()
        .filter(|t| !t.has_vertex_from(n))
        .flat_map(Triangle::edges)
        .filter(|e| seen.insert(*e))
        .collect()
}

fn all_collinear(vertices: &[Vec2]) -> bool {
    let a = vertices[0];
    let Some(b) = vertices.iter().skip(1).find(|v| **v != a) else {
        return true;
    };
    vertices.iter().all(|c| {
        let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
        cross.abs() < 1e-9
    })
}

/// Connects the vertices in lexicographic (x, y) order.
fn chain(vertices: &[Vec2]) -> Vec<Edge> {
    let mut order = (0..vertices.len()).collect::<Vec<_>>();
    order.sort_by(|&i, &j| {
        vertices[i]
            .x
            .total_cmp(&vertices[j].x)
            .then(vertices[i].y.total_cmp(&vertices[j].y))
    });
    order.windows(2).map(|w| Edge::new(w[0], w[1])).collect()
}
