//! Triangle clipping and polygon area on the chromaticity plane.
//!
//! The intersection of two triangles is a convex polygon with at most
//! six sides. [`intersect`] computes it with the Sutherland-Hodgman
//! algorithm: the subject triangle is clipped against each directed edge
//! of the clip triangle in turn. Edge-by-edge clipping does not keep the
//! winding stable, so the result is re-sorted into clockwise order
//! around its first vertex before area computation.
//!
//! Both input triangles must be wound clockwise; [`Triangle::new`]
//! normalizes arbitrary input to that convention.

use hdrpipe_math::Vec2;

/// A gamut triangle on a chromaticity diagram, wound clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub a: Vec2,
    /// Second vertex.
    pub b: Vec2,
    /// Third vertex.
    pub c: Vec2,
}

impl Triangle {
    /// Creates a triangle, reordering the vertices to clockwise winding
    /// if needed.
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        // Positive wedge of the two edge vectors means counter-clockwise.
        if (b - a).cross(c - a) > 0.0 {
            Self { a: c, b, c: a }
        } else {
            Self { a, b, c }
        }
    }

    /// Vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }

    /// The three directed edges in winding order.
    #[inline]
    fn edges(&self) -> [(Vec2, Vec2); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }
}

/// Convex polygon with up to six vertices.
///
/// Invariant: `0 <= len <= 6`, vertices in consistent clockwise order
/// after construction by [`intersect`]. A zero-length polygon is the
/// empty intersection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polygon {
    points: [Vec2; 6],
    len: usize,
}

impl Polygon {
    /// The empty polygon.
    pub const EMPTY: Self = Self {
        points: [Vec2::ZERO; 6],
        len: 0,
    };

    fn from_triangle(t: &Triangle) -> Self {
        let mut p = Self::EMPTY;
        p.points[0] = t.a;
        p.points[1] = t.b;
        p.points[2] = t.c;
        p.len = 3;
        p
    }

    fn push(&mut self, v: Vec2) {
        debug_assert!(self.len < 6, "triangle intersection exceeded 6 vertices");
        if self.len < 6 {
            self.points[self.len] = v;
            self.len += 1;
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the polygon has no vertices (disjoint inputs).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Vertices in order.
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.points[..self.len]
    }
}

/// On-edge tolerance for [`clip_check`].
///
/// Chromaticity conversion leaves shared vertices a few ulps off the
/// clip line; classifying them as outside would force an intersection
/// of (near-)coincident lines. Small against any real gamut edge
/// product (~1e-2 and up on the u'v' plane).
const CLIP_EPSILON: f32 = 1e-6;

/// Classifies point `p` against the directed edge `a -> b`.
///
/// Returns true when `p` lies on the inside (left, for the clockwise
/// convention used here) or within [`CLIP_EPSILON`] of the edge line.
/// The tolerance keeps a triangle clipped against itself, or against a
/// triangle sharing an edge, intact.
#[inline]
fn clip_check(a: Vec2, b: Vec2, p: Vec2) -> bool {
    let val = (b.y - a.y) * p.x - (b.x - a.x) * p.y + b.x * a.y - b.y * a.x;
    val >= -CLIP_EPSILON
}

/// Intersection point of the infinite lines `ab` and `cd`.
///
/// Solved directly from the two line determinants (Cramer-style). The
/// clipper only calls this for segment pairs that straddle; when the
/// lines are still numerically parallel (a straddle within the clip
/// tolerance) the whole segment lies on the clip line and its midpoint
/// is returned instead of dividing by the vanishing denominator.
#[inline]
fn line_intersection(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Vec2 {
    let denom = (a.x - b.x) * (c.y - d.y) - (a.y - b.y) * (c.x - d.x);
    if denom.abs() < f32::EPSILON {
        return (a + b) * 0.5;
    }
    let ab = a.x * b.y - a.y * b.x;
    let cd = c.x * d.y - c.y * d.x;
    Vec2::new(
        (ab * (c.x - d.x) - (a.x - b.x) * cd) / denom,
        (ab * (c.y - d.y) - (a.y - b.y) * cd) / denom,
    )
}

/// Intersects two clockwise triangles into a clockwise convex polygon.
///
/// `p` is the subject, `q` the clip triangle. Degenerate outcomes are
/// well-defined: disjoint triangles produce the empty polygon, a fully
/// contained subject survives as its own three vertices.
pub fn intersect(p: &Triangle, q: &Triangle) -> Polygon {
    let mut out = Polygon::from_triangle(p);

    for (clip_a, clip_b) in q.edges() {
        if out.is_empty() {
            return Polygon::EMPTY;
        }
        let input = out;
        out = Polygon::EMPTY;

        let mut s = input.points[input.len - 1];
        for &e in input.vertices() {
            if clip_check(clip_a, clip_b, e) {
                if !clip_check(clip_a, clip_b, s) {
                    out.push(line_intersection(s, e, clip_a, clip_b));
                }
                out.push(e);
            } else if clip_check(clip_a, clip_b, s) {
                out.push(line_intersection(s, e, clip_a, clip_b));
            }
            s = e;
        }
    }

    // Restore a consistent clockwise ordering around the first vertex;
    // the per-edge passes above do not preserve it.
    if out.len > 2 {
        let pivot = out.points[0];
        out.points[..out.len].sort_by(|&a, &b| {
            let det = (a - pivot).cross(b - pivot);
            det.partial_cmp(&0.0)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    out
}

/// Area of a convex clockwise polygon.
///
/// Fans from vertex 0 and sums shoelace triangle areas. The sign
/// follows the winding; inputs built by [`intersect`] come out
/// clockwise, giving a non-negative result.
pub fn area(p: &Polygon) -> f32 {
    if p.len < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let a = p.points[0];
    for i in 0..p.len - 2 {
        let b = p.points[i + 1];
        let c = p.points[i + 2];
        sum += -0.5 * (a.x * b.y + b.x * c.y + c.x * a.y - b.x * a.y - c.x * b.y - a.x * c.y);
    }
    sum
}
