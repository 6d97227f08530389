//! Point-in-polygon test.
//!
//! Ray casting with the even-odd rule. A horizontal ray is cast from the query
//! point towards [`RAY_EXTENT_X`] and every polygon edge is tested against it
//! with the four-orientation segment intersection test. A point collinear with
//! an intersecting edge and within its extent is reported inside, which makes
//! the test boundary-inclusive. An intersecting edge only counts as a crossing
//! when exactly one of its endpoints lies strictly above the ray, so a ray
//! through a vertex is not counted twice.
//!
//! The cross product used for orientation is truncated to an integer by
//! default ([`CrossPrecision::Truncated`]). Near-collinear triples whose cross
//! value is below one in magnitude are therefore classified as collinear.
//! [`CrossPrecision::Tolerance`] replaces the truncation with an explicit
//! epsilon.

use crate::point::Point;
use crate::polygon::Polygon;

/// X coordinate of the far end of the containment ray.
pub const RAY_EXTENT_X: f64 = 10_000.0;

/// How the orientation cross product is reduced before its sign is taken.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CrossPrecision {
    /// Truncate toward zero to an integer.
    #[default]
    Truncated,
    /// Treat `|cross| <= eps` as collinear.
    Tolerance(f64),
}

impl CrossPrecision {
    fn reduce(self, cross: f64) -> f64 {
        match self {
            Self::Truncated => cross.trunc(),
            Self::Tolerance(eps) if cross.abs() <= eps => 0.0,
            Self::Tolerance(_) => cross,
        }
    }
}

/// Orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// Orientation of `(p, q, r)`.
    pub fn of(p: &Point, q: &Point, r: &Point, precision: CrossPrecision) -> Self {
        let cross = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
        let cross = precision.reduce(cross);

        if cross == 0.0 || cross.is_nan() {
            Orientation::Collinear
        } else if cross > 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }
}

/// Given collinear `p`, `q`, `r`, returns true when `q` lies within the
/// bounding rectangle of segment `pr`.
pub fn on_segment(p: &Point, q: &Point, r: &Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Returns true when segment `p1q1` intersects segment `p2q2`.
pub fn segments_intersect(
    p1: &Point,
    q1: &Point,
    p2: &Point,
    q2: &Point,
    precision: CrossPrecision,
) -> bool {
    let o1 = Orientation::of(p1, q1, p2, precision);
    let o2 = Orientation::of(p1, q1, q2, precision);
    let o3 = Orientation::of(p2, q2, p1, precision);
    let o4 = Orientation::of(p2, q2, q1, precision);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

impl Polygon {
    /// Returns true when `point` is inside the polygon or on its boundary.
    pub fn is_inside(&self, point: &Point) -> bool {
        self.is_inside_with(point, CrossPrecision::default())
    }

    /// [`Polygon::is_inside`] with an explicit orientation precision.
    pub fn is_inside_with(&self, point: &Point, precision: CrossPrecision) -> bool {
        if self.side_indices().len() < 3 {
            return false;
        }

        let extreme = Point::new(RAY_EXTENT_X, point.y);
        let vertices = self.vertices();
        let n = vertices.len();
        let mut crossings = 0usize;

        for i in 0..n {
            let current = &vertices[i];
            let next = &vertices[(i + 1) % n];

            if !segments_intersect(current, next, point, &extreme, precision) {
                continue;
            }

            if Orientation::of(current, point, next, precision) == Orientation::Collinear
                && on_segment(current, point, next)
            {
                return true;
            }

            // Half-open in y: a vertex on the ray is counted for one of its
            // two edges at most, and edges lying along the ray never count.
            if (current.y > point.y) != (next.y > point.y) {
                crossings += 1;
            }
        }

        crossings % 2 == 1
    }
}
