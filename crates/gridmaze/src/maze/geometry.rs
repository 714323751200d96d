use super::types::{Edge, Point};

/// Sign of the cross product `(b - a) x (c - a)`.
///
/// `1` for a counter-clockwise turn, `-1` for clockwise, `0` when collinear.
/// Computed in `i128` so the full `i32` coordinate range is exact.
pub fn orientation(a: Point, b: Point, c: Point) -> i8 {
    let (ax, ay) = (i128::from(a.x), i128::from(a.y));
    let (bx, by) = (i128::from(b.x), i128::from(b.y));
    let (cx, cy) = (i128::from(c.x), i128::from(c.y));
    let cross = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
    cross.signum() as i8
}

/// Whether segments `a1a2` and `b1b2` properly cross.
///
/// True only when each segment's endpoints lie strictly on opposite sides of the
/// line through the other. Collinear, touching, and shared-endpoint input is never
/// a crossing.
pub fn intersects(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let o1 = orientation(b1, b2, a1);
    let o2 = orientation(b1, b2, a2);
    let o3 = orientation(a1, a2, b1);
    let o4 = orientation(a1, a2, b2);
    o1 * o2 < 0 && o3 * o4 < 0
}

/// Whether `p` lies on segment `ab` but is neither of its endpoints.
pub fn on_segment_interior(p: Point, a: Point, b: Point) -> bool {
    if p == a || p == b || orientation(a, b, p) != 0 {
        return false;
    }
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Whether two edges cannot both be drawn without touching away from a shared endpoint.
///
/// Covers proper crossings plus T-contacts and collinear overlaps. Edges that only
/// meet at a common endpoint do not conflict.
pub fn conflicts(e: &Edge, f: &Edge) -> bool {
    let (a1, a2) = (e.from(), e.to());
    let (b1, b2) = (f.from(), f.to());
    intersects(a1, a2, b1, b2)
        || on_segment_interior(b1, a1, a2)
        || on_segment_interior(b2, a1, a2)
        || on_segment_interior(a1, b1, b2)
        || on_segment_interior(a2, b1, b2)
}
