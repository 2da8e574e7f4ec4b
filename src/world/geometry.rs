//! Small polygon toolkit used by the plane graph.
//!
//! Every polygon is a slice of `Vec3`; 2-D tests work on the x/y footprint
//! and ignore z, just like Doom's 2½-D maths.

use glam::{Vec2, Vec3, Vec3Swizzles};

/// Below this a normal's z component counts as "no vertical extent".
pub const HEIGHT_EPSILON: f32 = 1.0e-6;

/*----------------------- bounding box --------------------------------*/

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Aabb3 {
    /// Inverted box – grows correctly with the first point.
    fn default() -> Self {
        Self {
            min: Vec3::splat(f32::MAX),
            max: Vec3::splat(-f32::MAX),
        }
    }
}

impl Aabb3 {
    pub fn from_points(points: &[Vec3]) -> Self {
        points.iter().fold(Self::default(), |bb, p| Self {
            min: bb.min.min(*p),
            max: bb.max.max(*p),
        })
    }

    /// Footprint test, grown by `radius` on every side.
    #[inline]
    pub fn contains_2d(&self, p: Vec2, radius: f32) -> bool {
        p.x >= self.min.x - radius
            && p.x <= self.max.x + radius
            && p.y >= self.min.y - radius
            && p.y <= self.max.y + radius
    }
}

/*----------------------- polygon queries -----------------------------*/

/// Crossing-number test on the x/y footprint.
///
/// Points on a "left/bottom" edge count as inside and points on a
/// "right/top" edge as outside, so two polygons sharing an edge never both
/// claim the same point.  Degenerate footprints (walls) contain nothing.
pub fn point_in_poly(p: Vec2, verts: &[Vec3]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (vi, vj) = (verts[i], verts[j]);
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Height of the polygon's supporting plane above `p`.
///
/// `None` when the polygon has no usable vertical extent (a wall, or fewer
/// than three vertices) – callers must never feed that into a position.
pub fn point_height_on_poly(p: Vec2, verts: &[Vec3]) -> Option<f32> {
    if verts.len() < 3 {
        return None;
    }
    let n = compute_normal(verts);
    if n.z.abs() < HEIGHT_EPSILON {
        return None;
    }
    let o = verts[0];
    let h = o.z - (n.x * (p.x - o.x) + n.y * (p.y - o.y)) / n.z;
    h.is_finite().then_some(h)
}

/// Inclusive test for segments `a0→a1` and `b0→b1` on the x/y plane.
///
/// Parallel (and collinear) pairs are reported as not intersecting.
pub fn segments_intersect(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> bool {
    let da = a1 - a0;
    let db = b1 - b0;
    let denom = da.perp_dot(db);
    if denom == 0.0 {
        return false;
    }

    let w = b0 - a0;
    let t = w.perp_dot(db) / denom;
    let u = w.perp_dot(da) / denom;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Unit normal by Newell's method; zero for degenerate input.
pub fn compute_normal(verts: &[Vec3]) -> Vec3 {
    let n = verts.len();
    let mut acc = Vec3::ZERO;
    for i in 0..n {
        let cur = verts[i];
        let next = verts[(i + 1) % n];
        acc.x += (cur.y - next.y) * (cur.z + next.z);
        acc.y += (cur.z - next.z) * (cur.x + next.x);
        acc.z += (cur.x - next.x) * (cur.y + next.y);
    }
    acc.normalize_or_zero()
}

/// Arithmetic mean of the vertices.
pub fn compute_average(verts: &[Vec3]) -> Vec3 {
    if verts.is_empty() {
        return Vec3::ZERO;
    }
    verts.iter().copied().sum::<Vec3>() / verts.len() as f32
}

/// Iterator over the closed boundary `(v[i], v[i+1 mod n])` as 2-D edges.
pub fn edges_2d(verts: &[Vec3]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = verts.len();
    (0..n).map(move |i| (verts[i].xy(), verts[(i + 1) % n].xy()))
}
