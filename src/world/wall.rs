use glam::{Vec3, Vec3Swizzles};

/// Collision data for a vertical plane.  Built once, never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    /// Farthest-apart pair of the plane's vertices.
    pub vertex1: Vec3,
    pub vertex2: Vec3,
    /// Squared horizontal distance between the two vertices.
    pub length: f32,
    pub low_z: f32,
    pub high_z: f32,
    /// `atan2(dy, dx)` of `vertex2 - vertex1`.
    pub angle: f32,
}

/// Derive a `Wall` from a polygon.
///
/// Needs at least two vertex pairs sharing the same (x, y) – a vertical edge
/// on each side – otherwise the polygon is not a wall and `None` is returned.
pub fn compute_wall_info(verts: &[Vec3]) -> Option<Wall> {
    let mut stacked = 0;
    let mut best: Option<(Vec3, Vec3, f32)> = None;

    for (i, a) in verts.iter().enumerate() {
        for b in &verts[i + 1..] {
            if a.xy() == b.xy() {
                stacked += 1;
            }
            let d = a.xy().distance_squared(b.xy());
            if best.is_none_or(|(_, _, len)| d > len) {
                best = Some((*a, *b, d));
            }
        }
    }

    if stacked < 2 {
        return None;
    }
    let (vertex1, vertex2, length) = best?;

    let (low_z, high_z) = verts
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v.z), hi.max(v.z)));
    let delta = vertex2 - vertex1;

    Some(Wall {
        vertex1,
        vertex2,
        length,
        low_z,
        high_z,
        angle: delta.y.atan2(delta.x),
    })
}
