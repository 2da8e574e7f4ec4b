//! Wall test for a round body moving from one spot to another.
//!
//! ✔ only walls overlapping the body's torso band are considered
//! ✔ impassable walls count from the feet up, so they cannot be stepped over
//! ✔ the path from origin to target may not cross a wall's base segment
//! ✔ one probe segment per wall, straddling the target, solved by Cramer's rule
//! ✘ touching just a wall's end vertex is not detected

use glam::{Vec2, Vec3};
use log::debug;

use crate::world::geometry::segments_intersect;
use crate::world::{Level, Wall};

/// True when a body of `radius` moving from `origin` to `target` passes
/// through a wall or ends up overlapping one.
///
/// The torso band is measured from `origin.z`: walls whose top is within
/// `max_step` of the feet can be stepped over, and walls starting
/// `head_clearance` or more above the feet pass overhead; neither is tested.
/// An impassable wall is never stepped over.
/// With `origin == target` this is a plain overlap test at that spot.
pub fn hits_wall(
    level: &Level,
    origin: Vec3,
    target: Vec3,
    radius: f32,
    max_step: f32,
    head_clearance: f32,
) -> bool {
    let (from, to) = (origin.truncate(), target.truncate());
    let hit = level.planes().iter().find_map(|plane| {
        let w = plane.wall.as_ref()?;
        let step = if plane.can_walk() { max_step } else { 0.0 };
        if w.high_z <= origin.z + step || w.low_z >= origin.z + head_clearance {
            return None;
        }
        let blocked = segments_intersect(from, to, w.vertex1.truncate(), w.vertex2.truncate())
            || probe_crosses(w, to, radius);
        blocked.then_some(w)
    });

    if let Some(w) = hit {
        debug!(
            "wall {} -> {} blocks {from} -> {to}",
            w.vertex1.truncate(),
            w.vertex2.truncate(),
        );
    }
    hit.is_some()
}

/// Segment through `p`, `radius` to either side and perpendicular to the
/// wall, intersected with the wall's base segment.
fn probe_crosses(w: &Wall, p: Vec2, radius: f32) -> bool {
    let (s, c) = w.angle.sin_cos();
    let normal = Vec2::new(-s, c);
    let start = p + normal * radius;
    let end = p - normal * radius;

    let first = w.vertex1.truncate();
    let wall = w.vertex2.truncate() - first;
    let probe = end - start;
    let rel = first - start;

    // Parallel pairs divide by zero; the range test below rejects the result.
    let denom = -probe.x * wall.y + wall.x * probe.y;
    let along_probe = (-wall.y * rel.x + wall.x * rel.y) / denom;
    let along_wall = (probe.x * rel.y - probe.y * rel.x) / denom;

    (0.0..=1.0).contains(&along_probe) && (0.0..=1.0).contains(&along_wall)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Plane;
    use glam::vec3;

    /// Wall along the x axis from x=0 to x=4, z from 0 to 3.
    fn level_with_wall(low: f32, high: f32) -> Level {
        let mut lvl = Level::new("wall");
        lvl.add_plane(Plane::new(vec![
            vec3(0.0, 0.0, low),
            vec3(4.0, 0.0, low),
            vec3(4.0, 0.0, high),
            vec3(0.0, 0.0, high),
        ]));
        lvl.detect_walls();
        lvl
    }

    fn level_with_rail(height: f32) -> Level {
        let mut lvl = Level::new("rail");
        lvl.add_plane(
            Plane::new(vec![
                vec3(0.0, 0.0, 0.0),
                vec3(4.0, 0.0, 0.0),
                vec3(4.0, 0.0, height),
                vec3(0.0, 0.0, height),
            ])
            .impassable(true),
        );
        lvl.detect_walls();
        lvl
    }

    fn hits(lvl: &Level, at: Vec3) -> bool {
        hits_wall(lvl, at, at, 0.25, 0.5, 3.0)
    }

    fn sweep(lvl: &Level, from: Vec3, to: Vec3) -> bool {
        hits_wall(lvl, from, to, 0.25, 0.5, 3.0)
    }

    #[test]
    fn touching_body_hits() {
        let lvl = level_with_wall(0.0, 3.0);
        assert!(hits(&lvl, vec3(2.0, 0.2, 0.0)));
        assert!(hits(&lvl, vec3(2.0, -0.2, 0.0)));
    }

    #[test]
    fn clear_body_misses() {
        let lvl = level_with_wall(0.0, 3.0);
        assert!(!hits(&lvl, vec3(2.0, 0.3, 0.0)));
        assert!(!hits(&lvl, vec3(5.0, 0.1, 0.0)));
    }

    #[test]
    fn low_and_high_walls_are_skipped() {
        // knee-high: can be stepped over
        let curb = level_with_wall(0.0, 0.5);
        assert!(!hits(&curb, vec3(2.0, 0.1, 0.0)));

        // starts above the head
        let lintel = level_with_wall(3.0, 4.0);
        assert!(!hits(&lintel, vec3(2.0, 0.1, 0.0)));

        // but a raised player meets the lintel
        assert!(hits(&lintel, vec3(2.0, 0.1, 1.0)));
    }

    #[test]
    fn diagonal_wall() {
        let mut lvl = Level::new("diag");
        lvl.add_plane(Plane::new(vec![
            vec3(0.0, 0.0, 0.0),
            vec3(4.0, 4.0, 0.0),
            vec3(4.0, 4.0, 3.0),
            vec3(0.0, 0.0, 3.0),
        ]));
        lvl.detect_walls();
        assert!(hits(&lvl, vec3(2.1, 1.9, 0.0)));
        assert!(!hits(&lvl, vec3(2.5, 1.5, 0.0)));
    }

    #[test]
    fn long_step_through_wall_hits() {
        let lvl = level_with_wall(0.0, 3.0);
        // both ends are well clear of the wall
        assert!(!hits(&lvl, vec3(2.0, -1.0, 0.0)));
        assert!(!hits(&lvl, vec3(2.0, 1.0, 0.0)));
        assert!(sweep(&lvl, vec3(2.0, -1.0, 0.0), vec3(2.0, 1.0, 0.0)));
        assert!(sweep(&lvl, vec3(2.0, 1.0, 0.0), vec3(2.0, -1.0, 0.0)));
    }

    #[test]
    fn path_past_the_wall_end_misses() {
        let lvl = level_with_wall(0.0, 3.0);
        assert!(!sweep(&lvl, vec3(5.0, -1.0, 0.0), vec3(5.0, 1.0, 0.0)));
        // sliding along the wall face
        assert!(!sweep(&lvl, vec3(1.0, 0.5, 0.0), vec3(3.0, 0.5, 0.0)));
    }

    #[test]
    fn curb_does_not_stop_a_long_step() {
        let curb = level_with_wall(0.0, 0.5);
        assert!(!sweep(&curb, vec3(2.0, -1.0, 0.0), vec3(2.0, 1.0, 0.0)));
    }

    #[test]
    fn impassable_curb_cannot_be_stepped_over() {
        let rail = level_with_rail(0.3);
        assert!(hits(&rail, vec3(2.0, 0.1, 0.0)));
        assert!(sweep(&rail, vec3(2.0, -1.0, 0.0), vec3(2.0, 1.0, 0.0)));
        // standing on top of it is fine
        assert!(!hits(&rail, vec3(2.0, 0.1, 0.3)));
    }

    #[test]
    fn floors_never_collide() {
        let mut lvl = Level::new("floor");
        lvl.add_plane(Plane::new(vec![
            vec3(0.0, 0.0, 0.0),
            vec3(4.0, 0.0, 0.0),
            vec3(4.0, 4.0, 0.0),
            vec3(0.0, 4.0, 0.0),
        ]));
        lvl.detect_walls();
        assert!(!hits(&lvl, vec3(2.0, 0.0, 0.0)));
    }
}
