//! Property-based invariant tests for the plane-walk physics.
//!
//! 1. Standing still inside a plane always succeeds and keeps the plane
//! 2. Crossing a shared edge lands in the neighbor behind it
//! 3. Resting on a floor is a fixed point of both gravity paths
//! 4. Falling strictly lowers Z until it snaps onto the floor
//! 5. Wall hits do not depend on which end is Vertex1
//! 6. A move whose path crosses a wall is blocked however long it is

use glam::{Vec2, Vec3, vec2, vec3};
use planewalk::sim::{
    PhysicsConfig, Player, adjust_player_to_floor, apply_gravity, get_player_to_new_position,
    hits_wall,
};
use planewalk::world::{Level, Plane, PlaneId};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn rect(x0: f32, y0: f32, w: f32, h: f32, z: f32) -> Plane {
    Plane::new(vec![
        vec3(x0, y0, z),
        vec3(x0 + w, y0, z),
        vec3(x0 + w, y0 + h, z),
        vec3(x0, y0 + h, z),
    ])
}

const CELL: f32 = 4.0;
const GRID: u32 = 3;

/// 3×3 grid of 4×4 cells, linked by shared edges; id = row * 3 + col.
fn grid() -> Level {
    let mut lvl = Level::new("grid");
    for row in 0..GRID {
        for col in 0..GRID {
            lvl.add_plane(rect(col as f32 * CELL, row as f32 * CELL, CELL, CELL, 0.0));
        }
    }
    lvl.link_shared_edges();
    lvl
}

/// Strictly interior point of a grid cell, from fractions in (0, 1).
fn cell_point(id: PlaneId, fx: f32, fy: f32) -> Vec3 {
    let (row, col) = (id / GRID, id % GRID);
    vec3((col as f32 + fx) * CELL, (row as f32 + fy) * CELL, 0.0)
}

fn frac() -> impl Strategy<Value = f32> {
    0.05f32..0.95
}

fn single_floor(z: f32) -> Level {
    let mut lvl = Level::new("floor");
    lvl.add_plane(rect(-10.0, -10.0, 20.0, 20.0, z));
    lvl
}

fn wall_level(a: Vec2, b: Vec2) -> Level {
    let mut lvl = Level::new("wall");
    lvl.add_plane(Plane::new(vec![
        a.extend(0.0),
        b.extend(0.0),
        b.extend(3.0),
        a.extend(3.0),
    ]));
    lvl.detect_walls();
    lvl
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Standing still inside a plane
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zero_move_inside_plane_is_accepted(id in 0u32..9, fx in frac(), fy in frac()) {
        let lvl = grid();
        let at = cell_point(id, fx, fy);
        let mut p = Player::new(&PhysicsConfig::default(), at, Some(id));

        prop_assert!(get_player_to_new_position(&lvl, &mut p, at, at));
        prop_assert_eq!(p.plane, Some(id));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. Crossing a shared edge
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn crossing_shared_edge_reaches_neighbor(
        row in 0u32..GRID,
        col in 0u32..GRID - 1,
        eastward in any::<bool>(),
        fx0 in frac(), fx1 in frac(), fy in frac(),
    ) {
        let lvl = grid();
        let west = row * GRID + col;
        let east = west + 1;
        let (from, to) = if eastward { (west, east) } else { (east, west) };

        // same row fraction keeps the segment inside the two cells
        let origin = cell_point(from, fx0, fy);
        let target = cell_point(to, fx1, fy);
        let mut p = Player::new(&PhysicsConfig::default(), origin, Some(from));

        prop_assert!(get_player_to_new_position(&lvl, &mut p, origin, target));
        prop_assert_eq!(p.plane, Some(to));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Resting is a fixed point
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resting_player_stays_grounded(z in -50.0f32..50.0, tics in 1usize..20) {
        let cfg = PhysicsConfig::default();
        let lvl = single_floor(z);
        let mut p = Player::new(&cfg, vec3(1.0, 2.0, z), Some(0));

        for _ in 0..tics {
            prop_assert!(adjust_player_to_floor(&lvl, &mut p, &cfg));
            apply_gravity(&lvl, &mut p, &cfg);
            prop_assert_eq!(p.pos.z, z);
            prop_assert_eq!(p.air_time, 0);
            prop_assert!(p.can_jump());
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Monotonic fall
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fall_is_monotonic_and_lands_exactly(
        floor in -20.0f32..20.0,
        drop in 0.01f32..30.0,
        gravity in 0.05f32..2.0,
    ) {
        let cfg = PhysicsConfig { gravity, ..PhysicsConfig::default() };
        let lvl = single_floor(floor);
        let mut p = Player::new(&cfg, vec3(0.0, 0.0, floor + drop), Some(0));

        let mut last = p.pos.z;
        let mut tics = 0;
        while p.pos.z > floor {
            apply_gravity(&lvl, &mut p, &cfg);
            prop_assert!(p.pos.z < last);
            last = p.pos.z;
            tics += 1;
            prop_assert!(tics < 10_000);
        }
        prop_assert_eq!(p.pos.z, floor);
        prop_assert_eq!(p.air_time, 0);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Wall label symmetry
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn wall_hit_ignores_vertex_order(
        ax in -8.0f32..8.0, ay in -8.0f32..8.0,
        bx in -8.0f32..8.0, by in -8.0f32..8.0,
        px in -10.0f32..10.0, py in -10.0f32..10.0,
        radius in 0.1f32..1.0,
    ) {
        let (a, b, pt) = (vec2(ax, ay), vec2(bx, by), vec2(px, py));
        let seg = b - a;
        prop_assume!(seg.length() > 1.0);

        // keep away from the exact contact boundary
        let t = (pt - a).dot(seg) / seg.length_squared();
        let dist = seg.perp_dot(pt - a).abs() / seg.length();
        prop_assume!(t.abs() > 1e-3 && (t - 1.0).abs() > 1e-3);
        prop_assume!((dist - radius).abs() > 1e-3);

        let cfg = PhysicsConfig::default();
        let at = pt.extend(0.0);
        let forward = hits_wall(&wall_level(a, b), at, at, radius, cfg.max_step, cfg.head_clearance);
        let backward = hits_wall(&wall_level(b, a), at, at, radius, cfg.max_step, cfg.head_clearance);

        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward, (0.0..=1.0).contains(&t) && dist <= radius);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. No tunnelling
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn crossing_a_wall_is_always_blocked(
        y in -3.5f32..3.5,
        before in 0.3f32..20.0,
        after in 0.3f32..20.0,
        radius in 0.05f32..0.25,
    ) {
        // wall along x = 0 from y = -4 to y = 4
        let lvl = wall_level(vec2(0.0, -4.0), vec2(0.0, 4.0));
        let cfg = PhysicsConfig::default();
        let from = vec3(-before, y, 0.0);
        let to = vec3(after, y, 0.0);

        prop_assert!(hits_wall(&lvl, from, to, radius, cfg.max_step, cfg.head_clearance));
        prop_assert!(hits_wall(&lvl, to, from, radius, cfg.max_step, cfg.head_clearance));
    }
}
