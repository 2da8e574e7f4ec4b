//! Locating the plane under a moving point.
//!
//! Three entry points, from cheapest to most expensive:
//! * [`get_player_to_new_position`] – per-tic move, looks at the current
//!   plane and its direct neighbors first;
//! * [`trace_on_polygons`] – walks the neighbor graph along the move;
//! * [`get_plane_for_player`] – scans every plane, for spawn / recovery.

use glam::{Vec2, Vec3};
use log::debug;

use super::Player;
use crate::world::{Level, PlaneId};

/// Follow the planes crossed by `origin → target`, starting at `start`, and
/// return the first one that contains `target`.
///
/// This is a depth-first walk along crossed boundaries, not a search: each
/// crossed neighbor becomes the new scan point.  A plane is entered at most
/// once, so the walk ends after at most `planes().len()` steps.
pub fn trace_on_polygons(
    level: &Level,
    origin: Vec3,
    target: Vec3,
    start: PlaneId,
) -> Option<PlaneId> {
    let (from, to) = (origin.truncate(), target.truncate());
    let mut visited = vec![false; level.planes().len()];
    let mut current = start;
    *visited.get_mut(start as usize)? = true;

    'walk: loop {
        for &n in &level.plane(current).neighbors {
            let Some(plane) = level.get(n) else {
                continue;
            };
            if visited[n as usize] {
                continue;
            }
            if plane.contains_2d(to) {
                return Some(n);
            }
            if plane.is_crossed_by(from, to) {
                visited[n as usize] = true;
                current = n;
                continue 'walk;
            }
        }
        return None;
    }
}

/// Try to move the player from `origin` to `target`.
///
/// On success `player.plane` names the plane under `target`; on failure it is
/// left alone and the caller must keep the player at `origin`.  The position
/// itself is never written here.
pub fn get_player_to_new_position(
    level: &Level,
    player: &mut Player,
    origin: Vec3,
    target: Vec3,
) -> bool {
    let Some((current, here)) = player.plane.and_then(|id| Some((id, level.get(id)?))) else {
        return false;
    };
    let to = target.truncate();

    if here.contains_2d(to) {
        return true;
    }

    let from = origin.truncate();
    let Some(&crossed) = here
        .neighbors
        .iter()
        .find(|&&n| level.get(n).is_some_and(|p| p.is_crossed_by(from, to)))
    else {
        // off an edge nothing is linked to
        debug!("move {from} -> {to}: no neighbor crossed");
        return false;
    };

    // A neighbor that is crossed but does not hold the target (a stair
    // corner, a thin strip) still lets the tracer look further along.
    let found = if level.plane(crossed).contains_2d(to) {
        Some(crossed)
    } else {
        trace_on_polygons(level, origin, target, current)
    };

    match found {
        Some(p) => {
            if p != current {
                debug!("plane {current} -> {p}");
            }
            player.plane = Some(p);
            true
        }
        None => {
            debug!("move {from} -> {to}: target is in the void");
            false
        }
    }
}

/// Highest plane whose footprint holds `p`, ignoring any current assignment.
///
/// Planes without a height at `p` (walls) are skipped; the first of several
/// equally high planes wins.
pub fn get_plane_for_player(level: &Level, p: Vec2) -> Option<PlaneId> {
    level
        .planes_under(p)
        .filter_map(|id| level.plane(id).height_at(p).map(|h| (id, h)))
        .fold(None, |best: Option<(PlaneId, f32)>, (id, h)| match best {
            Some((_, bh)) if bh >= h => best,
            _ => Some((id, h)),
        })
        .map(|(id, _)| id)
}
