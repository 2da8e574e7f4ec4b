use log::debug;

use super::collision::hits_wall;
use super::gravity::{adjust_player_to_floor, apply_gravity};
use super::trace::{get_plane_for_player, get_player_to_new_position};
use super::{PhysicsConfig, Player, TicCmd};
use crate::world::Level;

/// What happened to the horizontal part of a tic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No horizontal displacement was requested.
    Idle,
    Moved,
    /// A wall overlaps the destination or lies across the path.
    BlockedByWall,
    /// Every floor at the destination is more than `max_step` up.
    BlockedByStep,
    /// The destination is off the plane graph.
    Void,
}

/// Run one tic for one player.
///
/// 1. apply the command (turning, aiming, displacement);
/// 2. veto the displacement if it runs into or through a wall;
/// 3. resolve the plane under the destination, undoing the move if none;
/// 4. settle Z with the stepping search, undoing the move if the new floor
///    is out of reach;
/// 5. plain gravity on the current plane when nothing settled Z.
pub fn player_tic(
    level: &Level,
    player: &mut Player,
    cmd: &mut TicCmd,
    cfg: &PhysicsConfig,
) -> MoveOutcome {
    let origin = player.pos;
    let start_plane = player.plane;
    player.execute_tic_cmd(cmd, cfg);
    let target = player.pos;

    let mut outcome = if target.truncate() == origin.truncate() {
        MoveOutcome::Idle
    } else if hits_wall(
        level,
        origin,
        target,
        player.radius,
        player.max_step,
        cfg.head_clearance,
    ) {
        MoveOutcome::BlockedByWall
    } else if !get_player_to_new_position(level, player, origin, target) {
        MoveOutcome::Void
    } else {
        MoveOutcome::Moved
    };

    let mut settled = false;
    if outcome == MoveOutcome::Moved {
        settled = adjust_player_to_floor(level, player, cfg);
        if !settled && floor_out_of_reach(level, player) {
            outcome = MoveOutcome::BlockedByStep;
        }
    }

    if outcome != MoveOutcome::Moved && outcome != MoveOutcome::Idle {
        debug!("{outcome:?}: staying at {}", origin.truncate());
        player.pos.x = origin.x;
        player.pos.y = origin.y;
        player.plane = start_plane;
    }

    if !settled {
        apply_gravity(level, player, cfg);
    }
    outcome
}

/// The current plane's floor under the player is above `max_step`.
fn floor_out_of_reach(level: &Level, player: &Player) -> bool {
    player
        .plane
        .and_then(|id| level.get(id))
        .and_then(|p| p.height_at(player.pos.truncate()))
        .is_some_and(|floor| floor > player.pos.z + player.max_step)
}

/// Find a plane for a player dropped at an arbitrary spot (spawn, teleport,
/// or after ending up in the void) and stand them on it.
///
/// Returns `false` and leaves the player untouched when nothing is under
/// the spot.
pub fn place_player(level: &Level, player: &mut Player) -> bool {
    let xy = player.pos.truncate();
    let Some(id) = get_plane_for_player(level, xy) else {
        debug!("no plane under {xy}");
        return false;
    };
    let Some(z) = level.plane(id).height_at(xy) else {
        return false;
    };

    player.plane = Some(id);
    player.land(z);
    player.reset();
    true
}
