//! Vertical integration: step-up, accelerating fall and landing.
//!
//! There is no explicit state enum; "grounded" is `air_time == 0` with
//! neither JUMP nor FLY set, anything else is "falling".

use log::debug;

use super::{PhysicsConfig, Player};
use crate::world::Level;

/// Settle the player on the best floor under (x, y) after a horizontal move.
///
/// Every plane under the player is a candidate; the highest one no more than
/// `max_step` above the feet is kept.  Within one gravity quantum of it the
/// player lands on it, otherwise one tic of fall is applied.
///
/// Returns `false` when no candidate exists – the caller then falls back to
/// [`apply_gravity`].
pub fn adjust_player_to_floor(level: &Level, player: &mut Player, cfg: &PhysicsConfig) -> bool {
    let xy = player.pos.truncate();
    let reach = player.pos.z + player.max_step;

    let floor = level
        .planes_under(xy)
        .filter_map(|id| level.plane(id).height_at(xy))
        .filter(|&h| h <= reach)
        .fold(None, |best: Option<f32>, h| Some(best.map_or(h, |b| b.max(h))));

    let Some(floor) = floor else {
        return false;
    };

    if player.pos.z <= floor + cfg.gravity {
        if player.air_time > 0 {
            debug!("landed at {floor} after {} tics", player.air_time);
        }
        player.land(floor);
    } else {
        player.fall(cfg);
    }
    true
}

/// Fall toward, or rest on, the player's current plane.  No stepping.
pub fn apply_gravity(level: &Level, player: &mut Player, cfg: &PhysicsConfig) {
    let Some(floor) = player
        .plane
        .and_then(|id| level.get(id))
        .and_then(|p| p.height_at(player.pos.truncate()))
    else {
        return;
    };

    if player.pos.z > floor {
        player.fall(cfg);
    }
    if player.pos.z <= floor {
        player.land(floor);
    }
}
