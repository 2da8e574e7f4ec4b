//! Tunable physics values.
//!
//! Defaults are the stock game values; tools may override any subset from a
//! JSON file since every field falls back to its default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fall quantum.  A tic airborne for `n` tics drops `gravity * 0.1 * n`;
    /// a player within one quantum above a floor lands on it.
    pub gravity: f32,

    /// Tallest rise climbed in a single tic.
    pub max_step: f32,

    /// Walls starting this far above the feet are overhead and never collide.
    pub head_clearance: f32,

    /// Tic-command thrust is divided by this to get map units.
    pub move_divisor: f32,

    pub player_radius: f32,
    pub player_height: f32,

    /// Eye height above the feet.
    pub view_z: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.2,
            max_step: 0.5,
            head_clearance: 3.0,
            move_divisor: 64.0,
            player_radius: 0.25,
            player_height: 1.0,
            view_z: 0.75,
        }
    }
}

impl PhysicsConfig {
    /// Gravity drop for a player that has been airborne `air_time` tics.
    #[inline]
    pub fn fall_step(&self, air_time: u32) -> f32 {
        self.gravity * 0.1 * air_time as f32
    }
}
