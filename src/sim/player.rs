use bitflags::bitflags;
use glam::{Vec3, vec3};

use super::angle::{self, BinAngle};
use super::config::PhysicsConfig;
use super::ticcmd::TicCmd;
use crate::world::PlaneId;

bitflags! {
    /// Vertical movement state.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PlayerFlags: u8 {
        /// Left the ground by jumping.
        const JUMP = 0x01;
        /// Airborne for any reason; blocks a new jump until landing.
        const FLY  = 0x02;
    }
}

/// One player's movement state.  The level is never touched from here.
#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Vec3,
    pub angle: BinAngle,
    /// Pitch in radians, `-π/2 ..= π/2`.
    pub vertical_aim: f32,
    pub momentum: Vec3,
    /// Tics since the player last stood on something.
    pub air_time: u32,
    pub flags: PlayerFlags,
    /// Plane under the player; `None` means the void.
    pub plane: Option<PlaneId>,
    pub max_step: f32,
    pub radius: f32,
    pub height: f32,
    pub view_z: f32,
    pub should_fire: bool,
}

impl Player {
    pub fn new(cfg: &PhysicsConfig, pos: Vec3, plane: Option<PlaneId>) -> Self {
        Self {
            pos,
            angle: BinAngle::EAST,
            vertical_aim: 0.0,
            momentum: Vec3::ZERO,
            air_time: 0,
            flags: PlayerFlags::empty(),
            plane,
            max_step: cfg.max_step,
            radius: cfg.player_radius,
            height: cfg.player_height,
            view_z: cfg.view_z,
            should_fire: false,
        }
    }

    /// Clear aim, momentum and any fall in progress.
    pub fn reset(&mut self) {
        self.vertical_aim = 0.0;
        self.momentum = Vec3::ZERO;
        self.air_time = 0;
    }

    /*------------------------- movement ------------------------------*/

    pub fn forward_move(&mut self, thrust: i32, divisor: f32) {
        let (s, c) = self.angle.to_radians().sin_cos();
        let d = thrust as f32 / divisor;
        self.pos.x += d * c;
        self.pos.y += d * s;
    }

    /// Strafe; positive thrust goes to the right of the heading.
    pub fn lateral_move(&mut self, thrust: i32, divisor: f32) {
        let (s, c) = (self.angle.to_radians() - std::f32::consts::FRAC_PI_2).sin_cos();
        let d = thrust as f32 / divisor;
        self.pos.x += d * c;
        self.pos.y += d * s;
    }

    #[inline]
    pub fn angle_turn(&mut self, delta: i16) {
        self.angle.wrapping_turn(delta);
    }

    pub fn angle_look(&mut self, delta: i16) {
        self.vertical_aim = angle::clamp_pitch(self.vertical_aim + angle::steps_to_radians(delta));
    }

    /// Pitch delta that brings the view back to level.
    pub fn amount_to_center_look(&self) -> i16 {
        -angle::radians_to_steps(self.vertical_aim)
    }

    /// Apply one tic of input and clear it.
    pub fn execute_tic_cmd(&mut self, cmd: &mut TicCmd, cfg: &PhysicsConfig) {
        self.forward_move(cmd.forward as i32, cfg.move_divisor);
        self.lateral_move(cmd.lateral as i32, cfg.move_divisor);
        self.angle_turn(cmd.rotation);
        self.angle_look(cmd.vertical);
        if cmd.fire {
            self.should_fire = true;
        }
        cmd.reset();
    }

    /*------------------------- renderer view -------------------------*/

    /// Unit vector the player looks along.
    pub fn aim(&self) -> Vec3 {
        let yaw = self.angle.to_radians();
        let (ps, pc) = self.vertical_aim.sin_cos();
        vec3(yaw.cos() * pc, yaw.sin() * pc, ps)
    }

    /// Eye position.
    #[inline]
    pub fn cam(&self) -> Vec3 {
        self.pos + Vec3::Z * self.view_z
    }

    /// Standing on something and free to jump.
    #[inline]
    pub fn can_jump(&self) -> bool {
        !self.flags.intersects(PlayerFlags::JUMP | PlayerFlags::FLY)
    }

    #[inline]
    pub fn in_void(&self) -> bool {
        self.plane.is_none()
    }

    /// Put the player on the ground: no fall, no jump.
    pub(crate) fn land(&mut self, z: f32) {
        self.pos.z = z;
        self.air_time = 0;
        self.flags.remove(PlayerFlags::JUMP | PlayerFlags::FLY);
    }

    /// One tic of accelerating fall.
    pub(crate) fn fall(&mut self, cfg: &PhysicsConfig) {
        self.air_time += 1;
        self.pos.z -= cfg.fall_step(self.air_time);
        self.flags.insert(PlayerFlags::FLY);
    }
}
