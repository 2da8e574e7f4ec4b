use std::f32::consts::{FRAC_PI_2, TAU};

/// Number of distinct headings in one full turn.
pub const ANGLE_STEPS: i32 = 32768;
pub const ANGLE_MIN: i16 = -16384;
pub const ANGLE_MAX: i16 = 16383;

/// Fixed-point heading, `ANGLE_MIN..=ANGLE_MAX` covering one turn.
///
/// All wraparound lives here; callers only ever see a value in range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BinAngle(i16);

impl BinAngle {
    pub const EAST: Self = Self(0);
    pub const NORTH: Self = Self(8192);

    /// Wraps any raw value into range.
    pub fn new(raw: i32) -> Self {
        Self(wrap(raw))
    }

    #[inline]
    pub fn raw(self) -> i16 {
        self.0
    }

    /// Turn by `delta` steps.  A delta of half a turn or more in either
    /// direction is ignored; turning the other way would have been shorter.
    pub fn wrapping_turn(&mut self, delta: i16) {
        if delta < ANGLE_MAX && delta > ANGLE_MIN {
            self.0 = wrap(self.0 as i32 + delta as i32);
        }
    }

    #[inline]
    pub fn to_radians(self) -> f32 {
        steps_to_radians(self.0)
    }
}

/// Radians for `steps` fixed-point units (used for pitch deltas too).
#[inline]
pub fn steps_to_radians(steps: i16) -> f32 {
    steps as f32 * TAU / ANGLE_STEPS as f32
}

/// Inverse of [`steps_to_radians`], truncating toward zero.
#[inline]
pub fn radians_to_steps(rad: f32) -> i16 {
    (rad / TAU * ANGLE_STEPS as f32) as i16
}

fn wrap(raw: i32) -> i16 {
    (raw - ANGLE_MIN as i32).rem_euclid(ANGLE_STEPS) as i16 + ANGLE_MIN
}

/// Clamp a pitch to straight up / straight down.
#[inline]
pub fn clamp_pitch(rad: f32) -> f32 {
    rad.clamp(-FRAC_PI_2, FRAC_PI_2)
}
