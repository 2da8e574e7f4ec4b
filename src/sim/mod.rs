mod angle;
mod collision;
mod config;
mod gravity;
mod player;
mod systems;
mod tic;
mod ticcmd;
mod trace;

pub use angle::{ANGLE_MAX, ANGLE_MIN, ANGLE_STEPS, BinAngle};
pub use collision::hits_wall;
pub use config::PhysicsConfig;
pub use gravity::{adjust_player_to_floor, apply_gravity};
pub use player::{Player, PlayerFlags};
pub use systems::{MoveOutcome, place_player, player_tic};
pub use tic::{SIM_FPS, TicRunner};
pub use ticcmd::{HEADER_LEN, MAX_CHAT, TicCmd, TicCmdError};
pub use trace::{get_plane_for_player, get_player_to_new_position, trace_on_polygons};
