pub mod geometry;
mod level;
mod plane;
mod wall;

pub use geometry::Aabb3;
pub use level::{Level, LevelError};
pub use plane::{Plane, PlaneId};
pub use wall::{Wall, compute_wall_info};
