//! Movement and collision core for a shooter whose world is a graph of
//! convex floor, ceiling and wall polygons.
//!
//! * [`world`] – the static plane graph and the geometry it is built on.
//! * [`sim`]   – players, tic commands and the per-tic physics.

pub mod sim;
pub mod world;
