use glam::{Vec2, Vec3};
use log::warn;
use thiserror::Error;

use super::plane::{Plane, PlaneId};

/// The plane graph of one map.  Planes are addressed by index; the graph is
/// read-only once the level has been built.
#[derive(Debug, Default)]
pub struct Level {
    pub name: String,
    planes: Vec<Plane>,
}

/// Defects a level can carry after loading.
#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("plane {0} has only {1} vertices")]
    Degenerate(PlaneId, usize),

    #[error("plane {from} links to missing plane {to}")]
    DanglingNeighbor { from: PlaneId, to: PlaneId },

    #[error("plane {0} lists itself as a neighbor")]
    SelfNeighbor(PlaneId),

    #[error("plane {from} lists {to} but {to} does not list {from}")]
    AsymmetricNeighbor { from: PlaneId, to: PlaneId },
}

impl Level {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            planes: Vec::new(),
        }
    }

    /*--------------------------- building ----------------------------*/

    pub fn add_plane(&mut self, plane: Plane) -> PlaneId {
        self.planes.push(plane);
        (self.planes.len() - 1) as PlaneId
    }

    /// Link two planes both ways.  Repeated links are ignored.
    ///
    /// # Panics
    /// If either handle does not name a plane of this level.
    pub fn link(&mut self, a: PlaneId, b: PlaneId) {
        if a == b {
            return;
        }
        for (from, to) in [(a, b), (b, a)] {
            let ns = &mut self.planes[from as usize].neighbors;
            if !ns.contains(&to) {
                ns.push(to);
            }
        }
    }

    /// Link every pair of planes that share at least two vertices.
    pub fn link_shared_edges(&mut self) {
        let n = self.planes.len();
        for a in 0..n {
            for b in a + 1..n {
                let shared = self.planes[a]
                    .vertices
                    .iter()
                    .filter(|v| self.planes[b].vertices.contains(v))
                    .count();
                if shared >= 2 {
                    self.link(a as PlaneId, b as PlaneId);
                }
            }
        }
    }

    /// Compute wall data for every plane that turns out to be vertical.
    pub fn detect_walls(&mut self) {
        for plane in &mut self.planes {
            plane.compute_wall();
        }
    }

    /*--------------------------- queries -----------------------------*/

    /// # Panics
    /// If `id` does not name a plane of this level; use [`Level::get`] for
    /// handles of unknown origin.
    #[inline]
    pub fn plane(&self, id: PlaneId) -> &Plane {
        &self.planes[id as usize]
    }

    #[inline]
    pub fn get(&self, id: PlaneId) -> Option<&Plane> {
        self.planes.get(id as usize)
    }

    #[inline]
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Every plane whose footprint contains `p`.
    pub fn planes_under(&self, p: Vec2) -> impl Iterator<Item = PlaneId> + '_ {
        self.planes
            .iter()
            .enumerate()
            .filter(move |(_, pl)| pl.contains_2d(p))
            .map(|(i, _)| i as PlaneId)
    }

    /// Every plane carrying wall data.
    pub fn walls(&self) -> impl Iterator<Item = &super::Wall> {
        self.planes.iter().filter_map(|p| p.wall.as_ref())
    }

    /// Height of plane `id` under `p`, if it has one.
    #[inline]
    pub fn height_at(&self, id: PlaneId, p: Vec3) -> Option<f32> {
        self.plane(id).height_at(p.truncate())
    }

    /*-------------------------- validation ---------------------------*/

    /// Report every structural defect of the graph.  The physics code never
    /// checks any of this at tic time – a broken graph just yields "no plane".
    pub fn validate(&self) -> Vec<LevelError> {
        let mut errors = Vec::new();

        for (i, plane) in self.planes.iter().enumerate() {
            let id = i as PlaneId;
            if plane.vertices.len() < 3 {
                errors.push(LevelError::Degenerate(id, plane.vertices.len()));
            }
            for &n in &plane.neighbors {
                let err = match self.get(n) {
                    None => LevelError::DanglingNeighbor { from: id, to: n },
                    Some(_) if n == id => LevelError::SelfNeighbor(id),
                    Some(other) if !other.neighbors.contains(&id) => {
                        LevelError::AsymmetricNeighbor { from: id, to: n }
                    }
                    Some(_) => continue,
                };
                errors.push(err);
            }
        }

        for e in &errors {
            warn!("level {}: {e}", self.name);
        }
        errors
    }

    /// Like [`Level::validate`] but stops at the first defect.
    pub fn check(&self) -> Result<(), LevelError> {
        match self.validate().into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Raw neighbor access for loaders that resolve links themselves.
    /// Nothing is checked here; run [`Level::validate`] afterwards.
    ///
    /// # Panics
    /// If `id` does not name a plane of this level.
    pub fn neighbors_mut(&mut self, id: PlaneId) -> &mut smallvec::SmallVec<[PlaneId; 4]> {
        &mut self.planes[id as usize].neighbors
    }
}
