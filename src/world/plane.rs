use glam::{Vec2, Vec3};
use smallvec::SmallVec;

use super::geometry::{
    Aabb3, compute_average, compute_normal, edges_2d, point_height_on_poly, point_in_poly,
    segments_intersect,
};
use super::wall::{Wall, compute_wall_info};

pub type PlaneId = u32;

/// `normal.z` between `-WALL_ANGLE` and `WALL_ANGLE` means "wall-like".
const WALL_ANGLE: f32 = 0.4;

/// One convex polygon cell: floor, ceiling or wall.
#[derive(Clone, Debug)]
pub struct Plane {
    pub vertices: Vec<Vec3>,
    pub normal: Vec3,
    pub centroid: Vec3,
    pub bbox: Aabb3,
    pub impassable: bool,
    /// Set by `Level::detect_walls` for vertical planes.
    pub wall: Option<Wall>,
    /// Adjacent planes, by handle into the owning `Level`.
    pub neighbors: SmallVec<[PlaneId; 4]>,
}

impl Plane {
    /// Build a plane and derive normal, centroid and bounding box.
    pub fn new(vertices: Vec<Vec3>) -> Self {
        Self {
            normal: compute_normal(&vertices),
            centroid: compute_average(&vertices),
            bbox: Aabb3::from_points(&vertices),
            vertices,
            impassable: false,
            wall: None,
            neighbors: SmallVec::new(),
        }
    }

    pub fn impassable(mut self, yes: bool) -> Self {
        self.impassable = yes;
        self
    }

    /// Run the wall detector on this plane's vertices.
    pub fn compute_wall(&mut self) {
        self.wall = compute_wall_info(&self.vertices);
    }

    #[inline]
    pub fn contains_2d(&self, p: Vec2) -> bool {
        self.bbox.contains_2d(p, 0.0) && point_in_poly(p, &self.vertices)
    }

    #[inline]
    pub fn height_at(&self, p: Vec2) -> Option<f32> {
        point_height_on_poly(p, &self.vertices)
    }

    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        edges_2d(&self.vertices)
    }

    /// Does `origin → target` cross any boundary edge?
    pub fn is_crossed_by(&self, origin: Vec2, target: Vec2) -> bool {
        self.edges()
            .any(|(a, b)| segments_intersect(origin, target, a, b))
    }

    #[inline]
    pub fn is_wall_like(&self) -> bool {
        self.normal.z < WALL_ANGLE && self.normal.z > -WALL_ANGLE
    }

    #[inline]
    pub fn is_floor_like(&self) -> bool {
        !self.is_wall_like()
    }

    /// Only impassable walls refuse to be walked through; they cannot be
    /// stepped over either, however low.
    #[inline]
    pub fn can_walk(&self) -> bool {
        !(self.impassable && self.is_wall_like())
    }

    #[inline]
    pub fn min_z(&self) -> f32 {
        self.bbox.min.z
    }

    #[inline]
    pub fn max_z(&self) -> f32 {
        self.bbox.max.z
    }
}
