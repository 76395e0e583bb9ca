use crate::interval::Interval;
use crate::ray::Ray;
use crate::{Point3, Vec3};

pub trait Surface: Send + Sync {
    fn raycast(&self, r: &Ray, ray_t: Interval) -> Option<SurfaceIntersection>;
}

pub struct SurfaceIntersection {
    pub p: Point3,
    pub normal: Vec3,
    pub t: f64,
    pub facing: bool,
}

impl SurfaceIntersection {
    /// Builds a record whose normal always opposes the incoming ray.
    /// `outward_normal` must be unit length.
    pub fn new(r: &Ray, outward_normal: Vec3, t: f64) -> SurfaceIntersection {
        let p = r.at(t);
        let facing = r.direction.dot(outward_normal) < 0.0;
        let normal = if facing { outward_normal } else { -outward_normal };

        return SurfaceIntersection { p, normal, t, facing };
    }
}
