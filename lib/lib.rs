pub mod camera;
pub mod color;
pub mod interval;
pub mod ray;
pub mod sphere;
pub mod surface;
pub mod util;
pub mod world;

pub use glam::DVec3;

pub type Point3 = DVec3;
pub type Vec3 = DVec3;
