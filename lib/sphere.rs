use crate::interval::Interval;
use crate::ray::Ray;
use crate::surface::{Surface, SurfaceIntersection};
use crate::Point3;

pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Sphere {
        return Sphere { center, radius };
    }
}

impl Surface for Sphere {
    fn raycast(&self, r: &Ray, ray_t: Interval) -> Option<SurfaceIntersection> {
        let oc = r.origin - self.center;
        let a = r.direction.length_squared();
        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - (self.radius * self.radius);

        let discriminant = (half_b * half_b) - (a * c);

        if discriminant < 0.0 {
            return None;
        }

        let discriminant_sqrt = discriminant.sqrt();

        // nearest root first, the far one only if the near one falls
        // outside the search window
        let mut root = (-half_b - discriminant_sqrt) / a;

        if !ray_t.surrounds(root) {
            root = (-half_b + discriminant_sqrt) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (r.at(root) - self.center) / self.radius;

        return Some(SurfaceIntersection::new(r, outward_normal, root));
    }
}
