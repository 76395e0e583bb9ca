use std::sync::Arc;

use crate::interval::Interval;
use crate::ray::Ray;
use crate::surface::{Surface, SurfaceIntersection};

pub struct World {
    pub objects: Vec<Arc<dyn Surface>>,
}

impl World {
    pub fn new() -> World {
        return World { objects: Vec::new() };
    }

    pub fn from_object(object: Arc<dyn Surface>) -> World {
        let mut world = World::new();
        world.add(object);
        return world;
    }

    pub fn add(&mut self, object: Arc<dyn Surface>) {
        self.objects.push(object);
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl Default for World {
    fn default() -> World {
        return World::new();
    }
}

impl Surface for World {
    fn raycast(&self, r: &Ray, ray_t: Interval) -> Option<SurfaceIntersection> {
        let mut result = None;
        let mut closest_so_far = ray_t.max;

        // every member is tested against a window capped at the closest hit
        // found so far, so a later member can only win by being strictly closer
        for object in &self.objects {
            if let Some(intersection) = object.raycast(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = intersection.t;
                result = Some(intersection);
            }
        }

        return result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Sphere;
    use crate::{Point3, Vec3};

    fn two_spheres_near_first() -> (Arc<Sphere>, Arc<Sphere>) {
        let near = Arc::new(Sphere::new(Point3::new(0.0, 0.0, 2.0), 1.0));
        let far = Arc::new(Sphere::new(Point3::new(0.0, 0.0, 10.0), 1.0));
        return (near, far);
    }

    fn probe() -> Ray {
        return Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn empty_world_never_hits() {
        let world = World::new();

        assert!(world.raycast(&probe(), Interval::new(0.001, f64::INFINITY)).is_none());
        assert!(world.raycast(&probe(), Interval::UNIVERSE).is_none());
    }

    #[test]
    fn nearest_member_wins() {
        let (near, far) = two_spheres_near_first();

        let mut world = World::new();
        world.add(near);
        world.add(far);

        let hit = world.raycast(&probe(), Interval::new(0.001, f64::INFINITY)).unwrap();
        assert_eq!(hit.t, 1.0);
    }

    #[test]
    fn insertion_order_does_not_change_the_result() {
        let (near, far) = two_spheres_near_first();

        let mut world = World::new();
        world.add(far);
        world.add(near);

        let hit = world.raycast(&probe(), Interval::new(0.001, f64::INFINITY)).unwrap();
        assert_eq!(hit.t, 1.0);
    }

    #[test]
    fn narrowing_window_skips_members_past_the_best_hit() {
        let (near, far) = two_spheres_near_first();

        // duplicate members are allowed; the duplicate cannot displace the
        // original because the window has already tightened to its t
        let mut world = World::new();
        world.add(near.clone());
        world.add(near);
        world.add(far);

        let hit = world.raycast(&probe(), Interval::new(0.001, f64::INFINITY)).unwrap();
        assert_eq!(hit.t, 1.0);
    }

    #[test]
    fn raycast_is_idempotent() {
        let (near, far) = two_spheres_near_first();

        let mut world = World::new();
        world.add(near);
        world.add(far);

        let first = world.raycast(&probe(), Interval::new(0.001, f64::INFINITY)).unwrap();
        let second = world.raycast(&probe(), Interval::new(0.001, f64::INFINITY)).unwrap();

        assert_eq!(first.t, second.t);
        assert_eq!(first.p, second.p);
        assert_eq!(first.normal, second.normal);
        assert_eq!(first.facing, second.facing);
    }

    #[test]
    fn members_survive_clear_elsewhere() {
        let shared = Arc::new(Sphere::new(Point3::new(0.0, 0.0, 2.0), 1.0));

        let mut a = World::from_object(shared.clone());
        let b = World::from_object(shared);

        a.clear();

        assert!(a.raycast(&probe(), Interval::new(0.001, f64::INFINITY)).is_none());
        let hit = b.raycast(&probe(), Interval::new(0.001, f64::INFINITY)).unwrap();
        assert_eq!(hit.t, 1.0);
    }

    #[test]
    fn miss_every_member() {
        let (near, far) = two_spheres_near_first();

        let mut world = World::new();
        world.add(near);
        world.add(far);

        let away = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(world.raycast(&away, Interval::new(0.001, f64::INFINITY)).is_none());
    }
}
