use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use rand::Rng;

use raytracer::camera::Camera;
use raytracer::color::{write_color, Color};
use raytracer::interval::Interval;
use raytracer::ray::Ray;
use raytracer::sphere::Sphere;
use raytracer::surface::Surface;
use raytracer::util::{random_double_range, INFINITY};
use raytracer::world::World;
use raytracer::{Point3, Vec3};

fn background(ray: &Ray) -> Color {
    const COLOR_T: Color = Color::new(0.5, 0.7, 1.0);
    const COLOR_B: Color = Color::new(1.0, 1.0, 1.0);

    let ray_dir_normalized = ray.direction.normalize();

    let t = 0.5 * (ray_dir_normalized.y + 1.0);

    return COLOR_B.lerp(COLOR_T, t);
}

fn raycast(world: &World, ray: &Ray) -> Color {
    // 0.001 lower bound keeps the cast from re-hitting its own origin
    return if let Some(intersection) = world.raycast(ray, Interval::new(0.001, INFINITY)) {
        0.5 * (intersection.normal + Vec3::ONE)
    } else {
        background(ray)
    };
}

fn create_world() -> World {
    let mut world = World::new();

    world.add(Arc::new(Sphere::new(Point3::new(0.0, -1000.0, 0.0), 1000.0)));

    for a in -4..4 {
        for b in -4..4 {
            let center = Point3::new(
                (a as f64) + random_double_range(0.0, 0.9),
                0.2,
                (b as f64) + random_double_range(0.0, 0.9),
            );

            world.add(Arc::new(Sphere::new(center, 0.2)));
        }
    }

    world.add(Arc::new(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0)));
    world.add(Arc::new(Sphere::new(Point3::new(-4.0, 1.0, 0.0), 1.0)));
    world.add(Arc::new(Sphere::new(Point3::new(4.0, 1.0, 0.0), 1.0)));

    return world;
}

fn main() {
    const ASPECT_RATIO: f64 = 3.0 / 2.0;
    const IMAGE_W: u64 = 400;
    const IMAGE_H: u64 = (IMAGE_W as f64 / ASPECT_RATIO) as u64;

    const SAMPLES_PER_PIXEL: u64 = 20;

    let world = create_world();

    let camera_origin = Point3::new(13.0, 2.0, 3.0);
    let camera_target = Point3::new(0.0, 0.0, 0.0);
    let camera_vertical_fov = 20.0;
    let camera_focal_length = 10.0;
    let camera_aperture = 0.1;

    let camera = Camera::new(
        camera_origin,
        camera_target,
        Vec3::Y,
        camera_vertical_fov,
        ASPECT_RATIO,
        camera_aperture,
        camera_focal_length,
    );

    let path = Path::new("image.ppm");
    let mut w = BufWriter::new(File::create(&path).unwrap());

    writeln!(&mut w, "P3").unwrap();
    writeln!(&mut w, "{} {}", IMAGE_W, IMAGE_H).unwrap();
    writeln!(&mut w, "255").unwrap();

    for y in (0..IMAGE_H).rev() {
        println!("Scanline {}", y);
        for x in 0..IMAGE_W {
            let mut c = Color::new(0.0, 0.0, 0.0);

            // random multisampling
            for _ in 0..SAMPLES_PER_PIXEL {
                let mut rng = rand::thread_rng();
                let rand_u: f64 = rng.gen();
                let rand_v: f64 = rng.gen();

                let u = (x as f64 + rand_u) / (IMAGE_W - 1) as f64;
                let v = (y as f64 + rand_v) / (IMAGE_H - 1) as f64;
                let ray = camera.create_ray(u, v);

                c += raycast(&world, &ray);
            }

            write_color(&mut w, c / SAMPLES_PER_PIXEL as f64).unwrap();
        }
    }
}
