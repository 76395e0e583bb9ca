use glam::DVec2;
use rand::{thread_rng, Rng};
use rand_distr::{Distribution, UnitDisc};

pub const INFINITY: f64 = f64::INFINITY;
pub const PI: f64 = std::f64::consts::PI;

pub fn degrees_to_radians(degrees: f64) -> f64 {
    return degrees * PI / 180.0;
}

/// Uniform in [0, 1).
pub fn random_double() -> f64 {
    return thread_rng().gen();
}

/// Uniform in [min, max).
pub fn random_double_range(min: f64, max: f64) -> f64 {
    return min + (max - min) * random_double();
}

pub fn rand_in_unit_disc() -> DVec2 {
    return DVec2::from(UnitDisc.sample(&mut thread_rng()));
}
