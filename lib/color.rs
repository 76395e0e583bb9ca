use std::io::{self, Write};

use crate::interval::Interval;
use crate::DVec3;

/// Linear-light RGB; channels may exceed [0, 1] upstream.
pub type Color = DVec3;

const INTENSITY: Interval = Interval::new(0.000, 0.999);

/// Gamma-2 inverse by square root. Negative samples are treated as black
/// before the root, otherwise they would turn into NaN and sail through the
/// clamp unchanged.
pub fn linear_to_gamma(linear_component: f64) -> f64 {
    if linear_component > 0.0 {
        return linear_component.sqrt();
    }
    return 0.0;
}

/// Quantizes one sample to an 8-bit triplet and writes it as a
/// whitespace-separated line, e.g. `255 127 0`.
pub fn write_color(out: &mut impl Write, pixel_color: Color) -> io::Result<()> {
    let r = linear_to_gamma(pixel_color.x);
    let g = linear_to_gamma(pixel_color.y);
    let b = linear_to_gamma(pixel_color.z);

    let r_byte = (256.0 * INTENSITY.clamp(r)) as i32;
    let g_byte = (256.0 * INTENSITY.clamp(g)) as i32;
    let b_byte = (256.0 * INTENSITY.clamp(b)) as i32;

    return writeln!(out, "{} {} {}", r_byte, g_byte, b_byte);
}
