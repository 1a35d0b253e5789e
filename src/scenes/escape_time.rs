//! Shared raster scan for the escape-time scenes.
//!
//! Each viewport pixel becomes one point. The plane window is 3.5 units wide
//! and 3.0 units tall; only its left edge differs between fractals.

use glam::{Vec2, Vec3};

use crate::core::viewport::Viewport;
use crate::geometry::GeometryBuffer;
use crate::math::escape_to_hue;

pub const REAL_SPAN: f32 = 3.5;
pub const IMAG_SPAN: f32 = 3.0;
pub const IMAG_MIN: f32 = -1.5;
/// Squared radius past which an orbit has escaped
pub const BAILOUT: f32 = 4.0;

/// Iterate `z <- z^2 + c` for at most `max_iterations` steps.
///
/// Returns the iterations *remaining* when the loop stopped. Zero means the
/// orbit never escaped: it either used up its budget or landed exactly on a
/// fixed point, which is detected with bitwise float equality.
pub fn iterate(z: Vec2, c: Vec2, max_iterations: u32) -> u32 {
    let (mut x, mut y) = (z.x, z.y);
    let mut remaining = max_iterations;

    while x * x + y * y < BAILOUT && remaining > 0 {
        let xtemp = x * x - y * y + c.x;
        let ytemp = 2.0 * x * y + c.y;
        if x == xtemp && y == ytemp {
            return 0;
        }
        x = xtemp;
        y = ytemp;
        remaining -= 1;
    }

    remaining
}

/// Colour for a sample given its remaining iteration budget and output position
pub fn escape_color(remaining: u32, position: Vec2) -> Vec3 {
    if remaining == 0 {
        Vec3::ZERO
    } else {
        escape_to_hue(remaining, 360.0 * position.x + 365.0, position.y)
    }
}

/// An escape-time fractal sampled over a pixel raster
pub trait EscapeTime {
    fn viewport(&self) -> Viewport;

    /// Left edge of the sampled plane window
    fn real_min(&self) -> f32;

    /// Initial orbit value `z0` and map parameter `c` for a plane sample
    fn orbit(&self, sample: Vec2) -> (Vec2, Vec2);

    /// Map a plane sample to its output position in clip space
    fn project(&self, sample: Vec2) -> Vec2;

    /// Plane coordinates of pixel (`row`, `col`)
    fn sample(&self, row: u32, col: u32) -> Vec2 {
        let viewport = self.viewport();
        Vec2::new(
            (REAL_SPAN / viewport.width as f32) * col as f32 + self.real_min(),
            (IMAG_SPAN / viewport.height as f32) * row as f32 + IMAG_MIN,
        )
    }

    /// Iterations the orbit of pixel (`row`, `col`) ran before stopping
    fn escape_count(&self, row: u32, col: u32, level: u32) -> u32 {
        let (z, c) = self.orbit(self.sample(row, col));
        level - iterate(z, c, level)
    }

    /// One coloured point per pixel, rows outermost
    fn rasterize(&self, level: u32) -> GeometryBuffer {
        let viewport = self.viewport();
        let mut buffer = GeometryBuffer::with_capacity(viewport.pixel_count());

        for row in 0..viewport.height {
            for col in 0..viewport.width {
                let sample = self.sample(row, col);
                let (z, c) = self.orbit(sample);
                let remaining = iterate(z, c, level);
                let position = self.project(sample);
                buffer.push(position, escape_color(remaining, position));
            }
        }

        buffer
    }
}
