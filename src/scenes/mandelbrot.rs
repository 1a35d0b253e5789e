use glam::Vec2;

use super::escape_time::EscapeTime;
use crate::core::viewport::Viewport;
use crate::geometry::{GeometryBuffer, Topology};
use crate::traits::Generator;

/// Mandelbrot set over real [-2.5, 1.0], imaginary [-1.5, 1.5]
#[derive(Debug, Clone, Copy)]
pub struct Mandelbrot {
    viewport: Viewport,
}

impl Mandelbrot {
    pub const REAL_MIN: f32 = -2.5;

    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl EscapeTime for Mandelbrot {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn real_min(&self) -> f32 {
        Self::REAL_MIN
    }

    fn orbit(&self, sample: Vec2) -> (Vec2, Vec2) {
        (Vec2::ZERO, sample)
    }

    fn project(&self, sample: Vec2) -> Vec2 {
        // recentre the window on x = -0.75 and stretch it to [-1, 1)
        Vec2::new((sample.x + 0.75) / 1.75, sample.y / 1.5)
    }
}

impl Generator for Mandelbrot {
    fn generate(&mut self, level: u32) -> GeometryBuffer {
        self.rasterize(level)
    }

    fn topology(&self) -> Topology {
        Topology::Points
    }

    fn name(&self) -> &str {
        "Mandelbrot Set"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_corners() {
        let m = Mandelbrot::new(Viewport::new(7, 6));
        assert_eq!(m.sample(0, 0), Vec2::new(-2.5, -1.5));
        let last = m.sample(5, 6);
        assert!((last.x - 0.5).abs() < 1e-6);
        assert!((last.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_projection_fills_clip_space() {
        let m = Mandelbrot::default();
        assert_eq!(m.project(Vec2::new(-2.5, -1.5)), Vec2::new(-1.0, -1.0));
        assert_eq!(m.project(Vec2::new(-0.75, 0.0)), Vec2::ZERO);
    }
}
