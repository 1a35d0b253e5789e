use glam::Vec2;

use super::escape_time::EscapeTime;
use crate::core::viewport::Viewport;
use crate::geometry::{GeometryBuffer, Topology};
use crate::traits::Generator;

/// Filled Julia set of `z^2 + c` over real [-1.75, 1.75], imaginary [-1.5, 1.5]
#[derive(Debug, Clone, Copy)]
pub struct Julia {
    viewport: Viewport,
    c: Vec2,
}

impl Julia {
    pub const REAL_MIN: f32 = -1.75;
    pub const DEFAULT_C: Vec2 = Vec2::new(-0.8, 0.156);

    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            c: Self::DEFAULT_C,
        }
    }
}

impl Default for Julia {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl EscapeTime for Julia {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn real_min(&self) -> f32 {
        Self::REAL_MIN
    }

    fn orbit(&self, sample: Vec2) -> (Vec2, Vec2) {
        (sample, self.c)
    }

    fn project(&self, sample: Vec2) -> Vec2 {
        Vec2::new(sample.x / 1.75, sample.y / 1.5)
    }
}

impl Generator for Julia {
    fn generate(&mut self, level: u32) -> GeometryBuffer {
        self.rasterize(level)
    }

    fn topology(&self) -> Topology {
        Topology::Points
    }

    fn name(&self) -> &str {
        "Julia Set"
    }
}
