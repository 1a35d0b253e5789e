use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::common::{blend, preallocation};
use crate::geometry::{GeometryBuffer, Topology};
use crate::traits::Generator;

/// Angular step between consecutive vertices
pub const STEP: f32 = 0.01;
const START_COLOR: Vec3 = Vec3::new(0.0, 1.0, 0.5);
const END_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.5);

/// Archimedean spiral `r = a·t` with `level` full turns, scaled to unit radius
#[derive(Debug, Clone, Copy, Default)]
pub struct Spiral;

impl Spiral {
    /// Number of vertices produced for `level` turns
    pub fn vertex_count(level: u32) -> usize {
        let bound = level as f32 * TAU;
        (bound / STEP).floor() as usize
    }
}

impl Generator for Spiral {
    fn generate(&mut self, level: u32) -> GeometryBuffer {
        let count = Self::vertex_count(level);
        let mut buffer = GeometryBuffer::with_capacity(preallocation(count));
        if count == 0 {
            return buffer;
        }

        let bound = level as f32 * TAU;
        let a = 1.0 / bound;

        for i in 0..count {
            let t = i as f32 * STEP;
            let r = a * t;
            buffer.push(
                Vec2::new(r * t.cos(), r * t.sin()),
                blend(START_COLOR, END_COLOR, r),
            );
        }

        buffer
    }

    fn topology(&self) -> Topology {
        Topology::LineStrip
    }

    fn name(&self) -> &str {
        "Spiral"
    }
}
