use glam::{Vec2, Vec3};

use super::common::preallocation;
use crate::geometry::{GeometryBuffer, Topology};
use crate::traits::Generator;

const START_SIZE: f32 = 0.9;
const SQUARE_COLOR: Vec3 = Vec3::new(1.0, 0.5, 0.0);
const DIAMOND_COLOR: Vec3 = Vec3::new(0.0, 0.5, 1.0);
const FADE: f32 = 0.8;

/// Vertices emitted per level: 8 segments of 2 endpoints
pub const VERTICES_PER_LEVEL: usize = 16;

/// Nested squares, each enclosing a diamond, halving in size per level
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedSquares;

impl Generator for NestedSquares {
    fn generate(&mut self, level: u32) -> GeometryBuffer {
        let mut buffer = GeometryBuffer::with_capacity(preallocation(
            (level as usize).saturating_mul(VERTICES_PER_LEVEL),
        ));

        let mut size = START_SIZE;
        let mut square_color = SQUARE_COLOR;
        let mut diamond_color = DIAMOND_COLOR;

        for _ in 0..level {
            let square = [
                Vec2::new(-size, -size),
                Vec2::new(-size, size),
                Vec2::new(size, size),
                Vec2::new(size, -size),
            ];
            let diamond = [
                Vec2::new(0.0, -size),
                Vec2::new(-size, 0.0),
                Vec2::new(0.0, size),
                Vec2::new(size, 0.0),
            ];

            push_loop(&mut buffer, &square, square_color);
            push_loop(&mut buffer, &diamond, diamond_color);

            size /= 2.0;
            square_color *= FADE;
            diamond_color *= FADE;
        }

        buffer
    }

    fn topology(&self) -> Topology {
        Topology::Lines
    }

    fn name(&self) -> &str {
        "Squares & Diamonds"
    }
}

/// Close a quad outline as four independent segments
fn push_loop(buffer: &mut GeometryBuffer, corners: &[Vec2; 4], color: Vec3) {
    for i in 0..corners.len() {
        buffer.push_segment(corners[i], corners[(i + 1) % corners.len()], color);
    }
}
