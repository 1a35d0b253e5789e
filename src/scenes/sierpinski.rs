use glam::{Vec2, Vec3};

use super::common::{clamp_depth, midpoint};
use crate::geometry::{GeometryBuffer, Topology};
use crate::traits::Generator;

/// Deepest subdivision ever performed; larger levels render as this depth
pub const MAX_DEPTH: u32 = 10;

const CORNERS: [Vec2; 3] = [
    Vec2::new(-1.0, -0.933),
    Vec2::new(0.0, 0.933),
    Vec2::new(1.0, -0.933),
];
const BASE_COLOR: Vec3 = Vec3::new(0.5, 0.5, 0.5);

/// Per-corner colour tint; each branch boosts one channel and damps the others
const TINTS: [Vec3; 3] = [
    Vec3::new(1.2, 0.8, 0.8),
    Vec3::new(0.8, 1.2, 0.8),
    Vec3::new(0.8, 0.8, 1.2),
];

#[derive(Debug, Clone, Copy)]
struct Pending {
    corners: [Vec2; 3],
    color: Vec3,
    depth: u32,
}

/// Sierpinski triangle built by repeated corner subdivision
#[derive(Debug, Clone, Copy, Default)]
pub struct Sierpinski;

impl Sierpinski {
    /// Triangles emitted at `level` after clamping
    pub fn triangle_count(level: u32) -> usize {
        3usize.pow(clamp_depth(level, MAX_DEPTH))
    }
}

impl Generator for Sierpinski {
    fn generate(&mut self, level: u32) -> GeometryBuffer {
        let depth = clamp_depth(level, MAX_DEPTH);
        let mut buffer = GeometryBuffer::with_capacity(Self::triangle_count(depth) * 3);

        // LIFO stack; children are pushed in reverse so the first corner is emitted first
        let mut stack = Vec::with_capacity(depth as usize * 2 + 1);
        stack.push(Pending {
            corners: CORNERS,
            color: BASE_COLOR,
            depth,
        });

        while let Some(Pending { corners, color, depth }) = stack.pop() {
            if depth == 0 {
                let [a, b, c] = corners;
                buffer.push_triangle(a, b, c, color);
                continue;
            }

            for k in (0..3).rev() {
                let apex = corners[k];
                let (near, far) = match k {
                    0 => (corners[1], corners[2]),
                    1 => (corners[0], corners[2]),
                    _ => (corners[0], corners[1]),
                };
                stack.push(Pending {
                    corners: [apex, midpoint(apex, near), midpoint(apex, far)],
                    color: color * TINTS[k],
                    depth: depth - 1,
                });
            }
        }

        buffer
    }

    fn topology(&self) -> Topology {
        Topology::Triangles
    }

    fn name(&self) -> &str {
        "Sierpinski Triangle"
    }
}
