use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::types::Vertex;

/// How a flat vertex sequence is grouped into drawable primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Every two vertices form an independent segment
    Lines,
    /// Consecutive vertices are joined into one polyline
    LineStrip,
    /// Every three vertices form a triangle
    Triangles,
    /// Every vertex is drawn as a single pixel
    Points,
}

impl Topology {
    /// Number of vertices consumed by one primitive (a strip shares vertices, so 1)
    pub fn vertices_per_primitive(&self) -> usize {
        match self {
            Topology::Lines => 2,
            Topology::LineStrip => 1,
            Topology::Triangles => 3,
            Topology::Points => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topology::Lines => "lines",
            Topology::LineStrip => "line strip",
            Topology::Triangles => "triangles",
            Topology::Points => "points",
        }
    }
}

/// Positions and colours of one generated frame.
///
/// The two sequences are parallel: index `i` of each refers to the same
/// vertex. Both are only ever extended together, so their lengths always match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryBuffer {
    points: Vec<Vec2>,
    colors: Vec<Vec3>,
}

impl GeometryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
        }
    }

    /// Append one coloured vertex
    pub fn push(&mut self, point: Vec2, color: Vec3) {
        self.points.push(point);
        self.colors.push(color);
    }

    /// Append a segment whose endpoints share one colour
    pub fn push_segment(&mut self, from: Vec2, to: Vec2, color: Vec3) {
        self.push(from, color);
        self.push(to, color);
    }

    /// Append a flat-coloured triangle
    pub fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Vec3) {
        self.push(a, color);
        self.push(b, color);
        self.push(c, color);
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.colors.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Iterate over `(position, colour)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Vec2, Vec3)> + '_ {
        self.points.iter().copied().zip(self.colors.iter().copied())
    }

    /// Interleave into GPU vertices
    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.iter()
            .map(|(position, color)| Vertex::new(position, color))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = GeometryBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.points().len(), buffer.colors().len());
    }

    #[test]
    fn test_push_keeps_sequences_parallel() {
        let mut buffer = GeometryBuffer::with_capacity(4);
        buffer.push(Vec2::new(0.1, 0.2), Vec3::X);
        buffer.push_segment(Vec2::ZERO, Vec2::ONE, Vec3::Y);
        buffer.push_triangle(Vec2::X, Vec2::Y, Vec2::NEG_X, Vec3::Z);

        assert_eq!(buffer.len(), 6);
        assert_eq!(buffer.points().len(), buffer.colors().len());
        assert_eq!(buffer.points()[0], Vec2::new(0.1, 0.2));
        assert_eq!(buffer.colors()[2], Vec3::Y);
        assert_eq!(buffer.colors()[5], Vec3::Z);
    }

    #[test]
    fn test_clear_empties_both_sequences() {
        let mut buffer = GeometryBuffer::new();
        buffer.push_segment(Vec2::ZERO, Vec2::ONE, Vec3::ONE);
        buffer.clear();

        assert!(buffer.is_empty());
        assert!(buffer.colors().is_empty());
    }

    #[test]
    fn test_to_vertices_interleaves() {
        let mut buffer = GeometryBuffer::new();
        buffer.push(Vec2::new(-0.5, 0.25), Vec3::new(0.1, 0.2, 0.3));

        let vertices = buffer.to_vertices();
        assert_eq!(vertices.len(), 1);
        assert_eq!(vertices[0].position, [-0.5, 0.25]);
        assert_eq!(vertices[0].color, [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_topology_vertices_per_primitive() {
        assert_eq!(Topology::Lines.vertices_per_primitive(), 2);
        assert_eq!(Topology::LineStrip.vertices_per_primitive(), 1);
        assert_eq!(Topology::Triangles.vertices_per_primitive(), 3);
        assert_eq!(Topology::Points.vertices_per_primitive(), 1);
    }

    #[test]
    fn test_topology_serializes_snake_case() {
        let json = serde_json::to_string(&Topology::LineStrip).unwrap();
        assert_eq!(json, "\"line_strip\"");
    }
}
