use glam::{Vec2, Vec3};

use super::common::{blend, clamp_depth, midpoint};
use crate::geometry::{GeometryBuffer, Topology};
use crate::traits::Generator;

/// Highest level honoured; 2^16 + 1 vertices
pub const MAX_LEVEL: u32 = 17;

const START: Vec2 = Vec2::new(-0.7, 0.2);
const END: Vec2 = Vec2::new(0.5, 0.2);
const START_COLOR: Vec3 = Vec3::new(0.0, 0.6, 0.9);
const END_COLOR: Vec3 = Vec3::new(1.0, 0.4, 0.1);

/// Direction the segment being folded currently runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldMode {
    /// west/east
    Horizontal,
    /// northeast/southwest
    Rising,
    /// north/south
    Vertical,
    /// northwest/southeast
    Falling,
}

impl FoldMode {
    pub fn from_counter(counter: u32) -> Self {
        match counter % 4 {
            0 => FoldMode::Horizontal,
            1 => FoldMode::Rising,
            2 => FoldMode::Vertical,
            _ => FoldMode::Falling,
        }
    }
}

/// Corner inserted between `a` and `b` when folding to the left
pub fn fold_left(a: Vec2, b: Vec2, mode: FoldMode) -> Vec2 {
    let mid = midpoint(a, b);
    let delta = mid - a;
    match mode {
        FoldMode::Horizontal => Vec2::new(mid.x, mid.y + delta.x),
        FoldMode::Rising => Vec2::new(a.x, b.y),
        FoldMode::Vertical => Vec2::new(mid.x - delta.y, mid.y),
        FoldMode::Falling => Vec2::new(b.x, a.y),
    }
}

/// Corner inserted between `a` and `b` when folding to the right
pub fn fold_right(a: Vec2, b: Vec2, mode: FoldMode) -> Vec2 {
    let mid = midpoint(a, b);
    let delta = mid - a;
    match mode {
        FoldMode::Horizontal => Vec2::new(mid.x, mid.y - delta.x),
        FoldMode::Rising => Vec2::new(b.x, a.y),
        FoldMode::Vertical => Vec2::new(mid.x + delta.y, mid.y),
        FoldMode::Falling => Vec2::new(a.x, b.y),
    }
}

/// Heighway dragon built by repeatedly folding every segment of a polyline
#[derive(Debug, Clone, Copy, Default)]
pub struct Dragon;

impl Dragon {
    /// Polyline vertices for `level` after clamping
    pub fn vertex_count(level: u32) -> usize {
        let folds = clamp_depth(level, MAX_LEVEL).saturating_sub(1);
        (1usize << folds) + 1
    }

    /// Fold the initial segment `level - 1` times
    pub fn polyline(level: u32) -> Vec<Vec2> {
        let level = clamp_depth(level, MAX_LEVEL);

        let mut points = vec![START, END];
        let mut mode: u32 = 0;
        let mut right = true;

        for _ in 1..level {
            let mut folded = Vec::with_capacity(points.len() * 2 - 1);
            for pair in points.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let fold_mode = FoldMode::from_counter(mode);
                let corner = if right {
                    fold_right(a, b, fold_mode)
                } else {
                    fold_left(a, b, fold_mode)
                };
                folded.push(a);
                folded.push(corner);

                right = !right;
                // a 90 degree turn
                mode = mode.wrapping_add(2);
            }
            folded.push(points[points.len() - 1]);

            points = folded;
            mode = mode.wrapping_add(1);
        }

        points
    }
}

impl Generator for Dragon {
    fn generate(&mut self, level: u32) -> GeometryBuffer {
        let points = Self::polyline(level);
        let size = points.len() as f32;

        let mut buffer = GeometryBuffer::with_capacity(points.len());
        for (i, point) in points.into_iter().enumerate() {
            buffer.push(point, blend(START_COLOR, END_COLOR, i as f32 / size));
        }

        buffer
    }

    fn topology(&self) -> Topology {
        Topology::LineStrip
    }

    fn name(&self) -> &str {
        "Dragon Curve"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_mode_cycles() {
        assert_eq!(FoldMode::from_counter(0), FoldMode::Horizontal);
        assert_eq!(FoldMode::from_counter(1), FoldMode::Rising);
        assert_eq!(FoldMode::from_counter(6), FoldMode::Vertical);
        assert_eq!(FoldMode::from_counter(7), FoldMode::Falling);
    }

    #[test]
    fn test_first_fold_bulges_down() {
        // horizontal segment folded right drops below the midpoint
        let corner = fold_right(START, END, FoldMode::Horizontal);
        assert!((corner.x + 0.1).abs() < 1e-6);
        assert!((corner.y - (0.2 - 0.6)).abs() < 1e-6);
    }

    #[test]
    fn test_left_and_right_mirror() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 1.0);
        assert_eq!(fold_left(a, b, FoldMode::Rising), Vec2::new(0.0, 1.0));
        assert_eq!(fold_right(a, b, FoldMode::Rising), Vec2::new(1.0, 0.0));
        assert_eq!(fold_left(a, b, FoldMode::Falling), Vec2::new(1.0, 0.0));
        assert_eq!(fold_right(a, b, FoldMode::Falling), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_horizontal_and_vertical_folds() {
        let a = Vec2::new(0.0, 0.0);
        assert_eq!(fold_left(a, Vec2::new(2.0, 0.0), FoldMode::Horizontal), Vec2::new(1.0, 1.0));
        assert_eq!(fold_right(a, Vec2::new(2.0, 0.0), FoldMode::Horizontal), Vec2::new(1.0, -1.0));
        assert_eq!(fold_left(a, Vec2::new(0.0, 2.0), FoldMode::Vertical), Vec2::new(-1.0, 1.0));
        assert_eq!(fold_right(a, Vec2::new(0.0, 2.0), FoldMode::Vertical), Vec2::new(1.0, 1.0));
    }

    fn assert_polyline(actual: &[Vec2], expected: &[[f32; 2]]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (point, want)) in actual.iter().zip(expected).enumerate() {
            let want = Vec2::from_array(*want);
            assert!((*point - want).length() < 1e-6, "point {}: {:?} != {:?}", i, point, want);
        }
    }

    #[test]
    fn test_level_three_carries_fold_state() {
        // the second level starts folding left in the falling mode
        assert_polyline(
            &Dragon::polyline(3),
            &[[-0.7, 0.2], [-0.1, 0.2], [-0.1, -0.4], [0.5, -0.4], [0.5, 0.2]],
        );
    }

    #[test]
    fn test_level_four_points() {
        assert_polyline(
            &Dragon::polyline(4),
            &[
                [-0.7, 0.2],
                [-0.4, 0.5],
                [-0.1, 0.2],
                [-0.4, -0.1],
                [-0.1, -0.4],
                [0.2, -0.1],
                [0.5, -0.4],
                [0.8, -0.1],
                [0.5, 0.2],
            ],
        );
    }

    #[test]
    fn test_level_five_points() {
        assert_polyline(
            &Dragon::polyline(5),
            &[
                [-0.7, 0.2],
                [-0.7, 0.5],
                [-0.4, 0.5],
                [-0.4, 0.2],
                [-0.1, 0.2],
                [-0.1, -0.1],
                [-0.4, -0.1],
                [-0.4, -0.4],
                [-0.1, -0.4],
                [-0.1, -0.1],
                [0.2, -0.1],
                [0.2, -0.4],
                [0.5, -0.4],
                [0.5, -0.1],
                [0.8, -0.1],
                [0.8, 0.2],
                [0.5, 0.2],
            ],
        );
    }

    #[test]
    fn test_level_two_has_three_points() {
        let points = Dragon::polyline(2);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], START);
        assert_eq!(points[2], END);
    }

    #[test]
    fn test_vertex_count() {
        assert_eq!(Dragon::vertex_count(0), 2);
        assert_eq!(Dragon::vertex_count(1), 2);
        assert_eq!(Dragon::vertex_count(3), 5);
        assert_eq!(Dragon::vertex_count(17), 65537);
        assert_eq!(Dragon::vertex_count(40), 65537);
    }

    #[test]
    fn test_polyline_matches_vertex_count() {
        for level in 0..8 {
            assert_eq!(Dragon::polyline(level).len(), Dragon::vertex_count(level));
        }
    }
}
