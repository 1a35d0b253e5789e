use glam::{Vec2, Vec3};

/// Most vertices reserved up front; larger frames grow as they are generated
pub const MAX_PREALLOCATED_VERTICES: usize = 1 << 20;

/// Linear blend `start * (1 - t) + end * t`
pub fn blend(start: Vec3, end: Vec3, t: f32) -> Vec3 {
    start * (1.0 - t) + end * t
}

pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Bound a recursion depth so large levels cannot stall the frame
pub fn clamp_depth(level: u32, max: u32) -> u32 {
    level.min(max)
}

/// Capacity to reserve for `count` vertices
pub fn preallocation(count: usize) -> usize {
    count.min(MAX_PREALLOCATED_VERTICES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let start = Vec3::new(0.0, 1.0, 0.5);
        let end = Vec3::new(1.0, 0.0, 0.5);
        assert_eq!(blend(start, end, 0.0), start);
        assert_eq!(blend(start, end, 1.0), end);
        assert_eq!(blend(start, end, 0.5), Vec3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 2.0)), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_clamp_depth() {
        assert_eq!(clamp_depth(3, 10), 3);
        assert_eq!(clamp_depth(10, 10), 10);
        assert_eq!(clamp_depth(u32::MAX, 17), 17);
    }

    #[test]
    fn test_preallocation_is_capped() {
        assert_eq!(preallocation(0), 0);
        assert_eq!(preallocation(50_000), 50_000);
        assert_eq!(preallocation(usize::MAX), MAX_PREALLOCATED_VERTICES);
        assert_eq!(
            preallocation((u32::MAX as usize).saturating_mul(50_000)),
            MAX_PREALLOCATED_VERTICES
        );
    }
}
