use serde::{Deserialize, Serialize};

/// Default raster width and height in pixels
pub const DEFAULT_SIZE: u32 = 700;

/// Viewport - raster dimensions sampled by the escape-time scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create new viewport
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_viewport_with_dimensions() {
        let viewport = Viewport::new(1920, 1080);
        assert_eq!(viewport.width, 1920);
        assert_eq!(viewport.height, 1080);
    }

    #[test]
    fn test_default_is_700_square() {
        let viewport = Viewport::default();
        assert_eq!(viewport, Viewport::new(700, 700));
        assert_eq!(viewport.pixel_count(), 490_000);
    }

    #[test]
    fn test_pixel_count_calculation() {
        let viewport = Viewport::new(640, 480);
        assert_eq!(viewport.pixel_count(), 307200);
    }

    #[test]
    fn test_small_dimensions() {
        assert_eq!(Viewport::new(1, 1).pixel_count(), 1);
        assert!(Viewport::new(0, 10).is_empty());
        assert!(!Viewport::new(1, 1).is_empty());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_pixel_count_does_not_overflow_u32() {
        let viewport = Viewport::new(100_000, 100_000);
        assert_eq!(viewport.pixel_count(), 10_000_000_000);
    }

    #[test]
    fn test_copy_semantics() {
        let a = Viewport::new(1280, 720);
        let b = a;
        assert_eq!(a.width, 1280);
        assert_eq!(b.width, 1280);
    }
}
