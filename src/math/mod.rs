mod color;

pub use color::{escape_to_hue, hsv_to_rgb, normalize_hue, ESCAPE_SATURATION, ESCAPE_VALUE};
