pub mod controller;
pub mod geometry_renderer;
pub mod gpu_context;
pub mod hud;
pub mod input_adapter;
pub mod viewport;

pub use controller::{CommandOutcome, Key, SceneCommand, SceneController};
pub use geometry_renderer::GeometryRenderer;
pub use gpu_context::GpuContext;
pub use hud::{Hud, HudLines};
pub use viewport::Viewport;
