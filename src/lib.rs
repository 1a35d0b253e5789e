pub mod cli;
pub mod config;
pub mod core;
pub mod dump;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod scenes;
pub mod traits;
pub mod types;
pub mod viewer;

pub use config::ViewerConfig;
pub use geometry::{GeometryBuffer, Topology};
pub use scenes::{Scene, SceneLibrary};
pub use traits::Generator;
pub use viewer::{Frame, Viewer};
