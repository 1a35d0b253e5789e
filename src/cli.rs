use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "fractal-viewer")]
#[command(about = "Procedural 2-D fractal viewer", long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial scene, 1-7
    #[arg(long)]
    pub scene: Option<u8>,

    /// Initial level
    #[arg(long)]
    pub level: Option<u32>,

    /// Raster width used by the escape-time scenes and the window
    #[arg(long)]
    pub width: Option<u32>,

    /// Raster height used by the escape-time scenes and the window
    #[arg(long)]
    pub height: Option<u32>,

    /// Seed for the fern's random source
    #[arg(long)]
    pub seed: Option<u64>,

    /// WGSL shader replacing the built-in one
    #[arg(long)]
    pub shader: Option<PathBuf>,

    /// Hide the overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Write the configured frame as JSON and exit without opening a window
    #[arg(long)]
    pub dump: Option<PathBuf>,

    /// Log filter, e.g. "debug" (overrides RUST_LOG)
    #[arg(long = "log-filter")]
    pub log_filter: Option<String>,
}
