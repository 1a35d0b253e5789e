use crate::geometry::{GeometryBuffer, Topology};

/// Procedural geometry source for one scene
pub trait Generator {
    /// Build the full geometry for `level` from scratch
    fn generate(&mut self, level: u32) -> GeometryBuffer;

    /// How the renderer groups the generated vertices
    fn topology(&self) -> Topology;

    /// Get generator name for logging and the HUD
    fn name(&self) -> &str {
        "Generator"
    }
}
