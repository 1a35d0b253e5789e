use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::geometry::Topology;
use crate::viewer::Frame;

/// Serialized form of one generated frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDump {
    pub scene: u8,
    pub name: String,
    pub level: u32,
    pub topology: Topology,
    pub vertex_count: usize,
    pub points: Vec<[f32; 2]>,
    pub colors: Vec<[f32; 3]>,
}

impl FrameDump {
    pub fn from_frame(frame: &Frame) -> Self {
        Self {
            scene: frame.scene.number(),
            name: frame.scene.name().to_string(),
            level: frame.level,
            topology: frame.topology,
            vertex_count: frame.vertex_count(),
            points: frame.buffer.points().iter().map(|p| p.to_array()).collect(),
            colors: frame.buffer.colors().iter().map(|c| c.to_array()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize frame")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write dump {}", path.display()))
    }
}
