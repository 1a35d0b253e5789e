use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::core::controller::{SceneController, INITIAL_LEVEL};
use crate::core::viewport::{Viewport, DEFAULT_SIZE};
use crate::scenes::Scene;

/// Viewer settings: JSON file first, command line on top
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub scene: u8,
    pub level: u32,
    pub fern_seed: Option<u64>,
    pub show_hud: bool,
    pub shader: Option<PathBuf>,
    pub title: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            scene: Scene::FIRST.number(),
            level: INITIAL_LEVEL,
            fern_seed: None,
            show_hud: true,
            shader: None,
            title: "Fractal Viewer".to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse viewer config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load the file named by `--config` (if any), apply the flags and validate
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(scene) = cli.scene {
            self.scene = scene;
        }
        if let Some(level) = cli.level {
            self.level = level;
        }
        if let Some(width) = cli.width {
            self.width = width;
        }
        if let Some(height) = cli.height {
            self.height = height;
        }
        if let Some(seed) = cli.seed {
            self.fern_seed = Some(seed);
        }
        if let Some(shader) = &cli.shader {
            self.shader = Some(shader.clone());
        }
        if cli.no_ui {
            self.show_hud = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.viewport().is_empty() {
            bail!("Viewport must be non-empty, got {}x{}", self.width, self.height);
        }
        self.initial_scene()?;
        Ok(())
    }

    pub fn initial_scene(&self) -> Result<Scene> {
        match Scene::from_number(self.scene) {
            Some(scene) => Ok(scene),
            None => bail!("Scene must be between 1 and 7, got {}", self.scene),
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn controller(&self) -> Result<SceneController> {
        Ok(SceneController::new(self.initial_scene()?, self.level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.viewport(), Viewport::new(700, 700));
        assert_eq!(config.controller().unwrap(), SceneController::default());
        assert!(config.show_hud);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ViewerConfig::from_json(r#"{ "scene": 7, "level": 30 }"#).unwrap();
        assert_eq!(config.scene, 7);
        assert_eq!(config.level, 30);
        assert_eq!(config.width, 700);
        assert_eq!(config.title, "Fractal Viewer");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ViewerConfig {
            width: 0,
            ..ViewerConfig::default()
        };
        assert!(config.validate().is_err());

        for scene in [0, 8, 255] {
            let config = ViewerConfig {
                scene,
                ..ViewerConfig::default()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = ViewerConfig::from_json(r#"{ "scene": 2, "fern_seed": 1 }"#).unwrap();
        let cli = Cli {
            scene: Some(4),
            seed: Some(99),
            no_ui: true,
            ..Cli::default()
        };
        config.apply_cli(&cli);

        assert_eq!(config.scene, 4);
        assert_eq!(config.fern_seed, Some(99));
        assert!(!config.show_hud);
    }
}
