use std::time::{Duration, Instant};

use log::debug;

use crate::core::controller::{CommandOutcome, Key, SceneCommand, SceneController};
use crate::core::viewport::Viewport;
use crate::geometry::{GeometryBuffer, Topology};
use crate::scenes::{Scene, SceneLibrary};

/// One regenerated frame, ready for upload
#[derive(Debug, Clone)]
pub struct Frame {
    pub scene: Scene,
    pub level: u32,
    pub topology: Topology,
    pub buffer: GeometryBuffer,
    /// Time spent in the generator
    pub elapsed: Duration,
}

impl Frame {
    pub fn vertex_count(&self) -> usize {
        self.buffer.len()
    }
}

/// Ties the scene state machine to the generators
pub struct Viewer {
    controller: SceneController,
    library: SceneLibrary,
}

impl Viewer {
    pub fn new(controller: SceneController, viewport: Viewport, fern_seed: Option<u64>) -> Self {
        Self {
            controller,
            library: SceneLibrary::new(viewport, fern_seed),
        }
    }

    pub fn controller(&self) -> &SceneController {
        &self.controller
    }

    pub fn handle_key(&mut self, key: Key) -> CommandOutcome {
        self.controller.handle_key(key)
    }

    pub fn apply(&mut self, command: SceneCommand) -> CommandOutcome {
        self.controller.apply(command)
    }

    /// Regenerate the current scene from scratch
    pub fn frame(&mut self) -> Frame {
        let scene = self.controller.scene();
        let level = self.controller.level();

        let start = Instant::now();
        let buffer = self.library.generate(scene, level);
        let elapsed = start.elapsed();

        debug!(
            "Generated {} at level {}: {} vertices in {:.2?}",
            scene.name(),
            level,
            buffer.len(),
            elapsed
        );

        Frame {
            scene,
            level,
            topology: scene.topology(),
            buffer,
            elapsed,
        }
    }
}
