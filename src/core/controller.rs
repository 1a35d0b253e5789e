use log::info;

use crate::scenes::Scene;

/// Level every scene starts at
pub const INITIAL_LEVEL: u32 = 1;

/// Keys the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Number row digit, 0-9
    Digit(u8),
    Left,
    Right,
    Up,
    Down,
    Escape,
}

impl Key {
    /// Translate a key press into a controller command
    pub fn command(&self) -> Option<SceneCommand> {
        match self {
            Key::Digit(n) => Scene::from_number(*n).map(SceneCommand::Select),
            Key::Left => Some(SceneCommand::PreviousScene),
            Key::Right => Some(SceneCommand::NextScene),
            Key::Up => Some(SceneCommand::LevelUp),
            Key::Down => Some(SceneCommand::LevelDown),
            Key::Escape => Some(SceneCommand::Quit),
        }
    }
}

/// Discrete state change requested by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    Select(Scene),
    NextScene,
    PreviousScene,
    LevelUp,
    LevelDown,
    Quit,
}

/// What the event loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// State changed, the frame must be regenerated
    Redraw,
    /// Command was a no-op at a boundary
    Unchanged,
    Exit,
}

/// Scene selection and level, the only state that lives across frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneController {
    scene: Scene,
    level: u32,
}

impl SceneController {
    pub fn new(scene: Scene, level: u32) -> Self {
        Self { scene, level }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Apply one command, reporting whether anything changed
    pub fn apply(&mut self, command: SceneCommand) -> CommandOutcome {
        let before = *self;

        match command {
            SceneCommand::Select(scene) => self.scene = scene,
            SceneCommand::NextScene => self.scene = self.scene.next(),
            SceneCommand::PreviousScene => self.scene = self.scene.previous(),
            SceneCommand::LevelUp => self.level = self.level.saturating_add(1),
            SceneCommand::LevelDown => self.level = self.level.saturating_sub(1),
            SceneCommand::Quit => return CommandOutcome::Exit,
        }

        if *self == before {
            return CommandOutcome::Unchanged;
        }

        info!("Scene {} at level {}", self.scene, self.level);
        CommandOutcome::Redraw
    }

    /// Apply the command bound to `key`, if any
    pub fn handle_key(&mut self, key: Key) -> CommandOutcome {
        match key.command() {
            Some(command) => self.apply(command),
            None => CommandOutcome::Unchanged,
        }
    }
}

impl Default for SceneController {
    fn default() -> Self {
        Self::new(Scene::FIRST, INITIAL_LEVEL)
    }
}
