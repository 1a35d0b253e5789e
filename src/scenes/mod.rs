//! The seven procedural scenes and the dispatch table that picks one per frame.

mod common;
pub mod dragon;
pub mod escape_time;
pub mod fern;
pub mod julia;
pub mod mandelbrot;
pub mod sierpinski;
pub mod spiral;
pub mod squares;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::viewport::Viewport;
use crate::geometry::{GeometryBuffer, Topology};
use crate::traits::Generator;

pub use dragon::Dragon;
pub use escape_time::EscapeTime;
pub use fern::Fern;
pub use julia::Julia;
pub use mandelbrot::Mandelbrot;
pub use sierpinski::Sierpinski;
pub use spiral::Spiral;
pub use squares::NestedSquares;

/// Scene selector, numbered 1 through 7 as on the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Scene {
    NestedSquares = 1,
    Spiral = 2,
    Sierpinski = 3,
    Fern = 4,
    Dragon = 5,
    Mandelbrot = 6,
    Julia = 7,
}

impl Scene {
    pub const ALL: [Scene; 7] = [
        Scene::NestedSquares,
        Scene::Spiral,
        Scene::Sierpinski,
        Scene::Fern,
        Scene::Dragon,
        Scene::Mandelbrot,
        Scene::Julia,
    ];
    pub const FIRST: Scene = Scene::NestedSquares;
    pub const LAST: Scene = Scene::Julia;

    pub fn from_number(number: u8) -> Option<Scene> {
        Scene::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Next scene, staying on the last one
    pub fn next(&self) -> Scene {
        Scene::from_number(self.number() + 1).unwrap_or(Scene::LAST)
    }

    /// Previous scene, staying on the first one
    pub fn previous(&self) -> Scene {
        Scene::from_number(self.number() - 1).unwrap_or(Scene::FIRST)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scene::NestedSquares => "Squares & Diamonds",
            Scene::Spiral => "Spiral",
            Scene::Sierpinski => "Sierpinski Triangle",
            Scene::Fern => "Barnsley Fern",
            Scene::Dragon => "Dragon Curve",
            Scene::Mandelbrot => "Mandelbrot Set",
            Scene::Julia => "Julia Set",
        }
    }

    /// Primitive grouping the renderer applies to this scene's buffer
    pub fn topology(&self) -> Topology {
        match self {
            Scene::NestedSquares => Topology::Lines,
            Scene::Spiral | Scene::Dragon => Topology::LineStrip,
            Scene::Sierpinski => Topology::Triangles,
            Scene::Fern | Scene::Mandelbrot | Scene::Julia => Topology::Points,
        }
    }

    fn index(&self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::FIRST
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.number())
    }
}

impl TryFrom<u8> for Scene {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Scene::from_number(number).ok_or_else(|| format!("scene must be 1-7, got {}", number))
    }
}

impl From<Scene> for u8 {
    fn from(scene: Scene) -> u8 {
        scene.number()
    }
}

/// Owns one generator per scene and runs the selected one
pub struct SceneLibrary {
    generators: Vec<Box<dyn Generator>>,
}

impl SceneLibrary {
    /// Build the library; the fern uses `fern_seed` or OS entropy when absent
    pub fn new(viewport: Viewport, fern_seed: Option<u64>) -> Self {
        let fern = match fern_seed {
            Some(seed) => Fern::seeded(seed),
            None => Fern::from_entropy(),
        };

        let generators: Vec<Box<dyn Generator>> = vec![
            Box::new(NestedSquares),
            Box::new(Spiral),
            Box::new(Sierpinski),
            Box::new(fern),
            Box::new(Dragon),
            Box::new(Mandelbrot::new(viewport)),
            Box::new(Julia::new(viewport)),
        ];

        Self { generators }
    }

    /// Regenerate `scene` at `level` from scratch
    pub fn generate(&mut self, scene: Scene, level: u32) -> GeometryBuffer {
        self.generators[scene.index()].generate(level)
    }

    pub fn generator(&self, scene: Scene) -> &dyn Generator {
        self.generators[scene.index()].as_ref()
    }
}
