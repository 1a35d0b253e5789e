use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::common::preallocation;
use crate::geometry::{GeometryBuffer, Topology};
use crate::traits::Generator;

/// Points plotted per unit of level
pub const POINTS_PER_LEVEL: usize = 50_000;

const START_COLOR: Vec3 = Vec3::new(0.5, 0.5, 0.5);
pub const STEM_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);
pub const LEFT_LEAF_COLOR: Vec3 = Vec3::new(1.0, 0.2, 0.2);
pub const RIGHT_LEAF_COLOR: Vec3 = Vec3::new(0.2, 0.2, 1.0);
const FROND_FADE: f32 = 0.95;

/// One of the four affine maps of the Barnsley fern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FernMap {
    /// roll 0 (1%)
    Stem,
    /// rolls 1..=85 (85%)
    Frond,
    /// rolls 86..=92 (7%)
    LeftLeaf,
    /// rolls 93..=99 (7%)
    RightLeaf,
}

impl FernMap {
    /// Select a map from a roll in `0..100`
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0 => FernMap::Stem,
            1..=85 => FernMap::Frond,
            86..=92 => FernMap::LeftLeaf,
            _ => FernMap::RightLeaf,
        }
    }

    /// Apply the affine transform to the previous point
    pub fn transform(&self, p: Vec2) -> Vec2 {
        match self {
            FernMap::Stem => Vec2::new(0.0, 0.16 * p.y),
            FernMap::Frond => Vec2::new(0.85 * p.x + 0.04 * p.y, -0.04 * p.x + 0.85 * p.y + 1.6),
            FernMap::LeftLeaf => Vec2::new(0.2 * p.x - 0.26 * p.y, 0.23 * p.x + 0.22 * p.y + 1.6),
            FernMap::RightLeaf => Vec2::new(-0.15 * p.x + 0.28 * p.y, 0.26 * p.x + 0.24 * p.y + 0.44),
        }
    }

    /// Colour for the new point given the colour of the previous one
    pub fn recolor(&self, previous: Vec3) -> Vec3 {
        match self {
            FernMap::Stem => STEM_COLOR,
            FernMap::Frond => previous * FROND_FADE,
            FernMap::LeftLeaf => LEFT_LEAF_COLOR,
            FernMap::RightLeaf => RIGHT_LEAF_COLOR,
        }
    }
}

/// Barnsley fern drawn by the chaos game.
///
/// The random source is injected so runs can be reproduced from a seed.
#[derive(Debug, Clone)]
pub struct Fern<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> Fern<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Fern<StdRng> {
    /// Deterministic fern driven by a seeded `StdRng`
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Fern seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Generator for Fern<R> {
    fn generate(&mut self, level: u32) -> GeometryBuffer {
        let total = (level as usize).saturating_mul(POINTS_PER_LEVEL);
        let mut buffer = GeometryBuffer::with_capacity(preallocation(total));

        let mut point = Vec2::ZERO;
        let mut color = START_COLOR;

        for _ in 0..total {
            let map = FernMap::from_roll(self.rng.gen_range(0..100));
            point = map.transform(point);
            color = map.recolor(color);
            buffer.push(fit_to_view(point), color);
        }

        buffer
    }

    fn topology(&self) -> Topology {
        Topology::Points
    }

    fn name(&self) -> &str {
        "Barnsley Fern"
    }
}

/// Squeeze the fern's natural extent (|x| < 3, 0 <= y < 10.6) into clip space
fn fit_to_view(p: Vec2) -> Vec2 {
    Vec2::new(p.x / 3.0, p.y / 5.3 - 1.0)
}
