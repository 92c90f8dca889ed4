pub mod balloon;
pub mod bullet;
pub mod cloud;
pub mod crosshair;
pub mod field;
pub mod intro;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Gameplay RNG. Entropy-seeded normally; tests insert a fixed seed.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}
