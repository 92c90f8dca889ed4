use bevy::prelude::*;

/// High-level app lifecycle state.
/// Intro -> Running (a resize during play drops back to Intro).
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Instruction screen; the first input device used picks the control scheme.
    #[default]
    Intro,
    /// Active gameplay with a chosen control scheme.
    Running,
}
