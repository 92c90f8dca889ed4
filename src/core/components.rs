use bevy::prelude::*;

/// Four-state balloon lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BalloonState {
    /// Tethered below the screen, rolling each step for launch.
    #[default]
    StartWait,
    /// Rising; vulnerable to the crosshair while the trigger is held.
    Floating,
    /// Burst flash held for a fixed number of steps.
    Popped,
    /// Deflated remnant sinking back below the screen.
    Falling,
}

/// A balloon in screen-space coordinates: `x` is the left edge of its column,
/// `altitude` is how far the sprite top has risen past the bottom edge.
#[derive(Component, Debug, Clone, Copy)]
pub struct Balloon {
    pub x: f32,
    pub altitude: f32,
    pub pop_timer: u32,
    pub state: BalloonState,
}

impl Balloon {
    pub fn at_slot(x: f32) -> Self {
        Self {
            x,
            altitude: 0.0,
            pop_timer: 0,
            state: BalloonState::StartWait,
        }
    }
}

/// Drifting background cloud, screen-space top-left position.
#[derive(Component, Debug, Clone, Copy)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
}

/// Marker for the aiming reticle sprite.
#[derive(Component)]
pub struct Crosshair;

/// Marker for the burst sprite shown at the crosshair while a balloon pops.
#[derive(Component)]
pub struct PopFlash;

/// Which corner a bullet stream fires from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamSide {
    Left,
    Right,
}

/// One pooled sprite in a bullet stream; `index` is its slot along the line.
#[derive(Component, Debug, Clone, Copy)]
pub struct BulletDot {
    pub side: StreamSide,
    pub index: usize,
}

/// Everything spawned for one field layout; despawned wholesale on resize.
#[derive(Component)]
pub struct FieldEntity;
