use bevy::prelude::*;

use crate::core::components::{Balloon, BalloonState};
use crate::interaction::control::CrosshairState;

/// Per-frame gameplay counters scraped for the periodic log line.
#[derive(Resource, Debug, Default)]
pub struct DebugStats {
    pub waiting: usize,
    pub floating: usize,
    pub popped: usize,
    pub falling: usize,
    pub firing: bool,
    pub crosshair: Vec2,
}

pub fn collect_stats(
    mut stats: ResMut<DebugStats>,
    crosshair: Option<Res<CrosshairState>>,
    q: Query<&Balloon>,
) {
    let (mut waiting, mut floating, mut popped, mut falling) = (0, 0, 0, 0);
    for b in &q {
        match b.state {
            BalloonState::StartWait => waiting += 1,
            BalloonState::Floating => floating += 1,
            BalloonState::Popped => popped += 1,
            BalloonState::Falling => falling += 1,
        }
    }
    stats.waiting = waiting;
    stats.floating = floating;
    stats.popped = popped;
    stats.falling = falling;
    if let Some(c) = crosshair {
        stats.firing = c.firing;
        stats.crosshair = c.screen_pos;
    }
}
