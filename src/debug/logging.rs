use bevy::prelude::*;

use super::stats::DebugStats;

#[derive(Resource)]
pub struct DebugLogState {
    pub time_accum: f32,
    pub log_interval: f32,
}

impl Default for DebugLogState {
    fn default() -> Self {
        Self {
            time_accum: 0.0,
            log_interval: 1.0,
        }
    }
}

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugLogState>,
    stats: Res<DebugStats>,
) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            "SIM t={:.3}s wait={} float={} popped={} falling={} firing={} cx=({:.0},{:.0})",
            time.elapsed_secs(),
            stats.waiting,
            stats.floating,
            stats.popped,
            stats.falling,
            stats.firing,
            stats.crosshair.x,
            stats.crosshair.y
        );
    }
}
