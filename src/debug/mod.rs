//! Debug module: feature gated runtime stats & logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use stats::DebugStats;

use bevy::prelude::*;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(feature = "debug")]
        {
            app.init_resource::<stats::DebugStats>()
                .init_resource::<logging::DebugLogState>()
                .add_systems(
                    Update,
                    (
                        stats::collect_stats,
                        logging::debug_logging_system.after(stats::collect_stats),
                    ),
                );
        }
        #[cfg(not(feature = "debug"))]
        let _ = app;
    }
}
