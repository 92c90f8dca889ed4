//! Background clouds drifting rightward, wrapping past the right edge.

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::Cloud;
use crate::core::config::GameConfig;
use crate::core::system::system_order::{SimStepSet, VisualSyncSet};
use crate::gameplay::field::{FieldDims, Z_CLOUD};
use crate::rendering::camera::camera::sprite_center_world;
use crate::rendering::sprites::SpriteMetrics;

/// One drift step; a cloud that reaches the right edge re-enters fully
/// off-screen on the left.
pub fn advance_cloud(x: f32, drift: f32, screen_w: f32, cloud_w: f32) -> f32 {
    let x = x + drift;
    if x >= screen_w {
        -cloud_w
    } else {
        x
    }
}

pub struct CloudPlugin;

impl Plugin for CloudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            step_clouds
                .in_set(SimStepSet)
                .run_if(in_state(AppState::Running))
                .run_if(resource_exists::<FieldDims>),
        )
        .add_systems(
            Update,
            sync_cloud_visuals
                .in_set(VisualSyncSet)
                .run_if(in_state(AppState::Running))
                .run_if(resource_exists::<FieldDims>),
        );
    }
}

pub fn step_clouds(
    cfg: Res<GameConfig>,
    dims: Res<FieldDims>,
    metrics: Res<SpriteMetrics>,
    mut q: Query<&mut Cloud>,
) {
    for mut cloud in q.iter_mut() {
        cloud.x = advance_cloud(cloud.x, cfg.clouds.drift_speed, dims.size.x, metrics.cloud.x);
    }
}

pub fn sync_cloud_visuals(
    dims: Res<FieldDims>,
    metrics: Res<SpriteMetrics>,
    mut q: Query<(&Cloud, &mut Transform)>,
) {
    for (cloud, mut tf) in q.iter_mut() {
        let top_left = Vec2::new(cloud.x, cloud.y);
        tf.translation = sprite_center_world(top_left, metrics.cloud, dims.size).extend(Z_CLOUD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drifts_right_until_the_edge() {
        assert_eq!(advance_cloud(10.0, 1.0, 960.0, 96.0), 11.0);
    }

    #[test]
    fn wraps_to_fully_offscreen_left() {
        assert_eq!(advance_cloud(959.0, 1.0, 960.0, 96.0), -96.0);
        assert_eq!(advance_cloud(-96.0, 1.0, 960.0, 96.0), -95.0);
    }
}
