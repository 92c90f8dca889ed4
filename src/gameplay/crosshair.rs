//! Keeps the reticle sprite glued to the active control's position.

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::Crosshair;
use crate::core::system::system_order::VisualSyncSet;
use crate::gameplay::field::{FieldDims, Z_CROSSHAIR};
use crate::interaction::control::CrosshairState;
use crate::rendering::camera::camera::screen_to_world;

pub struct CrosshairPlugin;

impl Plugin for CrosshairPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            sync_crosshair
                .in_set(VisualSyncSet)
                .run_if(in_state(AppState::Running))
                .run_if(resource_exists::<FieldDims>),
        );
    }
}

pub fn sync_crosshair(
    dims: Res<FieldDims>,
    state: Res<CrosshairState>,
    mut q: Query<(&mut Transform, &mut Visibility), With<Crosshair>>,
) {
    for (mut tf, mut vis) in q.iter_mut() {
        *vis = Visibility::Visible;
        tf.translation = screen_to_world(state.screen_pos, dims.size).extend(Z_CROSSHAIR);
    }
}
