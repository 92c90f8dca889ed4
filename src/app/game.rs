use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::system::system_order::{ControlSampleSet, SimStepSet, VisualSyncSet};
use crate::debug::DebugPlugin;
use crate::gameplay::balloon::BalloonPlugin;
use crate::gameplay::bullet::BulletStreamPlugin;
use crate::gameplay::cloud::CloudPlugin;
use crate::gameplay::crosshair::CrosshairPlugin;
use crate::gameplay::field::FieldPlugin;
use crate::gameplay::intro::IntroPlugin;
use crate::gameplay::GameRng;
use crate::interaction::control::ControlPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::sprites::SpriteAssetsPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<GameRng>()
            .configure_sets(
                Update,
                (ControlSampleSet, VisualSyncSet.after(ControlSampleSet)),
            )
            .configure_sets(FixedUpdate, SimStepSet)
            .add_plugins((
                CameraPlugin,
                SpriteAssetsPlugin,
                ControlPlugin,
                IntroPlugin,
                FieldPlugin,
                BalloonPlugin,
                BulletStreamPlugin,
                CloudPlugin,
                CrosshairPlugin,
                AutoClosePlugin,
                DebugPlugin,
            ));
    }
}
