use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Countdown armed only when `window.autoClose` is positive.
#[derive(Resource, Deref, DerefMut)]
struct SessionTimeout(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_session_timeout)
            .add_systems(Update, expire_session);
    }
}

fn arm_session_timeout(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "session", "auto close armed: exiting after {secs}s");
        commands.insert_resource(SessionTimeout(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn expire_session(
    time: Res<Time>,
    timeout: Option<ResMut<SessionTimeout>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if let Some(mut t) = timeout {
        if t.tick(time.delta()).just_finished() {
            info!(target: "session", "auto close timer expired");
            ev_exit.write(AppExit::Success);
        }
    }
}
