//! Intro screen: instruction text plus control selection. The first device
//! that fires picks the control scheme and starts the game.

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::interaction::control::{
    any_fire_just_pressed, ActiveControl, MouseControl, PadControl,
};

const MOUSE_HELP: &str =
    "Mouse: Move the crosshair with the mouse. Shoot with the left mouse button.";
const PAD_HELP: &str =
    "Pad: Move the crosshair with the analog stick. Shoot with the bottom right button.";
const CHOOSE_HELP: &str =
    "Click the mouse button to play using the mouse. Click a pad button to play using a pad.";
const MOUSE_ONLY_HELP: &str = "Click the mouse button to play.";

/// Instruction block; the pad lines appear only while a pad is connected.
pub fn intro_text(pads_connected: bool) -> String {
    if pads_connected {
        format!("{MOUSE_HELP}\n{PAD_HELP}\n{CHOOSE_HELP}")
    } else {
        format!("{MOUSE_HELP}\n{MOUSE_ONLY_HELP}")
    }
}

#[derive(Component)]
struct IntroUiRoot;
#[derive(Component)]
struct IntroUiText;

pub struct IntroPlugin;

impl Plugin for IntroPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Intro), spawn_intro_ui)
            .add_systems(
                Update,
                (refresh_intro_text, select_control).run_if(in_state(AppState::Intro)),
            )
            .add_systems(OnExit(AppState::Intro), despawn_intro_ui);
    }
}

fn spawn_intro_ui(mut commands: Commands) {
    let root = commands
        .spawn((
            IntroUiRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .id();
    commands.entity(root).with_children(|p| {
        p.spawn((
            IntroUiText,
            Text::new(intro_text(false)),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::BLACK),
        ));
    });
}

fn refresh_intro_text(
    gamepads: Query<&Gamepad>,
    mut q_text: Query<&mut Text, With<IntroUiText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    let desired = intro_text(gamepads.iter().count() > 0);
    if text.as_str() != desired {
        *text = Text::new(desired);
    }
}

fn select_control(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    gamepads: Query<&Gamepad>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if buttons.just_pressed(MouseButton::Left) {
        info!(target: "control", "mouse control selected");
        commands.insert_resource(ActiveControl(Box::new(MouseControl::default())));
        next_state.set(AppState::Running);
    } else if any_fire_just_pressed(gamepads.iter()) {
        info!(target: "control", "gamepad control selected");
        commands.insert_resource(ActiveControl(Box::new(PadControl::default())));
        next_state.set(AppState::Running);
    }
}

fn despawn_intro_ui(mut commands: Commands, q_root: Query<Entity, With<IntroUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_lines_only_when_connected() {
        let without = intro_text(false);
        assert!(without.contains("left mouse button"));
        assert!(!without.contains("analog stick"));
        assert!(without.contains("Click the mouse button to play."));

        let with = intro_text(true);
        assert!(with.contains("analog stick"));
        assert!(with.contains("pad button"));
    }
}
