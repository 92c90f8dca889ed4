//! Input-control abstraction: one `Control` implementation per input device,
//! chosen on the intro screen. Gameplay only ever reads `CrosshairState`.

use bevy::input::gamepad::{GamepadConnection, GamepadConnectionEvent};
use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::system::system_order::ControlSampleSet;

/// Per-frame snapshot of raw input, sampled once from engine resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlContext {
    /// Cursor position in screen px (top-left origin), if inside the window.
    pub cursor: Option<Vec2>,
    pub mouse_pressed: bool,
    /// Left analog stick of the first connected gamepad, -1..1 per axis
    /// (y is up-positive).
    pub pad_stick: Option<Vec2>,
    pub pad_pressed: bool,
    /// Half the window size; pad position is mapped around it.
    pub half_extent: Vec2,
}

/// A crosshair driver. Implementations are pure state machines over
/// `ControlContext`, so they stay testable without an engine loop.
pub trait Control: Send + Sync + 'static {
    fn update(&mut self, ctx: &ControlContext);
    /// Crosshair position in screen px (top-left origin).
    fn position(&self) -> Vec2;
    fn is_firing(&self) -> bool;
}

#[derive(Debug, Default)]
pub struct MouseControl {
    pos: Vec2,
    pressed: bool,
}

impl Control for MouseControl {
    fn update(&mut self, ctx: &ControlContext) {
        if let Some(cursor) = ctx.cursor {
            self.pos = cursor;
        }
        self.pressed = ctx.mouse_pressed;
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn is_firing(&self) -> bool {
        self.pressed
    }
}

#[derive(Debug, Default)]
pub struct PadControl {
    pos: Vec2,
    pressed: bool,
}

impl Control for PadControl {
    fn update(&mut self, ctx: &ControlContext) {
        if let Some(stick) = ctx.pad_stick {
            // Stick y is up-positive; screen y grows downward.
            self.pos = Vec2::new(
                ctx.half_extent.x + ctx.half_extent.x * stick.x,
                ctx.half_extent.y - ctx.half_extent.y * stick.y,
            );
        }
        self.pressed = ctx.pad_pressed;
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn is_firing(&self) -> bool {
        self.pressed
    }
}

/// The control scheme picked on the intro screen.
#[derive(Resource)]
pub struct ActiveControl(pub Box<dyn Control>);

/// Output of the active control, read by every gameplay system.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct CrosshairState {
    /// Screen px, top-left origin.
    pub screen_pos: Vec2,
    pub firing: bool,
}

/// Buttons that count as the trigger on a standard pad: any face button,
/// shoulder or trigger.
pub const FIRE_BUTTONS: &[GamepadButton] = &[
    GamepadButton::South,
    GamepadButton::East,
    GamepadButton::West,
    GamepadButton::North,
    GamepadButton::LeftTrigger,
    GamepadButton::RightTrigger,
    GamepadButton::LeftTrigger2,
    GamepadButton::RightTrigger2,
];

pub fn any_fire_pressed<'a, I>(gamepads: I) -> bool
where
    I: IntoIterator<Item = &'a Gamepad>,
{
    gamepads
        .into_iter()
        .any(|pad| FIRE_BUTTONS.iter().any(|b| pad.pressed(*b)))
}

pub fn any_fire_just_pressed<'a, I>(gamepads: I) -> bool
where
    I: IntoIterator<Item = &'a Gamepad>,
{
    gamepads
        .into_iter()
        .any(|pad| FIRE_BUTTONS.iter().any(|b| pad.just_pressed(*b)))
}

pub struct ControlPlugin;

impl Plugin for ControlPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CrosshairState>()
            .add_systems(
                Update,
                drive_active_control
                    .in_set(ControlSampleSet)
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(Update, log_gamepad_connections)
            .add_systems(OnEnter(AppState::Intro), drop_active_control);
    }
}

fn drive_active_control(
    windows: Query<&Window>,
    buttons: Res<ButtonInput<MouseButton>>,
    gamepads: Query<&Gamepad>,
    active: Option<ResMut<ActiveControl>>,
    mut crosshair: ResMut<CrosshairState>,
) {
    let Some(mut active) = active else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let ctx = ControlContext {
        cursor: window.cursor_position(),
        mouse_pressed: buttons.pressed(MouseButton::Left),
        pad_stick: gamepads.iter().next().map(|pad| pad.left_stick()),
        pad_pressed: any_fire_pressed(gamepads.iter()),
        half_extent: Vec2::new(window.width(), window.height()) * 0.5,
    };
    active.0.update(&ctx);
    *crosshair = CrosshairState {
        screen_pos: active.0.position(),
        firing: active.0.is_firing(),
    };
}

fn drop_active_control(mut commands: Commands, mut crosshair: ResMut<CrosshairState>) {
    commands.remove_resource::<ActiveControl>();
    *crosshair = CrosshairState::default();
}

fn log_gamepad_connections(mut events: EventReader<GamepadConnectionEvent>) {
    for ev in events.read() {
        match &ev.connection {
            GamepadConnection::Connected { name, .. } => {
                info!(target: "control", "gamepad connected: {name}");
            }
            GamepadConnection::Disconnected => {
                info!(target: "control", "gamepad disconnected");
            }
        }
    }
}
