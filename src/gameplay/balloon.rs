//! Balloon lifecycle: StartWait -> Floating -> Popped -> Falling -> Floating.
//! All stepping happens in screen space on the fixed timestep; the sync system
//! translates the result into sprite transforms once per rendered frame.

use bevy::prelude::*;
use rand::Rng;

use crate::app::state::AppState;
use crate::core::components::{Balloon, BalloonState, PopFlash};
use crate::core::config::config::BalloonConfig;
use crate::core::config::GameConfig;
use crate::core::system::system_order::{SimStepSet, VisualSyncSet};
use crate::gameplay::field::{FieldDims, Z_BALLOON, Z_FLASH};
use crate::gameplay::GameRng;
use crate::interaction::control::CrosshairState;
use crate::rendering::camera::camera::{screen_to_world, sprite_center_world};
use crate::rendering::sprites::{balloon_frame_rect, BalloonFrame, SpriteMetrics};

/// Per-step inputs shared by every balloon.
#[derive(Debug, Clone, Copy)]
pub struct StepInput {
    pub firing: bool,
    /// Crosshair position, screen px.
    pub crosshair: Vec2,
    pub screen_h: f32,
    /// Size of one balloon frame (a third of the strip).
    pub frame: Vec2,
}

/// Screen-space rect the balloon's frame occupies at its drawn position.
/// The sprite top sits at `screen_h - altitude`, so altitude 0 is fully
/// below the bottom edge.
pub fn balloon_hit_rect(b: &Balloon, frame: Vec2, screen_h: f32) -> Rect {
    let top_left = Vec2::new(b.x, screen_h - b.altitude);
    Rect::from_corners(top_left, top_left + frame)
}

/// Advance one balloon by one simulation step. `roll` is only consulted in
/// `StartWait`, so callers can pass the RNG lazily.
pub fn step_balloon(
    b: &mut Balloon,
    cfg: &BalloonConfig,
    input: &StepInput,
    roll: impl FnOnce() -> u32,
) {
    match b.state {
        BalloonState::StartWait => {
            if cfg.launch_divisor > 0 && roll() % cfg.launch_divisor == 0 {
                b.state = BalloonState::Floating;
            }
        }
        BalloonState::Floating => {
            let hit = input.firing
                && balloon_hit_rect(b, input.frame, input.screen_h).contains(input.crosshair);
            if hit {
                b.state = BalloonState::Popped;
            } else {
                b.altitude = (b.altitude + cfg.rise_speed) % (input.screen_h + input.frame.y);
            }
        }
        BalloonState::Popped => {
            if b.pop_timer < cfg.pop_steps {
                b.pop_timer += 1;
            } else {
                b.state = BalloonState::Falling;
                b.pop_timer = 0;
                b.altitude -= input.frame.y;
            }
        }
        BalloonState::Falling => {
            b.altitude -= cfg.fall_speed;
            if b.altitude <= -input.frame.y {
                b.state = BalloonState::Floating;
                b.altitude = 0.0;
            }
        }
    }
}

/// Which deflated frame a falling balloon shows: the remnant flutters,
/// alternating halfway through each `flutter_period` of travel.
pub fn falling_frame(altitude: f32, flutter_period: f32) -> BalloonFrame {
    if flutter_period <= 0.0 {
        return BalloonFrame::DeflatedA;
    }
    if altitude.rem_euclid(flutter_period) >= flutter_period * 0.5 {
        BalloonFrame::DeflatedB
    } else {
        BalloonFrame::DeflatedA
    }
}

pub struct BalloonPlugin;

impl Plugin for BalloonPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            step_balloons
                .in_set(SimStepSet)
                .run_if(in_state(AppState::Running))
                .run_if(resource_exists::<FieldDims>),
        )
        .add_systems(
            Update,
            sync_balloon_visuals
                .in_set(VisualSyncSet)
                .run_if(in_state(AppState::Running))
                .run_if(resource_exists::<FieldDims>),
        );
    }
}

pub fn step_balloons(
    cfg: Res<GameConfig>,
    metrics: Res<SpriteMetrics>,
    dims: Res<FieldDims>,
    crosshair: Res<CrosshairState>,
    mut rng: ResMut<GameRng>,
    mut q: Query<&mut Balloon>,
) {
    let bcfg = &cfg.balloons;
    let die = bcfg.launch_die.max(1);
    let input = StepInput {
        firing: crosshair.firing,
        crosshair: crosshair.screen_pos,
        screen_h: dims.size.y,
        frame: metrics.balloon_frame(),
    };
    for mut b in q.iter_mut() {
        step_balloon(&mut b, bcfg, &input, || rng.0.gen_range(0..die));
    }
}

pub fn sync_balloon_visuals(
    cfg: Res<GameConfig>,
    metrics: Res<SpriteMetrics>,
    dims: Res<FieldDims>,
    crosshair: Res<CrosshairState>,
    mut balloons: Query<(&Balloon, &mut Sprite, &mut Transform, &mut Visibility), Without<PopFlash>>,
    mut flash: Query<(&mut Transform, &mut Visibility), (With<PopFlash>, Without<Balloon>)>,
) {
    let frame = metrics.balloon_frame();
    let mut any_popped = false;
    for (b, mut sprite, mut tf, mut vis) in balloons.iter_mut() {
        let shown = match b.state {
            BalloonState::StartWait => {
                *vis = Visibility::Hidden;
                continue;
            }
            BalloonState::Floating => BalloonFrame::Intact,
            BalloonState::Popped => {
                any_popped = true;
                // the intact frame stays up while the burst flashes
                BalloonFrame::Intact
            }
            BalloonState::Falling => falling_frame(b.altitude, cfg.balloons.flutter_period),
        };
        *vis = Visibility::Visible;
        sprite.rect = Some(balloon_frame_rect(metrics.balloon_strip, shown));
        let top_left = Vec2::new(b.x, dims.size.y - b.altitude);
        tf.translation = sprite_center_world(top_left, frame, dims.size).extend(Z_BALLOON);
    }

    for (mut tf, mut vis) in flash.iter_mut() {
        if any_popped {
            *vis = Visibility::Visible;
            tf.translation = screen_to_world(crosshair.screen_pos, dims.size).extend(Z_FLASH);
        } else {
            *vis = Visibility::Hidden;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Vec2 = Vec2::new(32.0, 48.0);
    const SCREEN_H: f32 = 540.0;

    fn input(firing: bool, crosshair: Vec2) -> StepInput {
        StepInput {
            firing,
            crosshair,
            screen_h: SCREEN_H,
            frame: FRAME,
        }
    }

    fn idle() -> StepInput {
        input(false, Vec2::ZERO)
    }

    #[test]
    fn launch_only_on_divisible_roll() {
        let cfg = BalloonConfig::default();
        let mut b = Balloon::at_slot(0.0);
        step_balloon(&mut b, &cfg, &idle(), || 7);
        assert_eq!(b.state, BalloonState::StartWait);
        step_balloon(&mut b, &cfg, &idle(), || 22);
        assert_eq!(b.state, BalloonState::Floating);
    }

    #[test]
    fn altitude_wraps_modulo_height_plus_frame() {
        let cfg = BalloonConfig::default();
        let mut b = Balloon::at_slot(0.0);
        b.state = BalloonState::Floating;
        b.altitude = SCREEN_H + FRAME.y - 1.0;
        step_balloon(&mut b, &cfg, &idle(), || 1);
        assert_eq!(b.altitude, 0.0);
    }

    #[test]
    fn pops_only_while_firing_inside_frame() {
        let cfg = BalloonConfig::default();
        let mut b = Balloon::at_slot(64.0);
        b.state = BalloonState::Floating;
        b.altitude = 100.0;
        let inside = Vec2::new(70.0, SCREEN_H - 100.0 + 10.0);

        step_balloon(&mut b, &cfg, &input(false, inside), || 1);
        assert_eq!(b.state, BalloonState::Floating, "no pop without the trigger");

        step_balloon(&mut b, &cfg, &input(true, Vec2::new(500.0, 20.0)), || 1);
        assert_eq!(b.state, BalloonState::Floating, "no pop off-target");

        step_balloon(&mut b, &cfg, &input(true, inside), || 1);
        assert_eq!(b.state, BalloonState::Popped);
    }

    #[test]
    fn pop_holds_then_falls() {
        let cfg = BalloonConfig::default();
        let mut b = Balloon::at_slot(0.0);
        b.state = BalloonState::Popped;
        b.altitude = 200.0;
        for _ in 0..cfg.pop_steps {
            step_balloon(&mut b, &cfg, &idle(), || 1);
            assert_eq!(b.state, BalloonState::Popped);
        }
        step_balloon(&mut b, &cfg, &idle(), || 1);
        assert_eq!(b.state, BalloonState::Falling);
        assert_eq!(b.pop_timer, 0);
        assert_eq!(b.altitude, 200.0 - FRAME.y);
    }

    #[test]
    fn falling_respawns_below_bottom_edge() {
        let cfg = BalloonConfig::default();
        let mut b = Balloon::at_slot(0.0);
        b.state = BalloonState::Falling;
        b.altitude = -FRAME.y + 0.5;
        step_balloon(&mut b, &cfg, &idle(), || 1);
        assert_eq!(b.state, BalloonState::Floating);
        assert_eq!(b.altitude, 0.0);
    }

    #[test]
    fn falling_frames_alternate() {
        assert_eq!(falling_frame(0.0, 20.0), BalloonFrame::DeflatedA);
        assert_eq!(falling_frame(9.9, 20.0), BalloonFrame::DeflatedA);
        assert_eq!(falling_frame(10.0, 20.0), BalloonFrame::DeflatedB);
        assert_eq!(falling_frame(19.9, 20.0), BalloonFrame::DeflatedB);
        // negative altitudes (below the bottom edge) keep alternating
        assert_eq!(falling_frame(-5.0, 20.0), BalloonFrame::DeflatedB);
    }

    #[test]
    fn hit_rect_tracks_altitude() {
        let mut b = Balloon::at_slot(96.0);
        b.altitude = 140.0;
        let r = balloon_hit_rect(&b, FRAME, SCREEN_H);
        assert_eq!(r.min, Vec2::new(96.0, 400.0));
        assert_eq!(r.max, Vec2::new(128.0, 448.0));
    }
}
