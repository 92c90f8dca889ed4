//! Dual bullet streams: dotted lines fired from the bottom corners toward the
//! crosshair while the trigger is held. A marching phase slides the dots along
//! the line each step. The dots themselves are a pre-spawned sprite pool.

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{BulletDot, StreamSide};
use crate::core::config::GameConfig;
use crate::core::system::system_order::{SimStepSet, VisualSyncSet};
use crate::gameplay::field::{FieldDims, Z_BULLET};
use crate::interaction::control::CrosshairState;
use crate::rendering::camera::camera::screen_to_world;

/// Screen-space line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub slope: f32,
    pub intercept: f32,
}

impl Line {
    pub fn y_at(&self, x: f32) -> f32 {
        self.slope * x + self.intercept
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StreamTrack {
    /// Marching offset, cycles `0..march_modulus` while firing.
    pub phase: u32,
    pub line: Option<Line>,
}

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct BulletStreams {
    pub left: StreamTrack,
    pub right: StreamTrack,
    pub firing: bool,
}

/// Line from a bottom corner `(corner_x, screen_h)` to `target`. A perfectly
/// vertical shot has no finite slope and yields `None` (nothing is drawn).
pub fn stream_line(corner_x: f32, target: Vec2, screen_h: f32) -> Option<Line> {
    let dx = target.x - corner_x;
    if dx == 0.0 {
        return None;
    }
    let slope = (target.y - screen_h) / dx;
    Some(Line {
        slope,
        intercept: screen_h - slope * corner_x,
    })
}

/// Dot positions along one stream, at most `max_dots` of them. The x-step is
/// the span divided by `max_dots`, floored at one pixel so short shots still
/// march dot by dot.
pub fn dot_positions(
    side: StreamSide,
    track: &StreamTrack,
    target_x: f32,
    screen_w: f32,
    max_dots: usize,
) -> Vec<Vec2> {
    let mut dots = Vec::new();
    let Some(line) = track.line else {
        return dots;
    };
    if max_dots == 0 {
        return dots;
    }
    match side {
        StreamSide::Left => {
            let span = target_x;
            if span <= 0.0 {
                return dots;
            }
            let step = (span / max_dots as f32).max(1.0);
            let mut x = track.phase as f32;
            while x < target_x && dots.len() < max_dots {
                dots.push(Vec2::new(x, line.y_at(x)));
                x += step;
            }
        }
        StreamSide::Right => {
            let span = screen_w - target_x;
            if span <= 0.0 {
                return dots;
            }
            let step = (span / max_dots as f32).max(1.0);
            let mut x = screen_w - track.phase as f32;
            while x > target_x && dots.len() < max_dots {
                dots.push(Vec2::new(x, line.y_at(x)));
                x -= step;
            }
        }
    }
    dots
}

pub struct BulletStreamPlugin;

impl Plugin for BulletStreamPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BulletStreams>()
            .add_systems(
                FixedUpdate,
                step_bullet_streams
                    .in_set(SimStepSet)
                    .run_if(in_state(AppState::Running))
                    .run_if(resource_exists::<FieldDims>),
            )
            .add_systems(
                Update,
                sync_bullet_dots
                    .in_set(VisualSyncSet)
                    .run_if(in_state(AppState::Running))
                    .run_if(resource_exists::<FieldDims>),
            );
    }
}

pub fn step_bullet_streams(
    cfg: Res<GameConfig>,
    dims: Res<FieldDims>,
    crosshair: Res<CrosshairState>,
    mut streams: ResMut<BulletStreams>,
) {
    streams.firing = crosshair.firing;
    if !crosshair.firing {
        streams.left.phase = 0;
        streams.right.phase = 0;
        return;
    }
    let march = cfg.bullets.march_modulus.max(1);
    let target = crosshair.screen_pos;
    streams.left.phase = (streams.left.phase + 1) % march;
    streams.right.phase = (streams.right.phase + 1) % march;
    streams.left.line = stream_line(0.0, target, dims.size.y);
    streams.right.line = stream_line(dims.size.x, target, dims.size.y);
}

pub fn sync_bullet_dots(
    cfg: Res<GameConfig>,
    dims: Res<FieldDims>,
    streams: Res<BulletStreams>,
    crosshair: Res<CrosshairState>,
    mut q: Query<(&BulletDot, &mut Transform, &mut Visibility)>,
) {
    let max_dots = cfg.bullets.max_dots;
    let target_x = crosshair.screen_pos.x;
    let (left, right) = if streams.firing {
        (
            dot_positions(StreamSide::Left, &streams.left, target_x, dims.size.x, max_dots),
            dot_positions(StreamSide::Right, &streams.right, target_x, dims.size.x, max_dots),
        )
    } else {
        (Vec::new(), Vec::new())
    };
    for (dot, mut tf, mut vis) in q.iter_mut() {
        let list = match dot.side {
            StreamSide::Left => &left,
            StreamSide::Right => &right,
        };
        match list.get(dot.index) {
            Some(pos) => {
                *vis = Visibility::Visible;
                tf.translation = screen_to_world(*pos, dims.size).extend(Z_BULLET);
            }
            None => *vis = Visibility::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 960.0;
    const H: f32 = 540.0;

    #[test]
    fn line_joins_corner_and_target() {
        let target = Vec2::new(300.0, 120.0);
        let left = stream_line(0.0, target, H).unwrap();
        assert!((left.y_at(0.0) - H).abs() < 1e-3);
        assert!((left.y_at(target.x) - target.y).abs() < 1e-3);

        let right = stream_line(W, target, H).unwrap();
        assert!((right.y_at(W) - H).abs() < 1e-3);
        assert!((right.y_at(target.x) - target.y).abs() < 1e-3);
    }

    #[test]
    fn vertical_shot_has_no_line() {
        assert!(stream_line(0.0, Vec2::new(0.0, 100.0), H).is_none());
    }

    #[test]
    fn dot_count_is_bounded() {
        let track = StreamTrack {
            phase: 0,
            line: stream_line(0.0, Vec2::new(900.0, 50.0), H),
        };
        let dots = dot_positions(StreamSide::Left, &track, 900.0, W, 50);
        assert!(!dots.is_empty());
        assert!(dots.len() <= 50);

        // short span: one dot per pixel, still under the cap
        let near = StreamTrack {
            phase: 0,
            line: stream_line(0.0, Vec2::new(30.0, 500.0), H),
        };
        let dots = dot_positions(StreamSide::Left, &near, 30.0, W, 50);
        assert_eq!(dots.len(), 30);
    }

    #[test]
    fn phase_offsets_the_first_dot() {
        let line = stream_line(0.0, Vec2::new(600.0, 200.0), H);
        let still = StreamTrack { phase: 0, line };
        let marched = StreamTrack { phase: 3, line };
        let a = dot_positions(StreamSide::Left, &still, 600.0, W, 50);
        let b = dot_positions(StreamSide::Left, &marched, 600.0, W, 50);
        assert_eq!(a[0].x, 0.0);
        assert_eq!(b[0].x, 3.0);
    }

    #[test]
    fn right_stream_marches_inward_from_the_edge() {
        let line = stream_line(W, Vec2::new(200.0, 200.0), H);
        let track = StreamTrack { phase: 2, line };
        let dots = dot_positions(StreamSide::Right, &track, 200.0, W, 50);
        assert_eq!(dots[0].x, W - 2.0);
        assert!(dots.iter().all(|d| d.x > 200.0));
    }
}
