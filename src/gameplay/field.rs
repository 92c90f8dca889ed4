//! Field lifecycle: everything on screen is (re)built from the window
//! dimensions when gameplay starts, and torn down when it ends. A resize mid-
//! game drops back to the intro screen, mirroring a wholesale re-layout.

use bevy::prelude::*;
use bevy::window::WindowResized;
use rand::Rng;

use crate::app::state::AppState;
use crate::core::components::{Balloon, BulletDot, Cloud, Crosshair, FieldEntity, PopFlash, StreamSide};
use crate::core::config::GameConfig;
use crate::gameplay::GameRng;
use crate::rendering::camera::camera::sprite_center_world;
use crate::rendering::sprites::{balloon_frame_rect, BalloonFrame, SpriteMetrics, SpriteSheets};

// Draw order, bottom to top (the reticle sits under everything).
pub const Z_CROSSHAIR: f32 = 1.0;
pub const Z_BULLET: f32 = 2.0;
pub const Z_CLOUD: f32 = 3.0;
pub const Z_BALLOON: f32 = 4.0;
pub const Z_FLASH: f32 = 5.0;

/// Logical window size the current field was laid out for.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FieldDims {
    pub size: Vec2,
}

/// One balloon per frame-width column across the window.
pub fn balloon_slots(screen_w: f32, frame_w: f32) -> usize {
    if frame_w <= 0.0 {
        return 0;
    }
    (screen_w / frame_w) as usize
}

/// One cloud per `cloud_h + gap` row down the window.
pub fn cloud_slots(screen_h: f32, cloud_h: f32, gap: f32) -> usize {
    let pitch = cloud_h + gap;
    if pitch <= 0.0 {
        return 0;
    }
    (screen_h / pitch) as usize
}

pub struct FieldPlugin;

impl Plugin for FieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Running), spawn_field)
            .add_systems(OnExit(AppState::Running), despawn_field)
            .add_systems(Update, watch_resize);
    }
}

fn spawn_field(
    mut commands: Commands,
    windows: Query<&Window>,
    cfg: Res<GameConfig>,
    sheets: Res<SpriteSheets>,
    metrics: Res<SpriteMetrics>,
    mut rng: ResMut<GameRng>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    commands.insert_resource(FieldDims { size });

    let frame = metrics.balloon_frame();
    let balloon_count = balloon_slots(size.x, frame.x);
    for i in 0..balloon_count {
        let strip = i % sheets.balloon_strips.len();
        commands.spawn((
            FieldEntity,
            Balloon::at_slot(i as f32 * frame.x),
            Sprite {
                image: sheets.balloon_strips[strip].clone(),
                rect: Some(balloon_frame_rect(metrics.balloon_strip, BalloonFrame::Intact)),
                ..default()
            },
            Transform::from_xyz(0.0, -size.y, Z_BALLOON),
            Visibility::Hidden,
        ));
    }

    let cloud_count = cloud_slots(size.y, metrics.cloud.y, cfg.clouds.vertical_gap);
    let mut y = cfg.clouds.top_margin;
    for _ in 0..cloud_count {
        let x = -rng.0.gen_range(0.0..size.x.max(1.0));
        let world = sprite_center_world(Vec2::new(x, y), metrics.cloud, size);
        commands.spawn((
            FieldEntity,
            Cloud { x, y },
            Sprite::from_image(sheets.cloud.clone()),
            Transform::from_translation(world.extend(Z_CLOUD)),
        ));
        y += metrics.cloud.y + cfg.clouds.vertical_gap;
    }

    commands.spawn((
        FieldEntity,
        Crosshair,
        Sprite::from_image(sheets.crosshair.clone()),
        Transform::from_xyz(0.0, 0.0, Z_CROSSHAIR),
        Visibility::Hidden,
    ));
    commands.spawn((
        FieldEntity,
        PopFlash,
        Sprite::from_image(sheets.popped.clone()),
        Transform::from_xyz(0.0, 0.0, Z_FLASH),
        Visibility::Hidden,
    ));
    for side in [StreamSide::Left, StreamSide::Right] {
        for index in 0..cfg.bullets.max_dots {
            commands.spawn((
                FieldEntity,
                BulletDot { side, index },
                Sprite::from_image(sheets.bullet.clone()),
                Transform::from_xyz(0.0, 0.0, Z_BULLET),
                Visibility::Hidden,
            ));
        }
    }

    info!(
        "field spawned: {balloon_count} balloons, {cloud_count} clouds in {}x{} px",
        size.x, size.y
    );
}

fn despawn_field(mut commands: Commands, q: Query<Entity, With<FieldEntity>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
    commands.remove_resource::<FieldDims>();
}

fn watch_resize(
    mut events: EventReader<WindowResized>,
    state: Res<State<AppState>>,
    mut next: ResMut<NextState<AppState>>,
    dims: Option<Res<FieldDims>>,
) {
    for ev in events.read() {
        let new = Vec2::new(ev.width, ev.height);
        let changed = dims.as_ref().map_or(true, |d| d.size != new);
        if changed && *state.get() == AppState::Running {
            info!("window resized to {}x{}; rebuilding field via intro", ev.width, ev.height);
            next.set(AppState::Intro);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balloon_row_fills_the_width() {
        assert_eq!(balloon_slots(960.0, 32.0), 30);
        assert_eq!(balloon_slots(950.0, 32.0), 29);
        assert_eq!(balloon_slots(960.0, 0.0), 0);
    }

    #[test]
    fn cloud_column_fills_the_height() {
        assert_eq!(cloud_slots(540.0, 40.0, 30.0), 7);
        assert_eq!(cloud_slots(69.0, 40.0, 30.0), 0);
    }
}
