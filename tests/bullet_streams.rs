use balloon_barrage::core::components::StreamSide;
use balloon_barrage::core::config::config::GameConfig;
use balloon_barrage::gameplay::bullet::{dot_positions, step_bullet_streams, BulletStreams};
use balloon_barrage::gameplay::field::FieldDims;
use balloon_barrage::interaction::control::CrosshairState;
use bevy::prelude::*;

const SCREEN: Vec2 = Vec2::new(960.0, 540.0);

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.insert_resource(FieldDims { size: SCREEN });
    app.insert_resource(CrosshairState::default());
    app.init_resource::<BulletStreams>();
    app.add_systems(Update, step_bullet_streams);
    app
}

fn aim(app: &mut App, pos: Vec2, firing: bool) {
    let mut cross = app.world_mut().resource_mut::<CrosshairState>();
    cross.screen_pos = pos;
    cross.firing = firing;
}

#[test]
fn both_streams_target_the_crosshair() {
    let mut app = test_app();
    let target = Vec2::new(300.0, 120.0);
    aim(&mut app, target, true);
    app.update();

    let streams = *app.world().resource::<BulletStreams>();
    assert!(streams.firing);
    let left = streams.left.line.expect("left line");
    let right = streams.right.line.expect("right line");
    assert!((left.y_at(0.0) - SCREEN.y).abs() < 1e-3);
    assert!((left.y_at(target.x) - target.y).abs() < 1e-3);
    assert!((right.y_at(SCREEN.x) - SCREEN.y).abs() < 1e-3);
    assert!((right.y_at(target.x) - target.y).abs() < 1e-3);
}

#[test]
fn march_phase_advances_and_wraps() {
    let mut app = test_app();
    aim(&mut app, Vec2::new(400.0, 200.0), true);
    for _ in 0..3 {
        app.update();
    }
    assert_eq!(app.world().resource::<BulletStreams>().left.phase, 3);

    let modulus = app.world().resource::<GameConfig>().bullets.march_modulus;
    for _ in 0..(modulus as usize - 3) {
        app.update();
    }
    assert_eq!(app.world().resource::<BulletStreams>().left.phase, 0);
}

#[test]
fn releasing_the_trigger_resets_the_phase() {
    let mut app = test_app();
    aim(&mut app, Vec2::new(400.0, 200.0), true);
    app.update();
    app.update();
    assert_eq!(app.world().resource::<BulletStreams>().right.phase, 2);

    aim(&mut app, Vec2::new(400.0, 200.0), false);
    app.update();
    let streams = *app.world().resource::<BulletStreams>();
    assert!(!streams.firing);
    assert_eq!(streams.left.phase, 0);
    assert_eq!(streams.right.phase, 0);
}

#[test]
fn dots_stay_on_their_half_of_the_screen() {
    let mut app = test_app();
    let target = Vec2::new(480.0, 100.0);
    aim(&mut app, target, true);
    app.update();

    let streams = *app.world().resource::<BulletStreams>();
    let cfg = app.world().resource::<GameConfig>().clone();
    let left = dot_positions(StreamSide::Left, &streams.left, target.x, SCREEN.x, cfg.bullets.max_dots);
    let right = dot_positions(StreamSide::Right, &streams.right, target.x, SCREEN.x, cfg.bullets.max_dots);
    assert!(left.len() <= cfg.bullets.max_dots);
    assert!(right.len() <= cfg.bullets.max_dots);
    assert!(left.iter().all(|d| d.x < target.x));
    assert!(right.iter().all(|d| d.x > target.x));
}
