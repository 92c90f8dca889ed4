use std::fs;

use balloon_barrage::core::config::config::GameConfig;

#[test]
fn layered_override_wins_per_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("base.ron");
    let over = dir.path().join("override.ron");
    fs::write(&base, "(window: (width: 800.0, height: 600.0))").expect("write base");
    fs::write(&over, "(window: (width: 1024.0), balloons: (pop_steps: 5))").expect("write override");

    let (cfg, used, errors) = GameConfig::load_layered([&base, &over]);
    assert_eq!(used.len(), 2);
    assert!(errors.is_empty(), "unexpected: {errors:?}");
    assert_eq!(cfg.window.width, 1024.0, "later layer wins");
    assert_eq!(cfg.window.height, 600.0, "untouched keys survive the merge");
    assert_eq!(cfg.balloons.pop_steps, 5);
    assert_eq!(cfg.bullets.max_dots, 50, "unmentioned sections default");
}

#[test]
fn missing_file_is_reported_not_fatal() {
    let (cfg, used, errors) = GameConfig::load_layered(["/nonexistent/game.ron"]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("read error"));
    assert_eq!(cfg, GameConfig::default());
}

#[test]
fn unparsable_layer_is_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = dir.path().join("good.ron");
    let bad = dir.path().join("bad.ron");
    fs::write(&good, "(window: (width: 640.0))").expect("write good");
    fs::write(&bad, "(window: (width: ").expect("write bad");

    let (cfg, used, errors) = GameConfig::load_layered([&good, &bad]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("parse error"));
    assert_eq!(cfg.window.width, 640.0);
}

#[test]
fn auto_close_uses_camel_case_key() {
    let cfg: GameConfig = ron::from_str("(window: (autoClose: 2.5))").expect("parse");
    assert_eq!(cfg.window.auto_close, 2.5);
}
