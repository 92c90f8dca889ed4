use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 540.0,
            title: "Infinite Balloons/Infinite Bullets".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed simulation rate; gameplay speeds are expressed per step.
    pub step_hz: f64,
}
impl Default for SimConfig {
    fn default() -> Self {
        Self { step_hz: 60.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BalloonConfig {
    /// Pixels climbed per step while floating.
    pub rise_speed: f32,
    /// Pixels dropped per step while falling.
    pub fall_speed: f32,
    /// Steps the burst flash is held before the remnant starts falling.
    pub pop_steps: u32,
    /// Launch roll: a tethered balloon lifts off when
    /// `rng(0..launch_die) % launch_divisor == 0`.
    pub launch_die: u32,
    pub launch_divisor: u32,
    /// Full period (in dropped pixels) of the falling-frame flutter.
    pub flutter_period: f32,
}
impl Default for BalloonConfig {
    fn default() -> Self {
        Self {
            rise_speed: 1.0,
            fall_speed: 1.0,
            pop_steps: 10,
            launch_die: 100,
            launch_divisor: 11,
            flutter_period: 20.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BulletConfig {
    /// Upper bound on dots drawn per stream.
    pub max_dots: usize,
    /// The marching phase cycles `0..march_modulus` while firing.
    pub march_modulus: u32,
}
impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            max_dots: 50,
            march_modulus: 10,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CloudConfig {
    /// Pixels drifted rightward per step.
    pub drift_speed: f32,
    /// Vertical spacing between cloud rows.
    pub vertical_gap: f32,
    /// Offset of the first cloud row from the top edge.
    pub top_margin: f32,
}
impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            drift_speed: 1.0,
            vertical_gap: 30.0,
            top_margin: 30.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub sim: SimConfig,
    pub balloons: BalloonConfig,
    pub bullets: BulletConfig,
    pub clouds: CloudConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    #[allow(dead_code)]
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Merge every readable file in `paths` (later files win per key) and
    /// deserialize the result. Unreadable or unparsable files are reported,
    /// never fatal.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        let mut replaced = false;
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                merge_value(ev, incoming.take().unwrap());
                                replaced = true;
                                break;
                            }
                        }
                        if !replaced {
                            bm.insert(k, incoming.unwrap());
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        if let Some(val) = merged {
            match val.clone().into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => (GameConfig::default(), used, {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    evec
                }),
            }
        } else {
            (GameConfig::default(), used, errors)
        }
    }

    /// Non-fatal sanity pass; each returned string is logged as a warning.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.sim.step_hz <= 0.0 {
            w.push(format!(
                "sim.step_hz {} must be > 0; gameplay will not advance",
                self.sim.step_hz
            ));
        } else if self.sim.step_hz > 1000.0 {
            w.push(format!("sim.step_hz {} very high", self.sim.step_hz));
        }
        let b = &self.balloons;
        if b.rise_speed <= 0.0 {
            w.push("balloons.rise_speed must be > 0; balloons never climb".into());
        }
        if b.fall_speed <= 0.0 {
            w.push("balloons.fall_speed must be > 0; popped balloons hang forever".into());
        }
        if b.pop_steps == 0 {
            w.push("balloons.pop_steps is 0; burst flash will never be visible".into());
        }
        if b.launch_divisor == 0 {
            w.push("balloons.launch_divisor must be > 0 (used as a modulus)".into());
        }
        if b.launch_die == 0 {
            w.push("balloons.launch_die must be > 0 (rng range)".into());
        } else if b.launch_divisor > b.launch_die {
            w.push(format!(
                "balloons.launch_divisor {} exceeds launch_die {}; only roll 0 launches",
                b.launch_divisor, b.launch_die
            ));
        }
        if b.flutter_period <= 0.0 {
            w.push("balloons.flutter_period must be > 0".into());
        }
        if self.bullets.max_dots == 0 {
            w.push("bullets.max_dots is 0; streams will be invisible".into());
        }
        if self.bullets.march_modulus == 0 {
            w.push("bullets.march_modulus must be > 0 (phase wraps modulo it)".into());
        }
        if self.clouds.drift_speed < 0.0 {
            w.push("clouds.drift_speed negative; clouds drift against the wrap direction".into());
        }
        if self.clouds.vertical_gap < 0.0 {
            w.push("clouds.vertical_gap negative -> overlapping rows".into());
        }
        w
    }
}
