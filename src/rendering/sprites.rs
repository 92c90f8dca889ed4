//! Embedded sprite assets: PNG bytes compiled into the binary, decoded once at
//! startup. Decode failure is fatal before the app window even opens.

use anyhow::Context;
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

const BLUE_BALLOON: &[u8] = include_bytes!("../../assets/sprites/blue_balloon.png");
const RED_BALLOON: &[u8] = include_bytes!("../../assets/sprites/red_balloon.png");
const YELLOW_BALLOON: &[u8] = include_bytes!("../../assets/sprites/yellow_balloon.png");
const BALLOON_POPPED: &[u8] = include_bytes!("../../assets/sprites/balloon_popped.png");
const BULLET: &[u8] = include_bytes!("../../assets/sprites/bullet.png");
const CLOUD: &[u8] = include_bytes!("../../assets/sprites/cloud.png");
const CROSSHAIR: &[u8] = include_bytes!("../../assets/sprites/crosshair.png");

/// Number of frames in a balloon strip: intact + two deflated flutter frames.
pub const BALLOON_FRAMES: u32 = 3;

#[derive(Debug, Clone)]
pub struct DecodedSprite {
    pub size: UVec2,
    pub rgba: Vec<u8>,
}

/// CPU-side decode results, produced in `main` before the app starts.
#[derive(Resource, Debug, Clone)]
pub struct DecodedSprites {
    pub balloon_strips: [DecodedSprite; 3],
    pub popped: DecodedSprite,
    pub bullet: DecodedSprite,
    pub cloud: DecodedSprite,
    pub crosshair: DecodedSprite,
}

fn decode_png(name: &str, bytes: &[u8]) -> anyhow::Result<DecodedSprite> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .with_context(|| format!("sprite '{name}'"))?
        .to_rgba8();
    Ok(DecodedSprite {
        size: UVec2::new(img.width(), img.height()),
        rgba: img.into_raw(),
    })
}

impl DecodedSprites {
    pub fn decode_embedded() -> anyhow::Result<Self> {
        Ok(Self {
            balloon_strips: [
                decode_png("blue_balloon", BLUE_BALLOON)?,
                decode_png("red_balloon", RED_BALLOON)?,
                decode_png("yellow_balloon", YELLOW_BALLOON)?,
            ],
            popped: decode_png("balloon_popped", BALLOON_POPPED)?,
            bullet: decode_png("bullet", BULLET)?,
            cloud: decode_png("cloud", CLOUD)?,
            crosshair: decode_png("crosshair", CROSSHAIR)?,
        })
    }
}

/// GPU texture handles for every sprite.
#[derive(Resource, Debug, Clone)]
pub struct SpriteSheets {
    pub balloon_strips: [Handle<Image>; 3],
    pub popped: Handle<Image>,
    pub bullet: Handle<Image>,
    pub cloud: Handle<Image>,
    pub crosshair: Handle<Image>,
}

/// Logical sprite sizes in pixels, usable without asset access (sim systems
/// and tests read these, never the textures).
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpriteMetrics {
    pub balloon_strip: Vec2,
    pub popped: Vec2,
    pub bullet: Vec2,
    pub cloud: Vec2,
    pub crosshair: Vec2,
}

impl SpriteMetrics {
    /// Size of one balloon frame: the strip sliced into equal thirds.
    pub fn balloon_frame(&self) -> Vec2 {
        Vec2::new(self.balloon_strip.x / BALLOON_FRAMES as f32, self.balloon_strip.y)
    }
}

/// Which third of a balloon strip to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalloonFrame {
    Intact,
    DeflatedA,
    DeflatedB,
}

impl BalloonFrame {
    fn index(self) -> f32 {
        match self {
            BalloonFrame::Intact => 0.0,
            BalloonFrame::DeflatedA => 1.0,
            BalloonFrame::DeflatedB => 2.0,
        }
    }
}

/// Texture-space rect of one frame within a balloon strip.
pub fn balloon_frame_rect(strip: Vec2, frame: BalloonFrame) -> Rect {
    let w = strip.x / BALLOON_FRAMES as f32;
    let x0 = w * frame.index();
    Rect::new(x0, 0.0, x0 + w, strip.y)
}

pub struct SpriteAssetsPlugin;

impl Plugin for SpriteAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, upload_sprites);
    }
}

fn to_image(sprite: &DecodedSprite) -> Image {
    Image::new(
        Extent3d {
            width: sprite.size.x,
            height: sprite.size.y,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        sprite.rgba.clone(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

fn upload_sprites(
    decoded: Res<DecodedSprites>,
    mut images: ResMut<Assets<Image>>,
    mut commands: Commands,
) {
    let strips = &decoded.balloon_strips;
    let sheets = SpriteSheets {
        balloon_strips: [
            images.add(to_image(&strips[0])),
            images.add(to_image(&strips[1])),
            images.add(to_image(&strips[2])),
        ],
        popped: images.add(to_image(&decoded.popped)),
        bullet: images.add(to_image(&decoded.bullet)),
        cloud: images.add(to_image(&decoded.cloud)),
        crosshair: images.add(to_image(&decoded.crosshair)),
    };
    let metrics = SpriteMetrics {
        balloon_strip: strips[0].size.as_vec2(),
        popped: decoded.popped.size.as_vec2(),
        bullet: decoded.bullet.size.as_vec2(),
        cloud: decoded.cloud.size.as_vec2(),
        crosshair: decoded.crosshair.size.as_vec2(),
    };
    info!(
        "sprites uploaded: balloon strip {}x{} ({} frames), cloud {}x{}",
        metrics.balloon_strip.x,
        metrics.balloon_strip.y,
        BALLOON_FRAMES,
        metrics.cloud.x,
        metrics.cloud.y
    );
    commands.insert_resource(sheets);
    commands.insert_resource(metrics);
}
