use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Screen-space point (origin top-left, y down) to world space (origin center,
/// y up) for a window of logical size `size`.
pub fn screen_to_world(screen: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(screen.x - size.x * 0.5, size.y * 0.5 - screen.y)
}

/// World position of a center-anchored sprite whose screen-space top-left
/// corner sits at `top_left`.
pub fn sprite_center_world(top_left: Vec2, sprite_size: Vec2, screen_size: Vec2) -> Vec2 {
    screen_to_world(top_left + sprite_size * 0.5, screen_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_corners_map_to_world_corners() {
        let size = Vec2::new(960.0, 540.0);
        assert_eq!(screen_to_world(Vec2::ZERO, size), Vec2::new(-480.0, 270.0));
        assert_eq!(screen_to_world(size, size), Vec2::new(480.0, -270.0));
        assert_eq!(screen_to_world(size * 0.5, size), Vec2::ZERO);
    }

    #[test]
    fn sprite_center_accounts_for_anchor() {
        let size = Vec2::new(100.0, 100.0);
        // 10x10 sprite at the screen-space origin: center lands 5px in.
        let w = sprite_center_world(Vec2::ZERO, Vec2::splat(10.0), size);
        assert_eq!(w, Vec2::new(-45.0, 45.0));
    }
}
