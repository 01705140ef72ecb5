use std::path::PathBuf;

use glam::{Vec2, Vec3, Vec4};

use crate::gfx::camera::{Camera, Projection};

/// Window size hint. The drawable is squared off to the shorter side.
pub const WINDOW_WIDTH: f32 = 1600f32;
pub const WINDOW_HEIGHT: f32 = 900f32;

pub const VERTEX_SHADER_PATH: &str = "shader/main.vert";
pub const FRAGMENT_SHADER_PATH: &str = "shader/main.frag";

pub const POSITION_ATTRIB: &str = "position";
pub const COLOR_ATTRIB: &str = "color";
pub const MVP_UNIFORM: &str = "mvpMatrix";

/// Side length of the square drawable for a window of the given size.
pub fn surface_size(width: f32, height: f32) -> f32 {
    width.min(height)
}

/// Everything the viewer needs to know before setup. There is no file or CLI
/// layer on top of this; `Default` is the configuration.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,

    pub plane_size: Vec2,
    pub plane_color: Vec4,
    pub clear_color: Vec4,

    pub camera: Camera,
    /// The aspect stored here is replaced by the viewport's at setup.
    pub projection: Projection,
    /// Model rotation axis. Speed is fixed at one radian per second of wall time.
    pub rotation_axis: Vec3,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            vertex_shader: PathBuf::from(VERTEX_SHADER_PATH),
            fragment_shader: PathBuf::from(FRAGMENT_SHADER_PATH),
            plane_size: Vec2::ONE,
            plane_color: Vec4::new(1.0, 0.3, 0.1, 1.0),
            clear_color: Vec4::new(0.3, 0.3, 0.3, 1.0),
            camera: Camera::default(),
            projection: Projection::default(),
            rotation_axis: Vec3::Y,
        }
    }
}
