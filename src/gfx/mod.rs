pub mod camera;
pub mod device;
pub mod error;
pub mod geometry;
pub mod gl;
pub mod math;
pub mod mesh;
pub mod shader;

#[cfg(test)]
pub mod fake;

pub use device::{Device, ShaderStage};
pub use error::{GfxError, LocationKind};
pub use gl::GlDevice;
pub use mesh::{AttribLocations, Mesh};
pub use shader::Shader;
