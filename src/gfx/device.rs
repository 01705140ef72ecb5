use glam::{Mat4, Vec4};

use super::GfxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// The slice of a GL-style rasterization API the viewer needs.
///
/// Handles are plain copyable ids owned by the driver. Nothing here is
/// reference counted: whoever creates a handle is responsible for handing it
/// back through one of the `delete_*` calls.
pub trait Device {
    type Shader: Copy;
    type Program: Copy;
    type Buffer: Copy;
    type VertexArray: Copy;
    type UniformLocation: Clone;

    /// Compiles `source` as a single stage. The error carries the driver log.
    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<Self::Shader, GfxError>;

    /// Links both stages. The stages are detached again once linking succeeds.
    fn link_program(
        &self,
        vertex: Self::Shader,
        fragment: Self::Shader,
    ) -> Result<Self::Program, GfxError>;

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation>;

    fn create_vertex_buffer(&self, data: &[f32]) -> Result<Self::Buffer, GfxError>;
    fn create_index_buffer(&self, data: &[u16]) -> Result<Self::Buffer, GfxError>;
    fn create_vertex_array(&self) -> Result<Self::VertexArray, GfxError>;

    /// Points `location` at tightly packed `components`-wide floats in `buffer`.
    fn enable_attribute(
        &self,
        vao: Self::VertexArray,
        buffer: Self::Buffer,
        location: u32,
        components: i32,
    );
    fn bind_index_buffer(&self, vao: Self::VertexArray, buffer: Self::Buffer);

    fn use_program(&self, program: Self::Program);
    fn clear(&self, color: Vec4);
    fn set_uniform_mat4(&self, location: &Self::UniformLocation, matrix: &Mat4);
    fn draw_indexed_triangles(&self, vao: Self::VertexArray, index_count: usize);

    fn delete_shader(&self, shader: Self::Shader);
    fn delete_program(&self, program: Self::Program);
    fn delete_buffer(&self, buffer: Self::Buffer);
    fn delete_vertex_array(&self, vao: Self::VertexArray);
}
