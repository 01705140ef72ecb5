use std::sync::Arc;

use eframe::glow::{self, HasContext as _};
use glam::{Mat4, Vec4};
use zerocopy::AsBytes as _;

use super::{Device, GfxError, ShaderStage};

impl ShaderStage {
    fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

/// The shared GL context eframe creates for the window.
#[derive(Clone)]
pub struct GlDevice(pub Arc<glow::Context>);

fn allocation(what: &'static str) -> impl FnOnce(String) -> GfxError {
    move |reason| GfxError::Allocation { what, reason }
}

impl Device for GlDevice {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;
    type VertexArray = glow::VertexArray;
    type UniformLocation = glow::UniformLocation;

    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<Self::Shader, GfxError> {
        unsafe {
            let shader = self
                .0
                .create_shader(stage.gl_enum())
                .map_err(allocation("shader"))?;
            self.0.shader_source(shader, source);
            self.0.compile_shader(shader);

            if !self.0.get_shader_compile_status(shader) {
                let log = self.0.get_shader_info_log(shader);
                self.0.delete_shader(shader);
                return Err(GfxError::ShaderCompile { stage, log });
            }

            Ok(shader)
        }
    }

    fn link_program(
        &self,
        vertex: Self::Shader,
        fragment: Self::Shader,
    ) -> Result<Self::Program, GfxError> {
        unsafe {
            let program = self.0.create_program().map_err(allocation("program"))?;
            self.0.attach_shader(program, vertex);
            self.0.attach_shader(program, fragment);
            self.0.link_program(program);

            if !self.0.get_program_link_status(program) {
                let log = self.0.get_program_info_log(program);
                self.0.delete_program(program);
                return Err(GfxError::Link { log });
            }

            self.0.detach_shader(program, vertex);
            self.0.detach_shader(program, fragment);

            Ok(program)
        }
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        unsafe { self.0.get_attrib_location(program, name) }
    }

    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation> {
        unsafe { self.0.get_uniform_location(program, name) }
    }

    fn create_vertex_buffer(&self, data: &[f32]) -> Result<Self::Buffer, GfxError> {
        unsafe {
            let vbo = self.0.create_buffer().map_err(allocation("vertex buffer"))?;
            self.0.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            self.0.buffer_data_u8_slice(glow::ARRAY_BUFFER, data.as_bytes(), glow::STATIC_DRAW);
            self.0.bind_buffer(glow::ARRAY_BUFFER, None);
            Ok(vbo)
        }
    }

    fn create_index_buffer(&self, data: &[u16]) -> Result<Self::Buffer, GfxError> {
        unsafe {
            let ibo = self.0.create_buffer().map_err(allocation("index buffer"))?;
            self.0.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ibo));
            self.0.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                data.as_bytes(),
                glow::STATIC_DRAW,
            );
            self.0.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
            Ok(ibo)
        }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, GfxError> {
        unsafe { self.0.create_vertex_array().map_err(allocation("vertex array")) }
    }

    fn enable_attribute(
        &self,
        vao: Self::VertexArray,
        buffer: Self::Buffer,
        location: u32,
        components: i32,
    ) {
        unsafe {
            self.0.bind_vertex_array(Some(vao));
            self.0.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.0.enable_vertex_attrib_array(location);
            self.0.vertex_attrib_pointer_f32(location, components, glow::FLOAT, false, 0, 0);
        }
    }

    fn bind_index_buffer(&self, vao: Self::VertexArray, buffer: Self::Buffer) {
        unsafe {
            self.0.bind_vertex_array(Some(vao));
            self.0.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(buffer));
        }
    }

    fn use_program(&self, program: Self::Program) {
        unsafe { self.0.use_program(Some(program)) }
    }

    fn clear(&self, color: Vec4) {
        unsafe {
            self.0.clear_color(color.x, color.y, color.z, color.w);
            self.0.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    fn set_uniform_mat4(&self, location: &Self::UniformLocation, matrix: &Mat4) {
        unsafe { self.0.uniform_matrix_4_f32_slice(Some(location), false, &matrix.to_cols_array()) }
    }

    fn draw_indexed_triangles(&self, vao: Self::VertexArray, index_count: usize) {
        unsafe {
            self.0.bind_vertex_array(Some(vao));
            self.0.draw_elements(glow::TRIANGLES, index_count as i32, glow::UNSIGNED_SHORT, 0);
            self.0.bind_vertex_array(None);
        }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.0.delete_shader(shader) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.0.delete_program(program) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.0.delete_buffer(buffer) }
    }

    fn delete_vertex_array(&self, vao: Self::VertexArray) {
        unsafe { self.0.delete_vertex_array(vao) }
    }
}
