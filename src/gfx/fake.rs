//! A recording stand-in for the GL context.

use std::cell::{Cell, RefCell};

use glam::{Mat4, Vec4};

use super::{Device, GfxError, ShaderStage};

/// Fragment source the fake refuses to compile.
pub const BROKEN: &str = "void main() { fragColor = ; }";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Compile(ShaderStage),
    Link,
    CreateBuffer(usize),
    CreateVertexArray,
    EnableAttribute { location: u32, components: i32 },
    BindIndexBuffer,
    UseProgram,
    Clear(Vec4),
    SetMat4(Mat4),
    Draw { index_count: usize },
    Delete,
}

#[derive(Default)]
pub struct FakeDevice {
    calls: RefCell<Vec<Call>>,
    next_handle: Cell<u32>,
    live: Cell<i32>,
    live_shaders: Cell<i32>,
    fail_link: bool,
}

impl FakeDevice {
    pub fn failing_link(mut self) -> Self {
        self.fail_link = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn draws(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Draw { .. }))
            .count()
    }

    /// Handles created and not yet deleted.
    pub fn live_handles(&self) -> i32 {
        self.live.get()
    }

    pub fn live_shaders(&self) -> i32 {
        self.live_shaders.get()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn handle(&self) -> u32 {
        let handle = self.next_handle.get() + 1;
        self.next_handle.set(handle);
        self.live.set(self.live.get() + 1);
        handle
    }

    fn release(&self) {
        self.live.set(self.live.get() - 1);
        self.record(Call::Delete);
    }
}

impl Device for FakeDevice {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type UniformLocation = u32;

    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<u32, GfxError> {
        self.record(Call::Compile(stage));
        let balanced = source.matches('{').count() == source.matches('}').count();
        if !balanced || source.contains("= ;") {
            return Err(GfxError::ShaderCompile {
                stage,
                log: "0:1: error: syntax error".into(),
            });
        }
        self.live_shaders.set(self.live_shaders.get() + 1);
        Ok(self.handle())
    }

    fn link_program(&self, _vertex: u32, _fragment: u32) -> Result<u32, GfxError> {
        self.record(Call::Link);
        if self.fail_link {
            return Err(GfxError::Link {
                log: "error: varying vColor not written".into(),
            });
        }
        Ok(self.handle())
    }

    fn attrib_location(&self, _program: u32, name: &str) -> Option<u32> {
        match name {
            "position" => Some(0),
            "color" => Some(1),
            _ => None,
        }
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<u32> {
        (name == "mvpMatrix").then_some(0)
    }

    fn create_vertex_buffer(&self, data: &[f32]) -> Result<u32, GfxError> {
        self.record(Call::CreateBuffer(data.len()));
        Ok(self.handle())
    }

    fn create_index_buffer(&self, data: &[u16]) -> Result<u32, GfxError> {
        self.record(Call::CreateBuffer(data.len()));
        Ok(self.handle())
    }

    fn create_vertex_array(&self) -> Result<u32, GfxError> {
        self.record(Call::CreateVertexArray);
        Ok(self.handle())
    }

    fn enable_attribute(&self, _vao: u32, _buffer: u32, location: u32, components: i32) {
        self.record(Call::EnableAttribute {
            location,
            components,
        });
    }

    fn bind_index_buffer(&self, _vao: u32, _buffer: u32) {
        self.record(Call::BindIndexBuffer);
    }

    fn use_program(&self, _program: u32) {
        self.record(Call::UseProgram);
    }

    fn clear(&self, color: Vec4) {
        self.record(Call::Clear(color));
    }

    fn set_uniform_mat4(&self, _location: &u32, matrix: &Mat4) {
        self.record(Call::SetMat4(*matrix));
    }

    fn draw_indexed_triangles(&self, _vao: u32, index_count: usize) {
        self.record(Call::Draw { index_count });
    }

    fn delete_shader(&self, _shader: u32) {
        self.live_shaders.set(self.live_shaders.get() - 1);
        self.release();
    }

    fn delete_program(&self, _program: u32) {
        self.release();
    }

    fn delete_buffer(&self, _buffer: u32) {
        self.release();
    }

    fn delete_vertex_array(&self, _vao: u32) {
        self.release();
    }
}
