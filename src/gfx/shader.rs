use std::{fs, path::Path};

use glam::Mat4;

use super::{Device, GfxError, LocationKind, ShaderStage};

/// Reads one shader stage from disk.
pub fn load_source(path: &Path) -> Result<String, GfxError> {
    log::info!("{}: Loading shader source", path.display());
    fs::read_to_string(path).map_err(|source| GfxError::ResourceLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// A linked vertex + fragment program.
pub struct Shader<D: Device> {
    program: D::Program,
}

impl<D: Device> Shader<D> {
    /// Loads and compiles the vertex stage, then the fragment stage, then links.
    ///
    /// A failure in the fragment file is reported after the vertex stage has
    /// already compiled, so the log reads in load order.
    pub fn from_files(device: &D, vtx_path: &Path, frag_path: &Path) -> Result<Self, GfxError> {
        let vtx_src = load_source(vtx_path)?;
        let vtx = device.compile_shader(ShaderStage::Vertex, &vtx_src)?;
        log::debug!("{}: Compiled", vtx_path.display());

        let frag = load_source(frag_path)
            .and_then(|frag_src| device.compile_shader(ShaderStage::Fragment, &frag_src));
        let frag = match frag {
            Ok(frag) => frag,
            Err(e) => {
                device.delete_shader(vtx);
                return Err(e);
            }
        };
        log::debug!("{}: Compiled", frag_path.display());

        Self::link(device, vtx, frag)
    }

    #[allow(dead_code)]
    pub fn from_src(device: &D, vtx: &str, frag: &str) -> Result<Self, GfxError> {
        let vtx = device.compile_shader(ShaderStage::Vertex, vtx)?;
        let frag = match device.compile_shader(ShaderStage::Fragment, frag) {
            Ok(frag) => frag,
            Err(e) => {
                device.delete_shader(vtx);
                return Err(e);
            }
        };

        Self::link(device, vtx, frag)
    }

    fn link(device: &D, vtx: D::Shader, frag: D::Shader) -> Result<Self, GfxError> {
        let program = device.link_program(vtx, frag);

        // The program keeps its own copy of the binaries once linked
        device.delete_shader(vtx);
        device.delete_shader(frag);

        let program = program?;
        log::info!("Shader program linked");
        Ok(Self { program })
    }

    pub fn attrib_location(&self, device: &D, name: &str) -> Result<u32, GfxError> {
        device
            .attrib_location(self.program, name)
            .ok_or_else(|| GfxError::MissingLocation {
                kind: LocationKind::Attribute,
                name: name.to_owned(),
            })
    }

    pub fn uniform_location(&self, device: &D, name: &str) -> Result<D::UniformLocation, GfxError> {
        device
            .uniform_location(self.program, name)
            .ok_or_else(|| GfxError::MissingLocation {
                kind: LocationKind::Uniform,
                name: name.to_owned(),
            })
    }

    pub fn set_mat4(&self, device: &D, location: &D::UniformLocation, uniform: &Mat4) {
        device.set_uniform_mat4(location, uniform);
    }

    pub fn use_program(&self, device: &D) {
        device.use_program(self.program);
    }

    pub fn destroy(&self, device: &D) {
        device.delete_program(self.program);
    }
}
