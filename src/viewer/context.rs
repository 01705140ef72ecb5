use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::{
    config::{self, SceneConfig},
    gfx::{
        camera::{Camera, Projection},
        geometry, math, AttribLocations, Device, GfxError, Mesh, Shader,
    },
};

/// The four matrices of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub mvp: Mat4,
}

impl FrameTransforms {
    /// The model spins `elapsed` radians around `axis`, uncapped, so speed is
    /// one radian per second regardless of frame rate.
    pub fn at(elapsed: f32, axis: Vec3, camera: &Camera, projection: &Projection) -> Self {
        let model = math::rotate(math::identity(), elapsed, axis);
        let view = camera.view_mtx();
        let projection = projection.proj_mtx();
        let mvp = math::multiply(math::multiply(projection, view), model);

        Self {
            model,
            view,
            projection,
            mvp,
        }
    }
}

/// Everything a frame needs, built once when setup finishes and never mutated.
pub struct RenderContext<D: Device> {
    shader: Shader<D>,
    mesh: Mesh<D>,
    mvp_location: D::UniformLocation,

    camera: Camera,
    projection: Projection,
    rotation_axis: Vec3,
    clear_color: Vec4,
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                                      Setup                                                        //
///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl<D: Device> RenderContext<D> {
    /// Loads the shaders, uploads the plane and resolves every shader input.
    ///
    /// The aspect ratio is taken from `viewport` here and kept for the life of
    /// the context. Later changes to the drawable size are not picked up.
    pub fn setup(device: &D, config: &SceneConfig, viewport: Vec2) -> Result<Self, GfxError> {
        let shader = Shader::from_files(device, &config.vertex_shader, &config.fragment_shader)?;

        let resolved = Self::resolve_locations(device, &shader);
        let (attribs, mvp_location) = match resolved {
            Ok(locations) => locations,
            Err(e) => {
                shader.destroy(device);
                return Err(e);
            }
        };

        let plane = geometry::plane(config.plane_size.x, config.plane_size.y, config.plane_color);
        let mesh = match Mesh::upload(device, &plane, attribs) {
            Ok(mesh) => mesh,
            Err(e) => {
                shader.destroy(device);
                return Err(e);
            }
        };

        let aspect = viewport.x / viewport.y;
        log::info!(
            "Render context ready: {}x{} viewport, aspect {aspect}",
            viewport.x,
            viewport.y
        );

        Ok(Self {
            shader,
            mesh,
            mvp_location,
            camera: config.camera,
            projection: config.projection.with_aspect(aspect),
            rotation_axis: config.rotation_axis,
            clear_color: config.clear_color,
        })
    }

    fn resolve_locations(
        device: &D,
        shader: &Shader<D>,
    ) -> Result<(AttribLocations, D::UniformLocation), GfxError> {
        let attribs = AttribLocations {
            position: shader.attrib_location(device, config::POSITION_ATTRIB)?,
            color: shader.attrib_location(device, config::COLOR_ATTRIB)?,
        };
        let mvp = shader.uniform_location(device, config::MVP_UNIFORM)?;
        Ok((attribs, mvp))
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                                     Running                                                       //
///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl<D: Device> RenderContext<D> {
    pub fn aspect(&self) -> f32 {
        self.projection.aspect
    }

    pub fn transforms(&self, elapsed: f32) -> FrameTransforms {
        FrameTransforms::at(elapsed, self.rotation_axis, &self.camera, &self.projection)
    }

    /// Draws one frame `elapsed` seconds after setup.
    pub fn render_frame(&self, device: &D, elapsed: f32) {
        device.clear(self.clear_color);

        let transforms = self.transforms(elapsed);
        log::trace!("frame at {elapsed:.3}s");

        self.shader.use_program(device);
        self.shader
            .set_mat4(device, &self.mvp_location, &transforms.mvp);

        self.mesh.bind(device);
        self.mesh.draw(device);
    }

    pub fn destroy(&self, device: &D) {
        self.mesh.destroy(device);
        self.shader.destroy(device);
    }
}
