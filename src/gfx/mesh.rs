use super::{geometry::Geometry, Device, GfxError};

/// Where each per-vertex array goes in the linked program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttribLocations {
    pub position: u32,
    pub color: u32,
}

/// GPU copy of a [`Geometry`]. Uploaded once, never written again.
pub struct Mesh<D: Device> {
    vao: D::VertexArray,
    position_vbo: D::Buffer,
    color_vbo: D::Buffer,
    ibo: D::Buffer,
    index_count: usize,
    attribs: AttribLocations,
}

impl<D: Device> Mesh<D> {
    pub fn upload(device: &D, geo: &Geometry, attribs: AttribLocations) -> Result<Self, GfxError> {
        debug_assert!(geo.is_consistent(), "indices outside of the vertex range");

        let vao = device.create_vertex_array()?;
        let position_vbo = device.create_vertex_buffer(&geo.position)?;
        let color_vbo = device.create_vertex_buffer(&geo.color)?;
        let ibo = device.create_index_buffer(&geo.index)?;

        log::debug!(
            "Uploaded mesh: {} vertices, {} indices",
            geo.vertex_count(),
            geo.index.len()
        );

        Ok(Self {
            vao,
            position_vbo,
            color_vbo,
            ibo,
            index_count: geo.index.len(),
            attribs,
        })
    }

    #[allow(dead_code)]
    pub fn index_count(&self) -> usize {
        self.index_count
    }

    /// Enables both attributes and binds the index buffer.
    pub fn bind(&self, device: &D) {
        device.enable_attribute(
            self.vao,
            self.position_vbo,
            self.attribs.position,
            Geometry::POSITION_STRIDE as i32,
        );
        device.enable_attribute(
            self.vao,
            self.color_vbo,
            self.attribs.color,
            Geometry::COLOR_STRIDE as i32,
        );
        device.bind_index_buffer(self.vao, self.ibo);
    }

    pub fn draw(&self, device: &D) {
        device.draw_indexed_triangles(self.vao, self.index_count);
    }

    pub fn destroy(&self, device: &D) {
        device.delete_buffer(self.position_vbo);
        device.delete_buffer(self.color_vbo);
        device.delete_buffer(self.ibo);
        device.delete_vertex_array(self.vao);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        fake::{Call, FakeDevice},
        geometry,
    };
    use glam::Vec4;

    const ATTRIBS: AttribLocations = AttribLocations {
        position: 0,
        color: 1,
    };

    #[test]
    fn uploads_three_buffers() {
        let device = FakeDevice::default();
        let mesh = Mesh::upload(&device, &geometry::plane(1.0, 1.0, Vec4::ONE), ATTRIBS).unwrap();

        assert_eq!(mesh.index_count(), 6);
        assert_eq!(
            device.calls(),
            vec![
                Call::CreateVertexArray,
                Call::CreateBuffer(12),
                Call::CreateBuffer(16),
                Call::CreateBuffer(6),
            ]
        );
    }

    #[test]
    fn bind_uses_component_strides() {
        let device = FakeDevice::default();
        let mesh = Mesh::upload(&device, &geometry::plane(1.0, 1.0, Vec4::ONE), ATTRIBS).unwrap();
        device.clear_calls();

        mesh.bind(&device);
        mesh.draw(&device);

        assert_eq!(
            device.calls(),
            vec![
                Call::EnableAttribute {
                    location: 0,
                    components: 3
                },
                Call::EnableAttribute {
                    location: 1,
                    components: 4
                },
                Call::BindIndexBuffer,
                Call::Draw { index_count: 6 },
            ]
        );
    }

    #[test]
    fn destroy_releases_everything() {
        let device = FakeDevice::default();
        let mesh = Mesh::upload(&device, &geometry::plane(1.0, 1.0, Vec4::ONE), ATTRIBS).unwrap();
        assert_eq!(device.live_handles(), 4);

        mesh.destroy(&device);
        assert_eq!(device.live_handles(), 0);
    }
}
