use glam::Vec4;

/// Flat per-vertex arrays ready to be uploaded as separate buffers.
///
/// `position` holds 3 floats per vertex, `color` holds 4.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub position: Vec<f32>,
    pub color: Vec<f32>,
    pub index: Vec<u16>,
}

impl Geometry {
    pub const POSITION_STRIDE: usize = 3;
    pub const COLOR_STRIDE: usize = 4;

    pub fn vertex_count(&self) -> usize {
        self.position.len() / Self::POSITION_STRIDE
    }

    /// Position and color describe the same vertices and every index points at one of them.
    pub fn is_consistent(&self) -> bool {
        let count = self.vertex_count();
        self.position.len() % Self::POSITION_STRIDE == 0
            && self.color.len() == count * Self::COLOR_STRIDE
            && self.index.len() % 3 == 0
            && self.index.iter().all(|&i| (i as usize) < count)
    }
}

/// A `width` x `height` rectangle in the XY plane, centered at the origin and
/// facing +Z. All four vertices get `color`.
///
/// ```text
///  0 ---- 1
///  |    / |
///  |  /   |
///  2 ---- 3
/// ```
///
/// Both triangles wind counter-clockwise when seen from +Z.
pub fn plane(width: f32, height: f32, color: Vec4) -> Geometry {
    let w = width * 0.5;
    let h = height * 0.5;

    #[rustfmt::skip]
    let position = vec![
        -w,  h, 0.0,
         w,  h, 0.0,
        -w, -h, 0.0,
         w, -h, 0.0,
    ];

    let color = color.to_array().repeat(4);
    let index = vec![0, 2, 1, 1, 2, 3];

    Geometry {
        position,
        color,
        index,
    }
}
