use glam::{Mat4, Vec3};

use super::math;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Vec3,
    target: Vec3,
    up: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fovy_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                               Creation Functions                                                  //
///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[allow(dead_code)]
impl Camera {
    pub fn new() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }

    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up.normalize();
        self
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Projection {
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy_deg: 45.0,
            aspect: 1.0,
            near: 0.1,
            far: 10.0,
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                              Get / Set Functions                                                  //
///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[allow(dead_code)]
impl Camera {
    pub fn view_mtx(&self) -> Mat4 {
        math::look_at(self.eye, self.target, self.up)
    }

    pub fn get_eye(&self) -> Vec3 {
        self.eye
    }

    pub fn get_target(&self) -> Vec3 {
        self.target
    }

    pub fn get_up(&self) -> Vec3 {
        self.up
    }
}

impl Projection {
    pub fn proj_mtx(&self) -> Mat4 {
        math::perspective(self.fovy_deg, self.aspect, self.near, self.far)
    }
}
