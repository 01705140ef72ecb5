//! 4x4 matrix helpers used to build the model, view and projection transforms.
//!
//! Matrices are column-major `glam::Mat4`s and vectors are column vectors, so
//! `multiply(a, b)` applies `b` first. Everything here is right-handed with
//! GL clip space (`z` in `[-w, w]`).

use glam::{Mat4, Vec3};

pub fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// Composes a rotation of `angle` radians around `axis` onto `mat`.
///
/// The rotation is multiplied on the right, `mat * R`, so it acts in the
/// local frame of whatever `mat` already holds. `axis` does not need to be
/// unit length, but a zero-length axis is undefined and yields NaNs.
pub fn rotate(mat: Mat4, angle: f32, axis: Vec3) -> Mat4 {
    mat * Mat4::from_axis_angle(axis.normalize(), angle)
}

/// View matrix for a camera at `eye` looking at `center`.
///
/// An `eye` equal to `center` has no viewing direction and returns the
/// identity. An `up` parallel to the view direction is undefined.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    if eye == center {
        return Mat4::IDENTITY;
    }
    Mat4::look_at_rh(eye, center, up)
}

/// Perspective projection with a vertical field of view given in degrees.
pub fn perspective(fovy_deg: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fovy_deg.to_radians(), aspect, near, far)
}

pub fn multiply(a: Mat4, b: Mat4) -> Mat4 {
    a * b
}
