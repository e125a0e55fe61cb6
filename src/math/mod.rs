use nalgebra as na;

mod ray;

pub use ray::{Ray, Viewport};

/// 3D vector used for positions, velocities and forces
pub type Vector3 = na::Vector3<f32>;

/// Homogeneous 4D vector used during unprojection
pub type Vector4 = na::Vector4<f32>;

/// 4x4 matrix used for projection and view transforms
pub type Matrix4 = na::Matrix4<f32>;

/// A point in world space
pub type Point3 = na::Point3<f32>;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// The world up axis, used as a fallback direction for degenerate geometry
#[inline]
pub fn world_up() -> Vector3 {
    Vector3::new(0.0, 1.0, 0.0)
}

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}

/// Normalizes `v`, or returns `fallback` when `v` has no usable direction
#[inline]
pub fn safe_normalize(v: Vector3, fallback: Vector3) -> Vector3 {
    let length = v.norm();
    if length > EPSILON && length.is_finite() {
        v / length
    } else {
        fallback
    }
}

/// Returns true if every component of the vector is finite
#[inline]
pub fn is_finite(v: &Vector3) -> bool {
    v.iter().all(|c| c.is_finite())
}
