//! Math utilities and types
//!
//! Provides the math types used by spatial components.

pub use nalgebra::{Vector3, Matrix4, Quaternion, Unit};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Half pi
    pub const HALF_PI: f32 = PI * 0.5;
}
