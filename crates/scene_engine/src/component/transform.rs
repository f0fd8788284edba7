//! Transform component
//!
//! Local position, rotation and scale of the nodes it is attached to.

use std::any::Any;

use super::{CloneOption, CloneableComponent, Component, ComponentBase, Layouts};
use crate::foundation::math::{Mat4, Point3, Quat, Vec3};

/// Spatial transform component
#[derive(Debug)]
pub struct Transform {
    base: ComponentBase,

    /// Local position
    pub position: Vec3,

    /// Local rotation quaternion
    pub rotation: Quat,

    /// Local scale factors
    pub scale: Vec3,
}

impl Transform {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self::with_layout_mask(Layouts::EVERYTHING)
    }

    /// Create an identity transform with a specific layout mask
    pub fn with_layout_mask(layout_mask: Layouts) -> Self {
        Self {
            base: ComponentBase::new(layout_mask),
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Create from position only
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Create from position, rotation and scale
    pub fn from_trs(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
            ..Self::identity()
        }
    }

    /// Convert to a transformation matrix
    pub fn matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.matrix().transform_point(&point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Component for Transform {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_cloneable(&self) -> Option<&dyn CloneableComponent> {
        Some(self)
    }
}

impl CloneableComponent for Transform {
    // Plain data, both options copy it.
    fn clone_with(&self, _option: CloneOption) -> Box<dyn Component> {
        Box::new(Self {
            base: ComponentBase::cloned_from(&self.base),
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_identity_matrix() {
        let transform = Transform::identity();
        assert_relative_eq!(transform.matrix(), Mat4::identity(), epsilon = EPSILON);
        assert_eq!(transform.layout_mask(), Layouts::EVERYTHING);
    }

    #[test]
    fn test_transform_point() {
        let rotation = Quat::from_axis_angle(&Vec3::y_axis(), HALF_PI);
        let transform = Transform::from_trs(
            Vec3::new(1.0, 2.0, 3.0),
            rotation,
            Vec3::new(2.0, 2.0, 2.0),
        );

        // Scale (1,0,0) -> (2,0,0), rotate about Y -> (0,0,-2), translate.
        let moved = transform.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(moved, Point3::new(1.0, 2.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_clone_copies_data_but_not_targets() {
        let mut source = Transform::from_position(Vec3::new(4.0, 5.0, 6.0));
        source.set_layout_mask(Layouts::DEBUG);

        for option in [CloneOption::Shallow, CloneOption::Deep] {
            let clone = source.clone_component(option).unwrap();
            let clone = clone.downcast_ref::<Transform>().unwrap();

            assert_ne!(clone.id(), source.id());
            assert_eq!(clone.position, source.position);
            assert_eq!(clone.layout_mask(), Layouts::DEBUG);
            assert_eq!(clone.num_targets(), 0);
        }
    }
}
