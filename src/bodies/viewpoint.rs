use crate::core::CameraMotion;
use crate::integration::Integrator;
use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The camera as a physical point.
///
/// A massless test particle: every body pulls on it, it pulls on nothing.
/// Orientation lives with the view-matrix builder and is not tracked here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Viewpoint {
    /// World-space eye position
    position: Vector3,

    /// Persistent velocity, only used with `CameraMotion::Momentum`
    velocity: Vector3,
}

impl Viewpoint {
    /// Creates a new viewpoint at rest
    pub fn new(position: Vector3) -> Self {
        Self {
            position,
            velocity: Vector3::zeros(),
        }
    }

    /// Returns the eye position
    pub fn get_position(&self) -> Vector3 {
        self.position
    }

    /// Teleports the camera, keeping its velocity
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    /// Returns the camera's velocity
    pub fn get_velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Sets the camera's velocity
    pub fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
    }

    /// Moves the camera without touching its velocity (keyboard fly controls)
    pub fn translate(&mut self, offset: Vector3) {
        self.position += offset;
    }

    /// Applies the frame's gravitational field to the camera.
    ///
    /// `field` is the net force on a unit test mass, so it doubles as the
    /// acceleration.
    pub fn apply_field(
        &mut self,
        motion: CameraMotion,
        integrator: &dyn Integrator,
        field: Vector3,
        dt: f32,
    ) {
        match motion {
            CameraMotion::Momentum => {
                integrator.integrate(&mut self.position, &mut self.velocity, field, dt);
            }
            CameraMotion::ForceToPosition => {
                // Force is taken as a direct velocity contribution; nothing persists.
                self.position += field * dt;
                self.velocity = Vector3::zeros();
            }
        }
    }

    /// Drops the part of the velocity heading into a surface with outward `normal`
    pub(crate) fn cancel_inward_velocity(&mut self, normal: Vector3) {
        let into_surface = self.velocity.dot(&normal);
        if into_surface < 0.0 {
            self.velocity -= normal * into_surface;
        }
    }
}

impl Default for Viewpoint {
    fn default() -> Self {
        Self::new(Vector3::zeros())
    }
}
