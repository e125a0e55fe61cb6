use crate::integration::Integrator;
use crate::math::Vector3;

/// Symplectic Euler integrator (semi-implicit Euler)
/// More stable than explicit Euler for orbital motion
#[derive(Debug, Clone, Copy, Default)]
pub struct SymplecticEulerIntegrator;

impl SymplecticEulerIntegrator {
    /// Creates a new Symplectic Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for SymplecticEulerIntegrator {
    fn integrate(&self, position: &mut Vector3, velocity: &mut Vector3, acceleration: Vector3, dt: f32) {
        // Velocity first, then position from the *new* velocity
        *velocity += acceleration * dt;
        *position += *velocity * dt;
    }

    fn name(&self) -> &str {
        "SymplecticEuler"
    }
}
