use crate::integration::Integrator;
use crate::math::Vector3;

/// Simple forward Euler integrator.
///
/// Position moves with the old velocity. Orbits gain energy every step and
/// spiral outward, so this is only kept for comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerIntegrator;

impl EulerIntegrator {
    /// Creates a new Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for EulerIntegrator {
    fn integrate(&self, position: &mut Vector3, velocity: &mut Vector3, acceleration: Vector3, dt: f32) {
        *position += *velocity * dt;
        *velocity += acceleration * dt;
    }

    fn name(&self) -> &str {
        "Euler"
    }
}
