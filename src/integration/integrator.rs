use crate::math::Vector3;

/// Trait for numerical integration algorithms
pub trait Integrator: Send + Sync + std::fmt::Debug {
    /// Advances `position` and `velocity` under a constant `acceleration` over `dt`
    fn integrate(&self, position: &mut Vector3, velocity: &mut Vector3, acceleration: Vector3, dt: f32);

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
