use crate::bodies::CelestialBody;
use crate::math::Vector3;

/// Base trait for force models acting on the body list and on test particles
pub trait ForceGenerator: Send + Sync + std::fmt::Debug {
    /// Returns the type name of the force generator
    fn generator_type(&self) -> &'static str;

    /// Adds the force on each body to `forces[i]`.
    ///
    /// Reads `bodies` only; `forces` must have one slot per body.
    fn accumulate_forces(&self, bodies: &[CelestialBody], forces: &mut [Vector3]);

    /// Force on a unit-mass, zero-radius test particle at `position`
    fn field_at(&self, position: Vector3, bodies: &[CelestialBody]) -> Vector3;

    /// Net force on every body, computed from the current snapshot
    fn net_forces(&self, bodies: &[CelestialBody]) -> Vec<Vector3> {
        let mut forces = vec![Vector3::zeros(); bodies.len()];
        self.accumulate_forces(bodies, &mut forces);
        forces
    }
}
