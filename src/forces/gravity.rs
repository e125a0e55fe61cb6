use crate::bodies::CelestialBody;
use crate::core::SimulationConfig;
use crate::forces::ForceGenerator;
use crate::math::{self, Vector3};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Newtonian gravity between spherical bodies with a contact-distance floor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct GravityModel {
    /// The gravitational constant G
    pub gravitational_constant: f32,

    /// Extra factor applied on top of G; variants tune one or the other
    pub mass_scale: f32,

    /// Margin added to the sum of radii when clamping the separation
    pub min_separation_epsilon: f32,
}

impl GravityModel {
    /// Creates a new gravity model
    pub fn new(gravitational_constant: f32, mass_scale: f32, min_separation_epsilon: f32) -> Self {
        Self {
            gravitational_constant,
            mass_scale,
            min_separation_epsilon,
        }
    }

    /// Builds the model from the simulation configuration
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.gravitational_constant,
            config.mass_scale,
            config.min_separation_epsilon,
        )
    }

    /// G * mass scale
    #[inline]
    pub fn effective_constant(&self) -> f32 {
        self.gravitational_constant * self.mass_scale
    }

    /// Smallest separation the force law will use for two radii
    #[inline]
    pub fn min_separation(&self, radius_a: f32, radius_b: f32) -> f32 {
        radius_a + radius_b + self.min_separation_epsilon
    }

    /// Force exerted on `a` by `b`
    pub fn force_between(&self, a: &CelestialBody, b: &CelestialBody) -> Vector3 {
        self.force_on_point(a.get_position(), a.get_mass(), a.get_radius(), b)
    }

    /// Force exerted by `b` on a sphere of `mass` and `radius` centered at `position`
    pub fn force_on_point(
        &self,
        position: Vector3,
        mass: f32,
        radius: f32,
        b: &CelestialBody,
    ) -> Vector3 {
        let direction = b.get_position() - position;
        let distance_squared = direction.norm_squared();

        // Floor the separation at contact distance so overlaps stay bounded
        let min_distance = self.min_separation(radius, b.get_radius());
        let distance_squared = distance_squared.max(min_distance * min_distance);

        if distance_squared == 0.0 {
            return Vector3::zeros();
        }

        // Coincident centers have no direction; the force is zero
        let direction = math::safe_normalize(direction, Vector3::zeros());

        // F = G * s * m1 * m2 / r^2
        let magnitude = self.effective_constant() * (mass * b.get_mass()) / distance_squared;
        direction * magnitude
    }

    /// Gravitational potential energy of the whole set, using the same floor
    pub fn potential_energy(&self, bodies: &[CelestialBody]) -> f32 {
        let mut energy = 0.0;

        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                let floor = self.min_separation(a.get_radius(), b.get_radius());
                let distance = a.distance_to(b).max(floor);
                if distance > 0.0 {
                    energy -= self.effective_constant() * (a.get_mass() * b.get_mass()) / distance;
                }
            }
        }

        energy
    }
}

impl Default for GravityModel {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

impl ForceGenerator for GravityModel {
    fn generator_type(&self) -> &'static str {
        "NewtonianGravity"
    }

    fn accumulate_forces(&self, bodies: &[CelestialBody], forces: &mut [Vector3]) {
        debug_assert_eq!(bodies.len(), forces.len());

        // All-pairs over the read-only snapshot, self excluded
        for (i, (body, force)) in bodies.iter().zip(forces.iter_mut()).enumerate() {
            for (j, other) in bodies.iter().enumerate() {
                if i != j {
                    *force += self.force_between(body, other);
                }
            }
        }
    }

    fn field_at(&self, position: Vector3, bodies: &[CelestialBody]) -> Vector3 {
        bodies
            .iter()
            .map(|body| self.force_on_point(position, 1.0, 0.0, body))
            .fold(Vector3::zeros(), |acc, f| acc + f)
    }
}
