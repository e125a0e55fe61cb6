use crate::bodies::CelestialBody;
use crate::forces::GravityModel;
use crate::math::Vector3;

/// Conserved quantities of the body set, for monitoring drift
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationDiagnostics {
    pub kinetic_energy: f32,
    pub potential_energy: f32,
    pub total_energy: f32,

    /// Total linear momentum
    pub momentum: Vector3,

    /// Mass-weighted mean position; zero for an empty set
    pub center_of_mass: Vector3,

    pub total_mass: f32,
}

impl SimulationDiagnostics {
    /// Measures the given bodies under `gravity`
    pub fn measure(bodies: &[CelestialBody], gravity: &GravityModel) -> Self {
        let kinetic_energy: f32 = bodies.iter().map(CelestialBody::kinetic_energy).sum();
        let potential_energy = gravity.potential_energy(bodies);

        let mut momentum = Vector3::zeros();
        let mut weighted_position = Vector3::zeros();
        let mut total_mass = 0.0;

        for body in bodies {
            momentum += body.momentum();
            weighted_position += body.get_position() * body.get_mass();
            total_mass += body.get_mass();
        }

        let center_of_mass = if total_mass > 0.0 {
            weighted_position / total_mass
        } else {
            Vector3::zeros()
        };

        Self {
            kinetic_energy,
            potential_energy,
            total_energy: kinetic_energy + potential_energy,
            momentum,
            center_of_mass,
            total_mass,
        }
    }
}
