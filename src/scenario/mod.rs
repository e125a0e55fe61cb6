mod orbits;

pub use self::orbits::{circular_orbit_speed, circular_orbit_state, orbital_period};

use crate::bodies::CelestialBody;
use crate::core::{SimulationConfig, SimulationWorld};
use crate::error::PhysicsError;
use crate::forces::GravityModel;
use crate::math::Vector3;
use crate::Result;

#[derive(Debug, Clone, Copy)]
struct CentralSpec {
    radius: f32,
    mass: f32,
    position: Vector3,
}

#[derive(Debug, Clone, Copy)]
struct OrbiterSpec {
    radius: f32,
    mass: f32,
    orbit_radius: f32,
    phase: f32,
}

/// Builds a world with a central body and bodies on circular orbits around it
#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    config: SimulationConfig,
    central: Option<CentralSpec>,
    orbiters: Vec<OrbiterSpec>,
    extra_bodies: Vec<CelestialBody>,
    camera_position: Vector3,
}

impl ScenarioBuilder {
    /// Creates an empty scenario with the given configuration
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            central: None,
            orbiters: Vec::new(),
            extra_bodies: Vec::new(),
            camera_position: Vector3::zeros(),
        }
    }

    /// The layout used by the interactive demo: one heavy star and three planets
    pub fn solar_demo() -> Self {
        Self::new(SimulationConfig::default())
            .central_body(50.0, 100_000.0, Vector3::zeros())
            .orbiting_body(8.0, 20.0, 200.0, 0.0)
            .orbiting_body(12.0, 50.0, 350.0, 2.1)
            .orbiting_body(5.0, 10.0, 500.0, 4.2)
            .camera_at(Vector3::new(0.0, 100.0, 700.0))
    }

    /// Sets the body everything else orbits; it starts at rest
    pub fn central_body(mut self, radius: f32, mass: f32, position: Vector3) -> Self {
        self.central = Some(CentralSpec {
            radius,
            mass,
            position,
        });
        self
    }

    /// Adds a body on a circular orbit around the central body
    pub fn orbiting_body(mut self, radius: f32, mass: f32, orbit_radius: f32, phase: f32) -> Self {
        self.orbiters.push(OrbiterSpec {
            radius,
            mass,
            orbit_radius,
            phase,
        });
        self
    }

    /// Adds a free body as-is
    pub fn body(mut self, body: CelestialBody) -> Self {
        self.extra_bodies.push(body);
        self
    }

    /// Sets where the camera starts
    pub fn camera_at(mut self, position: Vector3) -> Self {
        self.camera_position = position;
        self
    }

    /// Validates everything and builds the world.
    ///
    /// The central body is added first, then the orbiters in the order given,
    /// then the free bodies.
    pub fn build(self) -> Result<SimulationWorld> {
        let mut world = SimulationWorld::new(self.config.clone())?;
        let gravity = GravityModel::from_config(&self.config);

        if let Some(central) = self.central {
            let star = CelestialBody::new_at_rest(central.radius, central.mass, central.position)?;
            world.add_body(star);

            for orbiter in &self.orbiters {
                if orbiter.orbit_radius <= central.radius + orbiter.radius {
                    return Err(PhysicsError::InvalidParameter(format!(
                        "orbit radius {} would put the body inside the central body",
                        orbiter.orbit_radius
                    )));
                }

                let (position, velocity) = circular_orbit_state(
                    central.position,
                    Vector3::zeros(),
                    gravity.effective_constant(),
                    central.mass,
                    orbiter.orbit_radius,
                    orbiter.phase,
                );
                world.add_body(CelestialBody::new(orbiter.radius, orbiter.mass, position, velocity)?);
            }
        } else if !self.orbiters.is_empty() {
            return Err(PhysicsError::InvalidParameter(
                "orbiting bodies need a central body".to_string(),
            ));
        }

        for body in self.extra_bodies {
            world.add_body(body);
        }

        world.camera_mut().set_position(self.camera_position);

        log::info!(
            "built scenario with {} bodies, camera at {:?}",
            world.body_count(),
            self.camera_position
        );

        Ok(world)
    }
}
