use crate::bodies::{CelestialBody, Viewpoint};
use crate::collision::{self, CameraContact, CollisionDetector};
use crate::core::{
    BodyHandle, CameraMotion, EventQueue, SimulationConfig, SimulationDiagnostics, SimulationEvent,
};
use crate::error::PhysicsError;
use crate::forces::{ForceGenerator, GravityModel};
use crate::integration::{Integrator, SymplecticEulerIntegrator};
use crate::math::{Matrix4, Vector3, Viewport};
use crate::Result;

/// What the renderer needs to place and scale one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub position: Vector3,
    pub radius: f32,
}

/// Advances the bodies and the camera by one step of `dt`.
///
/// Uses gravity, collision settings and camera motion from `config` with the
/// symplectic Euler integrator. `dt` is used as given; clamping is up to the
/// caller.
pub fn step(
    bodies: &mut [CelestialBody],
    camera: &mut Viewpoint,
    config: &SimulationConfig,
    dt: f32,
) -> Vec<CameraContact> {
    step_with(
        bodies,
        camera,
        config.camera_motion,
        &GravityModel::from_config(config),
        &SymplecticEulerIntegrator::new(),
        &CollisionDetector::from_config(config),
        dt,
    )
}

/// Advances the bodies and the camera by one step with explicit collaborators.
///
/// Order within the step:
/// 1. the camera feels the field of every body and moves;
/// 2. the camera is pushed out of any body it ended up inside;
/// 3. every body's net force is taken from the same pre-update snapshot,
///    then all bodies are integrated.
pub fn step_with(
    bodies: &mut [CelestialBody],
    camera: &mut Viewpoint,
    motion: CameraMotion,
    forces: &dyn ForceGenerator,
    integrator: &dyn Integrator,
    detector: &CollisionDetector,
    dt: f32,
) -> Vec<CameraContact> {
    let field = forces.field_at(camera.get_position(), bodies);
    camera.apply_field(motion, integrator, field, dt);

    let contacts = detector.resolve_camera_collisions(camera, bodies);

    // All reads happen here, before any body moves
    let net_forces = forces.net_forces(bodies);

    for (body, force) in bodies.iter_mut().zip(net_forces) {
        body.integrate(integrator, force, dt);
    }

    contacts
}

/// Owns one simulation instance: the bodies, the camera and the clock
#[derive(Debug)]
pub struct SimulationWorld {
    /// The fixed body list; order matters for sequential collision resolution
    bodies: Vec<CelestialBody>,

    /// The gravity-bound camera
    camera: Viewpoint,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Derived from `config`
    gravity: GravityModel,

    /// Derived from `config`
    detector: CollisionDetector,

    integrator: Box<dyn Integrator>,

    /// Events from the most recent frame
    events: EventQueue,

    /// The total elapsed simulation time
    time: f32,

    /// Number of steps taken
    frame: u64,
}

impl SimulationWorld {
    /// Creates a new world with the given configuration and a camera at the origin
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Self::with_integrator(config, Box::new(SymplecticEulerIntegrator::new()))
    }

    /// Creates a new world that integrates with `integrator`
    pub fn with_integrator(config: SimulationConfig, integrator: Box<dyn Integrator>) -> Result<Self> {
        config.validate()?;

        log::info!(
            "creating simulation world (G = {}, scale = {}, camera = {:?}, integrator = {})",
            config.gravitational_constant,
            config.mass_scale,
            config.camera_motion,
            integrator.name()
        );

        Ok(Self {
            bodies: Vec::new(),
            camera: Viewpoint::default(),
            gravity: GravityModel::from_config(&config),
            detector: CollisionDetector::from_config(&config),
            config,
            integrator,
            events: EventQueue::new(),
            time: 0.0,
            frame: 0,
        })
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Returns the number of steps taken so far
    pub fn get_frame(&self) -> u64 {
        self.frame
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replaces the configuration after validating it
    pub fn set_config(&mut self, config: SimulationConfig) -> Result<()> {
        config.validate()?;
        self.gravity = GravityModel::from_config(&config);
        self.detector = CollisionDetector::from_config(&config);
        self.config = config;
        Ok(())
    }

    /// Returns the gravity model in use
    pub fn get_gravity(&self) -> &GravityModel {
        &self.gravity
    }

    /// Adds a body to the world and returns its handle
    pub fn add_body(&mut self, body: CelestialBody) -> BodyHandle {
        self.bodies.push(body);
        BodyHandle(self.bodies.len() - 1)
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&CelestialBody> {
        self.bodies.get(handle.index()).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
        })
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut CelestialBody> {
        self.bodies.get_mut(handle.index()).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
        })
    }

    /// All bodies, in insertion order
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the camera
    pub fn camera(&self) -> &Viewpoint {
        &self.camera
    }

    /// Returns the camera for the input handlers to move
    pub fn camera_mut(&mut self) -> &mut Viewpoint {
        &mut self.camera
    }

    /// Advances the world by one frame of `frame_time` seconds.
    ///
    /// The step is clamped to `max_time_step` so a stalled frame cannot blow
    /// up the integration.
    pub fn advance(&mut self, frame_time: f32) -> Result<()> {
        if !frame_time.is_finite() || frame_time < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "frame time must be finite and non-negative, got {}",
                frame_time
            )));
        }

        let dt = frame_time.min(self.config.max_time_step);
        self.step(dt);

        if dt < frame_time {
            log::warn!(
                "frame time {:.4}s exceeds the {:.4}s cap, clamping",
                frame_time,
                self.config.max_time_step
            );
            self.events.push(SimulationEvent::TimeStepClamped {
                requested: frame_time,
                applied: dt,
            });
        }

        Ok(())
    }

    /// Runs exactly one step of `dt` without clamping
    pub fn step(&mut self, dt: f32) {
        self.events.clear();

        let contacts = step_with(
            &mut self.bodies,
            &mut self.camera,
            self.config.camera_motion,
            &self.gravity,
            self.integrator.as_ref(),
            &self.detector,
            dt,
        );

        for contact in contacts {
            self.events.push(SimulationEvent::CameraContact(contact));
        }

        self.time += dt;
        self.frame += 1;

        log::trace!(
            "frame {} (t = {:.3}s, dt = {:.4}s), camera at {:?}",
            self.frame,
            self.time,
            dt,
            self.camera.get_position()
        );
    }

    /// Position and radius of every body, for the renderer
    pub fn body_snapshots(&self) -> Vec<BodySnapshot> {
        self.bodies
            .iter()
            .map(|body| BodySnapshot {
                position: body.get_position(),
                radius: body.get_radius(),
            })
            .collect()
    }

    /// Hit-tests the bodies below the eye for a screen position.
    ///
    /// Input handlers call this on the world they are bound to.
    pub fn probe_terrain(
        &mut self,
        x: f32,
        y: f32,
        viewport: Viewport,
        projection: &Matrix4,
        view: &Matrix4,
    ) -> Result<bool> {
        let hit = collision::probe_terrain_hit(x, y, viewport, projection, view, &self.bodies)?;

        if let Some(body) = hit {
            self.events.push(SimulationEvent::TerrainHit { body });
        }

        Ok(hit.is_some())
    }

    /// Energy and momentum of the current body set
    pub fn diagnostics(&self) -> SimulationDiagnostics {
        SimulationDiagnostics::measure(&self.bodies, &self.gravity)
    }

    /// Returns a reference to the event queue
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns a mutable reference to the event queue
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }
}
