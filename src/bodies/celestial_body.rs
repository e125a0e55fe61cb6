use crate::error::PhysicsError;
use crate::forces::GravityModel;
use crate::integration::Integrator;
use crate::math::{self, Ray, Vector3};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A spherical point mass taking part in gravity and camera collision
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CelestialBody {
    /// World-space center
    position: Vector3,

    /// World-space linear velocity
    velocity: Vector3,

    /// Mass, always finite and positive
    mass: f32,

    /// Radius used for rendering scale, collision and the force floor
    radius: f32,
}

impl CelestialBody {
    /// Creates a new body, rejecting physically meaningless parameters
    pub fn new(radius: f32, mass: f32, position: Vector3, velocity: Vector3) -> Result<Self> {
        validate_mass(mass)?;
        validate_radius(radius)?;

        if !math::is_finite(&position) {
            return Err(PhysicsError::InvalidBody(format!(
                "position must be finite, got {}",
                position
            )));
        }
        if !math::is_finite(&velocity) {
            return Err(PhysicsError::InvalidBody(format!(
                "velocity must be finite, got {}",
                velocity
            )));
        }

        Ok(Self {
            position,
            velocity,
            mass,
            radius,
        })
    }

    /// Creates a body at rest
    pub fn new_at_rest(radius: f32, mass: f32, position: Vector3) -> Result<Self> {
        Self::new(radius, mass, position, Vector3::zeros())
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector3 {
        self.position
    }

    /// Sets the body's position
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    /// Returns the body's velocity
    pub fn get_velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Sets the body's velocity
    pub fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Sets the mass, keeping it positive
    pub fn set_mass(&mut self, mass: f32) -> Result<()> {
        validate_mass(mass)?;
        self.mass = mass;
        Ok(())
    }

    /// Returns the body's radius
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Sets the radius, keeping it non-negative
    pub fn set_radius(&mut self, radius: f32) -> Result<()> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    /// Euclidean distance between the two centers
    pub fn distance_to(&self, other: &Self) -> f32 {
        (other.position - self.position).norm()
    }

    /// Gravitational force exerted on this body by `other`
    pub fn gravitational_force_from(&self, other: &Self, model: &GravityModel) -> Vector3 {
        model.force_between(self, other)
    }

    /// Advances velocity and position under `force` for one step
    pub fn integrate(&mut self, integrator: &dyn Integrator, force: Vector3, dt: f32) {
        let acceleration = force / self.mass;
        integrator.integrate(&mut self.position, &mut self.velocity, acceleration, dt);
    }

    /// Returns true if the line through `ray` crosses this body's sphere
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        crate::collision::ray_intersects_sphere(ray, self.position, self.radius)
    }

    /// Linear momentum, m * v
    pub fn momentum(&self) -> Vector3 {
        self.velocity * self.mass
    }

    /// Kinetic energy, 0.5 * m * |v|^2
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.norm_squared()
    }
}

fn validate_mass(mass: f32) -> Result<()> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(PhysicsError::InvalidBody(format!(
            "mass must be finite and positive, got {}",
            mass
        )));
    }
    Ok(())
}

fn validate_radius(radius: f32) -> Result<()> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(PhysicsError::InvalidBody(format!(
            "radius must be finite and non-negative, got {}",
            radius
        )));
    }
    Ok(())
}
