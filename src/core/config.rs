use crate::collision::ResolutionPolicy;
use crate::core::CameraMotion;
use crate::error::PhysicsError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the simulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct SimulationConfig {
    /// Scales all gravitational force magnitudes
    pub gravitational_constant: f32,

    /// Additional multiplier on G; demo variants tune this instead of G
    pub mass_scale: f32,

    /// Margin added to the sum of radii before the force law is evaluated
    pub min_separation_epsilon: f32,

    /// Extra separation past the surface after the camera is pushed out
    pub collision_pushout: f32,

    /// Largest frame time `SimulationWorld::advance` will integrate in one step
    pub max_time_step: f32,

    /// How gravity moves the camera
    pub camera_motion: CameraMotion,

    /// How overlaps with several bodies at once are resolved
    pub resolution_policy: ResolutionPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 0.1,
            mass_scale: 1.0,
            min_separation_epsilon: 1.0,
            collision_pushout: 0.1,
            max_time_step: 0.1,
            camera_motion: CameraMotion::default(),
            resolution_policy: ResolutionPolicy::default(),
        }
    }
}

impl SimulationConfig {
    /// Checks every parameter, returning the first problem found
    pub fn validate(&self) -> Result<()> {
        non_negative("gravitational_constant", self.gravitational_constant)?;
        non_negative("mass_scale", self.mass_scale)?;
        non_negative("min_separation_epsilon", self.min_separation_epsilon)?;
        non_negative("collision_pushout", self.collision_pushout)?;

        if !self.max_time_step.is_finite() || self.max_time_step <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "max_time_step must be finite and positive, got {}",
                self.max_time_step
            )));
        }

        if let ResolutionPolicy::Iterative { max_iterations: 0 } = self.resolution_policy {
            return Err(PhysicsError::InvalidParameter(
                "iterative collision resolution needs at least one iteration".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns a copy with a different gravitational constant
    pub fn with_gravitational_constant(mut self, gravitational_constant: f32) -> Self {
        self.gravitational_constant = gravitational_constant;
        self
    }

    /// Returns a copy with a different camera motion scheme
    pub fn with_camera_motion(mut self, camera_motion: CameraMotion) -> Self {
        self.camera_motion = camera_motion;
        self
    }

    /// Returns a copy with a different resolution policy
    pub fn with_resolution_policy(mut self, resolution_policy: ResolutionPolicy) -> Self {
        self.resolution_policy = resolution_policy;
        self
    }
}

fn non_negative(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PhysicsError::InvalidParameter(format!(
            "{} must be finite and non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}
