use crate::bodies::{CelestialBody, Viewpoint};
use crate::core::{BodyHandle, SimulationConfig};
use crate::math::{self, Vector3};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How overlaps with several bodies in the same frame are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ResolutionPolicy {
    /// One pass in list order; if two bodies overlap the camera, the later one wins
    Sequential,

    /// Only the body with the deepest penetration is resolved
    Deepest,

    /// Repeat sequential passes until clear or the iteration cap is reached
    Iterative {
        /// Upper bound on passes per frame
        max_iterations: u32,
    },
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        Self::Sequential
    }
}

/// A correction applied to the camera this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraContact {
    /// The body the camera was inside of
    pub body: BodyHandle,

    /// How far inside the surface the camera was
    pub depth: f32,

    /// Outward surface normal the camera was pushed along
    pub normal: Vector3,
}

/// Keeps the camera outside every body's sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionDetector {
    /// Extra distance added past the surface after a correction
    pushout: f32,

    /// The multi-body overlap strategy
    policy: ResolutionPolicy,
}

impl CollisionDetector {
    /// Creates a new collision detector
    pub fn new(pushout: f32, policy: ResolutionPolicy) -> Self {
        Self {
            pushout: pushout.max(0.0),
            policy,
        }
    }

    /// Builds the detector from the simulation configuration
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.collision_pushout, config.resolution_policy)
    }

    /// Pushes the camera out of any body it has sunk into.
    ///
    /// The inward component of the camera velocity is dropped on contact, so
    /// gravity cannot keep building speed into the surface.
    pub fn resolve_camera_collisions(
        &self,
        camera: &mut Viewpoint,
        bodies: &[CelestialBody],
    ) -> Vec<CameraContact> {
        let mut contacts = Vec::new();

        match self.policy {
            ResolutionPolicy::Sequential => {
                self.sequential_pass(camera, bodies, &mut contacts);
            }
            ResolutionPolicy::Deepest => {
                let deepest = bodies
                    .iter()
                    .enumerate()
                    .filter_map(|(index, body)| penetration(camera, body).map(|depth| (index, depth)))
                    .max_by(|a, b| a.1.total_cmp(&b.1));

                if let Some((index, _)) = deepest {
                    contacts.extend(self.resolve_against(camera, index, &bodies[index]));
                }
            }
            ResolutionPolicy::Iterative { max_iterations } => {
                for _ in 0..max_iterations.max(1) {
                    if !self.sequential_pass(camera, bodies, &mut contacts) {
                        break;
                    }
                }
            }
        }

        contacts
    }

    /// One pass in list order; returns whether anything was corrected
    fn sequential_pass(
        &self,
        camera: &mut Viewpoint,
        bodies: &[CelestialBody],
        contacts: &mut Vec<CameraContact>,
    ) -> bool {
        let before = contacts.len();

        for (index, body) in bodies.iter().enumerate() {
            contacts.extend(self.resolve_against(camera, index, body));
        }

        contacts.len() > before
    }

    /// Moves the camera to the surface of `body` plus the pushout, if it is inside
    fn resolve_against(
        &self,
        camera: &mut Viewpoint,
        index: usize,
        body: &CelestialBody,
    ) -> Option<CameraContact> {
        let depth = penetration(camera, body)?;

        let to_camera = camera.get_position() - body.get_position();
        let normal = math::safe_normalize(to_camera, math::world_up());

        camera.set_position(body.get_position() + normal * (body.get_radius() + self.pushout));
        camera.cancel_inward_velocity(normal);

        log::debug!(
            "camera pushed out of body {} (depth {:.4}, normal {:?})",
            index,
            depth,
            normal
        );

        Some(CameraContact {
            body: BodyHandle(index),
            depth,
            normal,
        })
    }
}

impl Default for CollisionDetector {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

/// Depth of the camera below the body's surface, if it is strictly inside
fn penetration(camera: &Viewpoint, body: &CelestialBody) -> Option<f32> {
    let distance = (camera.get_position() - body.get_position()).norm();
    if distance < body.get_radius() {
        Some(body.get_radius() - distance)
    } else {
        None
    }
}
