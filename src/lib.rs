pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod forces;
pub mod integration;
pub mod scenario;

/// Re-export common types for easier usage
pub use crate::core::{
    step, BodyHandle, BodySnapshot, CameraMotion, SimulationConfig, SimulationWorld,
};
pub use crate::bodies::{CelestialBody, Viewpoint};
pub use crate::collision::{CollisionDetector, ResolutionPolicy};
pub use crate::forces::GravityModel;
pub use crate::math::{Ray, Vector3, Viewport};

/// Error types for the simulation core
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Invalid body: {0}")]
        InvalidBody(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Singular matrix: {0}")]
        SingularMatrix(String),
    }
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
