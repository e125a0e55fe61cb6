pub mod world;
pub mod config;
pub mod events;
mod diagnostics;

pub use self::world::{step, step_with, BodySnapshot, SimulationWorld};
pub use self::config::SimulationConfig;
pub use self::events::{EventQueue, SimulationEvent};
pub use self::diagnostics::SimulationDiagnostics;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Index of a body in the world's fixed body list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) usize);

impl BodyHandle {
    /// Wraps a list index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the body in the list
    pub fn index(&self) -> usize {
        self.0
    }
}

/// How gravity moves the camera each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum CameraMotion {
    /// The camera keeps a velocity and is integrated like a body
    #[default]
    Momentum,

    /// `position += force * dt` each frame, with no velocity carried over
    ForceToPosition,
}
