use crate::collision::CameraContact;
use crate::core::BodyHandle;
use std::collections::VecDeque;

/// Something noteworthy that happened during a frame
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent {
    /// The camera was pushed out of a body
    CameraContact(CameraContact),

    /// A terrain probe hit a body
    TerrainHit {
        /// The first body the probe crossed
        body: BodyHandle,
    },

    /// The frame time exceeded the configured cap and was clamped
    TimeStepClamped {
        /// The frame time handed to `advance`
        requested: f32,

        /// The step actually integrated
        applied: f32,
    },
}

/// A queue of simulation events, refilled every frame
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<SimulationEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Adds an event to the queue
    pub fn push(&mut self, event: SimulationEvent) {
        self.events.push_back(event);
    }

    /// Gets the next event from the queue
    pub fn next_event(&mut self) -> Option<SimulationEvent> {
        self.events.pop_front()
    }

    /// Returns the number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over the queued events without draining them
    pub fn iter(&self) -> impl Iterator<Item = &SimulationEvent> {
        self.events.iter()
    }

    /// Clears all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
