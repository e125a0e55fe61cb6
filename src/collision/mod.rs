mod collision_detector;
mod raycast;

pub use self::collision_detector::{CameraContact, CollisionDetector, ResolutionPolicy};
pub use self::raycast::{probe_terrain, probe_terrain_hit, ray_intersects_sphere, probe_direction};
