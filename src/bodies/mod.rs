mod celestial_body;
mod viewpoint;

pub use self::celestial_body::CelestialBody;
pub use self::viewpoint::Viewpoint;
