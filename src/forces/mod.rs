mod force_generator;
mod gravity;

pub use self::force_generator::ForceGenerator;
pub use self::gravity::GravityModel;
