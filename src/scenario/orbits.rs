use crate::math::Vector3;
use std::f32::consts::PI;

/// Speed of a circular orbit of radius `orbit_radius` around `central_mass`.
///
/// `effective_constant` is G times any mass scale in use.
pub fn circular_orbit_speed(effective_constant: f32, central_mass: f32, orbit_radius: f32) -> f32 {
    if orbit_radius <= 0.0 {
        return 0.0;
    }
    (effective_constant * central_mass / orbit_radius).sqrt()
}

/// Period of that circular orbit, T = 2π √(r³ / (G M))
pub fn orbital_period(effective_constant: f32, central_mass: f32, orbit_radius: f32) -> f32 {
    let mu = effective_constant * central_mass;
    if mu <= 0.0 {
        return f32::INFINITY;
    }
    2.0 * PI * (orbit_radius.powi(3) / mu).sqrt()
}

/// Position and velocity on a circular orbit in the XZ plane.
///
/// `phase` is the angle in radians from the +X axis. The velocity is
/// tangent to the orbit and offset by the central body's own velocity.
pub fn circular_orbit_state(
    center: Vector3,
    center_velocity: Vector3,
    effective_constant: f32,
    central_mass: f32,
    orbit_radius: f32,
    phase: f32,
) -> (Vector3, Vector3) {
    let (sin, cos) = phase.sin_cos();
    let radial = Vector3::new(cos, 0.0, sin);
    let tangent = Vector3::new(sin, 0.0, -cos);

    let speed = circular_orbit_speed(effective_constant, central_mass, orbit_radius);

    (
        center + radial * orbit_radius,
        center_velocity + tangent * speed,
    )
}
