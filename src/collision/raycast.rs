use crate::bodies::CelestialBody;
use crate::core::BodyHandle;
use crate::math::{Matrix4, Ray, Vector3, Viewport};
use crate::Result;

/// Direction of the terrain probe: straight down the world Y axis
#[inline]
pub fn probe_direction() -> Vector3 {
    Vector3::new(0.0, -1.0, 0.0)
}

/// Returns true if the line through `ray` crosses the sphere.
///
/// Classic discriminant test. A tangent line (discriminant exactly zero)
/// does not count, and neither does the sign of `t`, so a sphere behind the
/// origin is reported as hit.
pub fn ray_intersects_sphere(ray: &Ray, center: Vector3, radius: f32) -> bool {
    let oc = ray.origin - center;
    let a = ray.direction.dot(&ray.direction);
    let b = 2.0 * oc.dot(&ray.direction);
    let c = oc.dot(&oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;

    discriminant > 0.0
}

/// Casts the downward probe from the eye behind a screen position and
/// returns the first body in list order it crosses
pub fn probe_terrain_hit(
    x: f32,
    y: f32,
    viewport: Viewport,
    projection: &Matrix4,
    view: &Matrix4,
    bodies: &[CelestialBody],
) -> Result<Option<BodyHandle>> {
    let ray = Ray::from_screen(x, y, viewport, projection, view)?.with_direction(probe_direction());

    let hit = bodies.iter().position(|body| body.intersects_ray(&ray));

    if let Some(index) = hit {
        log::debug!(
            "terrain probe hit body {} at {:?}",
            index,
            bodies[index].get_position()
        );
    }

    Ok(hit.map(BodyHandle))
}

/// Returns true if the downward probe behind a screen position hits any body
pub fn probe_terrain(
    x: f32,
    y: f32,
    viewport: Viewport,
    projection: &Matrix4,
    view: &Matrix4,
    bodies: &[CelestialBody],
) -> Result<bool> {
    Ok(probe_terrain_hit(x, y, viewport, projection, view, bodies)?.is_some())
}
