use celestial_sim::math::{approx_zero, safe_normalize, world_up, Ray, Vector3, Viewport, EPSILON};
use approx::assert_relative_eq;

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON * 0.5));
    assert!(approx_zero(-EPSILON * 0.5));
    assert!(!approx_zero(EPSILON * 2.0));
    assert!(!approx_zero(-0.1));
}

#[test]
fn test_safe_normalize_falls_back_on_zero_length() {
    let v = safe_normalize(Vector3::new(3.0, 0.0, 4.0), world_up());
    assert_relative_eq!(v, Vector3::new(0.6, 0.0, 0.8));

    assert_eq!(safe_normalize(Vector3::zeros(), world_up()), world_up());
    assert_eq!(
        safe_normalize(Vector3::new(f32::NAN, 0.0, 0.0), world_up()),
        world_up()
    );
}

#[test]
fn test_ray_point_at() {
    let ray = Ray::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.0, -1.0, 0.0));

    assert_eq!(ray.point_at(0.0), Vector3::new(1.0, 2.0, 3.0));
    assert_relative_eq!(ray.point_at(2.5), Vector3::new(1.0, -0.5, 3.0));
    // Negative distances walk back along the line
    assert_relative_eq!(ray.point_at(-1.0), Vector3::new(1.0, 3.0, 3.0));
}

#[test]
fn test_ray_new_normalized() {
    let ray = Ray::new_normalized(Vector3::zeros(), Vector3::new(0.0, 0.0, -10.0));
    assert_relative_eq!(ray.direction, Vector3::new(0.0, 0.0, -1.0));
    assert_relative_eq!(ray.point_at(4.0), Vector3::new(0.0, 0.0, -4.0));

    // A zero direction is kept as-is rather than turned into NaN
    let degenerate = Ray::new_normalized(Vector3::zeros(), Vector3::zeros());
    assert_eq!(degenerate.direction, Vector3::zeros());
}

#[test]
fn test_ray_with_direction_keeps_origin() {
    let ray = Ray::new(Vector3::new(5.0, 5.0, 5.0), Vector3::new(1.0, 0.0, 0.0));
    let down = ray.with_direction(Vector3::new(0.0, -1.0, 0.0));

    assert_eq!(down.origin, ray.origin);
    assert_eq!(down.direction, Vector3::new(0.0, -1.0, 0.0));
}

#[test]
fn test_viewport_to_ndc() {
    let viewport = Viewport::new(800.0, 600.0);

    assert_relative_eq!(viewport.aspect_ratio(), 800.0 / 600.0);

    // Top-left maps to (-1, 1), bottom-right to (1, -1)
    let (x, y) = viewport.to_ndc(0.0, 0.0);
    assert_relative_eq!(x, -1.0);
    assert_relative_eq!(y, 1.0);

    let (x, y) = viewport.to_ndc(800.0, 600.0);
    assert_relative_eq!(x, 1.0);
    assert_relative_eq!(y, -1.0);

    let (x, y) = viewport.to_ndc(400.0, 300.0);
    assert_relative_eq!(x, 0.0);
    assert_relative_eq!(y, 0.0);
}
