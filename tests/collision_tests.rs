use celestial_sim::{
    bodies::{CelestialBody, Viewpoint},
    collision::{probe_terrain, probe_terrain_hit, ray_intersects_sphere, CollisionDetector, ResolutionPolicy},
    core::BodyHandle,
    error::PhysicsError,
    math::{Matrix4, Point3, Ray, Vector3, Viewport},
};
use approx::assert_relative_eq;

const PUSHOUT: f32 = 0.1;

fn body(radius: f32, x: f32, y: f32, z: f32) -> CelestialBody {
    CelestialBody::new_at_rest(radius, 100.0, Vector3::new(x, y, z)).unwrap()
}

/// Two overlapping spheres of radius 10 centered 12 apart on the X axis
fn overlapping_pair() -> Vec<CelestialBody> {
    vec![body(10.0, 0.0, 0.0, 0.0), body(10.0, 12.0, 0.0, 0.0)]
}

#[test]
fn test_camera_inside_body_is_pushed_to_surface() {
    let detector = CollisionDetector::new(PUSHOUT, ResolutionPolicy::Sequential);
    let bodies = vec![body(5.0, 10.0, 0.0, 0.0)];
    let mut camera = Viewpoint::new(Vector3::new(12.0, 0.0, 0.0));

    let contacts = detector.resolve_camera_collisions(&mut camera, &bodies);

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].body, BodyHandle::new(0));
    assert_relative_eq!(contacts[0].depth, 3.0, epsilon = 1e-6);
    assert_relative_eq!(contacts[0].normal, Vector3::new(1.0, 0.0, 0.0));

    let distance = (camera.get_position() - bodies[0].get_position()).norm();
    assert!(distance >= 5.0);
    assert_relative_eq!(distance, 5.0 + PUSHOUT, epsilon = 1e-5);
    assert_relative_eq!(camera.get_position(), Vector3::new(15.1, 0.0, 0.0), epsilon = 1e-5);
}

#[test]
fn test_camera_at_body_center_is_pushed_up() {
    let detector = CollisionDetector::new(PUSHOUT, ResolutionPolicy::Sequential);
    let bodies = vec![body(5.0, 10.0, 0.0, 0.0)];
    let mut camera = Viewpoint::new(Vector3::new(10.0, 0.0, 0.0));

    detector.resolve_camera_collisions(&mut camera, &bodies);

    assert_relative_eq!(camera.get_position(), Vector3::new(10.0, 5.1, 0.0), epsilon = 1e-5);
}

#[test]
fn test_camera_outside_or_on_surface_is_untouched() {
    let detector = CollisionDetector::new(PUSHOUT, ResolutionPolicy::Sequential);
    let bodies = vec![body(5.0, 0.0, 0.0, 0.0)];

    for start in [Vector3::new(20.0, 0.0, 0.0), Vector3::new(0.0, 5.0, 0.0)] {
        let mut camera = Viewpoint::new(start);
        let contacts = detector.resolve_camera_collisions(&mut camera, &bodies);

        assert!(contacts.is_empty());
        assert_eq!(camera.get_position(), start);
    }
}

#[test]
fn test_sequential_policy_lets_later_body_win() {
    let detector = CollisionDetector::new(PUSHOUT, ResolutionPolicy::Sequential);
    let bodies = overlapping_pair();
    let mut camera = Viewpoint::new(Vector3::new(6.0, 0.0, 0.0));

    let contacts = detector.resolve_camera_collisions(&mut camera, &bodies);

    // The first push lands inside the second body, whose push lands back inside the first
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[1].body, BodyHandle::new(1));
    assert_relative_eq!(camera.get_position(), Vector3::new(1.9, 0.0, 0.0), epsilon = 1e-4);
    assert!((camera.get_position() - bodies[0].get_position()).norm() < 10.0);
}

#[test]
fn test_deepest_policy_resolves_only_the_deepest_body() {
    let detector = CollisionDetector::new(PUSHOUT, ResolutionPolicy::Deepest);
    let bodies = overlapping_pair();
    let mut camera = Viewpoint::new(Vector3::new(5.0, 0.0, 0.0));

    let contacts = detector.resolve_camera_collisions(&mut camera, &bodies);

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].body, BodyHandle::new(0));
    assert_relative_eq!(contacts[0].depth, 5.0, epsilon = 1e-5);
    assert_relative_eq!(camera.get_position(), Vector3::new(10.1, 0.0, 0.0), epsilon = 1e-4);
}

#[test]
fn test_iterative_policy_clears_both_bodies() {
    let bodies = overlapping_pair();
    let start = Vector3::new(6.0, 1.0, 0.0);

    let mut sequential = Viewpoint::new(start);
    CollisionDetector::new(PUSHOUT, ResolutionPolicy::Sequential)
        .resolve_camera_collisions(&mut sequential, &bodies);
    assert!((sequential.get_position() - bodies[0].get_position()).norm() < 10.0);

    let mut iterative = Viewpoint::new(start);
    let contacts = CollisionDetector::new(PUSHOUT, ResolutionPolicy::Iterative { max_iterations: 8 })
        .resolve_camera_collisions(&mut iterative, &bodies);

    assert_eq!(contacts.len(), 3);
    for body in &bodies {
        assert!((iterative.get_position() - body.get_position()).norm() >= body.get_radius());
    }
}

#[test]
fn test_iterative_policy_respects_iteration_cap() {
    let detector = CollisionDetector::new(PUSHOUT, ResolutionPolicy::Iterative { max_iterations: 4 });
    let bodies = overlapping_pair();
    let mut camera = Viewpoint::new(Vector3::new(6.0, 0.0, 0.0));

    // Along the axis the camera bounces between the two bodies forever
    let contacts = detector.resolve_camera_collisions(&mut camera, &bodies);

    assert_eq!(contacts.len(), 8);
}

#[test]
fn test_contact_removes_inward_velocity() {
    let detector = CollisionDetector::new(PUSHOUT, ResolutionPolicy::Sequential);
    let bodies = vec![body(5.0, 0.0, 0.0, 0.0)];
    let mut camera = Viewpoint::new(Vector3::new(4.0, 0.0, 0.0));
    camera.set_velocity(Vector3::new(-3.0, 1.0, 0.0));

    detector.resolve_camera_collisions(&mut camera, &bodies);

    assert_relative_eq!(camera.get_velocity(), Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-6);

    // Moving away from the surface is left alone
    let mut leaving = Viewpoint::new(Vector3::new(4.0, 0.0, 0.0));
    leaving.set_velocity(Vector3::new(2.0, 0.0, 0.0));
    detector.resolve_camera_collisions(&mut leaving, &bodies);
    assert_relative_eq!(leaving.get_velocity(), Vector3::new(2.0, 0.0, 0.0));
}

#[test]
fn test_ray_sphere_boundary() {
    let center = Vector3::zeros();
    let down = Vector3::new(0.0, -1.0, 0.0);

    // Closest approach equals the radius: tangent, discriminant exactly zero
    let tangent = Ray::new(Vector3::new(2.0, 10.0, 0.0), down);
    assert!(!ray_intersects_sphere(&tangent, center, 2.0));

    let through = Ray::new(Vector3::new(1.0, 10.0, 0.0), down);
    assert!(ray_intersects_sphere(&through, center, 2.0));

    let miss = Ray::new(Vector3::new(3.0, 10.0, 0.0), down);
    assert!(!ray_intersects_sphere(&miss, center, 2.0));

    // The test works on the whole line, so a sphere behind the origin counts
    let behind = Ray::new(Vector3::new(0.0, -10.0, 0.0), down);
    assert!(ray_intersects_sphere(&behind, center, 2.0));

    let sphere = body(2.0, 0.0, 0.0, 0.0);
    assert!(sphere.intersects_ray(&through));
    assert!(!sphere.intersects_ray(&tangent));
}

fn camera_matrices(eye: Point3) -> (Viewport, Matrix4, Matrix4) {
    let viewport = Viewport::new(800.0, 600.0);
    let projection = Matrix4::new_perspective(
        viewport.aspect_ratio(),
        45.0_f32.to_radians(),
        0.1,
        10_000.0,
    );
    let view = Matrix4::look_at_rh(&eye, &(eye + Vector3::new(0.0, 0.0, -1.0)), &Vector3::y());
    (viewport, projection, view)
}

#[test]
fn test_screen_ray_starts_at_eye_and_looks_forward() {
    let (viewport, projection, view) = camera_matrices(Point3::new(0.0, 50.0, 0.0));

    let ray = Ray::from_screen(400.0, 300.0, viewport, &projection, &view).unwrap();

    assert_relative_eq!(ray.origin, Vector3::new(0.0, 50.0, 0.0), epsilon = 1e-3);
    assert_relative_eq!(ray.direction, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-5);
    assert_relative_eq!(ray.direction.norm(), 1.0, epsilon = 1e-6);

    // Left half of the screen looks left
    let left = Ray::from_screen(0.0, 300.0, viewport, &projection, &view).unwrap();
    assert!(left.direction.x < 0.0);
}

#[test]
fn test_screen_ray_rejects_degenerate_input() {
    let (viewport, _, view) = camera_matrices(Point3::new(0.0, 0.0, 0.0));

    let result = Ray::from_screen(10.0, 10.0, viewport, &Matrix4::zeros(), &view);
    assert!(matches!(result, Err(PhysicsError::SingularMatrix(_))));

    let result = Ray::from_screen(10.0, 10.0, Viewport::new(0.0, 600.0), &Matrix4::identity(), &view);
    assert!(matches!(result, Err(PhysicsError::InvalidParameter(_))));
}

#[test]
fn test_terrain_probe_hits_body_below_camera() {
    let (viewport, projection, view) = camera_matrices(Point3::new(0.0, 50.0, 0.0));

    let below = vec![body(100.0, 500.0, 0.0, 0.0), body(5.0, 0.0, 0.0, 0.0)];
    assert!(probe_terrain(200.0, 150.0, viewport, &projection, &view, &below).unwrap());
    assert_eq!(
        probe_terrain_hit(200.0, 150.0, viewport, &projection, &view, &below).unwrap(),
        Some(BodyHandle::new(1))
    );

    let aside = vec![body(5.0, 100.0, 0.0, 0.0)];
    assert!(!probe_terrain(200.0, 150.0, viewport, &projection, &view, &aside).unwrap());
}
