// Worked examples for the intersection primitive and the sweep.

use raycast_light::{cast_ray, intersect, sweep, Point2, Polygon, RayCastError, SweepConfig};

const EPS: f64 = 1e-9;

fn square() -> Polygon {
    Polygon::from_flat(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0]).expect("valid square")
}

fn assert_point(actual: Point2, x: f64, y: f64) {
    assert!(
        (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
        "expected ({}, {}), got ({}, {})",
        x,
        y,
        actual.x,
        actual.y
    );
}

#[test]
fn ray_at_zero_degrees_hits_right_wall_midpoint() {
    let origin = Point2::new(5.0, 5.0);
    let hit = intersect(origin, Point2::new(6.0, 5.0), Point2::new(10.0, 10.0), Point2::new(10.0, 0.0)).unwrap();
    assert!(hit.hit);
    assert_point(hit.point, 10.0, 5.0);
    assert!((hit.ray_param - 5.0).abs() < EPS);
    assert!((hit.segment_param - 0.5).abs() < EPS);

    let ray = cast_ray(origin, 0.0, &[square()], 1000.0);
    assert!(ray.blocked);
    assert_point(ray.point, 10.0, 5.0);
    assert!((ray.distance - 5.0).abs() < EPS);
}

#[test]
fn ray_at_ninety_degrees_points_toward_increasing_y() {
    let ray = cast_ray(Point2::new(5.0, 5.0), 90f64.to_radians(), &[square()], 1000.0);
    assert!(ray.blocked);
    assert_point(ray.point, 5.0, 10.0);
}

#[test]
fn offset_parallel_segment_is_never_hit() {
    let res = intersect(
        Point2::new(5.0, 5.0),
        Point2::new(6.0, 5.0),
        Point2::new(0.0, 5.000001),
        Point2::new(20.0, 5.000001),
    )
    .unwrap();
    assert!(!res.hit);
}

#[test]
fn empty_scene_fans_out_to_cutoff_circle() {
    let config = SweepConfig { ray_count: 90, max_ray_length: 250.0 };
    let origin = Point2::new(-3.0, 7.0);
    let fan = sweep(origin, &[], &config).unwrap();
    assert_eq!(fan.len(), 90);
    for (k, ray) in fan.rays.iter().enumerate() {
        assert!(!ray.blocked);
        assert!((origin.distance_to(&ray.point) - 250.0).abs() < 1e-6);
        let angle = (k as f64 * 4.0).to_radians();
        assert_point(ray.point, origin.x + 250.0 * angle.cos(), origin.y + 250.0 * angle.sin());
    }
}

#[test]
fn fan_length_matches_ray_count_for_any_scene() {
    let shapes = vec![square(), Polygon::from_flat(&[20.0, 20.0, 30.0, 20.0, 25.0, 30.0]).unwrap()];
    for ray_count in [1, 2, 3, 7, 360, 1080, 1800] {
        let config = SweepConfig { ray_count, ..Default::default() };
        let inside = sweep(Point2::new(5.0, 5.0), &shapes, &config).unwrap();
        let outside = sweep(Point2::new(-40.0, 12.0), &shapes, &config).unwrap();
        assert_eq!(inside.len(), ray_count);
        assert_eq!(outside.len(), ray_count);
    }
}

#[test]
fn every_ray_from_inside_a_closed_square_is_blocked_on_its_boundary() {
    let fan = sweep(Point2::new(3.0, 6.0), &[square()], &SweepConfig::default()).unwrap();
    for p in fan.points() {
        let on_boundary = p.x.abs() < 1e-6 || (p.x - 10.0).abs() < 1e-6 || p.y.abs() < 1e-6 || (p.y - 10.0).abs() < 1e-6;
        assert!(on_boundary, "({}, {}) not on the square", p.x, p.y);
    }
    assert!(fan.rays.iter().all(|r| r.blocked));
}

#[test]
fn sweeping_twice_gives_the_same_fan() {
    let shapes = vec![square()];
    let config = SweepConfig { ray_count: 720, ..Default::default() };
    let a = sweep(Point2::new(2.5, 7.5), &shapes, &config).unwrap();
    let b = sweep(Point2::new(2.5, 7.5), &shapes, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_rays_is_a_configuration_error() {
    let config = SweepConfig { ray_count: 0, ..Default::default() };
    assert!(matches!(sweep(Point2::new(0.0, 0.0), &[], &config), Err(RayCastError::InvalidConfiguration(_))));
}

#[test]
fn far_away_light_still_produces_a_full_fan() {
    let config = SweepConfig { ray_count: 4, ..Default::default() };
    let origin = Point2::new(1e17, 0.0);
    let fan = sweep(origin, &[square()], &config).unwrap();
    assert_eq!(fan.len(), 4);
    assert!(fan.rays.iter().all(|ray| ray.distance == config.max_ray_length));
}
