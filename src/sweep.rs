// src/sweep.rs

use glam::DVec2;

use crate::error::{RayCastError, Result};
use crate::geometry::{Point2, Polygon};
use crate::intersection::intersect_dir;

pub const DEFAULT_RAY_COUNT: usize = 1080;
pub const MAX_RAY_COUNT: usize = 360 * 5;
pub const DEFAULT_MAX_RAY_LENGTH: f64 = 10_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    pub ray_count: usize,
    /// Length of a ray that escapes without striking any edge.
    pub max_ray_length: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            ray_count: DEFAULT_RAY_COUNT,
            max_ray_length: DEFAULT_MAX_RAY_LENGTH,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if self.ray_count == 0 {
            return Err(RayCastError::InvalidConfiguration(
                "ray count must be positive".to_string(),
            ));
        }
        if !(self.max_ray_length.is_finite() && self.max_ray_length > 0.0) {
            return Err(RayCastError::InvalidConfiguration(format!(
                "max ray length {} must be positive and finite",
                self.max_ray_length
            )));
        }
        Ok(())
    }

    /// Angle of ray `index`, in degrees.
    pub fn angle_deg(&self, index: usize) -> f64 {
        index as f64 * 360.0 / self.ray_count as f64
    }
}

/// One sampled ray of a sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FanRay {
    /// Radians, counter-clockwise from +x.
    pub angle: f64,
    pub point: Point2,
    pub distance: f64,
    /// False when the ray escaped and `point` sits at the cutoff length.
    pub blocked: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityFan {
    pub origin: Point2,
    pub rays: Vec<FanRay>,
}

impl VisibilityFan {
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.rays.iter().map(|ray| ray.point)
    }
}

/// Casts a single ray and reduces over every edge of every polygon to the
/// nearest hit. Polygon order, then edge order, decides ties.
pub fn cast_ray(
    origin: Point2,
    angle: f64,
    polygons: &[Polygon],
    max_ray_length: f64,
) -> FanRay {
    let direction = DVec2::from_angle(angle);

    let mut best: Option<(f64, Point2)> = None;
    for polygon in polygons {
        for (start, end) in polygon.edges() {
            let candidate = intersect_dir(origin, direction, start, end);
            if !candidate.hit {
                continue;
            }
            let closer = match best {
                Some((best_t, _)) => candidate.ray_param < best_t,
                None => true,
            };
            if closer {
                best = Some((candidate.ray_param, candidate.point));
            }
        }
    }

    match best {
        Some((t, point)) => FanRay { angle, point, distance: t, blocked: true },
        None => FanRay {
            angle,
            point: (DVec2::from(origin) + direction * max_ray_length).into(),
            distance: max_ray_length,
            blocked: false,
        },
    }
}

/// Casts `config.ray_count` rays evenly over a full turn starting at 0 degrees.
///
/// Angle `k` is derived from `k` itself rather than accumulated, so the fan
/// always holds exactly `ray_count` entries.
pub fn sweep(origin: Point2, polygons: &[Polygon], config: &SweepConfig) -> Result<VisibilityFan> {
    config.validate()?;

    let rays: Vec<FanRay> = (0..config.ray_count)
        .map(|k| cast_ray(origin, config.angle_deg(k).to_radians(), polygons, config.max_ray_length))
        .collect();

    log::trace!(
        "swept {} rays from ({:.1}, {:.1}), {} blocked",
        rays.len(),
        origin.x,
        origin.y,
        rays.iter().filter(|r| r.blocked).count()
    );
    Ok(VisibilityFan { origin, rays })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::from_flat(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0]).unwrap()
    }

    #[test]
    fn config_validation() {
        assert!(SweepConfig::default().validate().is_ok());
        let zero = SweepConfig { ray_count: 0, ..Default::default() };
        assert!(matches!(zero.validate(), Err(RayCastError::InvalidConfiguration(_))));
        let bad_len = SweepConfig { max_ray_length: f64::INFINITY, ..Default::default() };
        assert!(matches!(bad_len.validate(), Err(RayCastError::InvalidConfiguration(_))));
    }

    #[test]
    fn nearest_edge_wins_across_polygons() {
        let outer = Polygon::from_flat(&[-100.0, -100.0, 100.0, -100.0, 100.0, 100.0, -100.0, 100.0]).unwrap();
        let inner = Polygon::from_flat(&[20.0, -5.0, 30.0, -5.0, 30.0, 5.0, 20.0, 5.0]).unwrap();

        // inner is listed after outer but is closer
        let ray = cast_ray(Point2::new(0.0, 0.0), 0.0, &[outer, inner], 500.0);
        assert!(ray.blocked);
        assert!((ray.point.x - 20.0).abs() < 1e-9);
        assert!((ray.distance - 20.0).abs() < 1e-9);
    }

    #[test]
    fn shared_edges_keep_the_first_polygon_hit() {
        let a = square();
        let b = square();
        let ray = cast_ray(Point2::new(5.0, 5.0), 0.0, &[a, b], 500.0);
        assert!((ray.distance - 5.0).abs() < 1e-9);
    }

    #[test]
    fn escaping_ray_stops_at_cutoff() {
        let ray = cast_ray(Point2::new(50.0, 50.0), 0.0, &[square()], 200.0);
        assert!(!ray.blocked);
        assert_eq!(ray.point, Point2::new(250.0, 50.0));
        assert_eq!(ray.distance, 200.0);
    }

    #[test]
    fn zero_ray_count_is_rejected_before_sweeping() {
        let config = SweepConfig { ray_count: 0, ..Default::default() };
        assert!(sweep(Point2::new(5.0, 5.0), &[square()], &config).is_err());
    }

    #[test]
    fn angles_increase_from_zero() {
        let config = SweepConfig { ray_count: 8, ..Default::default() };
        let fan = sweep(Point2::new(5.0, 5.0), &[square()], &config).unwrap();
        assert_eq!(fan.len(), 8);
        assert_eq!(fan.rays[0].angle, 0.0);
        assert!(fan.rays.windows(2).all(|w| w[0].angle < w[1].angle));
        assert!((fan.rays[2].angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn far_origin_sweeps_like_an_empty_scene() {
        let config = SweepConfig { ray_count: 4, ..Default::default() };
        let origin = Point2::new(1e17, 0.0);
        let with_shapes = sweep(origin, &[square()], &config).unwrap();
        let empty = sweep(origin, &[], &config).unwrap();
        assert_eq!(with_shapes.len(), 4);
        assert_eq!(with_shapes, empty);
    }
}
