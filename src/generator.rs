// src/generator.rs

use std::cmp::Ordering;

use rand::Rng;

use crate::error::{RayCastError, Result};
use crate::geometry::{Point2, Polygon, MIN_VERTICES};

pub struct PolygonGenerator;

impl PolygonGenerator {
    /// Random simple polygon with a point count drawn from `min_points..max_points`.
    ///
    /// Points are scattered inside the disc of `radius` around `center`, then
    /// ordered by their polar angle around their own centroid. That ordering is
    /// what keeps the edges from crossing: every edge stays inside the angular
    /// wedge between its two endpoints, and the wedges don't overlap.
    pub fn random_polygon<R: Rng + ?Sized>(
        rng: &mut R,
        center: Point2,
        radius: f64,
        min_points: usize,
        max_points: usize,
    ) -> Result<Polygon> {
        if min_points >= max_points {
            return Err(RayCastError::InvalidPolygon(format!(
                "empty point range {}..{}",
                min_points, max_points
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RayCastError::InvalidPolygon(format!("radius {} must be positive", radius)));
        }

        let point_count = rng.gen_range(min_points..max_points);
        if point_count < MIN_VERTICES {
            return Err(RayCastError::InvalidPolygon(format!(
                "drew {} points, at least {} required",
                point_count, MIN_VERTICES
            )));
        }

        let mut points: Vec<Point2> = (0..point_count)
            .map(|_| center.random_within(radius, &mut *rng))
            .collect();

        let (sum_x, sum_y) = points.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let centroid = Point2::new(sum_x / point_count as f64, sum_y / point_count as f64);

        points.sort_by(|a, b| {
            centroid
                .angle_to(a)
                .partial_cmp(&centroid.angle_to(b))
                .unwrap_or(Ordering::Equal)
        });

        log::debug!(
            "generated {}-gon around ({:.1}, {:.1}), radius {:.1}",
            point_count, center.x, center.y, radius
        );
        Polygon::from_points(points)
    }

    /// `random_polygon` on the thread-local generator.
    pub fn randomize(
        center_x: f64,
        center_y: f64,
        radius: f64,
        min_points: usize,
        max_points: usize,
    ) -> Result<Polygon> {
        let mut rng = rand::thread_rng();
        Self::random_polygon(&mut rng, Point2::new(center_x, center_y), radius, min_points, max_points)
    }
}
