// src/intersection.rs

use glam::DVec2;

use crate::error::{RayCastError, Result};
use crate::geometry::Point2;

/// Outcome of one ray/segment test.
///
/// `point`, `ray_param` and `segment_param` are filled in even when `hit` is
/// false so callers can inspect a rejected candidate. Parallel lines report
/// both parameters as `+inf` and `point` as the ray start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionResult {
    pub hit: bool,
    pub point: Point2,
    /// Multiple of the ray direction `ray_end - ray_start` to reach `point`.
    pub ray_param: f64,
    /// Fraction along the segment, within `[0, 1]` on a hit.
    pub segment_param: f64,
}

impl IntersectionResult {
    fn parallel(ray_start: Point2) -> Self {
        Self {
            hit: false,
            point: ray_start,
            ray_param: f64::INFINITY,
            segment_param: f64::INFINITY,
        }
    }
}

/// Intersects the ray from `ray_start` through `ray_end` with the segment
/// `seg_start..seg_end`.
///
/// Collinear overlap is reported as a miss, as is a zero-length segment.
pub fn intersect(
    ray_start: Point2,
    ray_end: Point2,
    seg_start: Point2,
    seg_end: Point2,
) -> Result<IntersectionResult> {
    if ray_start == ray_end {
        return Err(RayCastError::InvalidRay { x: ray_start.x, y: ray_start.y });
    }
    let direction = DVec2::from(ray_end) - DVec2::from(ray_start);
    Ok(intersect_dir(ray_start, direction, seg_start, seg_end))
}

/// Same test as [`intersect`] with the ray given as a start point and a
/// direction vector. `ray_param` is measured in multiples of `direction`.
///
/// A zero `direction` is parallel to everything and reports a miss.
pub fn intersect_dir(
    ray_start: Point2,
    direction: DVec2,
    seg_start: Point2,
    seg_end: Point2,
) -> IntersectionResult {
    let q = DVec2::from(ray_start);
    let r = direction;
    let s = DVec2::from(seg_end) - DVec2::from(seg_start);
    let d = q - DVec2::from(seg_start);

    // r x s
    let denom = r.perp_dot(s);
    if denom == 0.0 {
        return IntersectionResult::parallel(ray_start);
    }

    let t = -d.perp_dot(s) / denom;
    let u = -d.perp_dot(r) / denom;

    IntersectionResult {
        hit: t >= 0.0 && (0.0..=1.0).contains(&u),
        point: (q + r * t).into(),
        ray_param: t,
        segment_param: u,
    }
}
