// src/geometry.rs

use glam::DVec2;
use rand::Rng;

use crate::error::{RayCastError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A point drawn uniformly from the disc of `radius` around `self`.
    pub fn random_within<R: Rng + ?Sized>(&self, radius: f64, rng: &mut R) -> Point2 {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        // sqrt keeps the density uniform over the area instead of clumping at the center
        let distance = radius * rng.gen::<f64>().sqrt();
        Point2::new(self.x + distance * angle.cos(), self.y + distance * angle.sin())
    }

    /// Polar angle of `other` as seen from `self`, in radians within `(-PI, PI]`.
    pub fn angle_to(&self, other: &Point2) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    pub fn distance_to(&self, other: &Point2) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }
}

impl From<Point2> for DVec2 {
    fn from(p: Point2) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point2 {
    fn from(v: DVec2) -> Self {
        Point2::new(v.x, v.y)
    }
}

/// Tight axis-aligned box around a set of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn at(p: Point2) -> Self {
        Self { min_x: p.x, min_y: p.y, max_x: p.x, max_y: p.y }
    }

    pub fn include(&mut self, p: Point2) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// `None` for an empty slice.
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Bounds::at(*first);
        for p in rest {
            bounds.include(*p);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Corners in loop order, starting at the minimum corner.
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.min_x, self.min_y),
            Point2::new(self.max_x, self.min_y),
            Point2::new(self.max_x, self.max_y),
            Point2::new(self.min_x, self.max_y),
        ]
    }
}

pub trait HasBounds {
    fn bounds(&self) -> Bounds;
}

pub const MIN_VERTICES: usize = 3;

/// Closed vertex loop. Edge `i` runs from vertex `i` back to vertex `(i - 1) mod n`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>, // Kept private so bounds can't go stale
    bounds: Bounds,
}

impl Polygon {
    /// Builds a polygon from `x1, y1, x2, y2, ...`.
    pub fn from_flat(coords: &[f64]) -> Result<Self> {
        if coords.len() % 2 != 0 {
            return Err(RayCastError::InvalidPolygon(format!(
                "odd coordinate count {}",
                coords.len()
            )));
        }
        let count = coords.len() / 2;
        if count < MIN_VERTICES {
            return Err(RayCastError::InvalidPolygon(format!(
                "{} vertices given, at least {} required",
                count, MIN_VERTICES
            )));
        }

        let mut vertices = Vec::with_capacity(count);
        let mut bounds = Bounds::at(Point2::new(coords[0], coords[1]));
        for pair in coords.chunks_exact(2) {
            let p = Point2::new(pair[0], pair[1]);
            bounds.include(p);
            vertices.push(p);
        }
        Ok(Self { vertices, bounds })
    }

    pub fn from_points(points: Vec<Point2>) -> Result<Self> {
        let bounds = Self::checked_bounds(&points)?;
        Ok(Self { vertices: points, bounds })
    }

    pub fn set_vertices(&mut self, points: Vec<Point2>) -> Result<()> {
        self.bounds = Self::checked_bounds(&points)?;
        self.vertices = points;
        Ok(())
    }

    fn checked_bounds(points: &[Point2]) -> Result<Bounds> {
        if points.len() < MIN_VERTICES {
            return Err(RayCastError::InvalidPolygon(format!(
                "{} vertices given, at least {} required",
                points.len(),
                MIN_VERTICES
            )));
        }
        Bounds::from_points(points)
            .ok_or_else(|| RayCastError::InvalidPolygon("no vertices".to_string()))
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    /// Edges as `(vertex[i], vertex[(i - 1) mod n])`, in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + n - 1) % n]))
    }

    /// Vertex average. Used as the fan hub when filling.
    pub fn centroid(&self) -> Point2 {
        let sum = self
            .vertices
            .iter()
            .fold(DVec2::ZERO, |acc, p| acc + DVec2::from(*p));
        (sum / self.vertices.len() as f64).into()
    }
}

impl HasBounds for Polygon {
    fn bounds(&self) -> Bounds {
        self.bounds
    }
}
