// src/lib.rs

pub mod error;
pub mod geometry;
pub mod generator;
pub mod intersection;
pub mod sweep;
pub mod fps;
pub mod engine_lib;
pub mod demo_scene;

pub use error::{RayCastError, Result};
pub use geometry::{Bounds, HasBounds, Point2, Polygon};
pub use generator::PolygonGenerator;
pub use intersection::{intersect, intersect_dir, IntersectionResult};
pub use sweep::{cast_ray, sweep, FanRay, SweepConfig, VisibilityFan};
pub use fps::FpsCounter;
