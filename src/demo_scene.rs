// src/demo_scene.rs

use rand::Rng;

use crate::engine_lib::scene_types::{Scene, ShapeStyle, BLACK};
use crate::error::Result;
use crate::geometry::Point2;

const RANDOM_RADIUS: f64 = 100.0;
const RANDOM_MIN_POINTS: usize = 3;
const RANDOM_MAX_POINTS: usize = 10;

enum SampleShape {
    Flat(&'static [f64]),
    Random { center: (f64, f64) },
}

const SAMPLE_SHAPES: &[SampleShape] = &[
    SampleShape::Flat(&[100.0, 100.0, 200.0, 100.0, 200.0, 200.0, 100.0, 200.0]),
    SampleShape::Flat(&[100.0, 100.0, 200.0, 100.0, 200.0, 200.0, 100.0, 200.0]),
    SampleShape::Random { center: (350.0, 150.0) },
    SampleShape::Flat(&[600.0, 100.0, 500.0, 100.0, 450.0, 200.0, 550.0, 200.0]),
    SampleShape::Random { center: (550.0, 350.0) },
    SampleShape::Flat(&[600.0, 600.0, 500.0, 600.0, 550.0, 500.0]),
    SampleShape::Random { center: (350.0, 550.0) },
    SampleShape::Flat(&[100.0, 600.0, 200.0, 600.0, 250.0, 500.0, 150.0, 500.0]),
    SampleShape::Random { center: (150.0, 350.0) },
];

// Encloses the other shapes so every ray has something to hit.
const ARENA: &[f64] = &[0.0, 0.0, 1000.0, 0.0, 1000.0, 1000.0, 0.0, 1000.0];

fn shape_style() -> ShapeStyle {
    ShapeStyle::default().with_stroke(Some(BLACK), 1.5)
}

fn add_sample<R: Rng + ?Sized>(scene: &mut Scene, rng: &mut R, shape: &SampleShape) -> Result<()> {
    match shape {
        SampleShape::Flat(coords) => scene.add_flat(coords, shape_style()),
        SampleShape::Random { center } => scene.add_random(
            rng,
            Point2::new(center.0, center.1),
            RANDOM_RADIUS,
            RANDOM_MIN_POINTS,
            RANDOM_MAX_POINTS,
            shape_style(),
        ),
    }
}

/// Arena walls plus a mix of fixed and random obstacles.
/// A shape that fails to build is logged and left out.
pub fn create_sample_scene<R: Rng + ?Sized>(rng: &mut R) -> Scene {
    let mut scene = Scene::new();

    if let Err(e) = scene.add_flat(ARENA, ShapeStyle::default().with_fill(Some(BLACK))) {
        log::warn!("arena skipped: {}", e);
    }
    for (i, shape) in SAMPLE_SHAPES.iter().enumerate() {
        if let Err(e) = add_sample(&mut scene, rng, shape) {
            log::warn!("sample shape {} skipped: {}", i, e);
        }
    }

    log::debug!("sample scene: {} shapes, {} edges", scene.len(), scene.edge_count());
    scene
}
