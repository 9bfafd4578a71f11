// src/engine_lib/scene_types.rs
use rand::Rng;

use crate::error::Result;
use crate::generator::PolygonGenerator;
use crate::geometry::{Point2, Polygon};

pub type Color = [f32; 4];

pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const CYAN: Color = [0.0, 1.0, 1.0, 1.0];
pub const GREEN: Color = [0.0, 0.5, 0.0, 1.0];
pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
pub const MAGENTA: Color = [1.0, 0.0, 1.0, 1.0];
pub const BISQUE: Color = [1.0, 0.894, 0.769, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
pub const SECTOR_LIGHT: Color = [1.0, 1.0, 0.6, 0.35];

/// How a shape is painted. `None` skips that pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self { fill: Some(CYAN), stroke: Some(GREEN), stroke_width: 1.0 }
    }
}

impl ShapeStyle {
    pub fn with_fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Option<Color>, width: f32) -> Self {
        self.stroke = stroke;
        self.stroke_width = width;
        self
    }
}

/// Toggles for the debug overlays drawn on top of every strategy.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayOptions {
    pub draw_light_source: bool,
    pub draw_intersect_points: bool,
    pub draw_shape_joints: bool,
    pub draw_sectors: bool,
    pub draw_bounds: bool,
    pub draw_fps: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            draw_light_source: true,
            draw_intersect_points: false,
            draw_shape_joints: false,
            draw_sectors: false,
            draw_bounds: true,
            draw_fps: false,
        }
    }
}

/// Polygon set the sweep runs against, plus how each one is painted.
/// Polygons and styles are kept side by side so the sweep can borrow a plain slice.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    polygons: Vec<Polygon>,
    styles: Vec<ShapeStyle>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&mut self, polygon: Polygon, style: ShapeStyle) {
        self.polygons.push(polygon);
        self.styles.push(style);
    }

    pub fn add_flat(&mut self, coords: &[f64], style: ShapeStyle) -> Result<()> {
        let polygon = Polygon::from_flat(coords)?;
        self.add_shape(polygon, style);
        Ok(())
    }

    pub fn add_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        center: Point2,
        radius: f64,
        min_points: usize,
        max_points: usize,
        style: ShapeStyle,
    ) -> Result<()> {
        let polygon = PolygonGenerator::random_polygon(rng, center, radius, min_points, max_points)?;
        self.add_shape(polygon, style);
        Ok(())
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn shapes(&self) -> impl Iterator<Item = (&Polygon, &ShapeStyle)> {
        self.polygons.iter().zip(self.styles.iter())
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.polygons.iter().map(Polygon::count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RayCastError;

    #[test]
    fn failed_shape_is_not_added() {
        let mut scene = Scene::new();
        scene.add_flat(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0], ShapeStyle::default()).unwrap();
        let err = scene.add_flat(&[0.0, 0.0, 1.0, 1.0], ShapeStyle::default()).unwrap_err();
        assert!(matches!(err, RayCastError::InvalidPolygon(_)));
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.edge_count(), 3);
        assert_eq!(scene.shapes().count(), 1);
    }

    #[test]
    fn new_scene_is_empty() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.edge_count(), 0);
        scene.add_flat(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0], ShapeStyle::default()).unwrap();
        assert!(!scene.is_empty());
    }
}
