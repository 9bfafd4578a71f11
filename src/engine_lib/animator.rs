// src/engine_lib/animator.rs

use std::fmt;

use crate::engine_lib::scene_types::{
    Color, DisplayOptions, Scene, BISQUE, BLACK, MAGENTA, SECTOR_LIGHT, WHITE, YELLOW,
};
use crate::error::Result;
use crate::geometry::Point2;
use crate::sweep::{sweep, SweepConfig};

pub const INTERSECT_DOT_RADIUS: f32 = 5.0;
const TITLE_TEXT: &str = "Ray Cast";
const TITLE_SIZE: f32 = 50.0;

/// Backend-neutral drawing primitive, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    /// Filled as a triangle fan around `hub`, which must see every edge.
    FillPolygon { points: Vec<Point2>, hub: Point2, color: Color },
    StrokePolygon { points: Vec<Point2>, color: Color, width: f32 },
    Line { from: Point2, to: Point2, color: Color, width: f32 },
    Dot { center: Point2, radius: f32, color: Color },
    Text { position: Point2, text: String, size: f32, fill: Color, stroke: Option<Color> },
}

/// Display list for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn clear_color(&self) -> Option<Color> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Clear(color) => Some(*color),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Text { .. }))
    }
}

/// Everything a strategy may read while drawing. The origin is a copy taken
/// before drawing starts.
pub struct FrameContext<'a> {
    pub scene: &'a Scene,
    pub origin: Point2,
    pub options: &'a DisplayOptions,
    pub config: &'a SweepConfig,
}

/// Interchangeable frame-drawing strategies, picked from the toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Animator {
    Text,
    StaticShapes,
    MultiRay,
}

impl Animator {
    pub const ALL: [Animator; 3] = [Animator::Text, Animator::StaticShapes, Animator::MultiRay];

    pub fn name(&self) -> &'static str {
        match self {
            Animator::Text => "Text animator",
            Animator::StaticShapes => "Static shapes",
            Animator::MultiRay => "Multi ray",
        }
    }

    pub fn draw(&self, ctx: &FrameContext, frame: &mut Frame) -> Result<()> {
        match self {
            Animator::Text => {
                frame.push(DrawCommand::Clear(WHITE));
                frame.push(DrawCommand::Text {
                    position: ctx.origin,
                    text: TITLE_TEXT.to_string(),
                    size: TITLE_SIZE,
                    fill: BLACK,
                    stroke: Some(WHITE),
                });
                Ok(())
            }
            Animator::StaticShapes => {
                frame.push(DrawCommand::Clear(BISQUE));
                draw_shapes(ctx.scene, frame);
                Ok(())
            }
            Animator::MultiRay => {
                frame.push(DrawCommand::Clear(BLACK));
                draw_shapes(ctx.scene, frame);
                draw_rays(ctx, frame)
            }
        }
    }
}

impl fmt::Display for Animator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn draw_shapes(scene: &Scene, frame: &mut Frame) {
    for (polygon, style) in scene.shapes() {
        if let Some(fill) = style.fill {
            frame.push(DrawCommand::FillPolygon {
                points: polygon.vertices().to_vec(),
                hub: polygon.centroid(),
                color: fill,
            });
        }
        if let Some(stroke) = style.stroke {
            frame.push(DrawCommand::StrokePolygon {
                points: polygon.vertices().to_vec(),
                color: stroke,
                width: style.stroke_width,
            });
        }
    }
}

fn draw_rays(ctx: &FrameContext, frame: &mut Frame) -> Result<()> {
    let fan = sweep(ctx.origin, ctx.scene.polygons(), ctx.config)?;

    if ctx.options.draw_sectors {
        frame.push(DrawCommand::FillPolygon {
            points: fan.points().collect(),
            hub: fan.origin,
            color: SECTOR_LIGHT,
        });
    }
    for ray in &fan.rays {
        frame.push(DrawCommand::Line { from: fan.origin, to: ray.point, color: YELLOW, width: 1.0 });
    }
    if ctx.options.draw_intersect_points {
        for ray in fan.rays.iter().filter(|r| r.blocked) {
            frame.push(DrawCommand::Dot { center: ray.point, radius: INTERSECT_DOT_RADIUS, color: MAGENTA });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_lib::scene_types::ShapeStyle;

    fn scene() -> Scene {
        let mut scene = Scene::new();
        scene
            .add_flat(&[0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0], ShapeStyle::default())
            .unwrap();
        scene
    }

    fn lines(frame: &Frame) -> usize {
        frame.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. })).count()
    }

    #[test]
    fn multi_ray_draws_one_line_per_ray() {
        let scene = scene();
        let options = DisplayOptions { draw_intersect_points: true, ..Default::default() };
        let config = SweepConfig { ray_count: 36, ..Default::default() };
        let ctx = FrameContext { scene: &scene, origin: Point2::new(50.0, 50.0), options: &options, config: &config };

        let mut frame = Frame::new();
        Animator::MultiRay.draw(&ctx, &mut frame).unwrap();
        assert_eq!(frame.clear_color(), Some(BLACK));
        assert_eq!(lines(&frame), 36);
        let dots = frame.commands.iter().filter(|c| matches!(c, DrawCommand::Dot { .. })).count();
        assert_eq!(dots, 36);
    }

    #[test]
    fn sectors_fill_the_fan_around_the_origin() {
        let scene = scene();
        let options = DisplayOptions { draw_sectors: true, ..Default::default() };
        let config = SweepConfig { ray_count: 4, ..Default::default() };
        let origin = Point2::new(25.0, 50.0);
        let ctx = FrameContext { scene: &scene, origin, options: &options, config: &config };

        let mut frame = Frame::new();
        Animator::MultiRay.draw(&ctx, &mut frame).unwrap();
        let sector = frame.commands.iter().find_map(|c| match c {
            DrawCommand::FillPolygon { points, hub, color } if *color == SECTOR_LIGHT => Some((points.len(), *hub)),
            _ => None,
        });
        assert_eq!(sector, Some((4, origin)));
    }

    #[test]
    fn static_shapes_casts_no_rays() {
        let scene = scene();
        let options = DisplayOptions::default();
        let config = SweepConfig::default();
        let ctx = FrameContext { scene: &scene, origin: Point2::new(50.0, 50.0), options: &options, config: &config };

        let mut frame = Frame::new();
        Animator::StaticShapes.draw(&ctx, &mut frame).unwrap();
        assert_eq!(lines(&frame), 0);
        // default style fills then strokes
        assert!(matches!(frame.commands[1], DrawCommand::FillPolygon { .. }));
        assert!(matches!(frame.commands[2], DrawCommand::StrokePolygon { .. }));
    }

    #[test]
    fn text_follows_the_origin() {
        let scene = Scene::new();
        let options = DisplayOptions::default();
        let config = SweepConfig::default();
        let origin = Point2::new(120.0, 80.0);
        let ctx = FrameContext { scene: &scene, origin, options: &options, config: &config };

        let mut frame = Frame::new();
        Animator::Text.draw(&ctx, &mut frame).unwrap();
        let text = frame.texts().next();
        match text {
            Some(DrawCommand::Text { position, .. }) => assert_eq!(*position, origin),
            other => panic!("expected text, got {:?}", other),
        }
    }
}
