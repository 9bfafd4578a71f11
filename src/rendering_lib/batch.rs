// src/rendering_lib/batch.rs

use glam::Vec2;
use raycast_light::engine_lib::{Color, DrawCommand, Frame};
use raycast_light::Point2;

use super::vertex::Vertex;

const DOT_SEGMENTS: u32 = 12;

fn to_vec2(p: &Point2) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

/// Triangle list built from a frame's display list. Text is left to the GUI layer.
#[derive(Debug, Default)]
pub struct FrameBatch {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl FrameBatch {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn build(&mut self, frame: &Frame) {
        self.clear();
        for command in &frame.commands {
            self.append(command);
        }
    }

    pub fn append(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear(_) | DrawCommand::Text { .. } => {}
            DrawCommand::FillPolygon { points, hub, color } => self.add_fan(*hub, points, *color),
            DrawCommand::StrokePolygon { points, color, width } => {
                let n = points.len();
                for i in 0..n {
                    self.add_line(points[i], points[(i + 1) % n], *color, *width);
                }
            }
            DrawCommand::Line { from, to, color, width } => self.add_line(*from, *to, *color, *width),
            DrawCommand::Dot { center, radius, color } => self.add_dot(*center, *radius, *color),
        }
    }

    fn push_vertex(&mut self, p: Vec2, color: Color) -> u32 {
        self.vertices.push(Vertex::new(p.to_array(), color));
        (self.vertices.len() - 1) as u32
    }

    /// Closed fan around `hub`; correct for any loop that is star-shaped about it.
    fn add_fan(&mut self, hub: Point2, points: &[Point2], color: Color) {
        if points.len() < 2 {
            return;
        }
        let center = self.push_vertex(to_vec2(&hub), color);
        let first = self.vertices.len() as u32;
        for p in points {
            self.push_vertex(to_vec2(p), color);
        }
        let n = points.len() as u32;
        for i in 0..n {
            self.indices.extend_from_slice(&[center, first + i, first + (i + 1) % n]);
        }
    }

    fn add_line(&mut self, from: Point2, to: Point2, color: Color, width: f32) {
        let (a, b) = (to_vec2(&from), to_vec2(&to));
        let dir = (b - a).normalize_or_zero();
        if dir == Vec2::ZERO {
            return;
        }
        let offset = dir.perp() * (width.max(1.0) * 0.5);
        let i0 = self.push_vertex(a + offset, color);
        let i1 = self.push_vertex(b + offset, color);
        let i2 = self.push_vertex(b - offset, color);
        let i3 = self.push_vertex(a - offset, color);
        self.indices.extend_from_slice(&[i0, i1, i2, i0, i2, i3]);
    }

    fn add_dot(&mut self, center: Point2, radius: f32, color: Color) {
        let c = to_vec2(&center);
        let hub = self.push_vertex(c, color);
        let first = self.vertices.len() as u32;
        for i in 0..DOT_SEGMENTS {
            let angle = i as f32 / DOT_SEGMENTS as f32 * std::f32::consts::TAU;
            self.push_vertex(c + Vec2::from_angle(angle) * radius, color);
        }
        for i in 0..DOT_SEGMENTS {
            self.indices.extend_from_slice(&[hub, first + i, first + (i + 1) % DOT_SEGMENTS]);
        }
    }
}
