// src/engine_lib/scene_logic.rs
use std::time::Duration;

use crate::engine_lib::animator::{Animator, DrawCommand, Frame, FrameContext};
use crate::engine_lib::scene_types::{DisplayOptions, Scene, BLACK, CYAN, MAGENTA, RED, WHITE};
use crate::error::RayCastError;
use crate::fps::FpsCounter;
use crate::geometry::{HasBounds, Point2};
use crate::sweep::SweepConfig;

const LIGHT_SOURCE_RADIUS: f32 = 5.0;
const JOINT_RADIUS: f32 = 5.0;
const JOINT_LABEL_SIZE: f32 = 12.0;
const FPS_POSITION: Point2 = Point2 { x: 10.0, y: 25.0 };
const FPS_SIZE: f32 = 24.0;

/// Owns the scene and per-frame state. The host calls `tick` once per frame
/// and draws whatever frame it returns.
pub struct RayCastMap {
    pub scene: Scene,
    pub config: SweepConfig,
    pub options: DisplayOptions,
    pub animator: Animator,
    origin: Point2,
    running: bool,
    fps: FpsCounter,
    last_frame: Frame,
    last_error: Option<RayCastError>,
}

impl RayCastMap {
    pub fn new(scene: Scene) -> Self {
        log::debug!("ray cast map with {} shapes, {} edges", scene.len(), scene.edge_count());
        Self {
            scene,
            config: SweepConfig::default(),
            options: DisplayOptions::default(),
            animator: Animator::MultiRay,
            origin: Point2::default(),
            running: true,
            fps: FpsCounter::new(),
            last_frame: Frame::new(),
            last_error: None,
        }
    }

    /// Replaces the light origin as one value; a frame never sees half an update.
    pub fn set_origin(&mut self, origin: Point2) {
        self.origin = origin;
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn fps(&self) -> &FpsCounter {
        &self.fps
    }

    pub fn last_frame(&self) -> &Frame {
        &self.last_frame
    }

    /// Builds the frame for host time `now`. While stopped the previous frame is returned unchanged.
    pub fn tick(&mut self, now: Duration) -> &Frame {
        if !self.running {
            return &self.last_frame;
        }
        if self.options.draw_fps {
            self.fps.tick(now);
        }

        let origin = self.origin;
        let mut frame = Frame::new();
        let ctx = FrameContext {
            scene: &self.scene,
            origin,
            options: &self.options,
            config: &self.config,
        };

        match self.animator.draw(&ctx, &mut frame) {
            Ok(()) => self.last_error = None,
            Err(e) => {
                // one bad configuration shouldn't flood the log at frame rate
                if self.last_error.as_ref() != Some(&e) {
                    log::warn!("{} skipped its ray layer: {}", self.animator, e);
                }
                self.last_error = Some(e);
            }
        }

        self.draw_overlays(origin, &mut frame);
        self.last_frame = frame;
        &self.last_frame
    }

    fn draw_overlays(&self, origin: Point2, frame: &mut Frame) {
        if self.options.draw_light_source {
            frame.push(DrawCommand::Dot { center: origin, radius: LIGHT_SOURCE_RADIUS, color: MAGENTA });
        }
        if self.options.draw_bounds || self.options.draw_shape_joints {
            for polygon in self.scene.polygons() {
                if self.options.draw_bounds {
                    frame.push(DrawCommand::StrokePolygon {
                        points: polygon.bounds().corners().to_vec(),
                        color: RED,
                        width: 1.0,
                    });
                }
                if self.options.draw_shape_joints {
                    for (i, p) in polygon.vertices().iter().enumerate() {
                        frame.push(DrawCommand::Dot { center: *p, radius: JOINT_RADIUS, color: CYAN });
                        frame.push(DrawCommand::Text {
                            position: Point2::new(p.x - 5.0, p.y - 5.0),
                            text: i.to_string(),
                            size: JOINT_LABEL_SIZE,
                            fill: CYAN,
                            stroke: None,
                        });
                    }
                }
            }
        }
        if self.options.draw_fps {
            frame.push(DrawCommand::Text {
                position: FPS_POSITION,
                text: self.fps.display(),
                size: FPS_SIZE,
                fill: BLACK,
                stroke: Some(WHITE),
            });
        }
    }
}
