// src/engine_lib/mod.rs
pub mod scene_types;
pub mod animator;
pub mod controller;
pub mod scene_logic;

pub use scene_types::{Color, DisplayOptions, Scene, ShapeStyle};
pub use animator::{Animator, DrawCommand, Frame, FrameContext};
pub use controller::PointerController;
pub use scene_logic::RayCastMap;
