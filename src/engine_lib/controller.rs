// src/engine_lib/controller.rs

use winit::{dpi::PhysicalPosition, event::WindowEvent};

use crate::geometry::Point2;

/// Turns cursor motion into light origins in logical canvas coordinates.
/// Moving and dragging are treated the same.
pub struct PointerController {
    scale_factor: f64,
}

impl PointerController {
    pub fn new(scale_factor: f64) -> Self {
        Self { scale_factor }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    pub fn to_canvas(&self, position: PhysicalPosition<f64>) -> Point2 {
        let logical = position.to_logical::<f64>(self.scale_factor);
        Point2::new(logical.x, logical.y)
    }

    /// Returns the new origin when `event` moved the cursor.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Option<Point2> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.to_canvas(*position)),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::DeviceId;

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            // SAFETY: the id is only compared, never handed to the platform
            device_id: unsafe { DeviceId::dummy() },
            position: PhysicalPosition::new(x, y),
        }
    }

    #[test]
    fn physical_positions_are_scaled_to_logical() {
        let controller = PointerController::new(2.0);
        assert_eq!(controller.to_canvas(PhysicalPosition::new(300.0, 120.0)), Point2::new(150.0, 60.0));
        let unscaled = PointerController::new(1.0);
        assert_eq!(unscaled.to_canvas(PhysicalPosition::new(300.0, 120.0)), Point2::new(300.0, 120.0));
    }

    #[test]
    fn cursor_motion_yields_an_origin() {
        let mut controller = PointerController::new(2.0);
        assert_eq!(controller.handle_window_event(&cursor_moved(300.0, 120.0)), Some(Point2::new(150.0, 60.0)));
        assert_eq!(controller.handle_window_event(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn scale_changes_apply_to_later_motion() {
        let mut controller = PointerController::new(1.0);
        controller.set_scale_factor(1.5);
        assert_eq!(controller.handle_window_event(&cursor_moved(300.0, 120.0)), Some(Point2::new(200.0, 80.0)));
    }
}
