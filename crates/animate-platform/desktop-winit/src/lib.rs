use animate_render_common::PointerEventKind;
use animate_ui_graphics::{Point, Size};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::ElementState;

/// Converts winit's physical coordinates into the logical pixels scenes use.
pub struct DesktopWinitPlatform {
    scale_factor: f64,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor: sanitize(scale_factor),
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = sanitize(factor);
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor) as f32,
            y: (position.y / self.scale_factor) as f32,
        }
    }

    pub fn logical_size(&self, size: PhysicalSize<u32>) -> Size {
        Size {
            width: (size.width as f64 / self.scale_factor) as f32,
            height: (size.height as f64 / self.scale_factor) as f32,
        }
    }

    pub fn pointer_event_kind(state: ElementState) -> PointerEventKind {
        match state {
            ElementState::Pressed => PointerEventKind::Down,
            ElementState::Released => PointerEventKind::Up,
        }
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}

fn sanitize(factor: f64) -> f64 {
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_positions_are_divided_by_scale() {
        let platform = DesktopWinitPlatform::new(2.0);
        let point = platform.pointer_position(PhysicalPosition::new(200.0, 50.0));
        assert_eq!(point, Point::new(100.0, 25.0));
        assert_eq!(
            platform.logical_size(PhysicalSize::new(1600, 1200)),
            Size::new(800.0, 600.0)
        );
    }

    #[test]
    fn invalid_scale_falls_back_to_one() {
        let mut platform = DesktopWinitPlatform::new(0.0);
        assert_eq!(platform.scale_factor(), 1.0);
        platform.set_scale_factor(f64::NAN);
        assert_eq!(platform.scale_factor(), 1.0);
        platform.set_scale_factor(1.5);
        assert_eq!(platform.scale_factor(), 1.5);
    }

    #[test]
    fn mouse_states_map_to_pointer_kinds() {
        assert_eq!(
            DesktopWinitPlatform::pointer_event_kind(ElementState::Pressed),
            PointerEventKind::Down
        );
        assert_eq!(
            DesktopWinitPlatform::pointer_event_kind(ElementState::Released),
            PointerEventKind::Up
        );
    }
}
