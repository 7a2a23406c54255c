use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use animate_core::RuntimeHandle;
use animate_render_common::{ClickAction, Scene};
use animate_ui_graphics::{Color, Dp, Rect, Size};

use crate::color_toggle::ColorToggleView;
use crate::combined::CombinedTransitionView;
use crate::motion::{MotionCurve, MotionView};
use crate::rotation::RotationView;

pub const BUTTON_COLOR: Color = Color::PURPLE;

/// A self-contained demo: owns its state and animations and draws itself.
pub trait DemoView {
    fn name(&self) -> &'static str;

    /// Flips the demo's two-valued state.
    fn toggle(&self);

    /// Appends this frame's primitives to `scene`. The toggle button's click
    /// action is registered as a hit region.
    fn draw(&self, scene: &mut Scene, viewport: Size);

    /// Window width changed. Only views whose targets depend on it react.
    fn set_screen_width(&self, _width: Dp) {}

    fn is_animating(&self) -> bool;

    fn debug_summary(&self) -> String;
}

pub(crate) fn push_toggle_button<V>(scene: &mut Scene, rect: Rect, label: &str, view: &V)
where
    V: DemoView + Clone + 'static,
{
    let view = view.clone();
    let action: ClickAction = Rc::new(RefCell::new(move || view.toggle()));
    scene.push_button(rect, label, BUTTON_COLOR, action);
}

/// Which demo the application shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DemoKind {
    Rotation,
    ColorToggle,
    Motion,
    /// The motion demo with the bouncy spring instead of keyframes.
    SpringMotion,
    #[default]
    Transition,
}

impl DemoKind {
    pub const ALL: [DemoKind; 5] = [
        DemoKind::Rotation,
        DemoKind::ColorToggle,
        DemoKind::Motion,
        DemoKind::SpringMotion,
        DemoKind::Transition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DemoKind::Rotation => "rotation",
            DemoKind::ColorToggle => "color",
            DemoKind::Motion => "motion",
            DemoKind::SpringMotion => "spring",
            DemoKind::Transition => "transition",
        }
    }

    /// Builds the view on `runtime`. `screen_width` seeds views whose target
    /// offset depends on the window width.
    pub fn create(self, runtime: RuntimeHandle, screen_width: Dp) -> Box<dyn DemoView> {
        match self {
            DemoKind::Rotation => Box::new(RotationView::new(runtime)),
            DemoKind::ColorToggle => Box::new(ColorToggleView::new(runtime)),
            DemoKind::Motion => Box::new(MotionView::new(runtime, screen_width)),
            DemoKind::SpringMotion => {
                Box::new(MotionView::new(runtime, screen_width).with_curve(MotionCurve::Spring))
            }
            DemoKind::Transition => Box::new(CombinedTransitionView::new(runtime, screen_width)),
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDemo(pub String);

impl fmt::Display for UnknownDemo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = DemoKind::ALL.iter().map(|kind| kind.name()).collect();
        write!(f, "unknown demo '{}' (expected one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for UnknownDemo {}

impl FromStr for DemoKind {
    type Err = UnknownDemo;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        DemoKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| UnknownDemo(value.to_string()))
    }
}
