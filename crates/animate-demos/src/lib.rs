//! The four animation demos.
//!
//! Each view owns one two-valued state, flips it on [`DemoView::toggle`],
//! and draws its animated output into a [`Scene`](animate_render_common::Scene).

mod color_toggle;
mod combined;
pub mod layout;
mod motion;
mod rotation;
mod state;
mod view;

pub use color_toggle::{ColorToggleView, COLOR_DURATION_MILLIS};
pub use combined::{CombinedTransitionView, TRANSITION_DURATION_MILLIS};
pub use motion::{
    motion_keyframes, target_offset, MotionCurve, MotionView, BOX_SIDE, MOTION_DURATION_MILLIS,
};
pub use rotation::{RotationView, ROTATION_DURATION_MILLIS};
pub use state::{BoxPosition, ColorToggle};
pub use view::{DemoKind, DemoView, UnknownDemo, BUTTON_COLOR};

#[cfg(test)]
#[path = "tests/demo_tests.rs"]
mod tests;
