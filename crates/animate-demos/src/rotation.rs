use std::rc::Rc;

use animate_animation::{animate_float_as_state, AnimatedValueState, AnimationSpec, AnimationType};
use animate_assets::PROPELLER;
use animate_core::{MutableState, RuntimeHandle, State, Subscription};
use animate_render_common::Scene;
use animate_ui_graphics::{Dp, Size};

use crate::layout::{button_size, Column};
use crate::view::{push_toggle_button, DemoView};

pub const ROTATION_DURATION_MILLIS: u64 = 2500;
const PROPELLER_SIDE: Dp = Dp(300.0);
const LABEL: &str = "Rotate Propeller";

/// Propeller spinning a full turn, linearly, each time the button is pressed.
#[derive(Clone)]
pub struct RotationView {
    rotated: MutableState<bool>,
    angle: AnimatedValueState<f32>,
    _subscription: Rc<Subscription>,
}

fn target_angle(rotated: bool) -> f32 {
    if rotated {
        360.0
    } else {
        0.0
    }
}

impl RotationView {
    pub fn new(runtime: RuntimeHandle) -> Self {
        let rotated = MutableState::with_runtime(false, runtime.clone());
        let angle = animate_float_as_state(
            target_angle(false),
            AnimationType::Tween(AnimationSpec::linear(ROTATION_DURATION_MILLIS)),
            "Rotate",
            runtime,
        );
        let subscription = rotated.subscribe({
            let angle = angle.clone();
            move |rotated: &bool| {
                angle.update(target_angle(*rotated));
            }
        });
        Self {
            rotated,
            angle,
            _subscription: Rc::new(subscription),
        }
    }

    pub fn is_rotated(&self) -> bool {
        self.rotated.value()
    }

    /// Angle in degrees shown on the latest frame.
    pub fn angle(&self) -> f32 {
        self.angle.value()
    }

    pub fn angle_state(&self) -> State<f32> {
        self.angle.state()
    }
}

impl DemoView for RotationView {
    fn name(&self) -> &'static str {
        "RotationView"
    }

    fn toggle(&self) {
        let rotated = self.rotated.update(|rotated| {
            *rotated = !*rotated;
            *rotated
        });
        log::debug!("{}: rotated = {}", self.name(), rotated);
    }

    fn draw(&self, scene: &mut Scene, viewport: Size) {
        let mut column = Column::new(viewport);
        let image = column.centered(Size::new(PROPELLER_SIDE.0, PROPELLER_SIDE.0), Dp(10.0));
        scene.push_image(image, PROPELLER, self.angle());
        let button = column.centered(button_size(LABEL), Dp(10.0));
        push_toggle_button(scene, button, LABEL, self);
    }

    fn is_animating(&self) -> bool {
        self.angle.is_running()
    }

    fn debug_summary(&self) -> String {
        format!(
            "{}: rotated={} angle={:.1}deg target={:.0}deg running={}",
            self.name(),
            self.is_rotated(),
            self.angle(),
            self.angle.target(),
            self.is_animating()
        )
    }
}
