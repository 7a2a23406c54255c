use std::rc::Rc;

use animate_animation::{animate_color_as_state, tween, AnimatedValueState};
use animate_core::{MutableState, RuntimeHandle, State, Subscription};
use animate_render_common::Scene;
use animate_ui_graphics::{Color, Dp, Size};

use crate::layout::{button_size, Column};
use crate::state::ColorToggle;
use crate::view::{push_toggle_button, DemoView};

pub const COLOR_DURATION_MILLIS: u64 = 4500;
const BOX_SIDE: Dp = Dp(200.0);
const LABEL: &str = "Change Color";

/// Square whose fill blends between yellow and magenta.
#[derive(Clone)]
pub struct ColorToggleView {
    toggle: MutableState<ColorToggle>,
    color: AnimatedValueState<Color>,
    _subscription: Rc<Subscription>,
}

impl ColorToggleView {
    pub fn new(runtime: RuntimeHandle) -> Self {
        let initial = ColorToggle::default();
        let toggle = MutableState::with_runtime(initial, runtime.clone());
        let color = animate_color_as_state(
            initial.color(),
            tween(COLOR_DURATION_MILLIS),
            "ColorChange",
            runtime,
        );
        let subscription = toggle.subscribe({
            let color = color.clone();
            move |toggle: &ColorToggle| {
                color.update(toggle.color());
            }
        });
        Self {
            toggle,
            color,
            _subscription: Rc::new(subscription),
        }
    }

    pub fn state(&self) -> ColorToggle {
        self.toggle.value()
    }

    pub fn color(&self) -> Color {
        self.color.value()
    }

    pub fn color_state(&self) -> State<Color> {
        self.color.state()
    }
}

impl DemoView for ColorToggleView {
    fn name(&self) -> &'static str {
        "ColorToggleView"
    }

    fn toggle(&self) {
        let next = self.toggle.update(|toggle| {
            *toggle = toggle.toggled();
            *toggle
        });
        log::debug!("{}: state = {:?}", self.name(), next);
    }

    fn draw(&self, scene: &mut Scene, viewport: Size) {
        let mut column = Column::new(viewport);
        let swatch = column.centered(Size::new(BOX_SIDE.0, BOX_SIDE.0), Dp(20.0));
        scene.push_rect(swatch, self.color());
        let button = column.centered(button_size(LABEL), Dp(10.0));
        push_toggle_button(scene, button, LABEL, self);
    }

    fn is_animating(&self) -> bool {
        self.color.is_running()
    }

    fn debug_summary(&self) -> String {
        let [r, g, b, a] = self.color().to_rgba_u8();
        format!(
            "{}: state={:?} color=#{:02x}{:02x}{:02x}{:02x} running={}",
            self.name(),
            self.state(),
            r,
            g,
            b,
            a,
            self.is_animating()
        )
    }
}
