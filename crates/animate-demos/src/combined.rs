use std::cell::Cell;
use std::rc::Rc;

use animate_animation::{tween, Transition};
use animate_core::{MutableState, RuntimeHandle, State, Subscription};
use animate_render_common::Scene;
use animate_ui_graphics::{Color, Dp, Size};

use crate::layout::{button_size, Column};
use crate::motion::{target_offset, BOX_SIDE, BOX_TOP, BUTTON_SPACER};
use crate::state::BoxPosition;
use crate::view::{push_toggle_button, DemoView};

pub const TRANSITION_DURATION_MILLIS: u64 = 4000;
const LABEL: &str = "Start Animation";

fn box_color(position: BoxPosition) -> Color {
    match position {
        BoxPosition::Start => Color::YELLOW,
        BoxPosition::End => Color::MAGENTA,
    }
}

/// Color and offset of one box driven together by a single transition.
#[derive(Clone)]
pub struct CombinedTransitionView {
    position: MutableState<BoxPosition>,
    screen_width: Rc<Cell<Dp>>,
    transition: Transition<BoxPosition>,
    color: State<Color>,
    offset: State<Dp>,
    _subscription: Rc<Subscription>,
}

impl CombinedTransitionView {
    pub fn new(runtime: RuntimeHandle, screen_width: Dp) -> Self {
        let initial = BoxPosition::default();
        let position = MutableState::with_runtime(initial, runtime.clone());
        let screen_width = Rc::new(Cell::new(screen_width));
        let transition = Transition::new(initial, "Color and Motion", runtime);
        let color = transition.animate_color(
            "colorAnimation",
            |_| tween(TRANSITION_DURATION_MILLIS),
            |position| box_color(*position),
        );
        let offset = transition.animate_dp(
            "offsetAnimation",
            |_| tween(TRANSITION_DURATION_MILLIS),
            {
                let screen_width = Rc::clone(&screen_width);
                move |position: &BoxPosition| target_offset(*position, screen_width.get())
            },
        );
        let subscription = position.subscribe({
            let transition = transition.clone();
            move |position: &BoxPosition| transition.update_target(*position)
        });
        Self {
            position,
            screen_width,
            transition,
            color,
            offset,
            _subscription: Rc::new(subscription),
        }
    }

    pub fn position(&self) -> BoxPosition {
        self.position.value()
    }

    pub fn color(&self) -> Color {
        self.color.value()
    }

    pub fn offset(&self) -> Dp {
        self.offset.value()
    }

    pub fn transition(&self) -> &Transition<BoxPosition> {
        &self.transition
    }
}

impl DemoView for CombinedTransitionView {
    fn name(&self) -> &'static str {
        "CombinedTransitionView"
    }

    fn toggle(&self) {
        let next = self.position.update(|position| {
            *position = position.toggled();
            *position
        });
        log::debug!("{}: position = {:?}", self.name(), next);
    }

    fn draw(&self, scene: &mut Scene, viewport: Size) {
        let mut column = Column::new(viewport);
        let boxed = column.offset(self.offset(), BOX_TOP, Size::new(BOX_SIDE.0, BOX_SIDE.0));
        scene.push_rect(boxed, self.color());
        column.spacer(BUTTON_SPACER);
        let button = column.centered(button_size(LABEL), Dp(20.0));
        push_toggle_button(scene, button, LABEL, self);
    }

    fn set_screen_width(&self, width: Dp) {
        if self.screen_width.get() == width {
            return;
        }
        self.screen_width.set(width);
        if self.transition.target_state() == BoxPosition::End {
            self.transition.refresh_targets();
        }
    }

    fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    fn debug_summary(&self) -> String {
        let [r, g, b, _] = self.color().to_rgba_u8();
        format!(
            "{}: position={:?} offset={:.1}dp color=#{:02x}{:02x}{:02x} running={}",
            self.name(),
            self.position(),
            self.offset().0,
            r,
            g,
            b,
            self.is_animating()
        )
    }
}
