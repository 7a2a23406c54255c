use std::cell::Cell;
use std::rc::Rc;

use animate_animation::{
    animate_dp_as_state, AnimatedValueState, AnimationType, Easing, KeyframesSpec, SpringSpec,
    DAMPING_RATIO_HIGH_BOUNCY, STIFFNESS_VERY_LOW,
};
use animate_core::{MutableState, RuntimeHandle, State, Subscription};
use animate_render_common::Scene;
use animate_ui_graphics::{Color, Dp, Size};

use crate::layout::{button_size, Column};
use crate::state::BoxPosition;
use crate::view::{push_toggle_button, DemoView};

pub const MOTION_DURATION_MILLIS: u64 = 1000;
pub const BOX_SIDE: Dp = Dp(70.0);
pub(crate) const BOX_TOP: Dp = Dp(20.0);
pub(crate) const BUTTON_SPACER: Dp = Dp(50.0);
const LABEL: &str = "Move Box";

/// Horizontal offset of the box for `position` on a screen `width` wide.
pub fn target_offset(position: BoxPosition, width: Dp) -> Dp {
    match position {
        BoxPosition::Start => Dp::ZERO,
        BoxPosition::End => width - BOX_SIDE,
    }
}

/// The motion curve: three fixed checkpoints between the start and the
/// target. The checkpoint values do not scale with the distance travelled.
pub fn motion_keyframes() -> KeyframesSpec<Dp> {
    KeyframesSpec::new(MOTION_DURATION_MILLIS)
        .keyframe(Dp(100.0), 10, Easing::LinearEasing)
        .keyframe(Dp(110.0), 500, Easing::FastOutSlowInEasing)
        .keyframe(Dp(200.0), 700, Easing::LinearOutSlowInEasing)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionCurve {
    #[default]
    Keyframes,
    Spring,
}

impl MotionCurve {
    pub fn animation(self) -> AnimationType<Dp> {
        match self {
            MotionCurve::Keyframes => AnimationType::Keyframes(motion_keyframes()),
            MotionCurve::Spring => AnimationType::Spring(SpringSpec::new(
                DAMPING_RATIO_HIGH_BOUNCY,
                STIFFNESS_VERY_LOW,
            )),
        }
    }
}

/// A magenta box moving across the screen along the keyframe curve.
#[derive(Clone)]
pub struct MotionView {
    position: MutableState<BoxPosition>,
    screen_width: Rc<Cell<Dp>>,
    offset: AnimatedValueState<Dp>,
    curve: MotionCurve,
    _subscription: Rc<Subscription>,
}

impl MotionView {
    pub fn new(runtime: RuntimeHandle, screen_width: Dp) -> Self {
        let curve = MotionCurve::default();
        let initial = BoxPosition::default();
        let position = MutableState::with_runtime(initial, runtime.clone());
        let screen_width = Rc::new(Cell::new(screen_width));
        let offset = animate_dp_as_state(
            target_offset(initial, screen_width.get()),
            curve.animation(),
            "Motion",
            runtime,
        );
        let subscription = position.subscribe({
            let offset = offset.clone();
            let screen_width = Rc::clone(&screen_width);
            move |position: &BoxPosition| {
                offset.update(target_offset(*position, screen_width.get()));
            }
        });
        Self {
            position,
            screen_width,
            offset,
            curve,
            _subscription: Rc::new(subscription),
        }
    }

    /// Switches the curve used by later moves.
    pub fn with_curve(mut self, curve: MotionCurve) -> Self {
        self.offset.set_animation(curve.animation());
        self.curve = curve;
        self
    }

    pub fn curve(&self) -> MotionCurve {
        self.curve
    }

    pub fn position(&self) -> BoxPosition {
        self.position.value()
    }

    pub fn offset(&self) -> Dp {
        self.offset.value()
    }

    pub fn offset_state(&self) -> State<Dp> {
        self.offset.state()
    }

    pub fn screen_width(&self) -> Dp {
        self.screen_width.get()
    }
}

impl DemoView for MotionView {
    fn name(&self) -> &'static str {
        "MotionView"
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
        scene.push_rect(boxed, Color::MAGENTA);
        column.spacer(BUTTON_SPACER);
        let button = column.centered(button_size(LABEL), Dp(20.0));
        push_toggle_button(scene, button, LABEL, self);
    }

    /// A running move keeps its curve and clock and only changes where it
    /// ends; a settled box follows the new width right away.
    fn set_screen_width(&self, width: Dp) {
        if self.screen_width.get() == width {
            return;
        }
        self.screen_width.set(width);
        let target = target_offset(self.position(), width);
        if self.offset.animatable().redirect_to(target) {
            log::debug!("{}: end moved to {:.1}dp", self.name(), target.0);
        } else if self.offset.target() != target {
            self.offset.animatable().snap_to(target);
        }
    }

    fn is_animating(&self) -> bool {
        self.offset.is_running()
    }

    fn debug_summary(&self) -> String {
        format!(
            "{}: position={:?} offset={:.1}dp target={:.1}dp curve={:?} screen={:.0}dp running={}",
            self.name(),
            self.position(),
            self.offset().0,
            self.offset.target().0,
            self.curve,
            self.screen_width().0,
            self.is_animating()
        )
    }
}
