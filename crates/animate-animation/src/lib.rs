//! Animation system for animate-state.
//!
//! Easing curves, tween / keyframe / spring specs, a pure
//! [`TargetBasedAnimation`], the frame-driven [`Animatable`], the
//! animate-as-state helpers and the multi-property [`Transition`].

mod animatable;
mod animate_as_state;
mod easing;
mod lerp;
mod spec;
mod target_based;
mod transition;

pub use animatable::Animatable;
pub use animate_as_state::{
    animate_color_as_state, animate_dp_as_state, animate_float_as_state, AnimatedValueState,
};
pub use easing::Easing;
pub use lerp::Lerp;
pub use spec::*;
pub use target_based::TargetBasedAnimation;
pub use transition::{Segment, Transition};

pub mod prelude {
    pub use crate::{
        spring, tween, Animatable, AnimatedValueState, AnimationSpec, AnimationType, Easing,
        KeyframesSpec, Lerp, SpringSpec, Transition,
    };
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
