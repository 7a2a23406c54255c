use std::cell::RefCell;
use std::rc::Rc;

use animate_core::{RuntimeHandle, State};
use animate_ui_graphics::{Color, Dp};

use crate::animatable::Animatable;
use crate::lerp::Lerp;
use crate::spec::AnimationType;

/// A value that follows a target, animating every time the target changes.
///
/// Feed it the latest target with [`update`](Self::update) (typically from a
/// state subscription) and read the animated value from [`state`](Self::state).
pub struct AnimatedValueState<T: Lerp + Clone + PartialEq + 'static> {
    animatable: Animatable<T>,
    animation: Rc<RefCell<AnimationType<T>>>,
}

impl<T: Lerp + Clone + PartialEq + 'static> AnimatedValueState<T> {
    pub fn new(
        initial: T,
        animation: AnimationType<T>,
        label: &str,
        runtime: RuntimeHandle,
    ) -> Self {
        Self {
            animatable: Animatable::with_label(initial, label, runtime),
            animation: Rc::new(RefCell::new(animation)),
        }
    }

    /// Retargets when `target` differs from the current target. Returns
    /// whether an animation was (re)started.
    pub fn update(&self, target: T) -> bool {
        if self.animatable.target() == target {
            return false;
        }
        let animation = self.animation.borrow().clone();
        self.animatable.animate_to(target, animation);
        true
    }

    /// Replaces the spec used by subsequent retargets.
    pub fn set_animation(&self, animation: AnimationType<T>) {
        *self.animation.borrow_mut() = animation;
    }

    pub fn animation(&self) -> AnimationType<T> {
        self.animation.borrow().clone()
    }

    pub fn value(&self) -> T {
        self.animatable.value()
    }

    pub fn target(&self) -> T {
        self.animatable.target()
    }

    pub fn is_running(&self) -> bool {
        self.animatable.is_running()
    }

    pub fn state(&self) -> State<T> {
        self.animatable.state()
    }

    pub fn animatable(&self) -> &Animatable<T> {
        &self.animatable
    }
}

impl<T: Lerp + Clone + PartialEq + 'static> Clone for AnimatedValueState<T> {
    fn clone(&self) -> Self {
        Self {
            animatable: self.animatable.clone(),
            animation: Rc::clone(&self.animation),
        }
    }
}

pub fn animate_float_as_state(
    initial: f32,
    animation: AnimationType<f32>,
    label: &str,
    runtime: RuntimeHandle,
) -> AnimatedValueState<f32> {
    AnimatedValueState::new(initial, animation, label, runtime)
}

pub fn animate_dp_as_state(
    initial: Dp,
    animation: AnimationType<Dp>,
    label: &str,
    runtime: RuntimeHandle,
) -> AnimatedValueState<Dp> {
    AnimatedValueState::new(initial, animation, label, runtime)
}

pub fn animate_color_as_state(
    initial: Color,
    animation: AnimationType<Color>,
    label: &str,
    runtime: RuntimeHandle,
) -> AnimatedValueState<Color> {
    AnimatedValueState::new(initial, animation, label, runtime)
}
