use std::cell::RefCell;
use std::rc::Rc;

use animate_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};

use crate::lerp::Lerp;
use crate::spec::AnimationType;
use crate::target_based::TargetBasedAnimation;

/// Value holder that animates toward a target on the runtime's frame clock.
///
/// Retargeting while running starts the new run from the value shown on the
/// most recent frame, so the output never jumps back to an old start value.
pub struct Animatable<T: Lerp + Clone + PartialEq + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + PartialEq + 'static> {
    label: String,
    state: MutableState<T>,
    runtime: RuntimeHandle,
    current: T,
    target: T,
    running: Option<TargetBasedAnimation<T>>,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
}

impl<T: Lerp + Clone + PartialEq + 'static> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        Self::with_label(initial, "Animatable", runtime)
    }

    pub fn with_label(initial: T, label: impl Into<String>, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            label: label.into(),
            state: MutableState::with_runtime(initial.clone(), runtime.clone()),
            runtime,
            current: initial.clone(),
            target: initial,
            running: None,
            start_time_nanos: None,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate from the current value to `target`.
    ///
    /// Play time starts on the next drained frame.
    pub fn animate_to(&self, target: T, animation: AnimationType<T>) {
        let should_schedule = {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            let start = inner.current.clone();
            inner.target = target.clone();
            inner.start_time_nanos = None;
            if start == target {
                inner.running = None;
                false
            } else {
                log::debug!("{}: retarget", inner.label);
                inner.running = Some(TargetBasedAnimation::new(animation, start, target));
                true
            }
        };

        if should_schedule {
            Self::schedule_frame(&self.inner);
        }
    }

    /// Moves the end point of the running animation to `target` without
    /// restarting it: the run keeps its start value, curve and play clock.
    /// Returns `false`, changing nothing, when no animation is running.
    pub fn redirect_to(&self, target: T) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(running) = inner.running.take() else {
            return false;
        };
        log::debug!("{}: redirect", inner.label);
        inner.running = Some(TargetBasedAnimation::new(
            running.animation().clone(),
            running.initial_value().clone(),
            target.clone(),
        ));
        inner.target = target;
        true
    }

    /// Jump to `target` immediately, cancelling any running animation.
    pub fn snap_to(&self, target: T) {
        let state = {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.current = target.clone();
            inner.target = target.clone();
            inner.running = None;
            inner.start_time_nanos = None;
            inner.state.clone()
        };
        state.set(target);
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running.is_some()
    }

    pub fn label(&self) -> String {
        self.inner.borrow().label.clone()
    }

    pub fn state(&self) -> State<T> {
        self.inner.borrow().state.as_state()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let (state, value, schedule_next) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            let Some(running) = inner.running.take() else {
                return;
            };
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let play_time = frame_time_nanos.saturating_sub(start_time);
            let value = running.value_at(play_time);
            inner.current = value.clone();

            let finished = running.is_finished_at(play_time);
            if finished {
                inner.start_time_nanos = None;
                log::trace!("{}: finished after {}ns", inner.label, play_time);
            } else {
                inner.running = Some(running);
            }
            (inner.state.clone(), value, !finished)
        };

        // Publish outside the borrow; listeners may read this animatable.
        state.set(value);
        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl<T: Lerp + Clone + PartialEq + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
