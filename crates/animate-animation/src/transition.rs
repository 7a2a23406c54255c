//! Several property animations driven by one target state.
//!
//! Every child animation of a [`Transition`] shares a single frame
//! registration and a single play clock, so children with equal durations
//! start and finish on the same frame.

use std::cell::RefCell;
use std::rc::Rc;

use animate_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};
use animate_ui_graphics::{Color, Dp};

use crate::lerp::Lerp;
use crate::spec::AnimationType;
use crate::target_based::TargetBasedAnimation;

/// Initial and target state of the running (or last) transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<S> {
    pub initial: S,
    pub target: S,
}

type Publish = Box<dyn FnOnce()>;

trait TransitionChild<S> {
    fn retarget(&mut self, segment: &Segment<S>);
    fn advance(&mut self, play_time_nanos: u64) -> Publish;
    fn snap_to(&mut self, state: &S) -> Publish;
    fn duration_nanos(&self) -> u64;
    fn label(&self) -> &str;
}

struct ChildAnimation<S, T: Lerp + Clone + 'static> {
    label: String,
    state: MutableState<T>,
    current: T,
    spec_for: Box<dyn Fn(&Segment<S>) -> AnimationType<T>>,
    value_for: Box<dyn Fn(&S) -> T>,
    running: Option<TargetBasedAnimation<T>>,
}

impl<S, T: Lerp + Clone + 'static> TransitionChild<S> for ChildAnimation<S, T> {
    fn retarget(&mut self, segment: &Segment<S>) {
        let target = (self.value_for)(&segment.target);
        let animation = (self.spec_for)(segment);
        log::debug!("transition child {}: retarget", self.label);
        self.running = Some(TargetBasedAnimation::new(
            animation,
            self.current.clone(),
            target,
        ));
    }

    fn advance(&mut self, play_time_nanos: u64) -> Publish {
        if let Some(running) = &self.running {
            self.current = running.value_at(play_time_nanos);
            if running.is_finished_at(play_time_nanos) {
                self.running = None;
            }
        }
        let state = self.state.clone();
        let value = self.current.clone();
        Box::new(move || state.set(value))
    }

    fn snap_to(&mut self, state: &S) -> Publish {
        self.running = None;
        self.current = (self.value_for)(state);
        let state = self.state.clone();
        let value = self.current.clone();
        Box::new(move || state.set(value))
    }

    fn duration_nanos(&self) -> u64 {
        self.running
            .as_ref()
            .map(TargetBasedAnimation::duration_nanos)
            .unwrap_or(0)
    }

    fn label(&self) -> &str {
        &self.label
    }
}

struct TransitionInner<S: Clone + PartialEq + 'static> {
    label: String,
    runtime: RuntimeHandle,
    current_state: S,
    target_state: S,
    children: Vec<Box<dyn TransitionChild<S>>>,
    start_time_nanos: Option<u64>,
    running: bool,
    registration: Option<FrameCallbackRegistration>,
}

/// Coordinates child animations toward a shared target state.
pub struct Transition<S: Clone + PartialEq + 'static> {
    inner: Rc<RefCell<TransitionInner<S>>>,
}

impl<S: Clone + PartialEq + 'static> Transition<S> {
    /// Creates a settled transition at `initial`.
    pub fn new(initial: S, label: impl Into<String>, runtime: RuntimeHandle) -> Self {
        let inner = TransitionInner {
            label: label.into(),
            runtime,
            current_state: initial.clone(),
            target_state: initial,
            children: Vec::new(),
            start_time_nanos: None,
            running: false,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Registers a child animation and returns the state carrying its value.
    pub fn animate_value<T: Lerp + Clone + 'static>(
        &self,
        label: &str,
        spec_for: impl Fn(&Segment<S>) -> AnimationType<T> + 'static,
        value_for: impl Fn(&S) -> T + 'static,
    ) -> State<T> {
        let mut inner = self.inner.borrow_mut();
        let initial = value_for(&inner.target_state);
        let state = MutableState::with_runtime(initial.clone(), inner.runtime.clone());
        let label = format!("{}/{}", inner.label, label);
        inner.children.push(Box::new(ChildAnimation {
            label,
            state: state.clone(),
            current: initial,
            spec_for: Box::new(spec_for),
            value_for: Box::new(value_for),
            running: None,
        }));
        state.as_state()
    }

    pub fn animate_float(
        &self,
        label: &str,
        spec_for: impl Fn(&Segment<S>) -> AnimationType<f32> + 'static,
        value_for: impl Fn(&S) -> f32 + 'static,
    ) -> State<f32> {
        self.animate_value(label, spec_for, value_for)
    }

    pub fn animate_dp(
        &self,
        label: &str,
        spec_for: impl Fn(&Segment<S>) -> AnimationType<Dp> + 'static,
        value_for: impl Fn(&S) -> Dp + 'static,
    ) -> State<Dp> {
        self.animate_value(label, spec_for, value_for)
    }

    pub fn animate_color(
        &self,
        label: &str,
        spec_for: impl Fn(&Segment<S>) -> AnimationType<Color> + 'static,
        value_for: impl Fn(&S) -> Color + 'static,
    ) -> State<Color> {
        self.animate_value(label, spec_for, value_for)
    }

    /// Retargets every child from its current value toward `target` and
    /// restarts the shared clock. Same target as before is a no-op.
    pub fn update_target(&self, target: S) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.target_state == target {
                return;
            }
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            let segment = Segment {
                initial: inner.target_state.clone(),
                target: target.clone(),
            };
            for child in inner.children.iter_mut() {
                child.retarget(&segment);
            }
            inner.target_state = target;
            inner.start_time_nanos = None;
            inner.running = true;
            log::debug!("transition {}: new target", inner.label);
        }
        Self::schedule_frame(&self.inner);
    }

    /// Re-evaluates every child's value for the target state, for when
    /// something captured by a `value_for` closure changed. Settled children
    /// jump to the new value; while running, children retarget from their
    /// current values and the shared clock restarts.
    pub fn refresh_targets(&self) {
        let publishes: Vec<Publish> = {
            let mut inner = self.inner.borrow_mut();
            if inner.running {
                let segment = Segment {
                    initial: inner.current_state.clone(),
                    target: inner.target_state.clone(),
                };
                for child in inner.children.iter_mut() {
                    child.retarget(&segment);
                }
                inner.start_time_nanos = None;
                Vec::new()
            } else {
                let target = inner.target_state.clone();
                inner
                    .children
                    .iter_mut()
                    .map(|child| child.snap_to(&target))
                    .collect()
            }
        };
        for publish in publishes {
            publish();
        }
        if self.is_running() {
            Self::schedule_frame(&self.inner);
        }
    }

    pub fn current_state(&self) -> S {
        self.inner.borrow().current_state.clone()
    }

    pub fn target_state(&self) -> S {
        self.inner.borrow().target_state.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Child labels in registration order, each prefixed with the transition's label.
    pub fn child_labels(&self) -> Vec<String> {
        self.inner
            .borrow()
            .children
            .iter()
            .map(|child| child.label().to_owned())
            .collect()
    }

    /// Play time of the longest child in the running segment.
    pub fn total_duration_nanos(&self) -> u64 {
        self.inner
            .borrow()
            .children
            .iter()
            .map(|child| child.duration_nanos())
            .max()
            .unwrap_or(0)
    }

    fn schedule_frame(this: &Rc<RefCell<TransitionInner<S>>>) {
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

    fn on_frame(this: &Rc<RefCell<TransitionInner<S>>>, frame_time_nanos: u64) {
        let (publishes, schedule_next) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let play_time = frame_time_nanos.saturating_sub(start_time);
            let total = inner
                .children
                .iter()
                .map(|child| child.duration_nanos())
                .max()
                .unwrap_or(0);
            let publishes: Vec<Publish> = inner
                .children
                .iter_mut()
                .map(|child| child.advance(play_time))
                .collect();
            let finished = play_time >= total;
            if finished {
                inner.running = false;
                inner.start_time_nanos = None;
                inner.current_state = inner.target_state.clone();
                log::trace!("transition {}: settled", inner.label);
            }
            (publishes, !finished)
        };

        for publish in publishes {
            publish();
        }
        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl<S: Clone + PartialEq + 'static> Clone for Transition<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}
