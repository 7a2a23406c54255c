use crate::easing::Easing;

/// Tween specification: fixed duration, easing and optional start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(DEFAULT_DURATION_MILLIS, Easing::FastOutSlowInEasing)
    }
}

pub const DEFAULT_DURATION_MILLIS: u64 = 300;

/// A checkpoint on a keyframe curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe<T> {
    pub value: T,
    pub time_millis: u64,
    /// Easing for the segment that ends at this keyframe.
    pub easing: Easing,
}

/// Multi-segment curve through explicit checkpoints.
///
/// The curve starts at the animation's initial value at time zero and ends
/// at the target value at `duration_millis`. Keyframes in between are kept
/// sorted by time no matter in which order they were declared. Each
/// keyframe's easing shapes the segment leading into it; the closing segment
/// into the target uses `end_easing`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframesSpec<T> {
    pub duration_millis: u64,
    pub delay_millis: u64,
    pub end_easing: Easing,
    keyframes: Vec<Keyframe<T>>,
}

impl<T: Clone> KeyframesSpec<T> {
    pub fn new(duration_millis: u64) -> Self {
        Self {
            duration_millis,
            delay_millis: 0,
            end_easing: Easing::LinearEasing,
            keyframes: Vec::new(),
        }
    }

    /// Adds a checkpoint reached linearly.
    pub fn at(self, value: T, time_millis: u64) -> Self {
        self.keyframe(value, time_millis, Easing::LinearEasing)
    }

    /// Adds a checkpoint at `time_millis` reached with `easing`.
    ///
    /// Times past the duration are clamped to it. A second keyframe at the
    /// same time replaces the first.
    pub fn keyframe(mut self, value: T, time_millis: u64, easing: Easing) -> Self {
        let time_millis = time_millis.min(self.duration_millis);
        let keyframe = Keyframe {
            value,
            time_millis,
            easing,
        };
        match self
            .keyframes
            .binary_search_by_key(&time_millis, |existing| existing.time_millis)
        {
            Ok(index) => self.keyframes[index] = keyframe,
            Err(index) => self.keyframes.insert(index, keyframe),
        }
        self
    }

    /// Adds a checkpoint at a fraction of the duration.
    pub fn at_fraction(self, value: T, fraction: f32, easing: Easing) -> Self {
        let time_millis = (self.duration_millis as f32 * fraction.clamp(0.0, 1.0)).round() as u64;
        self.keyframe(value, time_millis, easing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    pub fn ending_with(mut self, easing: Easing) -> Self {
        self.end_easing = easing;
        self
    }

    /// Checkpoints in ascending time order.
    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }
}

pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;
pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;
pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
pub const DAMPING_RATIO_HIGH_BOUNCY: f32 = 0.2;

pub const STIFFNESS_HIGH: f32 = 10_000.0;
pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;
pub const STIFFNESS_LOW: f32 = 200.0;
pub const STIFFNESS_VERY_LOW: f32 = 50.0;

/// Spring animation configuration.
///
/// Thresholds are expressed in progress units: a displacement of `1.0` is
/// the full distance between the start and the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold to stop animation.
    pub velocity_threshold: f32,
    /// Position threshold to stop animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            ..Self::default_spring()
        }
    }

    pub fn default_spring() -> Self {
        Self {
            damping_ratio: DAMPING_RATIO_NO_BOUNCY,
            stiffness: STIFFNESS_MEDIUM,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn bouncy() -> Self {
        Self::new(DAMPING_RATIO_MEDIUM_BOUNCY, STIFFNESS_MEDIUM)
    }

    pub fn stiff() -> Self {
        Self::new(DAMPING_RATIO_NO_BOUNCY, 3_000.0)
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Animation type specification.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationType<T> {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Checkpoint curve.
    Keyframes(KeyframesSpec<T>),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl<T> Default for AnimationType<T> {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

impl<T> From<AnimationSpec> for AnimationType<T> {
    fn from(spec: AnimationSpec) -> Self {
        AnimationType::Tween(spec)
    }
}

impl<T> From<KeyframesSpec<T>> for AnimationType<T> {
    fn from(spec: KeyframesSpec<T>) -> Self {
        AnimationType::Keyframes(spec)
    }
}

impl<T> From<SpringSpec> for AnimationType<T> {
    fn from(spec: SpringSpec) -> Self {
        AnimationType::Spring(spec)
    }
}

/// Tween shorthand: `tween(4000)` uses the default easing.
pub fn tween<T>(duration_millis: u64) -> AnimationType<T> {
    AnimationType::Tween(AnimationSpec::tween(
        duration_millis,
        Easing::FastOutSlowInEasing,
    ))
}

pub fn spring<T>(damping_ratio: f32, stiffness: f32) -> AnimationType<T> {
    AnimationType::Spring(SpringSpec::new(damping_ratio, stiffness))
}
