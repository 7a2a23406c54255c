use crate::easing::Easing;
use crate::lerp::Lerp;
use crate::spec::{AnimationSpec, AnimationType, KeyframesSpec, SpringSpec};

const NANOS_PER_MILLI: u64 = 1_000_000;
const SPRING_SETTLE_STEP_NANOS: u64 = NANOS_PER_MILLI;
const SPRING_MAX_DURATION_NANOS: u64 = 60_000 * NANOS_PER_MILLI;

/// One run of an animation from a fixed initial value to a fixed target.
///
/// The value is a pure function of play time, which keeps frame drivers,
/// transitions and tests free of any integration state.
#[derive(Debug, Clone)]
pub struct TargetBasedAnimation<T> {
    animation: AnimationType<T>,
    initial: T,
    target: T,
    duration_nanos: u64,
}

impl<T: Lerp + Clone> TargetBasedAnimation<T> {
    pub fn new(animation: AnimationType<T>, initial: T, target: T) -> Self {
        let duration_nanos = match &animation {
            AnimationType::Tween(spec) => {
                (spec.delay_millis + spec.duration_millis) * NANOS_PER_MILLI
            }
            AnimationType::Keyframes(spec) => {
                (spec.delay_millis + spec.duration_millis) * NANOS_PER_MILLI
            }
            AnimationType::Spring(spec) => spring_settle_nanos(spec),
        };
        Self {
            animation,
            initial,
            target,
            duration_nanos,
        }
    }

    pub fn initial_value(&self) -> &T {
        &self.initial
    }

    pub fn target_value(&self) -> &T {
        &self.target
    }

    pub fn animation(&self) -> &AnimationType<T> {
        &self.animation
    }

    /// Total play time including any delay.
    pub fn duration_nanos(&self) -> u64 {
        self.duration_nanos
    }

    pub fn is_finished_at(&self, play_time_nanos: u64) -> bool {
        play_time_nanos >= self.duration_nanos
    }

    pub fn value_at(&self, play_time_nanos: u64) -> T {
        if self.is_finished_at(play_time_nanos) {
            return self.target.clone();
        }
        match &self.animation {
            AnimationType::Tween(spec) => self.tween_value(spec, play_time_nanos),
            AnimationType::Keyframes(spec) => self.keyframes_value(spec, play_time_nanos),
            AnimationType::Spring(spec) => {
                let (displacement, _) = spring_motion(spec, play_time_nanos);
                self.initial.lerp(&self.target, 1.0 + displacement)
            }
        }
    }

    fn tween_value(&self, spec: &AnimationSpec, play_time_nanos: u64) -> T {
        let delay_nanos = spec.delay_millis * NANOS_PER_MILLI;
        if play_time_nanos < delay_nanos {
            return self.initial.clone();
        }
        let duration_nanos = (spec.duration_millis * NANOS_PER_MILLI).max(1);
        let linear = ((play_time_nanos - delay_nanos) as f64 / duration_nanos as f64) as f32;
        let progress = spec.easing.transform(linear);
        self.initial.lerp(&self.target, progress)
    }

    fn keyframes_value(&self, spec: &KeyframesSpec<T>, play_time_nanos: u64) -> T {
        let delay_nanos = spec.delay_millis * NANOS_PER_MILLI;
        if play_time_nanos < delay_nanos {
            return self.initial.clone();
        }
        let time_millis = (play_time_nanos - delay_nanos) as f64 / NANOS_PER_MILLI as f64;

        // Walk the checkpoints in time order; the segment ending at the first
        // checkpoint past `time_millis` is the active one.
        let mut segment_start_value = &self.initial;
        let mut segment_start_time = 0u64;
        for keyframe in spec.keyframes() {
            if keyframe.time_millis == 0 {
                segment_start_value = &keyframe.value;
                continue;
            }
            if time_millis < keyframe.time_millis as f64 {
                return interpolate_segment(
                    segment_start_value,
                    &keyframe.value,
                    segment_start_time,
                    keyframe.time_millis,
                    time_millis,
                    keyframe.easing,
                );
            }
            segment_start_value = &keyframe.value;
            segment_start_time = keyframe.time_millis;
        }
        interpolate_segment(
            segment_start_value,
            &self.target,
            segment_start_time,
            spec.duration_millis,
            time_millis,
            spec.end_easing,
        )
    }
}

fn interpolate_segment<T: Lerp + Clone>(
    from: &T,
    to: &T,
    start_millis: u64,
    end_millis: u64,
    time_millis: f64,
    easing: Easing,
) -> T {
    if end_millis <= start_millis {
        return to.clone();
    }
    let fraction = ((time_millis - start_millis as f64) / (end_millis - start_millis) as f64) as f32;
    from.lerp(to, easing.transform(fraction))
}

/// Displacement from the target (in progress units, starting at `-1.0`) and
/// velocity of a unit-mass damped spring released at rest.
pub(crate) fn spring_motion(spec: &SpringSpec, play_time_nanos: u64) -> (f32, f32) {
    let t = play_time_nanos as f64 / 1_000_000_000.0;
    let omega = (spec.stiffness.max(0.0) as f64).sqrt();
    let zeta = spec.damping_ratio.max(0.0) as f64;
    let x0 = -1.0_f64;
    let v0 = 0.0_f64;

    let (x, v) = if omega == 0.0 {
        (x0, v0)
    } else if (zeta - 1.0).abs() < 1e-4 {
        let c = v0 + omega * x0;
        let decay = (-omega * t).exp();
        ((x0 + c * t) * decay, (c - omega * (x0 + c * t)) * decay)
    } else if zeta < 1.0 {
        let damped = omega * (1.0 - zeta * zeta).sqrt();
        let a = zeta * omega;
        let b = (v0 + a * x0) / damped;
        let decay = (-a * t).exp();
        let (sin, cos) = (damped * t).sin_cos();
        (
            decay * (x0 * cos + b * sin),
            decay * ((b * damped - a * x0) * cos - (a * b + x0 * damped) * sin),
        )
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let c2 = (v0 - r1 * x0) / (r2 - r1);
        let c1 = x0 - c2;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    };
    (x as f32, v as f32)
}

/// First time the spring is within both thresholds, capped so an undamped
/// spring still ends.
fn spring_settle_nanos(spec: &SpringSpec) -> u64 {
    if spec.stiffness <= 0.0 {
        return 0;
    }
    let mut time = 0u64;
    while time < SPRING_MAX_DURATION_NANOS {
        let (displacement, velocity) = spring_motion(spec, time);
        if displacement.abs() < spec.position_threshold && velocity.abs() < spec.velocity_threshold {
            return time;
        }
        time += SPRING_SETTLE_STEP_NANOS;
    }
    SPRING_MAX_DURATION_NANOS
}
