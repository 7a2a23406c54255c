/// Easing curves: pure maps from normalized time to normalized progress.
///
/// Every built-in curve maps `0.0 -> 0.0` and `1.0 -> 1.0` exactly.
/// [`Easing::Custom`] plugs in any function pointer.
#[derive(Debug, Clone, Copy)]
pub enum Easing {
    /// No easing.
    LinearEasing,
    /// `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Material standard curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
    FastOutSlowInEasing,
    /// Material incoming curve, `cubic-bezier(0, 0, 0.2, 1)`.
    LinearOutSlowInEasing,
    /// Material outgoing curve, `cubic-bezier(0.4, 0, 1, 1)`.
    FastOutLinearInEasing,
    /// Arbitrary cubic bezier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// Caller-supplied curve.
    Custom(fn(f32) -> f32),
}

impl Easing {
    /// Apply the easing function to a linear fraction, clamped to `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match *self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearInEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, fraction),
            Easing::Custom(curve) => curve(fraction),
        }
    }

    /// Builds a custom bezier; `x1` and `x2` are clamped into `[0, 1]` so the
    /// curve stays a function of time.
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Easing::CubicBezier {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        use Easing::*;
        match (self, other) {
            (LinearEasing, LinearEasing)
            | (EaseIn, EaseIn)
            | (EaseOut, EaseOut)
            | (EaseInOut, EaseInOut)
            | (FastOutSlowInEasing, FastOutSlowInEasing)
            | (LinearOutSlowInEasing, LinearOutSlowInEasing)
            | (FastOutLinearInEasing, FastOutLinearInEasing) => true,
            (
                CubicBezier { x1, y1, x2, y2 },
                CubicBezier {
                    x1: ox1,
                    y1: oy1,
                    x2: ox2,
                    y2: oy2,
                },
            ) => x1 == ox1 && y1 == oy1 && x2 == ox2 && y2 == oy2,
            // Same address means same curve; distinct addresses may still
            // compute the same function.
            (Custom(curve), Custom(other)) => *curve as usize == *other as usize,
            _ => false,
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::FastOutSlowInEasing
    }
}

const NEWTON_ITERATIONS: usize = 8;
const SOLVE_EPSILON: f32 = 1e-6;

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let t = solve_curve_x(x1, x2, x);
    bezier_component(y1, y2, t)
}

/// Finds the curve parameter whose x coordinate equals `x`.
fn solve_curve_x(x1: f32, x2: f32, x: f32) -> f32 {
    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier_component(x1, x2, t) - x;
        if error.abs() < SOLVE_EPSILON {
            return t;
        }
        let slope = bezier_derivative(x1, x2, t);
        if slope.abs() < SOLVE_EPSILON {
            break;
        }
        t -= error / slope;
    }

    // Newton stalled on a flat spot; bisection always converges since x(t) is monotonic.
    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    t = x;
    while high - low > SOLVE_EPSILON {
        let value = bezier_component(x1, x2, t);
        if (value - x).abs() < SOLVE_EPSILON {
            break;
        }
        if value < x {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) * 0.5;
    }
    t
}

/// One coordinate of the curve: `3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3`.
#[inline]
fn bezier_component(p1: f32, p2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

#[inline]
fn bezier_derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}
