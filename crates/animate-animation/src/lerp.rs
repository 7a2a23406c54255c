use animate_ui_graphics::{Color, Dp};
use palette::{FromColor, LinSrgba, Oklaba, Srgba};

/// Trait for types that can be linearly interpolated.
///
/// `a.lerp(&b, 0.0)` must equal `a` and `a.lerp(&b, 1.0)` must equal `b`.
/// Fractions outside `[0, 1]` extrapolate where the type allows it.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        if fraction == 1.0 {
            return *target;
        }
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        if fraction == 1.0 {
            return *target;
        }
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Dp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Dp(self.0.lerp(&target.0, fraction))
    }
}

/// Colors blend in Oklab so the midpoint between two saturated colors does
/// not sag toward gray. Fractions are clamped; colors never extrapolate.
impl Lerp for Color {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        if fraction <= 0.0 {
            return *self;
        }
        if fraction >= 1.0 {
            return *target;
        }
        let from = to_oklab(*self);
        let to = to_oklab(*target);
        let mixed = Oklaba::new(
            from.l + (to.l - from.l) * fraction,
            from.a + (to.a - from.a) * fraction,
            from.b + (to.b - from.b) * fraction,
            from.alpha + (to.alpha - from.alpha) * fraction,
        );
        from_oklab(mixed)
    }
}

fn to_oklab(color: Color) -> Oklaba {
    let encoded = Srgba::new(color.r(), color.g(), color.b(), color.a());
    let linear: LinSrgba = LinSrgba::from_color(encoded);
    Oklaba::from_color(linear)
}

fn from_oklab(color: Oklaba) -> Color {
    let linear: LinSrgba = LinSrgba::from_color(color);
    let encoded: Srgba = Srgba::from_color(linear);
    // Blends of saturated colors can leave the sRGB gamut slightly.
    Color(
        encoded.red.clamp(0.0, 1.0),
        encoded.green.clamp(0.0, 1.0),
        encoded.blue.clamp(0.0, 1.0),
        encoded.alpha.clamp(0.0, 1.0),
    )
}
