use std::ops::{Add, Mul, Neg, Sub};

/// Density-independent length.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    pub fn value(self) -> f32 {
        self.0
    }

    /// Converts to physical pixels for the given scale factor.
    pub fn to_px(self, scale_factor: f32) -> f32 {
        self.0 * scale_factor
    }

    pub fn from_px(px: f32, scale_factor: f32) -> Self {
        if scale_factor > 0.0 {
            Dp(px / scale_factor)
        } else {
            Dp(px)
        }
    }

    pub fn max(self, other: Dp) -> Dp {
        Dp(self.0.max(other.0))
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f32> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl Neg for Dp {
    type Output = Dp;

    fn neg(self) -> Dp {
        Dp(-self.0)
    }
}

/// Shorthand constructor mirroring `10.dp` style literals.
pub trait DpExt {
    fn dp(self) -> Dp;
}

impl DpExt for f32 {
    fn dp(self) -> Dp {
        Dp(self)
    }
}

impl DpExt for i32 {
    fn dp(self) -> Dp {
        Dp(self as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_and_conversion() {
        let width = 400_i32.dp();
        let side = 70.0_f32.dp();
        assert_eq!(width - side, Dp(330.0));
        assert_eq!((side * 2.0).to_px(1.5), 210.0);
        assert_eq!(Dp::from_px(300.0, 2.0), Dp(150.0));
        assert_eq!(Dp::from_px(300.0, 0.0), Dp(300.0));
    }
}
