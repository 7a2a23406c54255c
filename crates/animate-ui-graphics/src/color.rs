/// sRGB-encoded color with straight alpha, channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
    pub const YELLOW: Color = Color(1.0, 1.0, 0.0, 1.0);
    pub const MAGENTA: Color = Color(1.0, 0.0, 1.0, 1.0);
    pub const LIGHT_GRAY: Color = Color(0.8, 0.8, 0.8, 1.0);
    pub const DARK_GRAY: Color = Color(0.27, 0.27, 0.27, 1.0);
    pub const PURPLE: Color = Color(0.4, 0.31, 0.64, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color(r, g, b, a)
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color(r, g, b, 1.0)
    }

    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Color(self.0, self.1, self.2, alpha)
    }

    pub fn to_rgba_u8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.0),
            channel_to_u8(self.1),
            channel_to_u8(self.2),
            channel_to_u8(self.3),
        ]
    }

    /// Largest per-channel difference, handy for approximate comparisons.
    pub fn max_channel_delta(&self, other: &Color) -> f32 {
        (self.0 - other.0)
            .abs()
            .max((self.1 - other.1).abs())
            .max((self.2 - other.2).abs())
            .max((self.3 - other.3).abs())
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::TRANSPARENT
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
