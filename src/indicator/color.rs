//! RGB colour and intensity scaling.

/// Colour as an (R, G, B) triple, each 0–255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Grey level with every channel set to `level`.
    pub const fn white(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Channels in register order (red, green, blue).
    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Multiply every channel by `intensity`, truncating toward zero.
    pub fn scale(self, intensity: Intensity) -> Self {
        let k = intensity.factor();
        let ch = |v: u8| (f32::from(v) * k) as u8;
        Self::new(ch(self.red), ch(self.green), ch(self.blue))
    }
}

/// Multiplicative dimming factor, always within `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Intensity(f32);

impl Intensity {
    pub const FULL: Self = Self(1.0);

    /// Clamp `factor` into `[0.0, 1.0]`. NaN maps to zero.
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self(0.0);
        }
        Self(factor.clamp(0.0, 1.0))
    }

    /// Build from a literal known to be in range.
    pub(crate) const fn from_const(factor: f32) -> Self {
        Self(factor)
    }

    pub fn factor(self) -> f32 {
        self.0
    }
}
