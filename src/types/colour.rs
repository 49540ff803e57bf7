//! Colour type and the per-channel algebra used by transform nodes.

use std::fmt;

/// Divisor channels below this make [`Colour::modulo`] return black.
pub const MOD_EPSILON: f64 = 0.0001;

/// A three-channel floating point colour.
///
/// Channels are unbounded. Nodes like `sin` and `tent` routinely produce
/// negative values or values above 1.0; mapping into a displayable range is
/// left to the rasterizer (see [`Colour::quantize`]).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// A colour with all three channels set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Black.
    pub const BLACK: Self = Self::splat(0.0);

    /// Apply `f` to every channel.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Combine two colours channel by channel.
    pub fn zip(self, other: Colour, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b))
    }

    /// Weighted average: `weight * self + (1 - weight) * other`.
    ///
    /// `weight` is not clamped; values outside `[0, 1]` extrapolate.
    pub fn average(self, other: Colour, weight: f64) -> Self {
        self.zip(other, |a, b| weight * a + (1.0 - weight) * b)
    }

    /// Elementwise product.
    pub fn product(self, other: Colour) -> Self {
        self.zip(other, |a, b| a * b)
    }

    /// Elementwise floating point remainder of `self` by `divisor`.
    ///
    /// If any divisor channel is below [`MOD_EPSILON`] the whole result is
    /// black, even when the other two channels would divide fine. Large and
    /// negative divisors are not guarded.
    pub fn modulo(self, divisor: Colour) -> Self {
        if divisor.r < MOD_EPSILON || divisor.g < MOD_EPSILON || divisor.b < MOD_EPSILON {
            return Self::BLACK;
        }
        self.zip(divisor, |a, b| a % b)
    }

    /// Elementwise [`well`].
    pub fn well(self) -> Self {
        self.map(well)
    }

    /// Elementwise [`tent`].
    pub fn tent(self) -> Self {
        self.map(tent)
    }

    /// Elementwise `sin(phase + freq * channel)`.
    pub fn sin(self, phase: f64, freq: f64) -> Self {
        self.map(|v| (phase + freq * v).sin())
    }

    /// Per-channel select between `below` and `above`.
    ///
    /// Each output channel comes from `below` when the matching channel of
    /// `self` is strictly less than `threshold`, otherwise from `above`.
    pub fn level(self, threshold: f64, below: Colour, above: Colour) -> Self {
        let pick = |l: f64, a: f64, b: f64| if l < threshold { a } else { b };
        Self::new(
            pick(self.r, below.r, above.r),
            pick(self.g, below.g, above.g),
            pick(self.b, below.b, above.b),
        )
    }

    /// Map a channel from roughly `[-1, 1]` onto `0..=255`.
    ///
    /// Truncates toward zero before clamping.
    pub fn quantize(v: f64) -> u8 {
        (128.0 * (v + 1.0)).trunc().clamp(0.0, 255.0) as u8
    }

    /// Quantize all three channels.
    pub fn to_rgb8(self) -> [u8; 3] {
        [Self::quantize(self.r), Self::quantize(self.g), Self::quantize(self.b)]
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A curve that looks a bit like a well: `1 - 2 / (1 + v^2)^8`.
///
/// Equals -1 at the origin and rises towards 1 as `|v|` grows.
pub fn well(v: f64) -> f64 {
    1.0 - 2.0 / (1.0 + v * v).powi(8)
}

/// A curve that looks a bit like a tent: `1 - 2|v|`.
pub fn tent(v: f64) -> f64 {
    1.0 - 2.0 * v.abs()
}
