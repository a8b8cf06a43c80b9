//! Opaque color tokens for animated points.
//!
//! The animator only stores and hands back a [`PointColor`]; turning a token
//! into a drawable color is the renderer's job.

use fastrand::Rng;
use serde::Serialize;

/// Color token attached to each point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Gold,
    White,
    /// Position on a sequential light-to-dark ramp, 0 = lightest.
    Ramp(u8),
}

impl PointColor {
    /// Map `value` onto [`PointColor::Ramp`], clamping to `[vmin, vmax]`.
    ///
    /// A degenerate range maps everything to the lightest step.
    pub fn ramp(value: f32, vmin: f32, vmax: f32) -> Self {
        let span = vmax - vmin;
        if !(span > f32::EPSILON) || !value.is_finite() {
            return PointColor::Ramp(0);
        }
        let t = ((value - vmin) / span).clamp(0.0, 1.0);
        PointColor::Ramp((t * 255.0).round() as u8)
    }
}

/// A non-empty set of colors to pick from at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette(&'static [PointColor]);

impl Palette {
    pub const SHORT_BURST: Palette = Palette(&[
        PointColor::Red,
        PointColor::Yellow,
        PointColor::Blue,
        PointColor::Green,
        PointColor::Purple,
    ]);
    pub const EMBER: Palette = Palette(&[PointColor::Red, PointColor::Orange, PointColor::Yellow]);
    pub const COOL: Palette = Palette(&[PointColor::Blue, PointColor::Green, PointColor::Purple]);
    pub const GLITTER: Palette = Palette(&[PointColor::Gold, PointColor::White]);
    pub const SLOW_TRAIL: Palette = Palette(&[PointColor::Blue, PointColor::Purple]);
    pub const FAST_TRAIL: Palette = Palette(&[PointColor::Red, PointColor::Yellow]);
    pub const SPARKLER: Palette = Palette(&[PointColor::Pink, PointColor::Gold, PointColor::White]);

    pub fn colors(&self) -> &'static [PointColor] {
        self.0
    }

    pub fn pick(&self, rng: &mut Rng) -> PointColor {
        self.0[rng.usize(0..self.0.len())]
    }
}
