use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ScrollfilmError, ScrollfilmResult};

pub use kurbo::Size;

/// Axis a percentage resolves against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    /// Horizontal: percentages resolve against widths.
    #[serde(rename = "x")]
    X,
    /// Vertical: percentages resolve against heights.
    #[serde(rename = "y")]
    Y,
}

/// Length unit accepted in property spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Unit {
    /// Absolute pixels.
    #[serde(rename = "px")]
    Px,
    /// Percent of the target element's own size on the property's axis.
    #[serde(rename = "%")]
    Percent,
}

/// Current viewport dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport from pixel dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The viewport extent along `axis`.
    pub fn extent(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// A percentage of a scene's scroll extent, e.g. `Percent(50.0)` for "50%".
///
/// A negative value on a step `start` marks the step as measured against the
/// *previous* scene's time factor, letting a step begin before its nominal
/// scene boundary.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl Percent {
    /// The percentage as a unit fraction (`Percent(50.0)` -> `0.5`).
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// Whether this is a negative (previous-scene marker) percentage.
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}

impl FromStr for Percent {
    type Err = ScrollfilmError;

    fn from_str(s: &str) -> ScrollfilmResult<Self> {
        let digits = s
            .strip_suffix('%')
            .ok_or_else(|| ScrollfilmError::validation(format!("percent '{s}' must end in '%'")))?;
        let value: f64 = digits
            .trim()
            .parse()
            .map_err(|_| ScrollfilmError::validation(format!("percent '{s}' is not numeric")))?;
        if !value.is_finite() {
            return Err(ScrollfilmError::validation(format!(
                "percent '{s}' must be finite"
            )));
        }
        Ok(Self(value))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A straight-alpha color with 8-bit channels and fractional opacity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel, 0..=255.
    pub r: u8,
    /// Green channel, 0..=255.
    pub g: u8,
    /// Blue channel, 0..=255.
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f64,
}

impl Color {
    /// Build a color, integer-coercing each channel and clamping out-of-range
    /// inputs (channels to `0..=255`, opacity to `[0, 1]`).
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        fn channel(v: f64) -> u8 {
            v.round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Build a fully opaque color.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Decompose into `[r, g, b, a]` channels for per-channel interpolation.
    pub fn channels(self) -> [f64; 4] {
        [
            f64::from(self.r),
            f64::from(self.g),
            f64::from(self.b),
            self.a,
        ]
    }

    /// Reassemble from interpolated channels, clamping each back into range.
    pub fn from_channels(channels: [f64; 4]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
