//! Basic color and geometry value types.
//!
//! These are the CSS-level values a gradient is built from. They keep the
//! units they were written in; resolving them to pixels is left to whoever
//! paints the gradient.

use std::fmt;

/// An sRGB color with straight (non-premultiplied) alpha.
///
/// Channels are stored as 8-bit integers so that a color survives a
/// serialize/parse round trip unchanged.
///
/// # Example
///
/// ```
/// use horizon_gradient_types::Color;
///
/// let color = Color::from_hex("#ff8000").unwrap();
/// assert_eq!(color, Color::from_rgb8(255, 128, 0));
/// assert_eq!(color.to_string(), "#ff8000");
///
/// let faded = color.with_alpha(0.5);
/// assert_eq!(faded.to_string(), "rgba(255, 128, 0, 0.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in the 0.0-1.0 range.
    pub a: f32,
}

impl Color {
    /// Create a color from 8-bit channels and an alpha value.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from a hex string.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`, with or without
    /// the leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        let short = |s: &str| channel(s).map(|v| v * 17);

        let (r, g, b, a) = match hex.len() {
            3 => (short(&hex[0..1])?, short(&hex[1..2])?, short(&hex[2..3])?, 255),
            4 => (
                short(&hex[0..1])?,
                short(&hex[1..2])?,
                short(&hex[2..3])?,
                short(&hex[3..4])?,
            ),
            6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?, 255),
            8 => (
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            ),
            _ => return None,
        };

        Some(Self::new(r, g, b, a as f32 / 255.0))
    }

    /// Return a new color with modified alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Whether the color has full alpha.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    pub const RED: Self = Self::from_rgb8(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb8(0, 128, 0);
    pub const LIME: Self = Self::from_rgb8(0, 255, 0);
    pub const BLUE: Self = Self::from_rgb8(0, 0, 255);
    pub const YELLOW: Self = Self::from_rgb8(255, 255, 0);
    pub const CYAN: Self = Self::from_rgb8(0, 255, 255);
    pub const MAGENTA: Self = Self::from_rgb8(255, 0, 255);
    pub const GRAY: Self = Self::from_rgb8(128, 128, 128);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// A rotation, normalized to degrees whatever unit it was written in.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    degrees: f32,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Self = Self { degrees: 0.0 };

    /// Create an angle from degrees.
    #[inline]
    pub const fn deg(degrees: f32) -> Self {
        Self { degrees }
    }

    /// Create an angle from radians.
    #[inline]
    pub fn rad(radians: f32) -> Self {
        Self::deg(radians.to_degrees())
    }

    /// Create an angle from gradians (400 per full turn).
    #[inline]
    pub fn grad(gradians: f32) -> Self {
        Self::turn(gradians / 400.0)
    }

    /// Create an angle from full turns.
    #[inline]
    pub fn turn(turns: f32) -> Self {
        Self::deg(turns * 360.0)
    }

    /// The angle in degrees.
    #[inline]
    pub fn degrees(&self) -> f32 {
        self.degrees
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", self.degrees)
    }
}

/// Units a [`Length`] can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    /// Absolute pixels.
    Px,
    /// Relative to the current font size.
    Em,
    /// Relative to the root font size.
    Rem,
    /// Relative to the x-height of the current font.
    Ex,
    /// Relative to the advance of the "0" glyph.
    Ch,
    /// 1% of the viewport width.
    Vw,
    /// 1% of the viewport height.
    Vh,
    /// 1% of the smaller viewport dimension.
    Vmin,
    /// 1% of the larger viewport dimension.
    Vmax,
    /// Centimeters.
    Cm,
    /// Millimeters.
    Mm,
    /// Inches.
    In,
    /// Points (1/72 inch).
    Pt,
    /// Picas (12 points).
    Pc,
    /// Percentage of the reference box.
    Percent,
}

impl LengthUnit {
    /// Parse a dimension unit from CSS. Percentages are not dimension units.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "px" => Some(Self::Px),
            "em" => Some(Self::Em),
            "rem" => Some(Self::Rem),
            "ex" => Some(Self::Ex),
            "ch" => Some(Self::Ch),
            "vw" => Some(Self::Vw),
            "vh" => Some(Self::Vh),
            "vmin" => Some(Self::Vmin),
            "vmax" => Some(Self::Vmax),
            "cm" => Some(Self::Cm),
            "mm" => Some(Self::Mm),
            "in" => Some(Self::In),
            "pt" => Some(Self::Pt),
            "pc" => Some(Self::Pc),
            _ => None,
        }
    }

    /// The CSS spelling of the unit.
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Ex => "ex",
            Self::Ch => "ch",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Vmin => "vmin",
            Self::Vmax => "vmax",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::Percent => "%",
        }
    }
}

/// A CSS length, possibly a percentage.
///
/// # Example
///
/// ```
/// use horizon_gradient_types::{Length, LengthUnit};
///
/// let radius = Length::px(12.5);
/// assert_eq!(radius.unit(), LengthUnit::Px);
/// assert_eq!(radius.to_string(), "12.5px");
///
/// assert!(Length::FULL.is_percent());
/// assert_eq!(Length::FULL.to_string(), "100%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Length {
    value: f32,
    unit: LengthUnit,
}

/// A length-or-percentage, as accepted for stop positions and ellipse radii.
pub type Distance = Length;

impl Length {
    /// Zero pixels.
    pub const ZERO: Self = Self::new(0.0, LengthUnit::Px);

    /// Half of the reference box.
    pub const HALF: Self = Self::new(50.0, LengthUnit::Percent);

    /// The whole reference box.
    pub const FULL: Self = Self::new(100.0, LengthUnit::Percent);

    /// Create a length with an explicit unit.
    #[inline]
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Create a pixel length.
    #[inline]
    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    /// Create an em length.
    #[inline]
    pub const fn em(value: f32) -> Self {
        Self::new(value, LengthUnit::Em)
    }

    /// Create a percentage.
    #[inline]
    pub const fn percent(value: f32) -> Self {
        Self::new(value, LengthUnit::Percent)
    }

    /// The numeric part.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The unit.
    #[inline]
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Check if this is a percentage.
    #[inline]
    pub fn is_percent(&self) -> bool {
        self.unit == LengthUnit::Percent
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_css())
    }
}

/// A 2D position inside the gradient box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: Length,
    pub y: Length,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    /// The geometric center of the box (50% 50%).
    pub const CENTER: Self = Self::new(Length::HALF, Length::HALF);
}

impl Default for Point {
    fn default() -> Self {
        Self::CENTER
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
