//! Gradient value model.
//!
//! Gradients are immutable values produced in one shot by a successful parse.
//! Each renders back to its canonical function-call text through `Display`,
//! and that text parses back to an equal value.

use std::fmt;

use crate::types::{Angle, Color, Distance, Length, Point};

/// How an unspecified radial gradient radius is resolved at paint time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeMode {
    /// No size keyword was given.
    #[default]
    None,
    /// Reach the side of the box closest to the center.
    ClosestSide,
    /// Reach the side of the box farthest from the center.
    FarthestSide,
    /// Reach the corner of the box closest to the center.
    ClosestCorner,
    /// Reach the corner of the box farthest from the center.
    FarthestCorner,
}

impl SizeMode {
    /// Parse a size keyword from CSS. `None` has no keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "closest-side" => Some(Self::ClosestSide),
            "farthest-side" => Some(Self::FarthestSide),
            "closest-corner" => Some(Self::ClosestCorner),
            "farthest-corner" => Some(Self::FarthestCorner),
            _ => None,
        }
    }

    /// The CSS keyword, if any.
    pub fn as_css(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::ClosestSide => Some("closest-side"),
            Self::FarthestSide => Some("farthest-side"),
            Self::ClosestCorner => Some("closest-corner"),
            Self::FarthestCorner => Some("farthest-corner"),
        }
    }
}

/// A gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// Color at this stop.
    pub color: Color,
    /// Position along the gradient line. `None` leaves placement to the
    /// painter (stops without a position are spaced evenly).
    pub position: Option<Distance>,
}

impl GradientStop {
    /// Create a stop with an explicit position.
    #[inline]
    pub const fn new(color: Color, position: Distance) -> Self {
        Self {
            color,
            position: Some(position),
        }
    }

    /// Create a stop without a position.
    #[inline]
    pub const fn auto(color: Color) -> Self {
        Self {
            color,
            position: None,
        }
    }
}

impl fmt::Display for GradientStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{} {}", self.color, position),
            None => write!(f, "{}", self.color),
        }
    }
}

fn write_stops(f: &mut fmt::Formatter<'_>, stops: &[GradientStop]) -> fmt::Result {
    for (i, stop) in stops.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", stop)?;
    }
    Ok(())
}

/// A `linear-gradient()` or `repeating-linear-gradient()` value.
///
/// # Example
///
/// ```
/// use horizon_gradient_types::{Angle, Color, GradientStop, Length, LinearGradient};
///
/// let gradient = LinearGradient::new(
///     Angle::deg(90.0),
///     vec![
///         GradientStop::auto(Color::RED),
///         GradientStop::new(Color::BLUE, Length::percent(50.0)),
///     ],
///     false,
/// );
/// assert_eq!(gradient.to_string(), "linear-gradient(90deg, #ff0000, #0000ff 50%)");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearGradient {
    /// Direction of the gradient line.
    pub angle: Angle,
    /// Color stops in paint order.
    pub stops: Vec<GradientStop>,
    /// Whether the stop pattern repeats along the gradient line.
    pub repeating: bool,
}

impl LinearGradient {
    /// Create a new linear gradient.
    pub fn new(angle: Angle, stops: Vec<GradientStop>, repeating: bool) -> Self {
        Self {
            angle,
            stops,
            repeating,
        }
    }

    /// The CSS function name for this gradient.
    pub fn function_name(&self) -> &'static str {
        if self.repeating {
            "repeating-linear-gradient"
        } else {
            "linear-gradient"
        }
    }
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, ", self.function_name(), self.angle)?;
        write_stops(f, &self.stops)?;
        write!(f, ")")
    }
}

/// A `radial-gradient()` or `repeating-radial-gradient()` value.
///
/// A circle has a single radius, stored in both `width` and `height`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadialGradient {
    /// Whether the ending shape is a circle rather than an ellipse.
    pub circle: bool,
    /// Center of the gradient.
    pub center: Point,
    /// Horizontal radius.
    pub width: Length,
    /// Vertical radius.
    pub height: Length,
    /// Named size, when the radii were not given explicitly.
    pub size: SizeMode,
    /// Color stops in paint order.
    pub stops: Vec<GradientStop>,
    /// Whether the stop pattern repeats outward from the center.
    pub repeating: bool,
}

impl RadialGradient {
    /// Create a new radial gradient.
    ///
    /// For a circle, `height` is ignored and the single radius `width` is
    /// used for both dimensions.
    pub fn new(
        circle: bool,
        center: Point,
        width: Length,
        height: Length,
        size: SizeMode,
        stops: Vec<GradientStop>,
        repeating: bool,
    ) -> Self {
        let height = if circle { width } else { height };
        Self {
            circle,
            center,
            width,
            height,
            size,
            stops,
            repeating,
        }
    }

    /// The CSS function name for this gradient.
    pub fn function_name(&self) -> &'static str {
        if self.repeating {
            "repeating-radial-gradient"
        } else {
            "radial-gradient"
        }
    }
}

impl fmt::Display for RadialGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function_name())?;

        let shape = if self.circle { "circle" } else { "ellipse" };
        match self.size.as_css() {
            Some(size) => write!(f, "{} {}", shape, size)?,
            None if !self.circle => write!(f, "ellipse {} {}", self.width, self.height)?,
            None if self.width == Length::FULL => write!(f, "circle")?,
            // The circle keyword only takes absolute radii; a lone distance
            // already implies a circle.
            None if self.width.is_percent() => write!(f, "{}", self.width)?,
            None => write!(f, "circle {}", self.width)?,
        }

        write!(f, " at {}, ", self.center)?;
        write_stops(f, &self.stops)?;
        write!(f, ")")
    }
}

/// Any parsed gradient value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gradient {
    /// A linear gradient.
    Linear(LinearGradient),
    /// A radial gradient.
    Radial(RadialGradient),
}

impl Gradient {
    /// The color stops, in paint order.
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Self::Linear(g) => &g.stops,
            Self::Radial(g) => &g.stops,
        }
    }

    /// Whether the gradient repeats.
    pub fn is_repeating(&self) -> bool {
        match self {
            Self::Linear(g) => g.repeating,
            Self::Radial(g) => g.repeating,
        }
    }

    /// Get the linear gradient, if this is one.
    pub fn as_linear(&self) -> Option<&LinearGradient> {
        match self {
            Self::Linear(g) => Some(g),
            _ => None,
        }
    }

    /// Get the radial gradient, if this is one.
    pub fn as_radial(&self) -> Option<&RadialGradient> {
        match self {
            Self::Radial(g) => Some(g),
            _ => None,
        }
    }
}

impl From<LinearGradient> for Gradient {
    fn from(gradient: LinearGradient) -> Self {
        Self::Linear(gradient)
    }
}

impl From<RadialGradient> for Gradient {
    fn from(gradient: RadialGradient) -> Self {
        Self::Radial(gradient)
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear(g) => write!(f, "{}", g),
            Self::Radial(g) => write!(f, "{}", g),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops() -> Vec<GradientStop> {
        vec![
            GradientStop::auto(Color::RED),
            GradientStop::new(Color::BLUE, Length::percent(50.0)),
        ]
    }

    #[test]
    fn linear_display() {
        let gradient = LinearGradient::new(Angle::deg(180.0), stops(), true);
        assert_eq!(
            gradient.to_string(),
            "repeating-linear-gradient(180deg, #ff0000, #0000ff 50%)"
        );
    }

    #[test]
    fn linear_display_without_stops() {
        let gradient = LinearGradient::new(Angle::ZERO, vec![], false);
        assert_eq!(gradient.to_string(), "linear-gradient(0deg, )");
    }

    #[test]
    fn circle_keeps_single_radius() {
        let gradient = RadialGradient::new(
            true,
            Point::CENTER,
            Length::px(5.0),
            Length::px(99.0),
            SizeMode::None,
            stops(),
            false,
        );
        assert_eq!(gradient.width, gradient.height);
        assert_eq!(
            gradient.to_string(),
            "radial-gradient(circle 5px at 50% 50%, #ff0000, #0000ff 50%)"
        );
    }

    #[test]
    fn radial_display_shapes() {
        let ellipse = RadialGradient::new(
            false,
            Point::CENTER,
            Length::px(10.0),
            Length::px(20.0),
            SizeMode::None,
            vec![],
            false,
        );
        assert!(ellipse.to_string().starts_with("radial-gradient(ellipse 10px 20px at"));

        let sized = RadialGradient::new(
            true,
            Point::CENTER,
            Length::FULL,
            Length::FULL,
            SizeMode::ClosestSide,
            vec![],
            true,
        );
        assert!(sized
            .to_string()
            .starts_with("repeating-radial-gradient(circle closest-side at"));

        let default_circle = RadialGradient::new(
            true,
            Point::CENTER,
            Length::FULL,
            Length::FULL,
            SizeMode::None,
            vec![],
            false,
        );
        assert!(default_circle.to_string().starts_with("radial-gradient(circle at"));

        let percent_circle = RadialGradient::new(
            true,
            Point::CENTER,
            Length::percent(30.0),
            Length::percent(30.0),
            SizeMode::None,
            vec![],
            false,
        );
        assert!(percent_circle.to_string().starts_with("radial-gradient(30% at"));
    }

    #[test]
    fn size_mode_keywords() {
        assert_eq!(SizeMode::from_css("Farthest-Corner"), Some(SizeMode::FarthestCorner));
        assert_eq!(SizeMode::from_css("none"), None);
        assert_eq!(SizeMode::None.as_css(), None);
        assert_eq!(SizeMode::ClosestCorner.as_css(), Some("closest-corner"));
    }

    #[test]
    fn gradient_accessors() {
        let gradient: Gradient = LinearGradient::new(Angle::ZERO, stops(), true).into();
        assert_eq!(gradient.stops().len(), 2);
        assert!(gradient.is_repeating());
        assert!(gradient.as_linear().is_some());
        assert!(gradient.as_radial().is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_preserves_gradient() {
        let gradient: Gradient = RadialGradient::new(
            false,
            Point::new(Length::px(4.0), Length::HALF),
            Length::em(2.0),
            Length::percent(40.0),
            SizeMode::None,
            stops(),
            true,
        )
        .into();

        let json = serde_json::to_string(&gradient).unwrap();
        let back: Gradient = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gradient);
    }
}
