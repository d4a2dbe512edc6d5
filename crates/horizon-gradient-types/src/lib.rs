//! Value types for Horizon gradients.
//!
//! This crate holds the data side of CSS gradient support: the color and
//! geometry values a gradient is built from, and the gradient values
//! themselves. Parsing lives in `horizon-gradient`.
//!
//! Every type implements `Display`, producing CSS text that parses back to an
//! equal value.
//!
//! # Example
//!
//! ```
//! use horizon_gradient_types::{
//!     Color, Gradient, GradientStop, Length, Point, RadialGradient, SizeMode,
//! };
//!
//! let gradient: Gradient = RadialGradient::new(
//!     false,
//!     Point::CENTER,
//!     Length::px(40.0),
//!     Length::px(20.0),
//!     SizeMode::None,
//!     vec![GradientStop::auto(Color::WHITE), GradientStop::auto(Color::BLACK)],
//!     false,
//! )
//! .into();
//!
//! assert_eq!(
//!     gradient.to_string(),
//!     "radial-gradient(ellipse 40px 20px at 50% 50%, #ffffff, #000000)"
//! );
//! ```

mod gradient;
mod types;

pub use gradient::{Gradient, GradientStop, LinearGradient, RadialGradient, SizeMode};
pub use types::{Angle, Color, Distance, Length, LengthUnit, Point};
