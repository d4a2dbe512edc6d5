//! CSS gradient parsing for Horizon.
//!
//! This crate turns CSS gradient functions into typed values:
//!
//! - **Converters**: one per gradient function, sharing a single control flow
//!   and differing only in how they read the optional initial clause
//! - **Backtracking**: a missing initial clause is re-read as the first color
//!   stop by rewinding the `cssparser` cursor
//! - **Registry**: [`GradientParser`] tries every known function and can be
//!   extended with new gradient kinds
//! - **Round trips**: every value prints back to CSS that parses to an equal
//!   value
//!
//! # Example
//!
//! ```
//! use horizon_gradient::prelude::*;
//!
//! let gradient = parse_gradient("radial-gradient(ellipse 10px 20px at top left, red, blue 50%)")?;
//! let radial = gradient.as_radial().unwrap();
//!
//! assert!(!radial.circle);
//! assert_eq!(radial.width, Length::px(10.0));
//! assert_eq!(radial.height, Length::px(20.0));
//! assert_eq!(radial.center, Point::new(Length::percent(0.0), Length::percent(0.0)));
//!
//! // The printed form parses back to the same value.
//! assert_eq!(parse_gradient(&gradient.to_string())?, gradient);
//! # Ok::<(), horizon_gradient::Error>(())
//! ```
//!
//! Inside a larger CSS parser, hand the cursor to a converter or the
//! registry directly:
//!
//! ```
//! use cssparser::{Parser, ParserInput};
//! use horizon_gradient::prelude::*;
//!
//! let mut input = ParserInput::new("linear-gradient(red, blue) no-repeat");
//! let mut parser = Parser::new(&mut input);
//!
//! let gradient = GradientParser::default().parse_next(&mut parser).unwrap();
//! assert_eq!(gradient.stops().len(), 2);
//! assert!(parser.expect_ident_matching("no-repeat").is_ok());
//! ```

pub mod converter;
pub mod parser;

mod error;
mod registry;

pub use error::{Error, Result};
pub use registry::{GradientParser, parse_gradient};

pub use horizon_gradient_types::{
    Angle, Color, Distance, Gradient, GradientStop, Length, LengthUnit, LinearGradient, Point,
    RadialGradient, SizeMode,
};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::converter::{GradientConverter, GradientKind, Linear, Radial, ValueConverter};
    pub use crate::registry::{GradientParser, parse_gradient};
    pub use crate::{
        Angle, Color, Gradient, GradientStop, Length, LinearGradient, Point, RadialGradient,
        SizeMode,
    };
}
