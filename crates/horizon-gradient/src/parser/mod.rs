//! Cursor-level parsing building blocks.
//!
//! The cursor is a `cssparser::Parser`. Everything here reads values from it
//! using only `next()`, `state()`/`reset()` and `try_parse()`, so callers can
//! always back up to a saved position and try another reading.

pub mod keywords;
mod primitives;

pub use primitives::{
    parse_angle, parse_color, parse_distance, parse_ident, parse_length, parse_point,
};

/// Result of a single parse step. The error carries no payload; a failed
/// step only means "this is not what was expected here".
pub type CssResult<'i, T> = std::result::Result<T, cssparser::ParseError<'i, ()>>;
