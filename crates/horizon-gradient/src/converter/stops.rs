//! Color stop parsing.

use cssparser::Parser;
use horizon_gradient_types::GradientStop;

use crate::parser::{CssResult, parse_color, parse_distance};

/// Parse one `<color> [<distance>]?` stop.
pub fn parse_stop<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, GradientStop> {
    let color = parse_color(parser)?;
    let position = parser.try_parse(parse_distance).ok();
    Ok(GradientStop { color, position })
}

/// Parse a comma-separated list of stops.
///
/// The list ends at the first entry that is not a stop; that is not an
/// error. Stops are returned in source order, and the cursor is left just
/// before the entry that failed (or just after the last stop).
pub fn parse_stop_list(parser: &mut Parser<'_, '_>) -> Vec<GradientStop> {
    let mut stops = vec![];

    while let Ok(stop) = parser.try_parse(parse_stop) {
        stops.push(stop);

        parser.skip_whitespace();
        if parser.try_parse(|p| p.expect_comma()).is_err() {
            break;
        }
    }

    stops
}
