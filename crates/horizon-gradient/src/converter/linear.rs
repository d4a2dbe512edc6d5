//! `linear-gradient()` initial clause: `to <side-or-corner>` or an angle.

use cssparser::Parser;
use horizon_gradient_types::{Angle, Gradient, GradientStop, LinearGradient};

use super::GradientKind;
use crate::parser::keywords::{direction_angle, is_vertical_side};
use crate::parser::{CssResult, parse_angle, parse_ident};

/// Linear gradients.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl GradientKind for Linear {
    type Initial = Angle;

    fn parse_initial<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Option<Angle>> {
        // An unknown direction is not an error: the tokens get another chance
        // as color stops.
        if let Ok(angle) = parser.try_parse(parse_direction) {
            return Ok(Some(angle));
        }
        Ok(parser.try_parse(parse_angle).ok())
    }

    fn build(initial: Option<Angle>, stops: Vec<GradientStop>, repeating: bool) -> Gradient {
        LinearGradient::new(initial.unwrap_or(Angle::ZERO), stops, repeating).into()
    }
}

/// Parse `to <side> [<side>]?` into an angle.
fn parse_direction<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Angle> {
    parser.expect_ident_matching("to")?;

    let first = parse_ident(parser)?;
    let key = match parser.try_parse(parse_ident) {
        // Corners are keyed horizontal side first.
        Ok(second) if is_vertical_side(&first) => format!("{} {}", second, first),
        Ok(second) => format!("{} {}", first, second),
        Err(_) => first.to_string(),
    };

    direction_angle(&key).ok_or_else(|| parser.new_custom_error(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn initial(css: &str) -> Option<Angle> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        Linear::parse_initial(&mut parser).ok().flatten()
    }

    #[test]
    fn sides_and_corners() {
        assert_eq!(initial("to top"), Some(Angle::deg(0.0)));
        assert_eq!(initial("to right"), Some(Angle::deg(90.0)));
        assert_eq!(initial("to bottom"), Some(Angle::deg(180.0)));
        assert_eq!(initial("to left"), Some(Angle::deg(270.0)));
        assert_eq!(initial("to right top"), Some(Angle::deg(45.0)));
        assert_eq!(initial("to top right"), Some(Angle::deg(45.0)));
        assert_eq!(initial("to bottom left"), Some(Angle::deg(225.0)));
        assert_eq!(initial("TO Left Top"), Some(Angle::deg(315.0)));
    }

    #[test]
    fn explicit_angle() {
        assert_eq!(initial("135deg"), Some(Angle::deg(135.0)));
        assert_eq!(initial("0.5turn"), Some(Angle::deg(180.0)));
    }

    #[test]
    fn unknown_direction_is_absent_and_rewinds() {
        let mut input = ParserInput::new("to top bottom, red");
        let mut parser = Parser::new(&mut input);
        let before = parser.position();

        assert_eq!(Linear::parse_initial(&mut parser).ok(), Some(None));
        assert_eq!(parser.position(), before);
    }

    #[test]
    fn color_is_not_a_clause() {
        assert_eq!(initial("red, blue"), None);
        assert_eq!(initial("#fff"), None);
    }

    #[test]
    fn build_defaults_to_zero_angle() {
        let gradient = Linear::build(None, vec![], true);
        assert_eq!(
            gradient,
            Gradient::Linear(LinearGradient::new(Angle::ZERO, vec![], true))
        );
    }
}
