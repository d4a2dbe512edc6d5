//! Primitive value parsers.
//!
//! Each parser reads one value from the cursor. On failure the cursor may
//! have moved; callers that need to try something else wrap the call in
//! `Parser::try_parse` or save and restore `Parser::state()` themselves.

use cssparser::{CowRcStr, ParseError as CssParseError, Parser, Token};
use horizon_gradient_types::{Angle, Color, Distance, Length, LengthUnit, Point};

use super::CssResult;
use super::keywords::named_color;

/// Parse a bare identifier.
pub fn parse_ident<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, CowRcStr<'i>> {
    Ok(parser.expect_ident_cloned()?)
}

/// Parse a length. Percentages are not lengths; unitless `0` is `0px`.
pub fn parse_length<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Length> {
    let token = parser.next()?.clone();

    #[allow(clippy::redundant_guards)] // CSS `0` is a zero length regardless of unit
    match token {
        Token::Number { value, .. } if value == 0.0 => Ok(Length::ZERO),
        Token::Dimension { value, ref unit, .. } => LengthUnit::from_css(unit)
            .map(|unit| Length::new(value, unit))
            .ok_or_else(|| parser.new_custom_error(())),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse a length or a percentage.
pub fn parse_distance<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Distance> {
    let state = parser.state();
    parser.skip_whitespace();
    let start = parser.position();
    let percentage = match parser.next() {
        Ok(&Token::Percentage { unit_value, .. }) => Some(unit_value),
        _ => None,
    };

    if let Some(unit_value) = percentage {
        // `unit_value` was divided by 100 and rounded to f32; scaling it back
        // is off by an ulp for values like 12.7, so read the source text.
        let value = parser
            .slice_from(start)
            .trim_end_matches('%')
            .parse()
            .unwrap_or(unit_value * 100.0);
        return Ok(Length::percent(value));
    }
    parser.reset(&state);

    parse_length(parser)
}

/// Parse an angle, normalized to degrees. Unitless `0` is the zero angle.
pub fn parse_angle<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Angle> {
    let token = parser.next()?.clone();

    #[allow(clippy::redundant_guards)]
    match token {
        Token::Number { value, .. } if value == 0.0 => Ok(Angle::ZERO),
        Token::Dimension { value, ref unit, .. } => match unit.to_lowercase().as_str() {
            "deg" => Ok(Angle::deg(value)),
            "grad" => Ok(Angle::grad(value)),
            "rad" => Ok(Angle::rad(value)),
            "turn" => Ok(Angle::turn(value)),
            _ => Err(parser.new_custom_error(())),
        },
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse a color: hex, named, or `rgb()`/`rgba()`.
pub fn parse_color<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Color> {
    let token = parser.next()?.clone();

    match token {
        Token::Hash(ref hash) | Token::IDHash(ref hash) => {
            Color::from_hex(hash).ok_or_else(|| parser.new_custom_error(()))
        }
        Token::Ident(ref name) => named_color(name).ok_or_else(|| parser.new_custom_error(())),
        Token::Function(ref name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser.parse_nested_block(|p| {
                let r = parse_color_component(p)?;
                p.expect_comma()?;
                let g = parse_color_component(p)?;
                p.expect_comma()?;
                let b = parse_color_component(p)?;
                let a = if p.try_parse(|p| p.expect_comma()).is_ok() {
                    parse_alpha_component(p)?
                } else {
                    1.0
                };
                Ok::<_, CssParseError<'_, ()>>(Color::new(r, g, b, a))
            })
        }
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_color_component<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, u8> {
    let channel = match *parser.next()? {
        Token::Number { value, .. } => value,
        Token::Percentage { unit_value, .. } => unit_value * 255.0,
        _ => return Err(parser.new_custom_error(())),
    };
    Ok(channel.round().clamp(0.0, 255.0) as u8)
}

fn parse_alpha_component<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, f32> {
    match *parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

/// One component of a `<position>`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PositionComponent {
    Left,
    Right,
    Top,
    Bottom,
    Center,
    Distance(Distance),
}

impl PositionComponent {
    /// The x coordinate this component stands for, if it can be one.
    fn horizontal(self) -> Option<Length> {
        match self {
            Self::Left => Some(Length::percent(0.0)),
            Self::Right => Some(Length::FULL),
            Self::Center => Some(Length::HALF),
            Self::Distance(d) => Some(d),
            Self::Top | Self::Bottom => None,
        }
    }

    /// The y coordinate this component stands for, if it can be one.
    fn vertical(self) -> Option<Length> {
        match self {
            Self::Top => Some(Length::percent(0.0)),
            Self::Bottom => Some(Length::FULL),
            Self::Center => Some(Length::HALF),
            Self::Distance(d) => Some(d),
            Self::Left | Self::Right => None,
        }
    }

    fn is_keyword(self) -> bool {
        !matches!(self, Self::Distance(_))
    }
}

fn parse_position_component<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, PositionComponent> {
    if let Ok(distance) = parser.try_parse(parse_distance) {
        return Ok(PositionComponent::Distance(distance));
    }

    let ident = parse_ident(parser)?;
    match ident.to_lowercase().as_str() {
        "left" => Ok(PositionComponent::Left),
        "right" => Ok(PositionComponent::Right),
        "top" => Ok(PositionComponent::Top),
        "bottom" => Ok(PositionComponent::Bottom),
        "center" => Ok(PositionComponent::Center),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse a one- or two-component `<position>` into a point.
///
/// Keywords map to 0%, 50% and 100%. A lone vertical keyword keeps x
/// centered; any other lone component keeps y centered. Two keywords may be
/// written vertical first (`top left`).
pub fn parse_point<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Point> {
    let first = parse_position_component(parser)?;
    let second = parser.try_parse(parse_position_component).ok();

    let point = match second {
        None => match first {
            PositionComponent::Top | PositionComponent::Bottom => {
                first.vertical().map(|y| Point::new(Length::HALF, y))
            }
            _ => first.horizontal().map(|x| Point::new(x, Length::HALF)),
        },
        Some(second) => match (first.horizontal(), second.vertical()) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ if first.is_keyword() && second.is_keyword() => {
                match (second.horizontal(), first.vertical()) {
                    (Some(x), Some(y)) => Some(Point::new(x, y)),
                    _ => None,
                }
            }
            _ => None,
        },
    };

    point.ok_or_else(|| parser.new_custom_error(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn parse_with<T>(css: &str, f: for<'i, 't> fn(&mut Parser<'i, 't>) -> CssResult<'i, T>) -> Option<T> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        f(&mut parser).ok()
    }

    #[test]
    fn lengths() {
        assert_eq!(parse_with("10px", parse_length), Some(Length::px(10.0)));
        assert_eq!(parse_with("1.5em", parse_length), Some(Length::em(1.5)));
        assert_eq!(parse_with("0", parse_length), Some(Length::ZERO));
        assert_eq!(parse_with("50%", parse_length), None);
        assert_eq!(parse_with("3", parse_length), None);
        assert_eq!(parse_with("45deg", parse_length), None);
    }

    #[test]
    fn distances_accept_percentages() {
        assert_eq!(parse_with("50%", parse_distance), Some(Length::percent(50.0)));
        assert_eq!(parse_with("2rem", parse_distance), Some(Length::new(2.0, LengthUnit::Rem)));
        assert_eq!(parse_with("red", parse_distance), None);
    }

    #[test]
    fn fractional_percentages_are_exact() {
        assert_eq!(parse_with("12.7%", parse_distance), Some(Length::percent(12.7)));
        assert_eq!(parse_with("0.7%", parse_distance), Some(Length::percent(0.7)));
        assert_eq!(parse_with("  3.3%", parse_distance), Some(Length::percent(3.3)));
        assert_eq!(parse_with("-2.5%", parse_distance), Some(Length::percent(-2.5)));
    }

    #[test]
    fn angles() {
        assert_eq!(parse_with("45deg", parse_angle), Some(Angle::deg(45.0)));
        assert_eq!(parse_with("0.25turn", parse_angle), Some(Angle::deg(90.0)));
        assert_eq!(parse_with("200grad", parse_angle), Some(Angle::deg(180.0)));
        assert_eq!(parse_with("0", parse_angle), Some(Angle::ZERO));
        assert_eq!(parse_with("10px", parse_angle), None);
        assert_eq!(parse_with("90", parse_angle), None);
    }

    #[test]
    fn colors() {
        assert_eq!(parse_with("red", parse_color), Some(Color::RED));
        assert_eq!(parse_with("#00f", parse_color), Some(Color::BLUE));
        assert_eq!(parse_with("#0000ff", parse_color), Some(Color::BLUE));
        assert_eq!(
            parse_with("rgb(255, 128, 0)", parse_color),
            Some(Color::from_rgb8(255, 128, 0))
        );
        assert_eq!(
            parse_with("rgba(0, 0, 0, 0.5)", parse_color),
            Some(Color::new(0, 0, 0, 0.5))
        );
        assert_eq!(
            parse_with("rgb(100%, 0%, 0%)", parse_color),
            Some(Color::RED)
        );
        assert_eq!(parse_with("notacolor", parse_color), None);
        assert_eq!(parse_with("10px", parse_color), None);
    }

    #[test]
    fn points() {
        assert_eq!(parse_with("center", parse_point), Some(Point::CENTER));
        assert_eq!(
            parse_with("left", parse_point),
            Some(Point::new(Length::percent(0.0), Length::HALF))
        );
        assert_eq!(
            parse_with("top", parse_point),
            Some(Point::new(Length::HALF, Length::percent(0.0)))
        );
        assert_eq!(
            parse_with("10px 20%", parse_point),
            Some(Point::new(Length::px(10.0), Length::percent(20.0)))
        );
        assert_eq!(
            parse_with("right bottom", parse_point),
            Some(Point::new(Length::FULL, Length::FULL))
        );
        assert_eq!(
            parse_with("bottom right", parse_point),
            Some(Point::new(Length::FULL, Length::FULL))
        );
        assert_eq!(
            parse_with("top center", parse_point),
            Some(Point::new(Length::HALF, Length::percent(0.0)))
        );
        assert_eq!(parse_with("left right", parse_point), None);
        assert_eq!(parse_with("top 10px", parse_point), None);
        assert_eq!(parse_with("", parse_point), None);
    }

    #[test]
    fn point_stops_before_unrelated_tokens() {
        let mut input = ParserInput::new("left 25%, red");
        let mut parser = Parser::new(&mut input);
        let point = parse_point(&mut parser).unwrap();
        assert_eq!(point, Point::new(Length::percent(0.0), Length::percent(25.0)));
        assert!(parser.expect_comma().is_ok());
    }
}
