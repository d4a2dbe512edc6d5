//! `radial-gradient()` initial clause.
//!
//! The clause is any of
//!
//! ```text
//! circle [<length> | <size>]?
//! ellipse [<distance> <distance> | <size>]?
//! <size> [circle | ellipse]?
//! <distance> <distance>?
//! ```
//!
//! optionally followed by `at <position>`, or just `at <position>` on its own.
//! Once `at` is read the position is mandatory.

use cssparser::Parser;
use horizon_gradient_types::{
    Gradient, GradientStop, Length, Point, RadialGradient, SizeMode,
};

use super::GradientKind;
use crate::parser::{CssResult, parse_distance, parse_ident, parse_length, parse_point};

/// Radial gradients.
#[derive(Debug, Clone, Copy, Default)]
pub struct Radial;

/// Everything the radial initial clause can set. Unset fields take their
/// defaults when the gradient is built.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadialOptions {
    pub circle: Option<bool>,
    pub center: Option<Point>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub size: Option<SizeMode>,
}

impl GradientKind for Radial {
    type Initial = RadialOptions;

    fn parse_initial<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Option<RadialOptions>> {
        let start = parser.state();
        let mut options = RadialOptions::default();

        match parser.try_parse(parse_ident) {
            Ok(ident) => match ident.to_lowercase().as_str() {
                "circle" => {
                    options.circle = Some(true);
                    if let Ok(radius) = parser.try_parse(parse_length) {
                        options.width = Some(radius);
                        options.height = Some(radius);
                    } else {
                        options.size = parser.try_parse(parse_size_mode).ok();
                    }
                }
                "ellipse" => {
                    options.circle = Some(false);
                    if let Ok(width) = parser.try_parse(parse_distance) {
                        // A lone ellipse radius is malformed, not a stop.
                        let height = parser.try_parse(parse_distance)?;
                        options.width = Some(width);
                        options.height = Some(height);
                    } else {
                        options.size = parser.try_parse(parse_size_mode).ok();
                    }
                }
                "at" => parser.reset(&start),
                keyword => match SizeMode::from_css(keyword) {
                    Some(size) => {
                        options.size = Some(size);
                        options.circle = parser.try_parse(parse_shape).ok();
                    }
                    None => {
                        parser.reset(&start);
                        return Ok(None);
                    }
                },
            },
            Err(_) => {
                let Ok(width) = parser.try_parse(parse_distance) else {
                    return Ok(None);
                };
                match parser.try_parse(parse_distance) {
                    Ok(height) => {
                        options.circle = Some(false);
                        options.width = Some(width);
                        options.height = Some(height);
                    }
                    Err(_) => {
                        options.circle = Some(true);
                        options.width = Some(width);
                        options.height = Some(width);
                    }
                }
            }
        }

        if parser.try_parse(|p| p.expect_ident_matching("at")).is_ok() {
            options.center = Some(parse_point(parser)?);
        }

        Ok(Some(options))
    }

    fn build(initial: Option<RadialOptions>, stops: Vec<GradientStop>, repeating: bool) -> Gradient {
        let options = initial.unwrap_or_default();
        RadialGradient::new(
            options.circle.unwrap_or(true),
            options.center.unwrap_or(Point::CENTER),
            options.width.unwrap_or(Length::FULL),
            options.height.unwrap_or(Length::FULL),
            options.size.unwrap_or(SizeMode::None),
            stops,
            repeating,
        )
        .into()
    }
}

fn parse_size_mode<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, SizeMode> {
    let ident = parse_ident(parser)?;
    SizeMode::from_css(&ident).ok_or_else(|| parser.new_custom_error(()))
}

/// Parse `circle` or `ellipse`, returning whether it was a circle.
fn parse_shape<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, bool> {
    let ident = parse_ident(parser)?;
    match ident.to_lowercase().as_str() {
        "circle" => Ok(true),
        "ellipse" => Ok(false),
        _ => Err(parser.new_custom_error(())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn initial(css: &str) -> Result<Option<RadialOptions>, ()> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        Radial::parse_initial(&mut parser).map_err(|_| ())
    }

    #[test]
    fn circle_with_radius() {
        let options = initial("circle 5px").unwrap().unwrap();
        assert_eq!(options.circle, Some(true));
        assert_eq!(options.width, Some(Length::px(5.0)));
        assert_eq!(options.height, Some(Length::px(5.0)));
        assert_eq!(options.size, None);
    }

    #[test]
    fn circle_with_size_keyword() {
        let options = initial("circle closest-side").unwrap().unwrap();
        assert_eq!(options.size, Some(SizeMode::ClosestSide));
        assert_eq!(options.width, None);
    }

    #[test]
    fn bare_circle() {
        let options = initial("circle, red").unwrap().unwrap();
        assert_eq!(options, RadialOptions { circle: Some(true), ..Default::default() });
    }

    #[test]
    fn ellipse_needs_both_radii() {
        let options = initial("ellipse 10px 20%").unwrap().unwrap();
        assert_eq!(options.circle, Some(false));
        assert_eq!(options.width, Some(Length::px(10.0)));
        assert_eq!(options.height, Some(Length::percent(20.0)));

        assert!(initial("ellipse 10px, red").is_err());
    }

    #[test]
    fn ellipse_with_size_keyword() {
        let options = initial("ellipse farthest-corner").unwrap().unwrap();
        assert_eq!(options.circle, Some(false));
        assert_eq!(options.size, Some(SizeMode::FarthestCorner));
    }

    #[test]
    fn size_keyword_then_shape() {
        let options = initial("closest-corner ellipse").unwrap().unwrap();
        assert_eq!(options.circle, Some(false));
        assert_eq!(options.size, Some(SizeMode::ClosestCorner));

        let options = initial("farthest-side at top").unwrap().unwrap();
        assert_eq!(options.circle, None);
        assert_eq!(options.size, Some(SizeMode::FarthestSide));
        assert_eq!(options.center, Some(Point::new(Length::HALF, Length::percent(0.0))));
    }

    #[test]
    fn bare_distances() {
        let options = initial("10px 20px").unwrap().unwrap();
        assert_eq!(options.circle, Some(false));
        assert_eq!(options.height, Some(Length::px(20.0)));

        let options = initial("30%").unwrap().unwrap();
        assert_eq!(options.circle, Some(true));
        assert_eq!(options.width, Some(Length::percent(30.0)));
        assert_eq!(options.height, Some(Length::percent(30.0)));
    }

    #[test]
    fn position_clause() {
        let options = initial("circle at left 25%").unwrap().unwrap();
        assert_eq!(
            options.center,
            Some(Point::new(Length::percent(0.0), Length::percent(25.0)))
        );

        let options = initial("at center").unwrap().unwrap();
        assert_eq!(options.circle, None);
        assert_eq!(options.center, Some(Point::CENTER));
    }

    #[test]
    fn at_commits_to_a_position() {
        assert!(initial("circle at, red").is_err());
        assert!(initial("at, red").is_err());
        assert!(initial("closest-side at, red").is_err());
        assert!(initial("farthest-corner circle at, red").is_err());
        assert!(initial("10px 20px at, red").is_err());
        assert!(initial("10px at, red").is_err());
    }

    #[test]
    fn stops_are_not_a_clause() {
        assert_eq!(initial("red, blue"), Ok(None));
        assert_eq!(initial("#000 10%, blue"), Ok(None));
    }

    #[test]
    fn build_applies_defaults() {
        let gradient = Radial::build(None, vec![], false);
        assert_eq!(
            gradient,
            Gradient::Radial(RadialGradient::new(
                true,
                Point::CENTER,
                Length::FULL,
                Length::FULL,
                SizeMode::None,
                vec![],
                false,
            ))
        );
    }
}
