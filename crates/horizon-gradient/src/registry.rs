//! Converter registry and string entry points.

use cssparser::{Parser, ParserInput, Token};
use horizon_gradient_types::Gradient;

use crate::converter::{GradientConverter, ValueConverter};
use crate::{Error, Result};

/// A set of gradient converters tried in order.
///
/// The default registry knows the four standard functions. Further kinds can
/// be added with [`with_converter`](Self::with_converter) without touching
/// the existing converters.
///
/// # Example
///
/// ```
/// use horizon_gradient::GradientParser;
///
/// let parser = GradientParser::default();
/// let gradient = parser.parse_str("radial-gradient(circle 5px at center, red, blue)").unwrap();
///
/// let radial = gradient.as_radial().unwrap();
/// assert!(radial.circle);
/// assert_eq!(radial.width, radial.height);
/// ```
pub struct GradientParser {
    converters: Vec<Box<dyn ValueConverter>>,
}

impl Default for GradientParser {
    fn default() -> Self {
        Self::empty()
            .with_converter(GradientConverter::linear())
            .with_converter(GradientConverter::repeating_linear())
            .with_converter(GradientConverter::radial())
            .with_converter(GradientConverter::repeating_radial())
    }
}

impl std::fmt::Debug for GradientParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.converters.iter().map(|c| c.name()))
            .finish()
    }
}

// Ensure a shared registry can serve parses on any thread
static_assertions::assert_impl_all!(GradientParser: Send, Sync);

impl GradientParser {
    /// Create a registry with the standard gradient converters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with no converters.
    pub fn empty() -> Self {
        Self { converters: vec![] }
    }

    /// Add a converter, tried after the ones already registered.
    pub fn with_converter(mut self, converter: impl ValueConverter + 'static) -> Self {
        self.converters.push(Box::new(converter));
        self
    }

    /// Names of the registered functions, in the order they are tried.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.converters.iter().map(|c| c.name())
    }

    /// Whether some registered converter handles `name` (case-insensitive).
    pub fn handles(&self, name: &str) -> bool {
        self.function_names().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Try each converter at the cursor, rewinding between attempts.
    ///
    /// On `None` the cursor is back where it started.
    pub fn parse_next(&self, parser: &mut Parser<'_, '_>) -> Option<Gradient> {
        let start = parser.state();
        for converter in &self.converters {
            if let Some(gradient) = converter.convert(parser) {
                return Some(gradient);
            }
            parser.reset(&start);
        }
        None
    }

    /// Parse a string that must contain exactly one gradient.
    pub fn parse_str(&self, css: &str) -> Result<Gradient> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        parser.skip_whitespace();

        let start = parser.state();
        if let Some(gradient) = self.parse_next(&mut parser) {
            if parser.expect_exhausted().is_err() {
                parser.skip_whitespace();
                let location = parser.current_source_location();
                return Err(Error::parse(
                    format!("Unexpected input after {}()", function_name(&gradient)),
                    location.line + 1,
                    location.column,
                ));
            }
            return Ok(gradient);
        }

        parser.reset(&start);
        let location = parser.current_source_location();
        match parser.next() {
            Ok(Token::Function(name)) if self.handles(name) => Err(Error::parse(
                format!("Malformed {}() value", name),
                location.line + 1,
                location.column,
            )),
            Ok(Token::Function(name)) => Err(Error::unknown_function(name.to_string())),
            Ok(token) => Err(Error::parse(
                format!("Expected a gradient function, found {:?}", token),
                location.line + 1,
                location.column,
            )),
            Err(_) => Err(Error::parse(
                "Expected a gradient function, found end of input",
                location.line + 1,
                location.column,
            )),
        }
    }
}

fn function_name(gradient: &Gradient) -> &'static str {
    match gradient {
        Gradient::Linear(g) => g.function_name(),
        Gradient::Radial(g) => g.function_name(),
    }
}

/// Parse a string containing exactly one gradient with the standard
/// converters.
///
/// # Example
///
/// ```
/// use horizon_gradient::{Angle, parse_gradient};
///
/// let gradient = parse_gradient("linear-gradient(to right, red, blue 50%)").unwrap();
/// assert_eq!(gradient.as_linear().unwrap().angle, Angle::deg(90.0));
/// assert_eq!(gradient.to_string(), "linear-gradient(90deg, #ff0000, #0000ff 50%)");
///
/// assert!(parse_gradient("linear-gradient(to right red, blue)").is_err());
/// ```
pub fn parse_gradient(css: &str) -> Result<Gradient> {
    GradientParser::default().parse_str(css)
}
