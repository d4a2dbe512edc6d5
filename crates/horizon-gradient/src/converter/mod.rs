//! Gradient function converters.
//!
//! Every gradient function shares one control flow:
//!
//! 1. match the function token (`linear-gradient(` etc.), consuming nothing
//!    if it is some other token;
//! 2. try the kind-specific *initial clause* (direction, or shape/size/position);
//! 3. if the clause was present, require a comma; if it was absent, back up to
//!    the start of the arguments so its tokens are read again as the first stop;
//! 4. read the stop list;
//! 5. require the closing `)`.
//!
//! The kind-specific parts are supplied through [`GradientKind`], so adding a
//! new gradient family means writing one initial-clause parser and one
//! constructor.

mod linear;
mod radial;
mod stops;

use std::marker::PhantomData;

use cssparser::{Parser, SourcePosition};
use horizon_gradient_types::{Gradient, GradientStop};

use crate::parser::CssResult;

pub use linear::Linear;
pub use radial::{Radial, RadialOptions};
pub use stops::{parse_stop, parse_stop_list};

/// The kind-specific half of a gradient converter.
pub trait GradientKind {
    /// Geometry read from the optional initial clause.
    type Initial;

    /// Try to read the initial clause.
    ///
    /// Returns `Ok(None)` if the clause is absent; the converter then rewinds
    /// and reads the same tokens as color stops. Returns `Err` if the clause
    /// was started but is malformed, which fails the whole gradient.
    fn parse_initial<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Option<Self::Initial>>;

    /// Build the gradient value, filling defaults for anything the initial
    /// clause did not set.
    fn build(initial: Option<Self::Initial>, stops: Vec<GradientStop>, repeating: bool) -> Gradient;
}

/// Something that can turn the token at the cursor into a gradient.
///
/// On `None` the cursor position is unspecified; callers that want to try
/// another converter must save and restore it themselves.
pub trait ValueConverter: Send + Sync {
    /// The CSS function name this converter recognizes.
    fn name(&self) -> &str;

    /// Try to read one gradient at the cursor.
    fn convert(&self, parser: &mut Parser<'_, '_>) -> Option<Gradient>;
}

/// Converter for one gradient function name, generic over the gradient kind.
///
/// # Example
///
/// ```
/// use cssparser::{Parser, ParserInput};
/// use horizon_gradient::converter::{GradientConverter, ValueConverter};
///
/// let converter = GradientConverter::repeating_linear();
/// let mut input = ParserInput::new("repeating-linear-gradient(45deg, red, blue 20px)");
/// let mut parser = Parser::new(&mut input);
///
/// let gradient = converter.convert(&mut parser).unwrap();
/// assert!(gradient.is_repeating());
/// assert_eq!(gradient.stops().len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GradientConverter<K> {
    name: &'static str,
    repeating: bool,
    kind: PhantomData<fn() -> K>,
}

impl<K> GradientConverter<K> {
    /// Create a converter for the given function name.
    pub const fn new(name: &'static str, repeating: bool) -> Self {
        Self {
            name,
            repeating,
            kind: PhantomData,
        }
    }

    /// Whether produced gradients are marked as repeating.
    pub fn is_repeating(&self) -> bool {
        self.repeating
    }
}

impl GradientConverter<Linear> {
    /// Converter for `linear-gradient()`.
    pub const fn linear() -> Self {
        Self::new("linear-gradient", false)
    }

    /// Converter for `repeating-linear-gradient()`.
    pub const fn repeating_linear() -> Self {
        Self::new("repeating-linear-gradient", true)
    }
}

impl GradientConverter<Radial> {
    /// Converter for `radial-gradient()`.
    pub const fn radial() -> Self {
        Self::new("radial-gradient", false)
    }

    /// Converter for `repeating-radial-gradient()`.
    pub const fn repeating_radial() -> Self {
        Self::new("repeating-radial-gradient", true)
    }
}

impl<K: GradientKind> ValueConverter for GradientConverter<K> {
    fn name(&self) -> &str {
        self.name
    }

    fn convert(&self, parser: &mut Parser<'_, '_>) -> Option<Gradient> {
        let start = parser.state();
        if parser.expect_function_matching(self.name).is_err() {
            parser.reset(&start);
            return None;
        }

        // From here on the function name is consumed; any failure means a
        // malformed gradient rather than "not a gradient".
        let repeating = self.repeating;
        let mut arguments_end = None;
        let result = parser.parse_nested_block(|p| {
            let arguments = parse_arguments::<K>(p);
            arguments_end = Some(p.position());
            arguments.map(|(initial, stops)| K::build(initial, stops, repeating))
        });

        // cssparser closes blocks left open at end of input; a gradient
        // needs its `)` written out.
        let closed = match arguments_end {
            Some(end) => is_closed(parser, end),
            None => false,
        };

        match result {
            Ok(_) if !closed => {
                tracing::debug!("Unclosed {}() value", self.name);
                None
            }
            Ok(gradient) => Some(gradient),
            Err(e) => {
                tracing::debug!("Malformed {}() value: {:?}", self.name, e);
                None
            }
        }
    }
}

/// Whether the text consumed since `end` of the arguments finishes with `)`.
fn is_closed(parser: &Parser<'_, '_>, end: SourcePosition) -> bool {
    parser.slice_from(end).trim_end().ends_with(')')
}

/// Parse the arguments inside the function parentheses.
///
/// The nested block fails unless it is exhausted afterwards, so nothing but
/// whitespace may stand between the stop list and the closing `)`.
fn parse_arguments<'i, K: GradientKind>(
    parser: &mut Parser<'i, '_>,
) -> CssResult<'i, (Option<K::Initial>, Vec<GradientStop>)> {
    let start = parser.state();

    let initial = K::parse_initial(parser)?;
    if initial.is_some() {
        parser.skip_whitespace();
        parser.expect_comma()?;
    } else {
        tracing::trace!("No initial clause, reading stops from the first argument");
        parser.reset(&start);
    }

    let stops = parse_stop_list(parser);
    Ok((initial, stops))
}
