//! Keyword lookup tables.
//!
//! These are plain `match` tables, fixed at compile time and safe to read
//! from any number of parses at once.

use horizon_gradient_types::{Angle, Color};

/// Look up a named color (case-insensitive).
pub fn named_color(name: &str) -> Option<Color> {
    let color = match name.to_lowercase().as_str() {
        "transparent" => Color::TRANSPARENT,
        "black" => Color::BLACK,
        "silver" => Color::from_rgb8(192, 192, 192),
        "gray" | "grey" => Color::GRAY,
        "white" => Color::WHITE,
        "maroon" => Color::from_rgb8(128, 0, 0),
        "red" => Color::RED,
        "purple" => Color::from_rgb8(128, 0, 128),
        "fuchsia" | "magenta" => Color::MAGENTA,
        "green" => Color::GREEN,
        "lime" => Color::LIME,
        "olive" => Color::from_rgb8(128, 128, 0),
        "yellow" => Color::YELLOW,
        "navy" => Color::from_rgb8(0, 0, 128),
        "blue" => Color::BLUE,
        "teal" => Color::from_rgb8(0, 128, 128),
        "aqua" | "cyan" => Color::CYAN,
        "orange" => Color::from_rgb8(255, 165, 0),
        _ => return None,
    };
    Some(color)
}

/// Whether a side keyword names a vertical side.
pub fn is_vertical_side(keyword: &str) -> bool {
    keyword.eq_ignore_ascii_case("top") || keyword.eq_ignore_ascii_case("bottom")
}

/// Look up the angle for a `to <side-or-corner>` direction.
///
/// Corner keys are written horizontal side first (`"left top"`); callers
/// normalize the order before the lookup.
pub fn direction_angle(key: &str) -> Option<Angle> {
    let degrees = match key.to_lowercase().as_str() {
        "top" => 0.0,
        "right top" => 45.0,
        "right" => 90.0,
        "right bottom" => 135.0,
        "bottom" => 180.0,
        "left bottom" => 225.0,
        "left" => 270.0,
        "left top" => 315.0,
        _ => return None,
    };
    Some(Angle::deg(degrees))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_ignore_case() {
        assert_eq!(named_color("Red"), Some(Color::RED));
        assert_eq!(named_color("GREY"), Some(Color::GRAY));
        assert_eq!(named_color("rebeccapurple-ish"), None);
    }

    #[test]
    fn direction_table() {
        assert_eq!(direction_angle("bottom"), Some(Angle::deg(180.0)));
        assert_eq!(direction_angle("left top"), Some(Angle::deg(315.0)));
        assert_eq!(direction_angle("top left"), None);
        assert!(is_vertical_side("Top"));
        assert!(!is_vertical_side("left"));
    }
}
