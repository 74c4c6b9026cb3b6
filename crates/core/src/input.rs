//! The closed set of input shapes a [`ColorHandle`](crate::ColorHandle) accepts.
//!
//! Every shape is normalized to an `Hsla` plus the `Format` the caller used,
//! so results can be rendered back in the same vocabulary.

use crate::color::{Format, Hsla, Rgba};
use crate::convert::{hex_to_hsla, rgba_to_hsla};
use crate::error::PaletteError;
use crate::names::lookup_named_color;
use crate::parse::{parse_hsla_string, parse_rgba_string, validate_hex};

/// A color as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// No color: black, rendered as hex.
    Default,
    /// Three numeric channels, opaque.
    Rgb(u8, u8, u8),
    /// Three numeric channels and an alpha in [0, 1].
    Rgba(u8, u8, u8, f64),
    /// A hex string, `rgb()`/`rgba()` string, `hsl()`/`hsla()` string or a
    /// CSS color name, tried in that order.
    Text(String),
}

impl ColorInput {
    /// Validates the input and converts it to `Hsla`, reporting the format
    /// it was given in.
    pub fn resolve(&self) -> Result<(Hsla, Format), PaletteError> {
        match self {
            ColorInput::Default => Ok((Hsla::BLACK, Format::Hex)),
            ColorInput::Rgb(r, g, b) => Ok((rgba_to_hsla(Rgba::new(*r, *g, *b)), Format::Rgba)),
            ColorInput::Rgba(r, g, b, a) => {
                if !(0.0..=1.0).contains(a) {
                    return Err(PaletteError::InvalidColor(format!(
                        "alpha must be in [0, 1], got {a}"
                    )));
                }
                let rgba = Rgba {
                    r: *r,
                    g: *g,
                    b: *b,
                    a: *a,
                };
                Ok((rgba_to_hsla(rgba), Format::Rgba))
            }
            ColorInput::Text(text) => resolve_text(text),
        }
    }
}

fn resolve_text(text: &str) -> Result<(Hsla, Format), PaletteError> {
    if let Some(hex) = validate_hex(text) {
        return Ok((hex_to_hsla(&hex), Format::Hex));
    }

    let lower = text.trim_start().to_ascii_lowercase();
    if lower.starts_with("rgb") {
        return parse_rgba_string(text).map(|rgba| (rgba_to_hsla(rgba), Format::Rgba));
    }
    if lower.starts_with("hsl") {
        return parse_hsla_string(text).map(|hsla| (hsla, Format::Hsla));
    }

    match lookup_named_color(text) {
        Some(hex) => Ok((hex_to_hsla(hex), Format::Hex)),
        None => Err(PaletteError::InvalidColor(text.to_string())),
    }
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        ColorInput::Text(s.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        ColorInput::Text(s)
    }
}

impl From<(u8, u8, u8)> for ColorInput {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorInput::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, f64)> for ColorInput {
    fn from((r, g, b, a): (u8, u8, u8, f64)) -> Self {
        ColorInput::Rgba(r, g, b, a)
    }
}

impl From<Rgba> for ColorInput {
    fn from(c: Rgba) -> Self {
        ColorInput::Rgba(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsla(h: u16, s: f64, l: f64) -> Hsla {
        Hsla { h, s, l, a: 1.0 }
    }

    #[test]
    fn default_is_black_hex() {
        assert_eq!(
            ColorInput::Default.resolve().unwrap(),
            (Hsla::BLACK, Format::Hex)
        );
    }

    #[test]
    fn components_resolve_to_rgba_format() {
        let (c, format) = ColorInput::from((255, 0, 0)).resolve().unwrap();
        assert_eq!(c, hsla(0, 1.0, 0.5));
        assert_eq!(format, Format::Rgba);
    }

    #[test]
    fn four_components_keep_alpha() {
        let (c, format) = ColorInput::from((0, 0, 255, 0.5)).resolve().unwrap();
        assert_eq!(c.a, 0.5);
        assert_eq!(format, Format::Rgba);
    }

    #[test]
    fn out_of_range_alpha_is_rejected() {
        for a in [1.5, -0.1, f64::NAN] {
            let err = ColorInput::Rgba(0, 0, 0, a).resolve().unwrap_err();
            assert!(matches!(err, PaletteError::InvalidColor(_)), "{a}");
        }
    }

    #[test]
    fn hex_text_resolves_to_hex_format() {
        for text in ["#00ff00", "0f0"] {
            let (c, format) = ColorInput::from(text).resolve().unwrap();
            assert_eq!(c, hsla(120, 1.0, 0.5));
            assert_eq!(format, Format::Hex);
        }
    }

    #[test]
    fn rgb_function_resolves_to_rgba_format() {
        let (c, format) = ColorInput::from("rgba(0, 128, 0, 0.5)").resolve().unwrap();
        assert_eq!(c, Hsla { h: 120, s: 1.0, l: 0.25, a: 0.5 });
        assert_eq!(format, Format::Rgba);
    }

    #[test]
    fn hsl_function_resolves_to_hsla_format() {
        let (c, format) = ColorInput::from("hsl(180, 100%, 50%)").resolve().unwrap();
        assert_eq!(c, hsla(180, 1.0, 0.5));
        assert_eq!(format, Format::Hsla);
    }

    #[test]
    fn named_color_resolves_to_hex_format() {
        let (c, format) = ColorInput::from("green").resolve().unwrap();
        assert_eq!(c, hsla(120, 1.0, 0.25));
        assert_eq!(format, Format::Hex);
    }

    #[test]
    fn hex_wins_over_names_that_look_like_hex() {
        // "bad" is three hex digits, not a color name lookup.
        let (c, format) = ColorInput::from("bad").resolve().unwrap();
        assert_eq!(format, Format::Hex);
        assert_eq!(c, hex_to_hsla("#bbaadd"));
    }

    #[test]
    fn malformed_function_string_is_invalid_not_a_name_lookup() {
        let err = ColorInput::from("rgb(300, 0, 0)").resolve().unwrap_err();
        assert!(matches!(err, PaletteError::InvalidColor(_)));
    }

    #[test]
    fn unknown_text_is_invalid_color() {
        let err = ColorInput::from("notacolor").resolve().unwrap_err();
        assert_eq!(err, PaletteError::InvalidColor("notacolor".into()));
    }

    #[test]
    fn rgba_record_converts_to_components() {
        let input = ColorInput::from(Rgba::new(1, 2, 3));
        assert_eq!(input, ColorInput::Rgba(1, 2, 3, 1.0));
    }
}
