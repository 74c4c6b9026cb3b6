//! Textual color input: hex validation and the `rgb()`/`hsl()` function forms.
//!
//! These helpers turn strings into the numeric records the converter works
//! on. They never default: anything malformed is reported as
//! `PaletteError::InvalidColor`, except [`validate_hex`] which answers with
//! `None` so callers can try the next interpretation.

use crate::color::{wrap_hue, Hsla, Rgba};
use crate::error::PaletteError;

/// Validates a hex color and normalizes it to six lowercase digits without `#`.
///
/// Accepts `#rrggbb`, `#rgb`, `rrggbb` and `rgb` in any case. Three-digit forms
/// are expanded by doubling each digit (`f0a` becomes `ff00aa`).
pub fn validate_hex(input: &str) -> Option<String> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => Some(digits.to_ascii_lowercase()),
        3 => Some(
            digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_lowercase(),
        ),
        _ => None,
    }
}

/// Parses `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// The function name is case insensitive and whitespace anywhere is ignored.
/// Channels must be integers in 0..=255 and alpha a number in [0, 1]. A
/// missing alpha defaults to 1.0.
pub fn parse_rgba_string(input: &str) -> Result<Rgba, PaletteError> {
    let compact = compact(input);
    let (args, expected) = if let Some(args) = function_args(&compact, "rgba") {
        (args, 4)
    } else if let Some(args) = function_args(&compact, "rgb") {
        (args, 3)
    } else {
        return Err(invalid(input, "expected rgb(...) or rgba(...)"));
    };

    let parts: Vec<&str> = args.split(',').collect();
    if parts.len() != expected {
        return Err(invalid(
            input,
            &format!("expected {expected} components, got {}", parts.len()),
        ));
    }

    let channel = |s: &str, name: &str| {
        s.parse::<u8>()
            .map_err(|_| invalid(input, &format!("{name} must be an integer in 0..=255")))
    };
    let r = channel(parts[0], "red")?;
    let g = channel(parts[1], "green")?;
    let b = channel(parts[2], "blue")?;
    let a = match parts.get(3) {
        Some(a) => parse_alpha(a, input)?,
        None => 1.0,
    };

    Ok(Rgba { r, g, b, a })
}

/// Parses `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
///
/// The hue is a whole number of degrees, wrapped into [0, 360). Saturation and
/// lightness are percentages in [0, 100] and are divided by 100. A missing
/// alpha defaults to 1.0.
pub fn parse_hsla_string(input: &str) -> Result<Hsla, PaletteError> {
    let compact = compact(input);
    let (args, expected) = if let Some(args) = function_args(&compact, "hsla") {
        (args, 4)
    } else if let Some(args) = function_args(&compact, "hsl") {
        (args, 3)
    } else {
        return Err(invalid(input, "expected hsl(...) or hsla(...)"));
    };

    let parts: Vec<&str> = args.split(',').collect();
    if parts.len() != expected {
        return Err(invalid(
            input,
            &format!("expected {expected} components, got {}", parts.len()),
        ));
    }

    let h = parts[0]
        .parse::<i32>()
        .map_err(|_| invalid(input, "hue must be a whole number of degrees"))?;
    let s = parse_percent(parts[1], "saturation", input)?;
    let l = parse_percent(parts[2], "lightness", input)?;
    let a = match parts.get(3) {
        Some(a) => parse_alpha(a, input)?,
        None => 1.0,
    };

    Ok(Hsla {
        h: wrap_hue(h),
        s,
        l,
        a,
    })
}

/// Strips all whitespace and lowercases.
fn compact(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Returns the text between `name(` and the closing `)`.
fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?.strip_prefix('(')?.strip_suffix(')')
}

fn parse_percent(s: &str, name: &str, input: &str) -> Result<f64, PaletteError> {
    let value = s
        .strip_suffix('%')
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| (0.0..=100.0).contains(v))
        .ok_or_else(|| invalid(input, &format!("{name} must be a percentage in 0%..=100%")))?;
    Ok(value / 100.0)
}

fn parse_alpha(s: &str, input: &str) -> Result<f64, PaletteError> {
    s.parse::<f64>()
        .ok()
        .filter(|a| (0.0..=1.0).contains(a))
        .ok_or_else(|| invalid(input, "alpha must be a number in [0, 1]"))
}

fn invalid(input: &str, reason: &str) -> PaletteError {
    PaletteError::InvalidColor(format!("{input:?}: {reason}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_hex --

    #[test]
    fn validate_hex_accepts_all_four_forms() {
        for input in ["#00ff00", "00ff00", "#0f0", "0f0"] {
            assert_eq!(validate_hex(input).as_deref(), Some("00ff00"), "{input}");
        }
    }

    #[test]
    fn validate_hex_expands_short_form_by_doubling() {
        assert_eq!(validate_hex("f0a").as_deref(), Some("ff00aa"));
    }

    #[test]
    fn validate_hex_lowercases() {
        assert_eq!(validate_hex("#C0FFEE").as_deref(), Some("c0ffee"));
        assert_eq!(validate_hex("ABC").as_deref(), Some("aabbcc"));
    }

    #[test]
    fn validate_hex_rejects_malformed() {
        for input in ["", "#", "#ff", "ffff", "#ff00ff00", "#gggggg", "##fff", "red", " fff"] {
            assert_eq!(validate_hex(input), None, "{input:?} should be rejected");
        }
    }

    // -- parse_rgba_string --

    #[test]
    fn parses_rgb_with_default_alpha() {
        let c = parse_rgba_string("rgb(0, 128, 255)").unwrap();
        assert_eq!(c, Rgba { r: 0, g: 128, b: 255, a: 1.0 });
    }

    #[test]
    fn parses_rgba_with_alpha() {
        let c = parse_rgba_string("rgba(10,20,30,0.25)").unwrap();
        assert_eq!(c, Rgba { r: 10, g: 20, b: 30, a: 0.25 });
    }

    #[test]
    fn rgba_parsing_ignores_whitespace_and_case() {
        let c = parse_rgba_string("  RGB ( 1 , 2 , 3 )  ").unwrap();
        assert_eq!(c, Rgba::new(1, 2, 3));
    }

    #[test]
    fn rgba_parsing_rejects_out_of_range_channel() {
        let err = parse_rgba_string("rgb(256, 0, 0)").unwrap_err();
        assert!(matches!(err, PaletteError::InvalidColor(msg) if msg.contains("red")));
        assert!(parse_rgba_string("rgb(-1, 0, 0)").is_err());
    }

    #[test]
    fn rgba_parsing_rejects_wrong_arity() {
        assert!(parse_rgba_string("rgb(1, 2)").is_err());
        assert!(parse_rgba_string("rgb(1, 2, 3, 0.5)").is_err());
        assert!(parse_rgba_string("rgba(1, 2, 3)").is_err());
    }

    #[test]
    fn rgba_parsing_rejects_bad_alpha() {
        assert!(parse_rgba_string("rgba(1, 2, 3, 1.5)").is_err());
        assert!(parse_rgba_string("rgba(1, 2, 3, x)").is_err());
        assert!(parse_rgba_string("rgba(1, 2, 3, NaN)").is_err());
    }

    #[test]
    fn rgba_parsing_requires_closing_paren() {
        assert!(parse_rgba_string("rgb(1, 2, 3").is_err());
        assert!(parse_rgba_string("rgb 1, 2, 3").is_err());
    }

    // -- parse_hsla_string --

    #[test]
    fn parses_hsl_and_divides_percentages() {
        let c = parse_hsla_string("hsl(120, 100%, 25%)").unwrap();
        assert_eq!(c, Hsla { h: 120, s: 1.0, l: 0.25, a: 1.0 });
    }

    #[test]
    fn parses_hsla_with_alpha() {
        let c = parse_hsla_string("HSLA(240,50%,50%,0.5)").unwrap();
        assert_eq!(c, Hsla { h: 240, s: 0.5, l: 0.5, a: 0.5 });
    }

    #[test]
    fn hsla_parsing_wraps_hue() {
        assert_eq!(parse_hsla_string("hsl(360, 0%, 0%)").unwrap().h, 0);
        assert_eq!(parse_hsla_string("hsl(-90, 0%, 0%)").unwrap().h, 270);
    }

    #[test]
    fn hsla_parsing_requires_percent_signs() {
        assert!(parse_hsla_string("hsl(120, 100, 50)").is_err());
    }

    #[test]
    fn hsla_parsing_rejects_out_of_range_percentages() {
        assert!(parse_hsla_string("hsl(120, 101%, 50%)").is_err());
        assert!(parse_hsla_string("hsl(120, 50%, -1%)").is_err());
    }

    #[test]
    fn hsla_parsing_rejects_fractional_hue() {
        assert!(parse_hsla_string("hsl(120.5, 50%, 50%)").is_err());
    }
}
