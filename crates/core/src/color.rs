//! Color records for huewheel.
//!
//! Provides the two numeric records (`Rgba`, `Hsla`), the `Format` tag a
//! handle remembers, and the `Rgba`/`Hsla`/hex `Rendered` value returned by
//! every manipulation. Conversions between them live in [`crate::convert`].

use crate::error::PaletteError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Additive color with 8-bit channels and an opacity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// Hue/saturation/lightness with opacity.
///
/// This is the canonical representation every manipulation reads and
/// writes. `h` is a whole degree in [0, 360); `s`, `l` and `a` are in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: u16,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Rgba {
    /// Creates an opaque color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Black, fully opaque.
    pub const BLACK: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };
}

impl Hsla {
    /// Creates an opaque color. The hue is wrapped into [0, 360) and
    /// saturation/lightness are clamped into [0, 1].
    pub fn new(h: i32, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
            a: 1.0,
        }
    }

    /// Black, fully opaque.
    pub const BLACK: Hsla = Hsla {
        h: 0,
        s: 0.0,
        l: 0.0,
        a: 1.0,
    };
}

/// Wraps any whole-degree angle into [0, 360).
pub fn wrap_hue(degrees: i32) -> u16 {
    degrees.rem_euclid(360) as u16
}

/// Clamps a ratio into [0, 1]. NaN becomes 0.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Scales a unit ratio to a percentage rounded to two decimals.
fn percent(v: f64) -> f64 {
    (v * 10_000.0).round() / 100.0
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.h,
            percent(self.s),
            percent(self.l),
            self.a
        )
    }
}

/// The representation a color was supplied in, and is rendered back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Hex,
    Rgba,
    Hsla,
}

impl Format {
    /// Looks up a format by name (case insensitive). `rgb` and `hsl` are
    /// accepted as aliases.
    pub fn from_name(name: &str) -> Result<Self, PaletteError> {
        match name.to_ascii_lowercase().as_str() {
            "hex" => Ok(Format::Hex),
            "rgb" | "rgba" => Ok(Format::Rgba),
            "hsl" | "hsla" => Ok(Format::Hsla),
            _ => Err(PaletteError::InvalidFormat(name.to_string())),
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Rgba => "rgba",
            Format::Hsla => "hsla",
        }
    }

    /// All canonical format names.
    pub fn list_names() -> &'static [&'static str] {
        &["hex", "rgba", "hsla"]
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color rendered in one of the three formats.
///
/// Serializes untagged: a hex string, or an `{r, g, b, a}` / `{h, s, l, a}`
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rendered {
    Hex(String),
    Rgba(Rgba),
    Hsla(Hsla),
}

impl Rendered {
    /// The format this value was rendered in.
    pub fn format(&self) -> Format {
        match self {
            Rendered::Hex(_) => Format::Hex,
            Rendered::Rgba(_) => Format::Rgba,
            Rendered::Hsla(_) => Format::Hsla,
        }
    }

    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Rendered::Hex(hex) => Some(hex.as_str()),
            _ => None,
        }
    }

    pub fn as_rgba(&self) -> Option<Rgba> {
        match self {
            Rendered::Rgba(rgba) => Some(*rgba),
            _ => None,
        }
    }

    pub fn as_hsla(&self) -> Option<Hsla> {
        match self {
            Rendered::Hsla(hsla) => Some(*hsla),
            _ => None,
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Hex(hex) => f.write_str(hex),
            Rendered::Rgba(rgba) => fmt::Display::fmt(rgba, f),
            Rendered::Hsla(hsla) => fmt::Display::fmt(hsla, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Constructors --

    #[test]
    fn hsla_new_wraps_negative_hue() {
        let c = Hsla::new(-30, 0.5, 0.5);
        assert_eq!(c.h, 330);
    }

    #[test]
    fn hsla_new_wraps_hue_at_360() {
        assert_eq!(Hsla::new(360, 1.0, 0.5).h, 0);
        assert_eq!(Hsla::new(725, 1.0, 0.5).h, 5);
    }

    #[test]
    fn hsla_new_clamps_saturation_and_lightness() {
        let c = Hsla::new(0, 1.7, -0.2);
        assert_eq!(c.s, 1.0);
        assert_eq!(c.l, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn clamp_unit_maps_nan_to_zero() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }

    // -- Display --

    #[test]
    fn rgba_displays_as_css_function() {
        let c = Rgba {
            r: 0,
            g: 128,
            b: 255,
            a: 0.5,
        };
        assert_eq!(c.to_string(), "rgba(0, 128, 255, 0.5)");
    }

    #[test]
    fn hsla_displays_percentages() {
        let c = Hsla {
            h: 120,
            s: 1.0,
            l: 0.25,
            a: 1.0,
        };
        assert_eq!(c.to_string(), "hsla(120, 100%, 25%, 1)");
    }

    #[test]
    fn hsla_display_hides_float_noise() {
        let c = Hsla {
            h: 10,
            s: 0.07,
            l: 0.1 + 0.2,
            a: 1.0,
        };
        assert_eq!(c.to_string(), "hsla(10, 7%, 30%, 1)");
    }

    // -- Format --

    #[test]
    fn format_from_name_accepts_aliases() {
        assert_eq!(Format::from_name("hex").unwrap(), Format::Hex);
        assert_eq!(Format::from_name("RGB").unwrap(), Format::Rgba);
        assert_eq!(Format::from_name("rgba").unwrap(), Format::Rgba);
        assert_eq!(Format::from_name("hsl").unwrap(), Format::Hsla);
        assert_eq!(Format::from_name("HSLA").unwrap(), Format::Hsla);
    }

    #[test]
    fn format_from_name_rejects_unknown() {
        let err = Format::from_name("cmyk").unwrap_err();
        assert_eq!(err, PaletteError::InvalidFormat("cmyk".into()));
    }

    #[test]
    fn every_listed_name_parses_to_itself() {
        for name in Format::list_names() {
            let format = Format::from_name(name).unwrap();
            assert_eq!(format.name(), *name);
        }
    }

    #[test]
    fn format_serializes_lowercase() {
        let json = serde_json::to_string(&Format::Hsla).unwrap();
        assert_eq!(json, "\"hsla\"");
    }

    // -- Rendered --

    #[test]
    fn rendered_reports_its_format() {
        assert_eq!(Rendered::Hex("#000000".into()).format(), Format::Hex);
        assert_eq!(Rendered::Rgba(Rgba::BLACK).format(), Format::Rgba);
        assert_eq!(Rendered::Hsla(Hsla::BLACK).format(), Format::Hsla);
    }

    #[test]
    fn rendered_accessors_match_variant() {
        let hex = Rendered::Hex("#ff0000".into());
        assert_eq!(hex.as_hex(), Some("#ff0000"));
        assert_eq!(hex.as_rgba(), None);
        assert_eq!(hex.as_hsla(), None);
    }

    #[test]
    fn rendered_hex_serializes_as_plain_string() {
        let json = serde_json::to_string(&Rendered::Hex("#00ffff".into())).unwrap();
        assert_eq!(json, "\"#00ffff\"");
    }

    #[test]
    fn rendered_rgba_serializes_as_object() {
        let json = serde_json::to_value(Rendered::Rgba(Rgba::new(0, 255, 255))).unwrap();
        assert_eq!(json, serde_json::json!({"r": 0, "g": 255, "b": 255, "a": 1.0}));
    }

    #[test]
    fn rendered_deserializes_hsla_object() {
        let r: Rendered = serde_json::from_str(r#"{"h":120,"s":1.0,"l":0.5,"a":1.0}"#).unwrap();
        assert_eq!(
            r,
            Rendered::Hsla(Hsla {
                h: 120,
                s: 1.0,
                l: 0.5,
                a: 1.0
            })
        );
    }
}
