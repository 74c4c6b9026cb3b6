//! Pure conversion functions between hex strings, `Rgba` and `Hsla`.
//!
//! All functions are stateless. Rounding happens once, at the end of each
//! conversion: hue to whole degrees, saturation and lightness to two
//! decimals, RGB channels to the nearest integer.
//!
//! Hex input that fails validation is not an error here: it silently becomes
//! black. Callers that need strict behavior validate with
//! [`validate_hex`](crate::parse::validate_hex) first.

use crate::color::{clamp_unit, wrap_hue, Hsla, Rgba};
use crate::parse::validate_hex;

/// Parses a hex color into `Rgba` with alpha 1.0.
///
/// Accepts every form [`validate_hex`] does. Anything else yields black.
pub fn hex_to_rgba(hex: &str) -> Rgba {
    let Some(digits) = validate_hex(hex) else {
        log::debug!("malformed hex {hex:?}, falling back to #000000");
        return Rgba::BLACK;
    };
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
    Rgba {
        r: channel(0),
        g: channel(2),
        b: channel(4),
        a: 1.0,
    }
}

/// Parses a hex color straight into `Hsla`.
pub fn hex_to_hsla(hex: &str) -> Hsla {
    rgba_to_hsla(hex_to_rgba(hex))
}

/// Converts `Rgba` to `Hsla`.
///
/// Hue comes from the 60-degree sector of whichever channel is largest and is
/// 0 for achromatic colors. Saturation is 0 for grays and black but 1 for
/// white. Alpha passes through unchanged.
pub fn rgba_to_hsla(c: Rgba) -> Hsla {
    let r = c.r as f64 / 255.0;
    let g = c.g as f64 / 255.0;
    let b = c.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;
    let sum = max + min;

    let hue = if diff == 0.0 {
        0.0
    } else if max == r {
        (60.0 * (g - b) / diff).rem_euclid(360.0)
    } else if max == g {
        60.0 * (b - r) / diff + 120.0
    } else {
        60.0 * (r - g) / diff + 240.0
    };

    let lum = 0.5 * sum;

    // White reports full saturation, so darkening it lands on pure red.
    let sat = if lum == 1.0 {
        1.0
    } else if diff == 0.0 {
        0.0
    } else if lum <= 0.5 {
        diff / sum
    } else {
        diff / (2.0 - sum)
    };

    Hsla {
        h: wrap_hue(hue.round() as i32),
        s: round2(sat),
        l: round2(lum),
        a: c.a,
    }
}

/// Formats `Rgba` as `#rrggbb`. Alpha is dropped.
pub fn rgba_to_hex(c: Rgba) -> String {
    rgba_to_hex_with_prefix(c, true)
}

/// Formats `Rgba` as `rrggbb`, with a leading `#` when `prefix` is set.
pub fn rgba_to_hex_with_prefix(c: Rgba, prefix: bool) -> String {
    let hash = if prefix { "#" } else { "" };
    format!("{hash}{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Converts `Hsla` to `Rgba`.
///
/// Builds the chroma intermediates `p` and `q` from lightness and saturation,
/// then samples the hue a third of a turn either side for red and blue.
pub fn hsla_to_rgba(c: Hsla) -> Rgba {
    let hue = c.h as f64 / 360.0;
    let sat = clamp_unit(c.s);
    let lum = clamp_unit(c.l);

    let q = if lum <= 0.5 {
        lum * (1.0 + sat)
    } else {
        lum + sat - lum * sat
    };
    let p = 2.0 * lum - q;

    let channel = |t: f64| (hue_to_channel(p, q, t) * 255.0).round().clamp(0.0, 255.0) as u8;

    Rgba {
        r: channel(hue + 1.0 / 3.0),
        g: channel(hue),
        b: channel(hue - 1.0 / 3.0),
        a: c.a,
    }
}

/// Formats `Hsla` as `#rrggbb`.
pub fn hsla_to_hex(c: Hsla) -> String {
    rgba_to_hex(hsla_to_rgba(c))
}

/// Formats `Hsla` as `rrggbb`, with a leading `#` when `prefix` is set.
pub fn hsla_to_hex_with_prefix(c: Hsla, prefix: bool) -> String {
    rgba_to_hex_with_prefix(hsla_to_rgba(c), prefix)
}

/// Piecewise-linear ramp from `p` to `q` and back over one hue turn.
///
/// `t` is first wrapped into [0, 1]. Rises on [0, 1/6), holds at `q` on
/// [1/6, 1/2), falls on [1/2, 2/3) and stays at `p` elsewhere.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t * 6.0 < 1.0 {
        p + (q - p) * t * 6.0
    } else if t * 2.0 < 1.0 {
        q
    } else if t * 3.0 < 2.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
