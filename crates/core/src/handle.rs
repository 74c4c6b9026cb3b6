//! A stateful color that remembers the format it was given in.
//!
//! [`ColorHandle`] stores one color as `Hsla` together with the [`Format`] it
//! was last set from. Every manipulation does two things: it writes the new
//! `Hsla` back to the handle, and it returns the result rendered in that
//! format. Supplying a color to an operation replaces the handle's color
//! before the operation runs.
//!
//! A handle that was never set behaves as black (`#000000`, hex format) the
//! first time it is used.

use crate::color::{clamp_unit, wrap_hue, Format, Hsla, Rendered, Rgba};
use crate::convert::{hsla_to_hex_with_prefix, hsla_to_rgba, rgba_to_hsla};
use crate::error::PaletteError;
use crate::input::ColorInput;
use crate::options::RenderOptions;

/// One mutable color plus the format its results are rendered in.
///
/// Mutation needs `&mut self`; share a handle across threads only behind a
/// lock.
#[derive(Debug, Clone, Default)]
pub struct ColorHandle {
    state: Option<State>,
    options: RenderOptions,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    hsla: Hsla,
    format: Format,
}

impl ColorHandle {
    /// Creates an empty handle with default render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty handle with the given render options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            state: None,
            options,
        }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// The current color, if one has been set or materialized.
    pub fn hsla(&self) -> Option<Hsla> {
        self.state.map(|s| s.hsla)
    }

    /// The format results are rendered in, if a color has been set.
    pub fn format(&self) -> Option<Format> {
        self.state.map(|s| s.format)
    }

    /// Replaces the handle's color.
    ///
    /// The input is fully validated before anything is written: on error the
    /// previous color and format are left as they were.
    pub fn set_color(&mut self, input: impl Into<ColorInput>) -> Result<&mut Self, PaletteError> {
        let (hsla, format) = input.into().resolve()?;
        log::trace!("set color {hsla} ({format})");
        self.state = Some(State { hsla, format });
        Ok(self)
    }

    /// Renders the current color without changing it.
    pub fn render(&mut self) -> Rendered {
        let state = self.current();
        self.render_as(state.hsla, state.format)
    }

    /// Renders the current color in `format`, leaving the remembered format
    /// alone.
    pub fn render_in(&mut self, format: Format) -> Rendered {
        let state = self.current();
        self.render_as(state.hsla, format)
    }

    /// Hue in whole degrees, [0, 360).
    pub fn hue(&mut self, color: Option<ColorInput>) -> Result<u16, PaletteError> {
        Ok(self.resolve(color)?.hsla.h)
    }

    /// Saturation in [0, 1].
    pub fn saturation(&mut self, color: Option<ColorInput>) -> Result<f64, PaletteError> {
        Ok(self.resolve(color)?.hsla.s)
    }

    /// Lightness in [0, 1].
    pub fn luminosity(&mut self, color: Option<ColorInput>) -> Result<f64, PaletteError> {
        Ok(self.resolve(color)?.hsla.l)
    }

    /// Rotates the hue by `degrees`, wrapping into [0, 360). Negative values
    /// rotate backwards.
    pub fn hue_rotate(
        &mut self,
        degrees: i32,
        color: Option<ColorInput>,
    ) -> Result<Rendered, PaletteError> {
        self.apply(color, |c| Hsla {
            h: rotate(c.h, degrees),
            ..c
        })
    }

    /// Raises lightness by `|amount|`, capped at 1.
    pub fn lighten(
        &mut self,
        amount: f64,
        color: Option<ColorInput>,
    ) -> Result<Rendered, PaletteError> {
        let amount = magnitude(amount);
        self.apply(color, |c| Hsla {
            l: clamp_unit(c.l + amount),
            ..c
        })
    }

    /// Lowers lightness by `|amount|`, floored at 0.
    pub fn darken(
        &mut self,
        amount: f64,
        color: Option<ColorInput>,
    ) -> Result<Rendered, PaletteError> {
        let amount = magnitude(amount);
        self.apply(color, |c| Hsla {
            l: clamp_unit(c.l - amount),
            ..c
        })
    }

    /// Raises saturation by `|amount|`, capped at 1.
    pub fn saturate(
        &mut self,
        amount: f64,
        color: Option<ColorInput>,
    ) -> Result<Rendered, PaletteError> {
        let amount = magnitude(amount);
        self.apply(color, |c| Hsla {
            s: clamp_unit(c.s + amount),
            ..c
        })
    }

    /// Lowers saturation by `|amount|`, floored at 0.
    pub fn desaturate(
        &mut self,
        amount: f64,
        color: Option<ColorInput>,
    ) -> Result<Rendered, PaletteError> {
        let amount = magnitude(amount);
        self.apply(color, |c| Hsla {
            s: clamp_unit(c.s - amount),
            ..c
        })
    }

    /// Removes all saturation. Same as `desaturate(1.0, color)`.
    pub fn grayscale(&mut self, color: Option<ColorInput>) -> Result<Rendered, PaletteError> {
        self.apply(color, |c| Hsla { s: 0.0, ..c })
    }

    /// Rotates the hue half a turn. Same as `hue_rotate(180, color)`.
    pub fn complement(&mut self, color: Option<ColorInput>) -> Result<Rendered, PaletteError> {
        self.apply(color, |c| Hsla {
            h: rotate(c.h, 180),
            ..c
        })
    }

    /// Replaces each RGB channel `x` with `255 - x`. Alpha is kept.
    pub fn invert(&mut self, color: Option<ColorInput>) -> Result<Rendered, PaletteError> {
        self.apply(color, |c| {
            let rgba = hsla_to_rgba(c);
            rgba_to_hsla(Rgba {
                r: 255 - rgba.r,
                g: 255 - rgba.g,
                b: 255 - rgba.b,
                a: rgba.a,
            })
        })
    }

    /// Resolves the color an operation works on, transforms it, stores the
    /// result and renders it.
    fn apply(
        &mut self,
        color: Option<ColorInput>,
        f: impl FnOnce(Hsla) -> Hsla,
    ) -> Result<Rendered, PaletteError> {
        let state = self.resolve(color)?;
        let next = f(state.hsla);
        log::trace!("{} -> {next}", state.hsla);
        self.state = Some(State {
            hsla: next,
            ..state
        });
        Ok(self.render_as(next, state.format))
    }

    /// Applies an optional color override, otherwise returns the current
    /// state (materializing black if there is none).
    fn resolve(&mut self, color: Option<ColorInput>) -> Result<State, PaletteError> {
        if let Some(input) = color {
            self.set_color(input)?;
        }
        Ok(self.current())
    }

    fn current(&mut self) -> State {
        *self.state.get_or_insert_with(|| {
            log::debug!("color handle used before a color was set, defaulting to black");
            State {
                hsla: Hsla::BLACK,
                format: Format::Hex,
            }
        })
    }

    fn render_as(&self, hsla: Hsla, format: Format) -> Rendered {
        match format {
            Format::Hex => Rendered::Hex(hsla_to_hex_with_prefix(hsla, self.options.hex_prefix)),
            Format::Rgba => Rendered::Rgba(hsla_to_rgba(hsla)),
            Format::Hsla => Rendered::Hsla(hsla),
        }
    }
}

fn rotate(h: u16, degrees: i32) -> u16 {
    wrap_hue(h as i32 + degrees.rem_euclid(360))
}

/// Amounts are magnitudes: the sign is ignored and NaN counts as zero.
fn magnitude(amount: f64) -> f64 {
    if amount.is_nan() {
        0.0
    } else {
        amount.abs()
    }
}
