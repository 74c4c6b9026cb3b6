#![deny(unsafe_code)]
//! Core color types and conversions for huewheel.
//!
//! Provides the `Rgba`/`Hsla` records, pure hex/RGB(A)/HSL(A) conversion
//! functions, the textual input parsers and CSS color names, and
//! `ColorHandle`, a stateful color whose manipulations (lighten, darken,
//! saturate, desaturate, grayscale, hue rotation, complement, invert) are
//! rendered back in the format the color was supplied in.

pub mod color;
pub mod convert;
pub mod error;
pub mod handle;
pub mod input;
pub mod names;
pub mod options;
pub mod parse;

pub use color::{Format, Hsla, Rendered, Rgba};
pub use error::PaletteError;
pub use handle::ColorHandle;
pub use input::ColorInput;
pub use options::RenderOptions;
