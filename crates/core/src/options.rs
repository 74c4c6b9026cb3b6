//! Rendering configuration for a [`ColorHandle`](crate::ColorHandle).

use crate::error::PaletteError;
use serde::{Deserialize, Serialize};

/// How a handle renders its results.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Prefix hex output with `#`.
    pub hex_prefix: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { hex_prefix: true }
    }
}

impl RenderOptions {
    /// Decodes options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, PaletteError> {
        serde_json::from_str(json).map_err(|e| PaletteError::InvalidOptions(e.to_string()))
    }
}
