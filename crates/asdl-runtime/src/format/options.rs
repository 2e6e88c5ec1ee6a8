use serde::Deserialize;

use super::output::ColorChoice;
use crate::error::Error;

/// Options for [`Printer`](super::Printer).
///
/// Can be loaded from TOML; absent keys keep their defaults:
///
/// ```
/// use asdl_runtime::FormatOptions;
///
/// let opts = FormatOptions::from_toml_str("max_col = 40").unwrap();
/// assert_eq!(opts.max_col, 40);
/// assert_eq!(opts.indent, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Column budget. A record or list wider than this is broken across
    /// lines. Default is 80.
    pub max_col: usize,
    /// Spaces per indentation level. Default is 2.
    pub indent: usize,
    /// Whether [`output_for`](super::output::output_for) adds colour.
    pub color: ColorChoice,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_col: 80,
            indent: 2,
            color: ColorChoice::Auto,
        }
    }
}

impl FormatOptions {
    /// Defaults, never coloured.
    pub fn plain() -> Self {
        Self {
            color: ColorChoice::Never,
            ..Self::default()
        }
    }

    pub fn with_max_col(mut self, max_col: usize) -> Self {
        self.max_col = max_col;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }
}
