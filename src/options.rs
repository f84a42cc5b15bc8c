//! Extraction options and parser dialect selection.

use std::str::FromStr;

use crate::error::ExtractError;

/// Which syntax extension the parser enables.
///
/// `Ecmascript` parses plain JavaScript with JSX; `Typescript` parses
/// TypeScript with TSX. The dialect only changes what the parser accepts,
/// never how keys are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Ecmascript,
    Typescript,
}

impl FromStr for Dialect {
    type Err = ExtractError;

    /// Parse a dialect name. Unknown names fail with
    /// [`ExtractError::InvalidOption`] before any source is parsed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ecmascript" | "es" | "jsx" => Ok(Self::Ecmascript),
            "typescript" | "ts" | "tsx" => Ok(Self::Typescript),
            other => Err(ExtractError::InvalidOption(format!(
                "unknown parser dialect \"{}\", expected \"ecmascript\" or \"typescript\"",
                other
            ))),
        }
    }
}

/// Options for [`extract`](crate::extract) and
/// [`extract_keys`](crate::extract_keys).
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Identifier or dotted member path identifying translation calls
    /// (e.g. `"i18n"` or `"i18n.t"`).
    pub marker: String,

    /// Argument index holding the key expression. Negative indices count
    /// from the end of the argument list.
    pub key_loc: isize,

    /// Argument index holding the optional companion "translate" value.
    /// Negative indices count from the end. Only used by rich-mode
    /// [`extract`](crate::extract).
    pub key_tr: isize,

    /// Parser dialect.
    pub dialect: Dialect,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            marker: "i18n".to_string(),
            key_loc: 0,
            key_tr: 2,
            dialect: Dialect::default(),
        }
    }
}
