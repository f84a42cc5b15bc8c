//! Keyglean - static i18n key extraction for JavaScript and TypeScript
//!
//! Keyglean parses source text into an AST and scans it for calls to a
//! designated marker function (default `i18n(...)`), statically resolving
//! each call's key argument to the set of literal keys it could evaluate
//! to. Comment annotations can declare extra keys (`i18n-extract <key>`)
//! or suppress extraction for a line (`i18n-extract-disable-line`).
//!
//! ## Module Structure
//!
//! - `comments`: Comment scanner (declarations and line suppressions)
//! - `error`: Error taxonomy
//! - `extract`: Call-site resolver and public entry points
//! - `options`: Extraction options and parser dialect
//! - `parser`: swc parser boundary
//! - `resolve`: Key resolution over argument expressions
//! - `results`: Extraction record types
//! - `utils`: Shared utility functions

pub mod comments;
pub mod error;
pub mod extract;
pub mod options;
pub mod parser;
pub mod resolve;
pub mod results;
pub mod utils;

pub use error::ExtractError;
pub use extract::{extract, extract_keys};
pub use options::{Dialect, ExtractOptions};
pub use resolve::{ResolveWarning, WILDCARD, resolve_keys};
pub use results::{Extraction, Position, SourceSpan};
