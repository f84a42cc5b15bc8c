//! Extraction result types.

use serde::Serialize;
use swc_common::SourceMap;

/// A point in the source text. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// The source region an extraction was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSpan {
    pub start: Position,
    pub end: Position,
}

impl SourceSpan {
    pub(crate) fn from_swc(source_map: &SourceMap, span: swc_common::Span) -> Self {
        let lo = source_map.lookup_char_pos(span.lo);
        let hi = source_map.lookup_char_pos(span.hi);
        Self {
            start: Position {
                line: lo.line,
                column: lo.col_display + 1,
            },
            end: Position {
                line: hi.line,
                column: hi.col_display + 1,
            },
        }
    }
}

/// One extracted key occurrence.
///
/// Call-site records carry the span of the whole call expression and the
/// resolved companion `translate` value, if any. Comment-declared records
/// carry the span of the declaring comment and no `translate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// The resolved key, or `"*"` when the call site extracts a key whose
    /// literal value cannot be determined statically.
    pub key: String,

    /// First resolved value of the `key_tr` argument, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate: Option<String>,

    /// Where the key was found.
    pub loc: SourceSpan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_skips_absent_translate() {
        let record = Extraction {
            key: "greeting.hello".to_string(),
            translate: None,
            loc: SourceSpan {
                start: Position { line: 1, column: 1 },
                end: Position { line: 1, column: 20 },
            },
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["key"], "greeting.hello");
        assert!(json.get("translate").is_none());
        assert_eq!(json["loc"]["start"]["line"], 1);
    }

    #[test]
    fn test_serialize_keeps_present_translate() {
        let record = Extraction {
            key: "k".to_string(),
            translate: Some("Hello".to_string()),
            loc: SourceSpan {
                start: Position { line: 2, column: 1 },
                end: Position { line: 2, column: 9 },
            },
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["translate"], "Hello");
    }
}
