//! Comment scanner: key declarations and line suppressions.
//!
//! Two annotation patterns are recognized in comment text:
//! - `i18n-extract <key>` declares a literal key (the captured text is
//!   trimmed and used verbatim);
//! - `i18n-extract-disable-line` suppresses extraction for any marker call
//!   ending on the comment's line.
//!
//! Comments matching neither pattern are ignored silently.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use swc_common::SourceMap;
use swc_common::comments::{Comment, SingleThreadedComments};

use crate::results::{Extraction, SourceSpan};

static DECLARED_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"i18n-extract (.+)").unwrap());

const DISABLE_LINE_MARKER: &str = "i18n-extract-disable-line";

/// Output of scanning all comments of a parsed file.
#[derive(Debug, Default)]
pub struct CommentScan {
    /// Keys declared via `i18n-extract <key>` comments, in source order.
    pub declared: Vec<Extraction>,
    /// Start lines of `i18n-extract-disable-line` comments.
    pub ignored_lines: HashSet<usize>,
}

/// Scan all comments collected during parsing.
///
/// Both patterns are checked independently on every comment, so a single
/// comment can in principle contribute to both outputs.
pub fn scan_comments(comments: &SingleThreadedComments, source_map: &SourceMap) -> CommentScan {
    let (leading, trailing) = comments.borrow_all();
    let mut all: Vec<Comment> = leading
        .iter()
        .chain(trailing.iter())
        .flat_map(|(_, cmts)| cmts.iter().cloned())
        .collect();
    all.sort_by_key(|cmt| cmt.span.lo);
    all.dedup_by_key(|cmt| cmt.span.lo);

    let mut scan = CommentScan::default();
    for cmt in all {
        if let Some(captures) = DECLARED_KEY_REGEX.captures(&cmt.text)
            && let Some(key) = captures.get(1)
        {
            scan.declared.push(Extraction {
                key: key.as_str().trim().to_string(),
                translate: None,
                loc: SourceSpan::from_swc(source_map, cmt.span),
            });
        }

        if cmt.text.contains(DISABLE_LINE_MARKER) {
            let line = source_map.lookup_char_pos(cmt.span.lo).line;
            scan.ignored_lines.insert(line);
        }
    }
    scan
}
