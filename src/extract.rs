//! Call-site resolver: finding marker calls and emitting extraction records.
//!
//! An AST visitor walks every call expression, decides whether the callee
//! matches the configured marker (bare identifier or dotted member path),
//! and resolves the designated argument positions via
//! [`resolve_keys`](crate::resolve::resolve_keys). Calls ending on an
//! ignored line are skipped entirely.

use std::collections::HashSet;

use colored::Colorize;
use swc_common::SourceMap;
use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Lit, MemberProp};
use swc_ecma_visit::{Visit, VisitWith};

use crate::comments::scan_comments;
use crate::error::ExtractError;
use crate::options::ExtractOptions;
use crate::parser::parse_source;
use crate::resolve::{ResolveWarning, resolve_keys, unwrap_paren};
use crate::results::{Extraction, SourceSpan};
use crate::utils::uniq;

/// Extract all key occurrences from source text.
///
/// Comment-declared records come first (in source order), followed by
/// call-site records in traversal order. Records are not deduplicated;
/// call-site records carry the resolved `translate` companion value when
/// the `key_tr` argument resolves to one.
pub fn extract(source: &str, options: &ExtractOptions) -> Result<Vec<Extraction>, ExtractError> {
    let parsed = parse_source(source, options.dialect)?;
    let scan = scan_comments(&parsed.comments, &parsed.source_map);

    let mut visitor = KeyVisitor::new(&parsed.source_map, options, scan.ignored_lines, true);
    parsed.module.visit_with(&mut visitor);
    log_warnings(&visitor.warnings);

    let mut records = scan.declared;
    records.extend(visitor.records);
    Ok(records)
}

/// Extract the deduplicated set of keys from source text.
///
/// Legacy mode: no comment annotations, no locations, no `translate`.
/// Keys keep first-occurrence order.
pub fn extract_keys(source: &str, options: &ExtractOptions) -> Result<Vec<String>, ExtractError> {
    let parsed = parse_source(source, options.dialect)?;

    let mut visitor = KeyVisitor::new(&parsed.source_map, options, HashSet::new(), false);
    parsed.module.visit_with(&mut visitor);
    log_warnings(&visitor.warnings);

    Ok(uniq(visitor.records.into_iter().map(|record| record.key)))
}

fn log_warnings(warnings: &[ResolveWarning]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".bold().yellow(), warning);
    }
}

/// Visits every call expression and collects extraction records.
struct KeyVisitor<'a> {
    source_map: &'a SourceMap,
    marker: &'a str,
    key_loc: isize,
    key_tr: isize,
    /// Lines on which extraction is suppressed (a call whose closing line
    /// is in this set is skipped).
    ignored_lines: HashSet<usize>,
    /// Whether to resolve the `key_tr` companion argument (rich mode).
    with_translate: bool,

    records: Vec<Extraction>,
    warnings: Vec<ResolveWarning>,
}

impl<'a> KeyVisitor<'a> {
    fn new(
        source_map: &'a SourceMap,
        options: &'a ExtractOptions,
        ignored_lines: HashSet<usize>,
        with_translate: bool,
    ) -> Self {
        Self {
            source_map,
            marker: &options.marker,
            key_loc: options.key_loc,
            key_tr: options.key_tr,
            ignored_lines,
            with_translate,
            records: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn check_call(&mut self, node: &CallExpr) {
        let end_line = self.source_map.lookup_char_pos(node.span.hi).line;
        if self.ignored_lines.contains(&end_line) {
            return;
        }

        // super() and import() can never be marker calls.
        let Callee::Expr(callee) = &node.callee else {
            return;
        };
        if !self.is_marker(callee) {
            return;
        }

        let keys = self.resolve_arg(&node.args, self.key_loc);
        let translate = if self.with_translate {
            self.resolve_arg(&node.args, self.key_tr)
                .into_iter()
                .next()
                .flatten()
        } else {
            None
        };

        let loc = SourceSpan::from_swc(self.source_map, node.span);
        for key in keys.into_iter().flatten() {
            self.records.push(Extraction {
                key,
                translate: translate.clone(),
                loc: loc.clone(),
            });
        }
    }

    fn is_marker(&self, callee: &Expr) -> bool {
        match unwrap_paren(callee) {
            Expr::Ident(ident) => ident.sym.as_str() == self.marker,
            expr @ Expr::Member(_) => member_path(expr).is_some_and(|path| path == self.marker),
            _ => false,
        }
    }

    /// Resolve the argument at `index` (negative counts from the end).
    /// An out-of-range index resolves like an absent node.
    fn resolve_arg(&mut self, args: &[ExprOrSpread], index: isize) -> Vec<Option<String>> {
        let index = if index < 0 {
            args.len() as isize + index
        } else {
            index
        };
        let arg = usize::try_from(index).ok().and_then(|i| args.get(i));

        match arg {
            Some(arg) if arg.spread.is_some() => {
                self.warnings
                    .push(ResolveWarning::UnsupportedNode("SpreadElement".to_string()));
                vec![None]
            }
            Some(arg) => resolve_keys(Some(&*arg.expr), &mut self.warnings),
            None => resolve_keys(None, &mut self.warnings),
        }
    }
}

impl Visit for KeyVisitor<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.check_call(node);
        node.visit_children_with(self);
    }
}

/// Flatten a callee into its dotted path, e.g. `i18n.t` or `this.i18n`.
///
/// Computed access with a string literal (`i18n["t"]`) counts as a normal
/// segment. Anything dynamic yields `None`, which never matches a marker.
fn member_path(expr: &Expr) -> Option<String> {
    match unwrap_paren(expr) {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::This(_) => Some("this".to_string()),
        Expr::Member(member) => {
            let obj = member_path(&member.obj)?;
            let prop = match &member.prop {
                MemberProp::Ident(ident) => ident.sym.to_string(),
                MemberProp::Computed(computed) => match unwrap_paren(&computed.expr) {
                    Expr::Lit(Lit::Str(s)) => s.value.to_string_lossy().to_string(),
                    _ => return None,
                },
                MemberProp::PrivateName(_) => return None,
            };
            Some(format!("{}.{}", obj, prop))
        }
        _ => None,
    }
}
