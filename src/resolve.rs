//! Key resolution: statically evaluating a call argument to candidate keys.
//!
//! [`resolve_keys`] is a pure recursive function over an expression node.
//! It returns the ordered sequence of keys the expression could evaluate
//! to, where `Some("*")` means "a key is extracted here but its literal
//! value cannot be known statically" and `None` means "no extractable key"
//! (callers filter `None` out before emitting records).
//!
//! Resolution never fails: unsupported shapes degrade to `None` with a
//! warning, so one unresolvable argument cannot abort a scan.

use std::fmt;

use swc_ecma_ast::{BinaryOp, Expr, Lit};

/// Sentinel key meaning "statically unknown, any key possible".
pub const WILDCARD: &str = "*";

/// Non-fatal diagnostics produced during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveWarning {
    /// Both sides of a `+` concatenation are resolved independently; when
    /// either side is multi-valued only the first candidate of each side
    /// is used. Known approximation, kept on purpose.
    MultipleKeysInConcat,
    /// A logical operator other than `&&`/`||` (i.e. `??`).
    UnsupportedLogicalOperator(String),
    /// An expression shape resolution knows nothing about.
    UnsupportedNode(String),
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveWarning::MultipleKeysInConcat => {
                write!(f, "unsupported multiple keys for binary expression, keys skipped")
            }
            ResolveWarning::UnsupportedLogicalOperator(op) => {
                write!(f, "unsupported logical operator: {}", op)
            }
            ResolveWarning::UnsupportedNode(name) => {
                write!(f, "unsupported node: {}", name)
            }
        }
    }
}

/// Unwrap parentheses and TypeScript type assertions.
/// Handles: `(expr)`, `expr as T`, `expr as const`, `expr satisfies T`
pub fn unwrap_paren(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_paren(&paren.expr),
        Expr::TsAs(ts_as) => unwrap_paren(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_paren(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_paren(&ts_sat.expr),
        _ => expr,
    }
}

/// Resolve an argument expression to its candidate keys.
///
/// Dispatch by node shape:
/// - string literal → that value
/// - `a + b` → first candidate of each side, concatenated (with a warning
///   when either side is multi-valued; never a cross product)
/// - template literal → static text segments joined by `"*"`
/// - `c ? a : b` → both branches, in order, no deduplication
/// - `a && b` → the right side only (the left is a guard, not a key)
/// - `a || b` → left then right
/// - call / identifier / member access → `["*"]`
/// - anything else, or an absent argument → `[None]`
pub fn resolve_keys(expr: Option<&Expr>, warnings: &mut Vec<ResolveWarning>) -> Vec<Option<String>> {
    let Some(expr) = expr else {
        return vec![None];
    };

    match unwrap_paren(expr) {
        Expr::Lit(Lit::Str(s)) => vec![Some(s.value.to_string_lossy().to_string())],

        Expr::Bin(bin) => match bin.op {
            BinaryOp::Add => {
                let left = resolve_keys(Some(&*bin.left), warnings);
                let right = resolve_keys(Some(&*bin.right), warnings);
                if left.len() > 1 || right.len() > 1 {
                    warnings.push(ResolveWarning::MultipleKeysInConcat);
                }
                // First-of-each, not a cross product.
                match (
                    left.into_iter().next().flatten(),
                    right.into_iter().next().flatten(),
                ) {
                    (Some(l), Some(r)) => vec![Some(format!("{}{}", l, r))],
                    _ => vec![None],
                }
            }
            BinaryOp::LogicalAnd => resolve_keys(Some(&*bin.right), warnings),
            BinaryOp::LogicalOr => {
                let mut keys = resolve_keys(Some(&*bin.left), warnings);
                keys.extend(resolve_keys(Some(&*bin.right), warnings));
                keys
            }
            BinaryOp::NullishCoalescing => {
                warnings.push(ResolveWarning::UnsupportedLogicalOperator("??".to_string()));
                vec![None]
            }
            _ => {
                warnings.push(ResolveWarning::UnsupportedNode(
                    "BinaryExpression".to_string(),
                ));
                vec![None]
            }
        },

        Expr::Tpl(tpl) => {
            let joined = tpl
                .quasis
                .iter()
                .map(|quasi| {
                    quasi
                        .cooked
                        .as_ref()
                        .map(|cooked| cooked.to_string_lossy().to_string())
                        .unwrap_or_else(|| quasi.raw.to_string())
                })
                .collect::<Vec<_>>()
                .join(WILDCARD);
            vec![Some(joined)]
        }

        Expr::Cond(cond) => {
            let mut keys = resolve_keys(Some(&*cond.cons), warnings);
            keys.extend(resolve_keys(Some(&*cond.alt), warnings));
            keys
        }

        // Dynamic values: a key is extracted, its literal value is unknown.
        Expr::Call(_) | Expr::Ident(_) | Expr::Member(_) => vec![Some(WILDCARD.to_string())],

        other => {
            warnings.push(ResolveWarning::UnsupportedNode(expr_name(other).to_string()));
            vec![None]
        }
    }
}

/// Babel-style node name for warning messages.
fn expr_name(expr: &Expr) -> &'static str {
    match expr {
        Expr::Array(_) => "ArrayExpression",
        Expr::Object(_) => "ObjectExpression",
        Expr::Fn(_) => "FunctionExpression",
        Expr::Arrow(_) => "ArrowFunctionExpression",
        Expr::Unary(_) => "UnaryExpression",
        Expr::Update(_) => "UpdateExpression",
        Expr::Assign(_) => "AssignmentExpression",
        Expr::Bin(_) => "BinaryExpression",
        Expr::New(_) => "NewExpression",
        Expr::Seq(_) => "SequenceExpression",
        Expr::TaggedTpl(_) => "TaggedTemplateExpression",
        Expr::Await(_) => "AwaitExpression",
        Expr::Yield(_) => "YieldExpression",
        Expr::OptChain(_) => "OptionalChainExpression",
        Expr::Lit(Lit::Num(_)) => "NumericLiteral",
        Expr::Lit(Lit::Bool(_)) => "BooleanLiteral",
        Expr::Lit(Lit::Null(_)) => "NullLiteral",
        Expr::Lit(Lit::BigInt(_)) => "BigIntLiteral",
        Expr::Lit(Lit::Regex(_)) => "RegExpLiteral",
        _ => "Expression",
    }
}
