//! Parser boundary: turning source text into an swc AST.
//!
//! The rest of the crate only consumes the parsed module, the source map
//! (for line lookups) and the collected comments; nothing outside this
//! module constructs a parser.

use swc_common::{FileName, SourceMap, comments::SingleThreadedComments};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::error::ExtractError;
use crate::options::Dialect;

/// A parsed source file plus everything needed to locate nodes in it.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: SourceMap,
    pub comments: SingleThreadedComments,
}

impl std::fmt::Debug for ParsedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedSource")
            .field("module", &self.module)
            .field("comments", &self.comments)
            .finish_non_exhaustive()
    }
}

/// Parse source text into an AST.
///
/// Parser rejection is propagated unchanged as
/// [`ExtractError::ParseFailure`]; nothing is recovered locally.
pub fn parse_source(code: &str, dialect: Dialect) -> Result<ParsedSource, ExtractError> {
    let source_map = SourceMap::default();
    let source_file = source_map.new_source_file(FileName::Anon.into(), code.to_string());

    let syntax = match dialect {
        Dialect::Ecmascript => Syntax::Es(EsSyntax {
            jsx: true,
            decorators: true,
            fn_bind: true,
            export_default_from: true,
            ..Default::default()
        }),
        Dialect::Typescript => Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        }),
    };

    let comments = SingleThreadedComments::default();
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));
    let module = parser
        .parse_module()
        .map_err(|e| ExtractError::ParseFailure(format!("{:?}", e)))?;

    Ok(ParsedSource {
        module,
        source_map,
        comments,
    })
}
