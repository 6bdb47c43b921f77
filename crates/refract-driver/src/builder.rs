//! Assembles reflected functions from declarations.

use refract_ast::{FunctionDecl, LineIndex, Param, Span};
use refract_model::{Argument, DocBlock, Function, FunctionOptions};
use refract_resolver::resolve_type;
use refract_types::{FqsenError, Location, ResolutionContext, Type};

/// Build the reflected [`Function`] for a declaration found in the
/// namespace described by `ctx`.
///
/// Positions are only known when `lines` indexes the original source.
pub fn build_function(
    decl: &FunctionDecl,
    ctx: &ResolutionContext,
    lines: Option<&LineIndex>,
) -> Result<Function, FqsenError> {
    let fqsen = format!("{}()", ctx.in_namespace(&decl.name));

    let return_type = match &decl.return_ty {
        Some(hint) => resolve_type(hint, ctx)?,
        None => Type::Mixed,
    };
    let doc_block = decl
        .doc_comment
        .as_ref()
        .map(|doc| DocBlock::new(doc.node.clone(), locate(doc.span, lines)));

    let options = FunctionOptions {
        doc_block,
        location: locate(decl.name.span, lines),
        return_type,
    };
    let mut function = Function::parse(&fqsen, options)?;
    for param in &decl.params {
        function.add_argument(build_argument(param, ctx)?);
    }

    tracing::trace!(
        fqsen = %function.fqsen(),
        arguments = function.arguments().len(),
        "built function"
    );
    Ok(function)
}

fn build_argument(param: &Param, ctx: &ResolutionContext) -> Result<Argument, FqsenError> {
    let mut argument = Argument::new(param.name.node.clone());
    if let Some(hint) = &param.ty {
        argument = argument.with_type(resolve_type(hint, ctx)?);
    }
    if let Some(default) = &param.default {
        argument = argument.with_default(default.clone());
    }
    if param.by_ref {
        argument = argument.by_reference();
    }
    if param.variadic {
        argument = argument.variadic();
    }
    Ok(argument)
}

fn locate(span: Span, lines: Option<&LineIndex>) -> Location {
    lines
        .and_then(|lines| lines.line_col(span.start))
        .map(|(line, col)| Location::with_column(line as i32, col as i32))
        .unwrap_or_default()
}
