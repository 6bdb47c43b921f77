//! Name resolution for the Refract PHP reflection pipeline.
//!
//! This crate handles:
//! - Deriving the [`ResolutionContext`] of a namespace block from its
//!   `use` imports
//! - Resolving parameter and return type declarations against a context

mod types;

pub use types::resolve_type;

use refract_ast::{Name, Namespace, Stmt, StmtKind, UseDecl, UseItem};
use refract_types::{AliasMap, ResolutionContext};

/// Build the resolution context for a namespace block.
///
/// `None` stands for code outside any namespace declaration and yields the
/// empty global context. Only direct children of the block are scanned, and
/// only class-alike imports contribute aliases: `use function` and
/// `use const` do not take part in type resolution. When two imports share
/// an alias the later one wins.
pub fn build_context(namespace: Option<&Namespace>) -> ResolutionContext {
    match namespace {
        Some(namespace) => build_block_context(namespace.name.as_ref(), &namespace.stmts),
        None => ResolutionContext::global(),
    }
}

/// Build the resolution context of a block given its declared name and its
/// direct child statements.
///
/// Lets callers treat statements that are not wrapped in a [`Namespace`]
/// node, such as the top level of a file, as an unnamed block.
pub fn build_block_context(name: Option<&Name>, stmts: &[Stmt]) -> ResolutionContext {
    let name = name.map(|name| name.to_string()).unwrap_or_default();

    let mut aliases = AliasMap::new();
    for stmt in stmts {
        let StmtKind::Use(decl) = &stmt.node else {
            continue;
        };
        if !decl.kind().is_class_alike() {
            continue;
        }

        for item in decl.items() {
            let alias = item.effective_alias();
            let target = import_target(decl, item);
            tracing::trace!(namespace = %name, alias, target = %target, "import");
            if let Some(previous) = aliases.insert(alias, &target) {
                tracing::warn!(
                    namespace = %name,
                    alias,
                    previous = %previous,
                    target = %target,
                    "import alias redeclared, earlier target is no longer reachable"
                );
            }
        }
    }

    tracing::debug!(namespace = %name, aliases = aliases.len(), "built resolution context");
    ResolutionContext::new(name, aliases)
}

/// The fully qualified name an import item refers to.
fn import_target(decl: &UseDecl, item: &UseItem) -> String {
    match decl {
        UseDecl::Plain { .. } => item.name.to_string(),
        UseDecl::Group { prefix, .. } => format!("{}\\{}", prefix, item.name),
    }
}
