//! # Refract AST
//!
//! Syntax tree nodes for the parts of a PHP file that the reflection
//! pipeline reads: namespace blocks, `use` imports and function
//! declarations.
//!
//! The tree is produced by an external parser. Everything else a PHP
//! statement can be is kept as an opaque [`StmtKind::Other`] node.
//! With the `serde` feature enabled the whole tree can be loaded from JSON.

mod span;
mod ast;

pub use span::{LineIndex, Span, Spanned};
pub use ast::*;
