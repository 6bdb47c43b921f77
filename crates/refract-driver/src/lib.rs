//! Reflection driver for Refract.
//!
//! This crate runs the reflection pipeline over parsed files:
//! 1. Split a file into namespace blocks
//! 2. Build the resolution context of each block
//! 3. Reflect every function declared in the block
//! 4. Collect the results into a [`FileReflection`]

mod builder;
mod config;

pub use builder::build_function;
pub use config::ReflectorConfig;

use rayon::prelude::*;
use refract_ast::{LineIndex, SourceFile, Span, Stmt, StmtKind};
use refract_model::FileReflection;
use refract_resolver::{build_block_context, build_context};
use refract_types::{FqsenError, ResolutionContext};
use thiserror::Error;

/// A reflection error.
#[derive(Debug, Clone, Error)]
pub enum ReflectError {
    #[error("cannot reflect `{name}`: {source}")]
    InvalidElement {
        name: String,
        span: Span,
        #[source]
        source: FqsenError,
    },
}

impl ReflectError {
    /// Get the span of the offending declaration.
    pub fn span(&self) -> Span {
        match self {
            ReflectError::InvalidElement { span, .. } => *span,
        }
    }
}

/// A parsed file queued for reflection.
#[derive(Debug, Clone)]
pub struct SourceInput {
    /// Path or label used in reports.
    pub path: Option<String>,
    pub ast: SourceFile,
    /// Original source text; without it locations stay unknown.
    pub source: Option<String>,
}

/// Reflects parsed files into in-memory element models.
#[derive(Debug, Clone, Default)]
pub struct Reflector {
    config: ReflectorConfig,
}

impl Reflector {
    /// Create a reflector with the given configuration.
    pub fn new(config: ReflectorConfig) -> Self {
        Self { config }
    }

    /// Get the active configuration.
    pub fn config(&self) -> &ReflectorConfig {
        &self.config
    }

    /// Reflect a single file.
    pub fn reflect(
        &self,
        path: Option<&str>,
        file: &SourceFile,
        source: Option<&str>,
    ) -> Result<FileReflection, ReflectError> {
        if self.config.verbose {
            tracing::info!(path = path.unwrap_or("<input>"), "reflecting");
        }

        let lines = source.map(LineIndex::new);
        let mut reflection = FileReflection::new(path.map(str::to_string));

        let has_namespaces = file
            .stmts
            .iter()
            .any(|stmt| matches!(stmt.node, StmtKind::Namespace(_)));

        if has_namespaces {
            for stmt in &file.stmts {
                match &stmt.node {
                    StmtKind::Namespace(namespace) => {
                        let ctx = build_context(Some(namespace));
                        self.reflect_block(
                            &namespace.stmts,
                            ctx,
                            lines.as_ref(),
                            &mut reflection,
                        )?;
                    }
                    StmtKind::Function(decl) => {
                        tracing::debug!(
                            name = %decl.name.node,
                            "function outside namespace blocks ignored"
                        );
                    }
                    _ => {}
                }
            }
        } else {
            // Code without namespace declarations lives in an unnamed block
            // whose imports still apply.
            let ctx = build_block_context(None, &file.stmts);
            self.reflect_block(&file.stmts, ctx, lines.as_ref(), &mut reflection)?;
        }

        tracing::debug!(
            functions = reflection.function_count(),
            namespaces = reflection.contexts().len(),
            "reflected file"
        );
        Ok(reflection)
    }

    /// Reflect several files in parallel. Results keep the input order.
    pub fn reflect_all(
        &self,
        inputs: &[SourceInput],
    ) -> Vec<Result<FileReflection, ReflectError>> {
        inputs
            .par_iter()
            .map(|input| {
                self.reflect(input.path.as_deref(), &input.ast, input.source.as_deref())
            })
            .collect()
    }

    fn reflect_block(
        &self,
        stmts: &[Stmt],
        ctx: ResolutionContext,
        lines: Option<&LineIndex>,
        reflection: &mut FileReflection,
    ) -> Result<(), ReflectError> {
        for stmt in stmts {
            let StmtKind::Function(decl) = &stmt.node else {
                continue;
            };
            match build_function(decl, &ctx, lines) {
                Ok(function) => {
                    reflection.add_function(function);
                }
                Err(error) if self.config.skip_invalid => {
                    tracing::warn!(
                        name = %decl.name.node,
                        namespace = ctx.namespace(),
                        %error,
                        "skipping function with invalid identity"
                    );
                }
                Err(source) => {
                    return Err(ReflectError::InvalidElement {
                        name: decl.name.node.to_string(),
                        span: stmt.span,
                        source,
                    });
                }
            }
        }
        reflection.add_context(ctx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refract_ast::{
        FunctionDecl, Name, Namespace, Param, Spanned, TypeHint, UseDecl, UseItem, UseKind,
    };
    use refract_types::{Fqsen, Type};

    fn stmt(kind: StmtKind) -> Stmt {
        Spanned::detached(kind)
    }

    fn use_stmt(name: &str) -> Stmt {
        stmt(StmtKind::Use(UseDecl::Plain {
            kind: UseKind::Normal,
            items: vec![UseItem::new(Name::parse(name))],
        }))
    }

    fn function(name: &str, param_type: &str) -> Stmt {
        let mut param = Param::new("value");
        param.ty = Some(TypeHint::named(param_type));
        let mut decl = FunctionDecl::new(name);
        decl.params.push(param);
        stmt(StmtKind::Function(decl))
    }

    fn namespace(name: &str, stmts: Vec<Stmt>) -> Stmt {
        stmt(StmtKind::Namespace(Namespace::new(Some(Name::parse(name)), stmts)))
    }

    fn file(stmts: Vec<Stmt>) -> SourceFile {
        SourceFile {
            stmts,
            span: Span::default(),
        }
    }

    fn fqsen(s: &str) -> Fqsen {
        Fqsen::new(s).unwrap()
    }

    #[test]
    fn test_global_file_uses_imports() {
        let ast = file(vec![
            use_stmt("Vendor\\Widget"),
            function("render", "Widget"),
            stmt(StmtKind::Other("echo".into())),
        ]);
        let reflection = Reflector::default().reflect(None, &ast, None).unwrap();

        assert_eq!(reflection.contexts().len(), 1);
        assert_eq!(reflection.contexts()[0].namespace(), "");
        let render = reflection.get(&fqsen("\\render()")).unwrap();
        assert_eq!(
            render.arguments()[0].ty(),
            &Type::object(fqsen("\\Vendor\\Widget"))
        );
    }

    #[test]
    fn test_global_file_matches_unnamed_block() {
        let stmts = vec![use_stmt("Vendor\\Widget"), function("render", "Widget")];
        let bare = Reflector::default().reflect(None, &file(stmts.clone()), None).unwrap();
        let wrapped = Reflector::default()
            .reflect(
                None,
                &file(vec![stmt(StmtKind::Namespace(Namespace::new(None, stmts)))]),
                None,
            )
            .unwrap();

        assert_eq!(bare.contexts(), wrapped.contexts());
        assert_eq!(
            bare.get(&fqsen("\\render()")).map(|f| f.arguments()[0].ty().clone()),
            wrapped.get(&fqsen("\\render()")).map(|f| f.arguments()[0].ty().clone())
        );
    }

    #[test]
    fn test_namespaces_resolve_independently() {
        let ast = file(vec![
            namespace("First", vec![use_stmt("Lib\\Item"), function("make", "Item")]),
            namespace("Second", vec![function("make", "Item")]),
        ]);
        let reflection = Reflector::default()
            .reflect(Some("two.php"), &ast, None)
            .unwrap();

        assert_eq!(reflection.path.as_deref(), Some("two.php"));
        assert_eq!(reflection.contexts().len(), 2);
        let first = reflection.get(&fqsen("\\First\\make()")).unwrap();
        assert_eq!(first.arguments()[0].ty(), &Type::object(fqsen("\\Lib\\Item")));
        let second = reflection.get(&fqsen("\\Second\\make()")).unwrap();
        assert_eq!(
            second.arguments()[0].ty(),
            &Type::object(fqsen("\\Second\\Item"))
        );
    }

    #[test]
    fn test_invalid_function_skipped_by_default() {
        let ast = file(vec![function("bad name", "int"), function("good", "int")]);
        let reflection = Reflector::default().reflect(None, &ast, None).unwrap();
        assert_eq!(reflection.function_count(), 1);
        assert!(reflection.get(&fqsen("\\good()")).is_some());
    }

    #[test]
    fn test_invalid_function_fails_when_strict() {
        let config = ReflectorConfig {
            skip_invalid: false,
            ..ReflectorConfig::default()
        };
        let mut bad = function("bad name", "int");
        bad.span = Span::new(10, 30);
        let ast = file(vec![bad]);

        let err = Reflector::new(config).reflect(None, &ast, None).unwrap_err();
        assert_eq!(err.span(), Span::new(10, 30));
        assert!(matches!(err, ReflectError::InvalidElement { ref name, .. } if name == "bad name"));
    }

    #[test]
    fn test_locations_need_source() {
        let source = "<?php\nfunction go() {}\n";
        let mut decl = FunctionDecl::new("go");
        decl.name.span = Span::new(15, 17);
        let ast = file(vec![stmt(StmtKind::Function(decl))]);

        let with_source = Reflector::default().reflect(None, &ast, Some(source)).unwrap();
        let go = with_source.get(&fqsen("\\go()")).unwrap();
        assert_eq!(go.location().line(), 2);
        assert_eq!(go.location().column(), Some(10));

        let without = Reflector::default().reflect(None, &ast, None).unwrap();
        assert!(!without.get(&fqsen("\\go()")).unwrap().location().is_known());
    }

    #[test]
    fn test_reflect_all_keeps_order() {
        let inputs: Vec<SourceInput> = (0..8)
            .map(|i| SourceInput {
                path: Some(format!("f{i}.php")),
                ast: file(vec![namespace(&format!("N{i}"), vec![function("f", "int")])]),
                source: None,
            })
            .collect();

        let results = Reflector::default().reflect_all(&inputs);
        assert_eq!(results.len(), 8);
        for (i, result) in results.into_iter().enumerate() {
            let reflection = result.unwrap();
            assert_eq!(reflection.path, Some(format!("f{i}.php")));
            assert!(reflection.get(&fqsen(&format!("\\N{i}\\f()"))).is_some());
        }
    }
}
