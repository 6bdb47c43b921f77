//! Context command - show the resolution context of every namespace block.

use super::load_ast;
use refract_driver::Reflector;
use refract_types::ResolutionContext;
use std::fmt::Write;
use std::path::Path;

pub fn run(ast: &Path, json: bool) -> miette::Result<()> {
    let file = load_ast(ast)?;
    let path = ast.display().to_string();
    let reflection = Reflector::default()
        .reflect(Some(&path), &file, None)
        .map_err(|e| miette::miette!("{}: {}", path, e))?;

    if json {
        let out = serde_json::to_string_pretty(reflection.contexts())
            .map_err(|e| miette::miette!("Failed to serialize contexts: {}", e))?;
        println!("{}", out);
    } else {
        for ctx in reflection.contexts() {
            print!("{}", render_context(ctx));
        }
    }
    Ok(())
}

fn render_context(ctx: &ResolutionContext) -> String {
    let mut out = String::new();
    let namespace = if ctx.is_global() { "<global>" } else { ctx.namespace() };
    let _ = writeln!(out, "namespace {}", namespace);
    if ctx.aliases().is_empty() {
        let _ = writeln!(out, "  (no imports)");
    }
    for (alias, target) in ctx.aliases().iter() {
        if target.rsplit('\\').next() == Some(alias) {
            let _ = writeln!(out, "  use {}", target);
        } else {
            let _ = writeln!(out, "  use {} as {}", target, alias);
        }
    }
    out
}
