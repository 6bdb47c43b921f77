//! Functions command - show the functions reflected from one or more files.

use super::load_ast;
use refract_driver::{Reflector, ReflectorConfig, SourceInput};
use refract_model::FileReflection;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(asts: &[PathBuf], source: Option<&Path>, json: bool, verbose: bool) -> miette::Result<()> {
    if source.is_some() && asts.len() > 1 {
        return Err(miette::miette!("--source can only be used with a single file"));
    }

    let source_text = source
        .map(|path| {
            fs::read_to_string(path)
                .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e))
        })
        .transpose()?;

    let mut inputs = Vec::with_capacity(asts.len());
    for path in asts {
        inputs.push(SourceInput {
            path: Some(path.display().to_string()),
            ast: load_ast(path)?,
            source: source_text.clone(),
        });
    }

    let reflector = Reflector::new(ReflectorConfig::from_env().with_verbose(verbose));
    let mut reflections = Vec::with_capacity(inputs.len());
    for (input, result) in inputs.iter().zip(reflector.reflect_all(&inputs)) {
        let label = input.path.as_deref().unwrap_or("<input>");
        reflections.push(result.map_err(|e| miette::miette!("{}: {}", label, e))?);
    }

    if json {
        let out = serde_json::to_string_pretty(&reflections)
            .map_err(|e| miette::miette!("Failed to serialize functions: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    let mut total = 0;
    for reflection in &reflections {
        print!("{}", render_file(reflection));
        total += reflection.function_count();
    }
    println!("\n{} function(s) in {} file(s)", total, reflections.len());
    Ok(())
}

fn render_file(reflection: &FileReflection) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}:",
        reflection.path.as_deref().unwrap_or("<input>")
    );
    for function in reflection.functions() {
        let _ = writeln!(out, "  {}  [line {}]", function.fqsen(), function.location());
        let _ = writeln!(out, "    {}", function.signature());
        if let Some(doc) = function.doc_block() {
            let summary = doc.summary();
            if !summary.is_empty() {
                let _ = writeln!(out, "    // {}", summary);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use refract_model::{Argument, DocBlock, Function, FunctionOptions};
    use refract_types::{Location, Type};

    #[test]
    fn test_render_file() {
        let mut reflection = FileReflection::new(Some("lib.php".into()));
        let options = FunctionOptions::default()
            .with_doc_block(DocBlock::new("/** Doubles a number. */", Location::new(2)))
            .at(Location::with_column(3, 10))
            .returning(Type::Integer);
        let mut double = Function::parse("\\Math\\double()", options).unwrap();
        double.add_argument(Argument::new("n").with_type(Type::Integer));
        reflection.add_function(double);
        reflection.add_function(Function::parse("\\Math\\noop()", FunctionOptions::default()).unwrap());

        assert_eq!(
            render_file(&reflection),
            "lib.php:\n\
             \x20 \\Math\\double()  [line 3:10]\n\
             \x20   double(int $n): int\n\
             \x20   // Doubles a number.\n\
             \x20 \\Math\\noop()  [line <unknown>]\n\
             \x20   noop(): mixed\n"
        );
    }
}
