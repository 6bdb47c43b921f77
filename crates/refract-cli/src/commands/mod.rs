//! CLI command implementations.

pub mod context;
pub mod functions;

use refract_ast::SourceFile;
use std::fs;
use std::path::Path;

/// Load a syntax tree serialized as JSON.
pub fn load_ast(path: &Path) -> miette::Result<SourceFile> {
    let text = fs::read_to_string(path)
        .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&text)
        .map_err(|e| miette::miette!("Invalid syntax tree in {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_ast() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"stmts": [{{"node": {{"Function": {{"name": {{"node": "main"}}}}}}}}]}}"#
        )
        .unwrap();

        let ast = load_ast(file.path()).unwrap();
        assert_eq!(ast.stmts.len(), 1);
        assert!(matches!(ast.stmts[0].node, refract_ast::StmtKind::Function(_)));
    }

    #[test]
    fn test_load_ast_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load_ast(file.path()).is_err());
    }

    #[test]
    fn test_load_ast_missing_file() {
        assert!(load_ast(Path::new("/definitely/not/here.json")).is_err());
    }
}
