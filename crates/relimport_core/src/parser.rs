use anyhow::{Context, Result};
use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::{fs, path::Path};

use crate::types::{ImportStatement, ParsedImports, TextRange};

pub fn imports_for(file: &Path) -> Result<ParsedImports> {
    trace!("Parsing file for imports: {}", file.display());
    let src =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    Ok(imports_in_source(file, &src))
}

/// Collect the import declarations of `src`, attributing them to `file`.
///
/// Only static `import` declarations are returned. `require()`, `import()` and
/// `export ... from` are left alone.
pub fn imports_in_source(file: &Path, src: &str) -> ParsedImports {
    let st = source_type_for(file);
    let allocator = Allocator::default();
    let ParserReturn { program, errors, .. } = OxcParser::new(&allocator, src, st).parse();
    if !errors.is_empty() {
        debug!("{} parse errors in {}", errors.len(), file.display());
    }

    let mut imports = Vec::new();
    for stmt in &program.body {
        let Statement::ImportDeclaration(decl) = stmt else {
            continue;
        };
        let span = decl.source.span;
        // The literal's span covers its quotes
        let range = TextRange::new(span.start + 1, span.end.saturating_sub(1).max(span.start + 1));
        let (line, column) = line_column(src, range.start as usize);
        let raw_path = decl.source.value.to_string();
        trace!("Found import '{}' at {}:{}:{}", raw_path, file.display(), line, column);
        imports.push(ImportStatement {
            raw_path,
            source_file: file.to_path_buf(),
            range,
            line,
            column,
        });
    }

    debug!("Found {} import declarations in {}", imports.len(), file.display());
    ParsedImports { imports, parse_errors: errors.len() }
}

fn line_column(src: &str, offset: usize) -> (usize, usize) {
    let before = src.get(..offset).unwrap_or(src);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

fn source_type_for(path: &Path) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());

    // Import declarations only parse as a module
    SourceType::default()
        .with_jsx(matches!(ext, Some("tsx") | Some("jsx") | Some("js")))
        .with_typescript(matches!(ext, Some("ts") | Some("tsx") | Some("mts") | Some("cts")))
        .with_module(true)
}
