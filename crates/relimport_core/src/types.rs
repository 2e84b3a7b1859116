use std::path::PathBuf;

/// Byte offsets of an import path literal's contents, quotes excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextRange {
    pub start: u32,
    pub end: u32,
}

impl TextRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &TextRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A single `import ... from '...'` declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub raw_path: String,
    pub source_file: PathBuf,
    pub range: TextRange,
    /// 1-indexed line of the path literal
    pub line: usize,
    /// 1-indexed column of the path literal
    pub column: usize,
}

/// Import declarations of one file, plus how many parse errors oxc reported.
///
/// A file with parse errors may be missing declarations, so it should never be
/// rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedImports {
    pub imports: Vec<ImportStatement>,
    pub parse_errors: usize,
}

impl ParsedImports {
    pub fn has_errors(&self) -> bool {
        self.parse_errors > 0
    }
}
