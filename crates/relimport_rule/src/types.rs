use relimport_core::{Fix, ImportStatement};
use std::path::PathBuf;

pub const MESSAGE: &str = "Import statements should have an absolute path!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub statement: ImportStatement,
    pub message: &'static str,
    /// Root-relative or aliased path to write between the quotes, when one exists
    pub replacement: Option<String>,
}

impl Violation {
    pub fn fix(&self) -> Option<Fix> {
        self.replacement
            .as_ref()
            .map(|replacement| Fix { range: self.statement.range, replacement: replacement.clone() })
    }
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Scan root the violations' files live under
    pub root: PathBuf,
    pub violations: Vec<Violation>,
    pub files_analyzed: usize,
    /// Number of import paths rewritten on disk (only with `--fix`)
    pub fixes_applied: usize,
}

impl CheckResult {
    /// Violations that are still present in the sources after this run.
    pub fn remaining(&self) -> usize {
        self.violations.len().saturating_sub(self.fixes_applied)
    }
}
