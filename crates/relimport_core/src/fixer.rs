use anyhow::{Context, Result};
use log::{debug, trace, warn};
use std::{fs, path::Path};

use crate::types::TextRange;

/// Replace the text in `range` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub range: TextRange,
    pub replacement: String,
}

/// Apply `fixes` to `source`, returning the new text and how many fixes applied.
///
/// Fixes are applied back to front so earlier offsets stay valid. A fix that
/// overlaps one already applied, or that falls outside the text, is skipped.
pub fn apply_fixes(source: &str, fixes: &[Fix]) -> (String, usize) {
    let mut ordered: Vec<&Fix> = fixes.iter().collect();
    ordered.sort_by(|a, b| b.range.cmp(&a.range));

    let mut out = source.to_string();
    let mut applied: Vec<TextRange> = Vec::new();
    for fix in ordered {
        let (start, end) = (fix.range.start as usize, fix.range.end as usize);
        if start > end || !out.is_char_boundary(start) || !out.is_char_boundary(end) {
            warn!("Skipping fix with invalid range {}..{}", start, end);
            continue;
        }
        if end > source.len() || applied.iter().any(|r| r.overlaps(&fix.range)) {
            trace!("Skipping overlapping fix at {}..{}", start, end);
            continue;
        }
        out.replace_range(start..end, &fix.replacement);
        applied.push(fix.range);
    }

    (out, applied.len())
}

/// Apply `fixes` to `file` in place. The file is only written when something changed.
pub fn write_fixes(file: &Path, fixes: &[Fix]) -> Result<usize> {
    let source =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let (fixed, count) = apply_fixes(&source, fixes);
    if count > 0 && fixed != source {
        fs::write(file, fixed).with_context(|| format!("Failed to write {}", file.display()))?;
        debug!("Applied {} fixes to {}", count, file.display());
    }
    Ok(count)
}
