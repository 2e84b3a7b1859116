use log::trace;
use relimport_core::ImportStatement;
use std::path::PathBuf;

use crate::{
    classify::{Classification, classify},
    depth::relative_depth,
    options::RuleOptions,
    resolver::{absolute_path, destination, project_root},
    types::{MESSAGE, Violation},
};

/// Decides, one import at a time, whether a path breaks the absolute-import
/// convention.
#[derive(Debug, Clone)]
pub struct Policy {
    options: RuleOptions,
    working_dir: PathBuf,
    root: PathBuf,
}

impl Policy {
    pub fn new(options: RuleOptions, working_dir: impl Into<PathBuf>) -> Self {
        let working_dir = working_dir.into();
        let root = project_root(&working_dir, &options.root_dir);
        Self { options, working_dir, root }
    }

    pub fn evaluate(&self, stmt: &ImportStatement) -> Option<Violation> {
        let raw = stmt.raw_path.as_str();
        let classification = classify(raw);

        let flagged = if self.is_checked_parent_folder(stmt, classification) {
            let depth = relative_depth(raw);
            trace!("'{}' climbs {} levels (allowed: {:?})", raw, depth, self.options.allowed_depth);
            self.options.allowed_depth.is_none_or(|allowed| depth > allowed)
        } else {
            classification == Classification::SameFolder && !self.options.allow_same_folder
        };

        if !flagged {
            return None;
        }

        let replacement = absolute_path(
            raw,
            &stmt.source_file,
            &self.working_dir,
            &self.options.root_dir,
            &self.options.paths,
        );
        if !is_usable_rewrite(&replacement) {
            trace!("No usable rewrite for '{}' (got '{}')", raw, replacement);
        }
        Some(Violation {
            statement: stmt.clone(),
            message: MESSAGE,
            replacement: Some(replacement).filter(|r| is_usable_rewrite(r)),
        })
    }

    /// Parent-folder imports only count when, with a `rootDir` set, both ends
    /// of the import stay inside the root.
    fn is_checked_parent_folder(&self, stmt: &ImportStatement, class: Classification) -> bool {
        if class != Classification::ParentFolder {
            return false;
        }
        if self.options.root_dir.is_empty() {
            return true;
        }

        let target = destination(&stmt.source_file, &stmt.raw_path);
        let inside = target.starts_with(&self.root) && stmt.source_file.starts_with(&self.root);
        if !inside {
            trace!("'{}' leaves {}, not checking depth", stmt.raw_path, self.root.display());
        }
        inside
    }
}

/// An empty rewrite or one that climbs out of the root would still be relative.
fn is_usable_rewrite(rewrite: &str) -> bool {
    !rewrite.is_empty() && rewrite != ".." && !rewrite.starts_with("../")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::AliasTable;
    use relimport_core::TextRange;

    fn stmt(raw: &str, source: &str) -> ImportStatement {
        ImportStatement {
            raw_path: raw.to_string(),
            source_file: PathBuf::from(source),
            range: TextRange::new(0, raw.len() as u32),
            line: 1,
            column: 1,
        }
    }

    fn policy(options: RuleOptions) -> Policy {
        Policy::new(options, "/proj")
    }

    #[test]
    fn test_parent_folder_flagged_without_allowed_depth() {
        let p = policy(RuleOptions::default());
        let v = p.evaluate(&stmt("../lib", "/proj/src/a/b.ts")).unwrap();
        assert_eq!(v.message, "Import statements should have an absolute path!");
        assert_eq!(v.replacement.as_deref(), Some("src/lib"));
    }

    #[test]
    fn test_depth_over_allowed_is_flagged() {
        let p = policy(RuleOptions { allowed_depth: Some(1), ..Default::default() });
        let v = p.evaluate(&stmt("../../lib", "/proj/src/a/b.ts")).unwrap();
        assert_eq!(v.replacement.as_deref(), Some("lib"));
    }

    #[test]
    fn test_depth_within_allowed_is_fine() {
        let p = policy(RuleOptions { allowed_depth: Some(1), ..Default::default() });
        assert!(p.evaluate(&stmt("../lib", "/proj/src/a/b.ts")).is_none());
    }

    #[test]
    fn test_allowed_depth_zero_flags_any_parent() {
        let p = policy(RuleOptions { allowed_depth: Some(0), ..Default::default() });
        assert!(p.evaluate(&stmt("../lib", "/proj/src/a/b.ts")).is_some());
        assert!(p.evaluate(&stmt("./lib", "/proj/src/a/b.ts")).is_some());
    }

    #[test]
    fn test_same_folder_flagged_by_default() {
        let p = policy(RuleOptions::default());
        let v = p.evaluate(&stmt("./sibling", "/proj/a/file.ts")).unwrap();
        assert_eq!(v.replacement.as_deref(), Some("a/sibling"));
    }

    #[test]
    fn test_same_folder_allowed() {
        let p = policy(RuleOptions { allow_same_folder: true, ..Default::default() });
        assert!(p.evaluate(&stmt("./sibling", "/proj/a/file.ts")).is_none());
        assert!(p.evaluate(&stmt("../up", "/proj/a/file.ts")).is_some());
    }

    #[test]
    fn test_other_paths_never_flagged() {
        let p = policy(RuleOptions::default());
        for raw in ["react", "@app/utils", "src/lib", "/abs/x", "", "..foo"] {
            assert!(p.evaluate(&stmt(raw, "/proj/src/a.ts")).is_none(), "{}", raw);
        }
    }

    #[test]
    fn test_alias_applied_to_replacement() {
        let paths: AliasTable = [("@app", "src/app"), ("@", "src")].into_iter().collect();
        let p = policy(RuleOptions { paths, ..Default::default() });
        let v = p.evaluate(&stmt("../utils", "/proj/src/app/views/a.ts")).unwrap();
        assert_eq!(v.replacement.as_deref(), Some("@app/utils"));
        let v = p.evaluate(&stmt("./b", "/proj/src/lib/a.ts")).unwrap();
        assert_eq!(v.replacement.as_deref(), Some("@/lib/b"));
    }

    #[test]
    fn test_root_dir_target_outside_root_not_flagged() {
        let p = policy(RuleOptions { root_dir: "src".to_string(), ..Default::default() });
        assert!(p.evaluate(&stmt("../../../outside", "/proj/src/a/b/file.ts")).is_none());
    }

    #[test]
    fn test_root_dir_source_outside_root_not_flagged() {
        let p = policy(RuleOptions { root_dir: "src".to_string(), ..Default::default() });
        assert!(p.evaluate(&stmt("../src/x", "/proj/scripts/build.ts")).is_none());
    }

    #[test]
    fn test_root_dir_inside_root_flagged() {
        let p = policy(RuleOptions { root_dir: "src".to_string(), ..Default::default() });
        let v = p.evaluate(&stmt("../../shared", "/proj/src/a/b/file.ts")).unwrap();
        assert_eq!(v.replacement.as_deref(), Some("shared"));
    }

    #[test]
    fn test_root_dir_destination_equal_to_root_is_inside() {
        let p = policy(RuleOptions { root_dir: "src".to_string(), ..Default::default() });
        let v = p.evaluate(&stmt("..", "/proj/src/a/index.ts")).unwrap();
        // The rewrite would be empty, so no replacement is offered
        assert_eq!(v.replacement, None);
    }

    #[test]
    fn test_root_dir_sibling_with_shared_prefix_is_outside() {
        let p = policy(RuleOptions { root_dir: "src".to_string(), ..Default::default() });
        assert!(p.evaluate(&stmt("../../src2/x", "/proj/src/a/file.ts")).is_none());
    }

    #[test]
    fn test_root_dir_does_not_gate_same_folder() {
        let p = policy(RuleOptions { root_dir: "src".to_string(), ..Default::default() });
        let v = p.evaluate(&stmt("./x", "/proj/src/a/file.ts")).unwrap();
        assert_eq!(v.replacement.as_deref(), Some("a/x"));
    }

    #[test]
    fn test_same_folder_outside_root_dir_has_no_replacement() {
        let p = policy(RuleOptions { root_dir: "src".to_string(), ..Default::default() });
        let v = p.evaluate(&stmt("./x", "/proj/scripts/build.ts")).unwrap();
        assert_eq!(v.message, MESSAGE);
        assert_eq!(v.replacement, None);
        assert!(v.fix().is_none());
    }

    #[test]
    fn test_parent_import_climbing_out_of_root_has_no_replacement() {
        let p = policy(RuleOptions { root_dir: "src/app".to_string(), ..Default::default() });
        let v = p.evaluate(&stmt("./..", "/proj/lib/a.ts"));
        // Gated out: classified as a parent import, never as same-folder
        assert!(v.is_none());
        let v = p.evaluate(&stmt("./y", "/proj/src/b.ts")).unwrap();
        assert_eq!(v.replacement, None);
    }

    #[test]
    fn test_usable_rewrite() {
        assert!(is_usable_rewrite("src/a"));
        assert!(is_usable_rewrite("..hidden/a"));
        assert!(!is_usable_rewrite(""));
        assert!(!is_usable_rewrite(".."));
        assert!(!is_usable_rewrite("../scripts/x"));
    }

    #[test]
    fn test_root_dir_with_allowed_depth() {
        let p = policy(RuleOptions {
            root_dir: "src".to_string(),
            allowed_depth: Some(1),
            ..Default::default()
        });
        assert!(p.evaluate(&stmt("../x", "/proj/src/a/file.ts")).is_none());
        assert!(p.evaluate(&stmt("../../x", "/proj/src/a/b/file.ts")).is_some());
    }
}
