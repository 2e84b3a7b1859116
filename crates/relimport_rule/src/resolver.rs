use log::trace;
use path_clean::clean;
use std::path::{Component, Path, PathBuf};

use crate::options::AliasTable;

/// File an import points at: the importing file's directory joined with the
/// raw path, with `.` and `..` folded away lexically.
pub fn destination(source_file: &Path, raw_path: &str) -> PathBuf {
    let dir = source_file.parent().unwrap_or_else(|| Path::new(""));
    clean(dir.join(raw_path))
}

/// Directory rewritten imports are expressed against.
pub fn project_root(working_dir: &Path, root_dir: &str) -> PathBuf {
    clean(working_dir.join(root_dir))
}

/// Rewrites `raw_path` (relative to `source_file`) as a root-relative path,
/// then swaps in the first alias whose target prefixes it.
///
/// ```
/// use relimport_rule::{AliasTable, absolute_path};
/// use std::path::Path;
///
/// let aliases: AliasTable = [("@app", "src/app"), ("@", "src")].into_iter().collect();
/// let rewritten =
///     absolute_path("../utils", Path::new("/proj/src/app/views/a.ts"), Path::new("/proj"), "", &aliases);
/// assert_eq!(rewritten, "@app/utils");
/// ```
pub fn absolute_path(
    raw_path: &str,
    source_file: &Path,
    working_dir: &Path,
    root_dir: &str,
    aliases: &AliasTable,
) -> String {
    let target = destination(source_file, raw_path);
    let root = project_root(working_dir, root_dir);
    let root_relative = to_slash_path(&relative_to(&target, &root));
    trace!("'{}' from {} is '{}' under the root", raw_path, source_file.display(), root_relative);

    for entry in aliases.iter() {
        if let Some(rest) = root_relative.strip_prefix(entry.target.as_str()) {
            trace!("Alias '{}' matched prefix '{}'", entry.alias, entry.target);
            return format!("{}{}", entry.alias, rest);
        }
    }

    root_relative
}

/// Path from `base` to `target`, climbing with `..` where they diverge.
pub(crate) fn relative_to(target: &Path, base: &Path) -> PathBuf {
    let target: Vec<Component> = target.components().collect();
    let base: Vec<Component> = base.components().collect();
    let common = target.iter().zip(&base).take_while(|(t, b)| t == b).count();

    let mut result = PathBuf::new();
    for _ in common..base.len() {
        result.push("..");
    }
    for component in &target[common..] {
        result.push(component.as_os_str());
    }
    result
}

/// Joins the normal and `..` segments of `path` with `/`, dropping everything else.
fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
