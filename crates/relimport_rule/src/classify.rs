/// What a raw import path points at, judged only by how it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// `..`, `../x`, `./..`, `./../x`, `./..x`
    ParentFolder,
    /// `.`, `./x`
    SameFolder,
    /// Bare module names, aliases, absolute paths, the empty string
    Other,
}

pub fn classify(raw_path: &str) -> Classification {
    if is_parent_folder(raw_path) {
        Classification::ParentFolder
    } else if raw_path == "." || raw_path.starts_with("./") {
        Classification::SameFolder
    } else {
        Classification::Other
    }
}

/// `..` followed by a separator or the end of the path, or `./` followed by
/// anything starting with `..`.
fn is_parent_folder(raw_path: &str) -> bool {
    if let Some(rest) = raw_path.strip_prefix("./") {
        return rest.starts_with("..");
    }
    raw_path == ".." || raw_path.starts_with("../")
}
