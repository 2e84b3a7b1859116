/// Counts how many directory levels a relative import path climbs.
///
/// An optional leading `./` is ignored, then every leading `../` adds one
/// level. A trailing bare `..` adds a final level, as does a `./..name`
/// segment. Paths that do not start by going up have a depth of 0.
pub fn relative_depth(raw_path: &str) -> usize {
    if let Some(rest) = raw_path.strip_prefix("./")
        && rest.starts_with("..")
        && rest != ".."
        && !rest.starts_with("../")
    {
        return 1;
    }

    let mut rest = raw_path.strip_prefix("./").unwrap_or(raw_path);
    let mut depth = 0;

    loop {
        if rest == ".." {
            return depth + 1;
        }
        match rest.strip_prefix("../") {
            Some(stripped) => {
                depth += 1;
                rest = stripped;
            }
            None => return depth,
        }
    }
}
