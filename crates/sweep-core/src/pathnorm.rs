/// Lexical path normalization with one legacy-convention rewrite.
///
/// Paths written with a Windows drive prefix (`C:\Users\x`) are rewritten to
/// their WSL-style mount location (`/mnt/c/Users/x`). Everything else is
/// normalized purely textually: repeated separators and `.` segments are
/// dropped and `..` segments are resolved where possible. No filesystem
/// access, so symlinks are not resolved.
pub fn normalize(path: &str) -> String {
    collapse(&rewrite_drive_prefix(path))
}

/// Rewrite `X:\rest` to `/mnt/x/rest`, flipping backslashes. Paths not
/// starting with a single-letter drive prefix pass through unchanged.
fn rewrite_drive_prefix(path: &str) -> String {
    let bytes = path.as_bytes();
    if bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && bytes[2] == b'\\'
    {
        let drive = (bytes[0] as char).to_ascii_lowercase();
        let rest = path[3..].replace('\\', "/");
        format!("/mnt/{}/{}", drive, rest)
    } else {
        path.to_string()
    }
}

fn collapse(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                // A leading run of ".." in a relative path cannot be resolved;
                // at the root of an absolute path it is simply dropped.
                let unresolvable = matches!(segments.last(), Some(&"..") | None);
                if unresolvable {
                    if !absolute {
                        segments.push("..");
                    }
                } else {
                    segments.pop();
                }
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (absolute, joined.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_prefix_rewrite() {
        assert_eq!(normalize(r"C:\Users\x"), "/mnt/c/Users/x");
        assert_eq!(normalize(r"d:\data\archive\old"), "/mnt/d/data/archive/old");
    }

    #[test]
    fn test_posix_path_is_unchanged() {
        assert_eq!(normalize("/home/user/downloads"), "/home/user/downloads");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize(r"C:\Users\x");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_collapses_separators_and_dots() {
        assert_eq!(normalize("/home//user/./tmp/"), "/home/user/tmp");
        assert_eq!(normalize("a/b/../c"), "a/c");
        assert_eq!(normalize("/../x"), "/x");
    }

    #[test]
    fn test_relative_parent_segments_kept() {
        assert_eq!(normalize("../a/b"), "../a/b");
        assert_eq!(normalize(""), ".");
    }

    #[test]
    fn test_no_rewrite_without_backslash() {
        // "C:/x" lacks the legacy backslash convention; only collapsing applies.
        assert_eq!(normalize("C:/x"), "C:/x");
        assert_eq!(normalize("CC:\\x"), "CC:\\x");
    }
}
