//! Path manipulation utilities.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving `.` and `..` without hitting the filesystem.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => components.push(Component::Prefix(p)),
            Component::RootDir => {
                components.clear();
                components.push(Component::RootDir);
            }
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::ParentDir) | None => components.push(Component::ParentDir),
                // Never pop a prefix or the root.
                Some(_) => {}
            },
            Component::Normal(c) => components.push(Component::Normal(c)),
        }
    }

    if components.is_empty() {
        PathBuf::from(".")
    } else {
        components.iter().collect()
    }
}

/// Returns true when `name` can be used as exactly one path component.
///
/// Rejects the empty string, `.`, `..` and anything containing a separator.
pub fn is_single_component(name: &str) -> bool {
    if name.is_empty() || name.contains('/') || name.contains('\\') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Returns true when removing `path` recursively would take out the working
/// directory, one of its parents, or the filesystem root.
pub fn is_unsafe_to_wipe(path: impl AsRef<Path>) -> bool {
    normalize(path)
        .components()
        .all(|c| !matches!(c, Component::Normal(_)))
}

/// Returns true when `path` is `dir` itself or lies anywhere below it.
///
/// Relative paths are resolved against the working directory first. Symlinks
/// are not followed.
pub fn is_within(path: impl AsRef<Path>, dir: impl AsRef<Path>) -> bool {
    absolute(path).starts_with(absolute(dir))
}

fn absolute(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        return normalize(path);
    }
    match std::env::current_dir() {
        Ok(cwd) => normalize(cwd.join(path)),
        Err(_) => normalize(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("./a/b/../c", "a/c")]
    #[test_case("a/./b", "a/b")]
    #[test_case("../../a/b", "../../a/b")]
    #[test_case("", ".")]
    #[test_case("/a/..", "/")]
    fn test_normalize(input: &str, expected: &str) {
        assert_eq!(normalize(input), PathBuf::from(expected));
    }

    #[test_case("build", true)]
    #[test_case("git-clone.v2", true)]
    #[test_case("", false)]
    #[test_case(".", false)]
    #[test_case("..", false)]
    #[test_case("a/b", false)]
    #[test_case("a\\b", false)]
    fn test_is_single_component(name: &str, expected: bool) {
        assert_eq!(is_single_component(name), expected);
    }

    #[test_case("taskmd.out", false)]
    #[test_case("out/docs", false)]
    #[test_case("docs/..", true)]
    #[test_case(".", true)]
    #[test_case("..", true)]
    #[test_case("/", true)]
    fn test_is_unsafe_to_wipe(path: &str, expected: bool) {
        assert_eq!(is_unsafe_to_wipe(path), expected);
    }

    #[test_case("docs/build.yaml", "docs", true ; "direct child")]
    #[test_case("./docs/a/../build.yaml", "docs/", true ; "unnormalized child")]
    #[test_case("docs", "docs", true ; "the directory itself")]
    #[test_case("docs2/build.yaml", "docs", false ; "sibling with shared prefix")]
    #[test_case("build.yaml", "docs", false ; "outside")]
    #[test_case("/tmp/out/x.yaml", "/tmp/out", true ; "absolute")]
    fn test_is_within(path: &str, dir: &str, expected: bool) {
        assert_eq!(is_within(path, dir), expected);
    }

    #[test]
    fn test_is_within_mixes_relative_and_absolute() {
        let cwd = std::env::current_dir().unwrap();
        assert!(is_within("out/build.yaml", cwd.join("out")));
        assert!(is_within(cwd.join("out/build.yaml"), "out"));
    }
}
