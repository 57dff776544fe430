//! Standard folders to skip when walking a tree: version control, dependency caches and
//! "dunder" folders (`__pycache__`, `__tests__`, ...).
//!
//! Nothing here walks a tree; callers plug the patterns into their own walker.
//!
//! ```rust
//! use diskkit::fs::ignore::{ignored_regex, is_ignored};
//! use std::path::Path;
//!
//! assert!(ignored_regex().is_match("src/node_modules/left-pad/index.js"));
//! assert!(is_ignored(Path::new("repo/.git/HEAD")));
//! assert!(!is_ignored(Path::new("repo/src/main.rs")));
//! ```

use std::{
    path::{Component, Path},
    sync::LazyLock,
};

use regex::Regex;

/// Folder names which are always ignored.
pub const IGNORED_FOLDER_NAMES: &[&str] = &[".git", "DS_Store", "node_modules", "vendor"];

/// Prefix of ignored "dunder" folders.
pub const DUNDER_PREFIX: &str = "__";

/// Glob matching everything inside an ignored folder.
pub const IGNORED_GLOB: &str = "**/{.git,DS_Store,node_modules,vendor,__*}/**";

const IGNORED_PATTERN: &str =
    r"(?:^|[/\\])(?:\.git|DS_Store|node_modules|vendor|__[^/\\]*)(?:[/\\]|$)";

static IGNORED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IGNORED_PATTERN).expect("ignore pattern is a valid regex"));

/// Compiled regex equivalent to [`IGNORED_GLOB`].
///
/// Matches a path string containing an ignored folder name as a whole component, with either
/// `/` or `\` as separator.
pub fn ignored_regex() -> &'static Regex {
    &IGNORED_REGEX
}

/// Returns `true` if `name` is an ignored folder name.
pub fn is_ignored_name(name: &str) -> bool {
    IGNORED_FOLDER_NAMES.contains(&name) || name.starts_with(DUNDER_PREFIX)
}

/// Returns `true` if any component of `path` is an ignored folder name.
///
/// Components which are not UTF-8 are never ignored.
pub fn is_ignored(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => name.to_str().is_some_and(is_ignored_name),
        _ => false,
    })
}
