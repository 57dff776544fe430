//! Standard workspace folder and file names, and helpers joining them onto a root.
//!
//! ```rust
//! # use diskkit::layout::Layout;
//! # use std::path::Path;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let layout = Layout::new("/srv/site");
//! assert_eq!(layout.data_folder(), Path::new("/srv/site/os-data"));
//!
//! let scratch = layout.testing_folder("os-alfa.bravo")?;
//! assert_eq!(
//!     scratch,
//!     Path::new("/srv/site/os-workspace-testing/test-os-alfa-bravo")
//! );
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::error::{DiskError, Result};

pub const APP_FOLDER_NAME: &str = "os-app";
pub const CACHE_FOLDER_NAME: &str = "os-cache";
pub const DATA_FOLDER_NAME: &str = "os-data";
pub const PUBLIC_FOLDER_NAME: &str = "os-public";
pub const SYSTEM_FOLDER_NAME: &str = "os-system";
/// Root of the per-test scratch folders, see [`testing_subfolder_name_for`].
pub const WORKSPACE_TESTING_FOLDER_NAME: &str = "os-workspace-testing";
pub const LAUNCH_FILE_NAME: &str = "os-launch.js";

/// Encoding of every text file read or written by this crate.
pub const DEFAULT_TEXT_ENCODING: &str = "utf8";

pub const TEXT_EXTENSION: &str = "txt";
pub const MARKDOWN_EXTENSION: &str = "md";
pub const JSON_EXTENSION: &str = "json";
pub const HTML_EXTENSION: &str = "html";

/// Name of the scratch folder for tests tagged with `tag`.
///
/// `tag` is prefixed with `test.`, then every dot becomes a dash.
///
/// # Returns
/// [`DiskError::InvalidInput`] if `tag` is empty.
///
/// # Examples
///
/// ```rust
/// # use diskkit::layout::testing_subfolder_name_for;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// assert_eq!(testing_subfolder_name_for("os-bravo.charlie")?, "test-os-bravo-charlie");
/// # Ok(())
/// # }
/// ```
pub fn testing_subfolder_name_for(tag: &str) -> Result<String> {
    if tag.is_empty() {
        return Err(DiskError::invalid("testing tag must not be empty"));
    }
    Ok(["test", tag].join(".").replace('.', "-"))
}

/// Standard folders of a workspace rooted at some directory.
///
/// Only joins paths; nothing is created. Pair with
/// [`PathExt::create_folder`](crate::fs::PathExt::create_folder) to materialise them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn app_folder(&self) -> PathBuf {
        self.root.join(APP_FOLDER_NAME)
    }

    pub fn cache_folder(&self) -> PathBuf {
        self.root.join(CACHE_FOLDER_NAME)
    }

    pub fn data_folder(&self) -> PathBuf {
        self.root.join(DATA_FOLDER_NAME)
    }

    pub fn public_folder(&self) -> PathBuf {
        self.root.join(PUBLIC_FOLDER_NAME)
    }

    pub fn system_folder(&self) -> PathBuf {
        self.root.join(SYSTEM_FOLDER_NAME)
    }

    pub fn launch_file(&self) -> PathBuf {
        self.root.join(LAUNCH_FILE_NAME)
    }

    /// `<root>/os-workspace-testing/<testing_subfolder_name_for(tag)>`.
    pub fn testing_folder(&self, tag: &str) -> Result<PathBuf> {
        let mut buf = self.root.join(WORKSPACE_TESTING_FOLDER_NAME);
        buf.push(testing_subfolder_name_for(tag)?);
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::PathExt;
    use claim::{assert_matches, assert_ok, assert_ok_eq};
    use tempfile::tempdir;

    #[test]
    fn constants() {
        assert_eq!(APP_FOLDER_NAME, "os-app");
        assert_eq!(CACHE_FOLDER_NAME, "os-cache");
        assert_eq!(DATA_FOLDER_NAME, "os-data");
        assert_eq!(PUBLIC_FOLDER_NAME, "os-public");
        assert_eq!(SYSTEM_FOLDER_NAME, "os-system");
        assert_eq!(WORKSPACE_TESTING_FOLDER_NAME, "os-workspace-testing");
        assert_eq!(LAUNCH_FILE_NAME, "os-launch.js");
        assert_eq!(DEFAULT_TEXT_ENCODING, "utf8");
        assert_eq!(TEXT_EXTENSION, "txt");
        assert_eq!(MARKDOWN_EXTENSION, "md");
        assert_eq!(JSON_EXTENSION, "json");
        assert_eq!(HTML_EXTENSION, "html");
    }

    #[test]
    fn subfolder_name() {
        assert_ok_eq!(testing_subfolder_name_for("os-alpha"), "test-os-alpha".to_owned());
        assert_ok_eq!(
            testing_subfolder_name_for("os-bravo.charlie"),
            "test-os-bravo-charlie".to_owned()
        );
    }

    #[test]
    fn subfolder_name_rejects_empty() {
        assert_matches!(testing_subfolder_name_for(""), Err(DiskError::InvalidInput(_)));
    }

    #[test]
    fn layout_joins() {
        let layout = Layout::new("root");
        assert_eq!(layout.root(), Path::new("root"));
        assert_eq!(layout.app_folder(), Path::new("root").join("os-app"));
        assert_eq!(layout.cache_folder(), Path::new("root").join("os-cache"));
        assert_eq!(layout.data_folder(), Path::new("root").join("os-data"));
        assert_eq!(layout.public_folder(), Path::new("root").join("os-public"));
        assert_eq!(layout.system_folder(), Path::new("root").join("os-system"));
        assert_eq!(layout.launch_file(), Path::new("root").join("os-launch.js"));
    }

    #[test]
    fn testing_folder_roundtrip_on_disk() {
        let tmp = tempdir().expect("needed for tests");
        let layout = Layout::new(tmp.path());
        let scratch = assert_ok!(layout.testing_folder("os.filesystem"));
        assert!(scratch.ends_with("os-workspace-testing/test-os-filesystem"));

        assert_ok!(scratch.create_folder());
        assert!(scratch.is_real_folder());
        assert_ok_eq!(scratch.delete_folder(), 1);
        assert!(!scratch.exists());
    }

    #[test]
    fn testing_folder_rejects_empty_tag() {
        assert_matches!(
            Layout::new("root").testing_folder(""),
            Err(DiskError::InvalidInput(_))
        );
    }
}
