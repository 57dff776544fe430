use std::{
    fs::{FileType, create_dir_all, read_dir, read_to_string, remove_dir, remove_file, write},
    io,
    path::Path,
};

use tracing::{debug, trace};

use crate::error::{DiskError, Result};

mod sealed {
    use std::path::Path;

    pub trait Sealed {}
    impl Sealed for Path {}
}

/// Extension trait for [`Path`] with the filesystem helpers of this crate.
///
/// Predicates never fail, they answer `false` instead. Mutating methods return the input path
/// on success, so calls can be chained.
///
/// ```rust,no_run
/// # use diskkit::fs::*;
/// # use std::path::Path;
/// # fn get_path() -> ! { loop {} }
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let path: &Path = get_path();
/// path.create_folder()?;
/// let note = path.join("alfa.txt");
/// note.write_file("bravo")?;
/// assert_eq!(note.read_file()?, "bravo");
///
/// // Cleanup created files.
/// assert_eq!(path.delete_folder()?, 1);
/// # Ok(())
/// # }
/// ```
pub trait PathExt: sealed::Sealed {
    /// Returns `true` if `self` exists and is a directory.
    ///
    /// Symbolic links are not followed, so a link to a directory is not a real folder. Empty,
    /// missing or unreadable paths give `false`.
    fn is_real_folder(&self) -> bool;

    /// Returns `true` if `self` exists and is a regular file.
    ///
    /// Same rules as [`PathExt::is_real_folder`].
    fn is_real_file(&self) -> bool;

    /// Create `self` and its missing ancestors, like `mkdir -p $path`.
    ///
    /// Does nothing if `self` is already a directory, its contents stay untouched.
    ///
    /// # Returns
    /// [`Ok(self)`](Ok) on success.
    /// [`DiskError::InvalidInput`] if `self` is empty, or exists but is not a directory.
    /// [`DiskError::Io`] if [`create_dir_all`] fails.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use diskkit::fs::PathExt;
    /// # use std::path::Path;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let file = Path::new("a/b").create_folder()?.join("c.txt");
    /// # Ok(())
    /// # }
    /// ```
    fn create_folder(&self) -> Result<&Path>;

    /// Delete `self` and everything below it.
    ///
    /// Entries are removed depth-first: children before their parent. Symbolic links are
    /// unlinked, never traversed.
    ///
    /// # Returns
    /// `Ok(0)` if `self` is not a real folder (nothing to do), `Ok(1)` once the tree is gone.
    /// The first failing removal stops the walk and is returned as [`DiskError::Io`], leaving
    /// the tree partially deleted.
    fn delete_folder(&self) -> Result<usize>;

    /// Write `content` to `self` as UTF-8, replacing what was there.
    ///
    /// Parent directories are created with [`PathExt::create_folder`].
    ///
    /// # Returns
    /// [`Ok(self)`](Ok) on success, [`DiskError::InvalidInput`] if `self` is empty.
    fn write_file(&self, content: &str) -> Result<&Path>;

    /// Read the whole of `self` as UTF-8 text.
    ///
    /// # Returns
    /// [`DiskError::InvalidInput`] if `self` is not a real file (see
    /// [`PathExt::is_real_file`]). Content which is not UTF-8 fails with [`DiskError::Io`] of
    /// kind [`InvalidData`](io::ErrorKind::InvalidData).
    fn read_file(&self) -> Result<String>;

    /// Convenience wrapper over [`PathExt::read_file`] for callers who branch on absence.
    ///
    /// `Ok(None)` is returned exactly when [`PathExt::is_real_file`] is `false`, which is the
    /// case `read_file` reports as [`DiskError::InvalidInput`]. Every other outcome, I/O
    /// errors included, is the one `read_file` gives.
    fn read_file_if_exists(&self) -> Result<Option<String>>;
}

fn ensure_not_empty(path: &Path, what: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(DiskError::invalid(format!("cannot {what} an empty path")));
    }
    Ok(())
}

fn remove_entry(path: &Path, file_type: FileType) -> io::Result<()> {
    #[cfg(windows)]
    {
        use std::os::windows::fs::FileTypeExt;
        // Directory symlinks are removed like directories on Windows.
        if file_type.is_symlink_dir() {
            return remove_dir(path);
        }
    }
    #[cfg(not(windows))]
    let _ = file_type;
    remove_file(path)
}

fn remove_tree(dir: &Path) -> io::Result<()> {
    for entry in read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // `DirEntry::file_type` does not follow symlinks.
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            remove_tree(&path)?;
        } else {
            trace!(path = %path.display(), "removing entry");
            remove_entry(&path, file_type)?;
        }
    }
    trace!(path = %dir.display(), "removing folder");
    remove_dir(dir)
}

impl PathExt for Path {
    fn is_real_folder(&self) -> bool {
        self.symlink_metadata()
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }

    fn is_real_file(&self) -> bool {
        self.symlink_metadata()
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
    }

    fn create_folder(&self) -> Result<&Path> {
        ensure_not_empty(self, "create a folder at")?;
        match self.metadata() {
            Ok(metadata) if metadata.is_dir() => return Ok(self),
            Ok(_) => {
                return Err(DiskError::invalid(format!(
                    "`{}` exists and is not a folder",
                    self.display()
                )));
            }
            // Dangling symlink: the link itself is in the way.
            Err(e) if e.kind() == io::ErrorKind::NotFound && self.symlink_metadata().is_ok() => {
                return Err(DiskError::invalid(format!(
                    "`{}` is a dangling symlink",
                    self.display()
                )));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        match create_dir_all(self) {
            Ok(()) => {}
            // Somebody else created it in the meantime.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && self.is_dir() => {}
            Err(e) => return Err(e.into()),
        }
        debug!(path = %self.display(), "created folder");
        Ok(self)
    }

    fn delete_folder(&self) -> Result<usize> {
        if !self.is_real_folder() {
            return Ok(0);
        }
        remove_tree(self)?;
        debug!(path = %self.display(), "deleted folder");
        Ok(1)
    }

    fn write_file(&self, content: &str) -> Result<&Path> {
        ensure_not_empty(self, "write to")?;
        if let Some(parent) = self.parent().filter(|p| !p.as_os_str().is_empty()) {
            parent.create_folder()?;
        }
        write(self, content)?;
        debug!(path = %self.display(), bytes = content.len(), "wrote file");
        Ok(self)
    }

    fn read_file(&self) -> Result<String> {
        if !self.is_real_file() {
            return Err(DiskError::invalid(format!(
                "`{}` is not a file",
                self.display()
            )));
        }
        Ok(read_to_string(self)?)
    }

    fn read_file_if_exists(&self) -> Result<Option<String>> {
        if !self.is_real_file() {
            return Ok(None);
        }
        self.read_file().map(Some)
    }
}
