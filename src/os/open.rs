//! Opening paths with the default application of the operating system.
//!
//! The actual mechanism is an [`Opener`], handed to a [`Launcher`] at construction. Tests (and
//! embedders with their own notion of "open") provide their own implementation.
//!
//! ```rust,no_run
//! # use diskkit::os::open::Launcher;
//! # use std::path::Path;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let launcher = Launcher::system();
//! let opened = launcher.open(Path::new("report.html"))?;
//! # Ok(())
//! # }
//! ```

use std::{io, path::Path, process::Command};

use tracing::debug;

use crate::error::{DiskError, Result};

/// Something able to open a path, usually in another program.
pub trait Opener {
    fn open(&self, path: &Path) -> io::Result<()>;
}

impl<O: Opener + ?Sized> Opener for &O {
    fn open(&self, path: &Path) -> io::Result<()> {
        (**self).open(path)
    }
}

impl<O: Opener + ?Sized> Opener for Box<O> {
    fn open(&self, path: &Path) -> io::Result<()> {
        (**self).open(path)
    }
}

/// [`Opener`] backed by the [`open`] crate, waiting for the launched command to finish.
///
/// Uses the default application of the platform, or a named one given to
/// [`SystemOpener::with_app`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemOpener {
    app: Option<String>,
}

impl SystemOpener {
    /// Create [`SystemOpener`] using the default application.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create [`SystemOpener`] which opens every path with `app`.
    pub fn with_app(app: impl Into<String>) -> Self {
        Self {
            app: Some(app.into()),
        }
    }

    pub fn app(&self) -> Option<&str> {
        self.app.as_deref()
    }

    /// Commands tried in order to open `path` with the default application, without running
    /// them.
    pub fn commands(path: &Path) -> Vec<Command> {
        open::commands(path)
    }
}

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        match &self.app {
            Some(app) => open::with(path, app.as_str()),
            None => open::that(path),
        }
    }
}

/// Opens paths through an injected [`Opener`].
#[derive(Debug, Clone, Default)]
pub struct Launcher<O = SystemOpener> {
    opener: O,
}

impl Launcher<SystemOpener> {
    /// Create [`Launcher`] using [`SystemOpener::new`].
    pub fn system() -> Self {
        Self::new(SystemOpener::new())
    }
}

impl<O: Opener> Launcher<O> {
    pub fn new(opener: O) -> Self {
        Self { opener }
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Open `path` with the injected [`Opener`].
    ///
    /// # Returns
    /// [`Ok(path)`](Ok) once the opener succeeded, [`DiskError::InvalidInput`] if `path` is
    /// empty, and the opener's failure as [`DiskError::Io`].
    pub fn open<'a>(&self, path: &'a Path) -> Result<&'a Path> {
        if path.as_os_str().is_empty() {
            return Err(DiskError::invalid("cannot open an empty path"));
        }
        debug!(path = %path.display(), "opening with default application");
        self.opener.open(path)?;
        Ok(path)
    }
}
