//! System-defaults provider seam
//!
//! The one call this subsystem makes to the surrounding terminology engine
//! is a lookup of the current system default coordinates at initialization.
//! That call is modeled as a trait so the registry can be seeded from the
//! real engine, from a defaults file, or from compiled-in values without
//! caring which.

use crate::config::{builtin_defaults, DefaultsFile};
use crate::coordinate::CoordinateSpec;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Source of the system default coordinates
pub trait CoordinateProvider {
    /// Current system default coordinates
    ///
    /// Called once, at registry initialization; never on the request path.
    fn system_defaults(&self) -> Result<CoordinateSpec>;
}

/// Provider backed by the compiled-in defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl CoordinateProvider for BuiltinProvider {
    fn system_defaults(&self) -> Result<CoordinateSpec> {
        Ok(builtin_defaults())
    }
}

/// Provider backed by a YAML defaults file
///
/// Fields absent from the file fall back to the compiled-in values.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    /// Create a provider reading the given defaults file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CoordinateProvider for FileProvider {
    fn system_defaults(&self) -> Result<CoordinateSpec> {
        tracing::debug!(path = %self.path.display(), "loading system defaults file");
        DefaultsFile::load(&self.path)?.resolve()
    }
}
