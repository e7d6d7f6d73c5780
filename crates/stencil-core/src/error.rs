//! Error types for configuration, catalog loading, and materialization

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to locate, bootstrap, read, or parse the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize default config")]
    Serialize(#[source] serde_yaml::Error),
}

impl ConfigError {
    pub(crate) fn io(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| Self::Io {
            action,
            path,
            source,
        }
    }
}

/// A manifest that is not well-formed structured data
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("malformed manifest")]
    Malformed(#[from] serde_yaml::Error),
}

/// Failure to enumerate the library root or load a single template
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read template library {}", path.display())]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("no manifest found in {}", dir.display())]
    MissingManifest { dir: PathBuf },

    #[error("failed to read manifest {}", path.display())]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse manifest {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },
}

/// Failure while reproducing a template at its destination
///
/// Files written before the failure are left in place.
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("something already exists at {}", .0.display())]
    DestinationExists(PathBuf),

    #[error(
        "path segment {name:?} (from {}) does not resolve to a single file name",
        source_path.display()
    )]
    UnsafePath { name: String, source_path: PathBuf },

    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MaterializeError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Rejected user input. Always recovered by re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{what} cannot be empty.")]
    Empty { what: &'static str },

    #[error("{what} cannot contain {ch:?}. Try again.")]
    InvalidChar { what: &'static str, ch: char },

    #[error("{what} must be a single file or directory name. Try again.")]
    NotAFileName { what: &'static str },

    #[error("Something already exists at location {:?}. Try again.", .0.display().to_string())]
    AlreadyExists(PathBuf),
}
