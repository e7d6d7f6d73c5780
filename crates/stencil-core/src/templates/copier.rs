//! Project materialization: recursive copy with placeholder substitution
//!
//! The top level of the template directory is filtered (manifest file and
//! ignore list); everything below it is copied as-is apart from substitution.
//! Symbolic links inside the template are skipped, never followed.
//! A failure stops the copy immediately and leaves already written files on
//! disk.

use super::manifest::TemplateManifest;
use super::substitute::{
    substitute_in_content, substitute_in_path, TokenValues, PROJECT_DIR, PROJECT_PATH,
};
use crate::error::MaterializeError;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// A template with its destination and all token values settled
#[derive(Debug, Clone)]
pub struct ResolvedProject {
    pub manifest: TemplateManifest,
    pub destination: PathBuf,
    pub values: TokenValues,
}

impl ResolvedProject {
    /// Combine user-supplied values with the two reserved tokens
    ///
    /// `destination` should be absolute; the reserved values are derived from it.
    pub fn new(manifest: TemplateManifest, destination: PathBuf, mut values: TokenValues) -> Self {
        let base_name = destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        values.insert(PROJECT_PATH, destination.to_string_lossy().into_owned());
        values.insert(PROJECT_DIR, base_name);

        Self {
            manifest,
            destination,
            values,
        }
    }
}

/// Copy the template to the project destination
///
/// Returns the destination paths of every file written, in copy order.
pub fn materialize(project: &ResolvedProject) -> Result<Vec<PathBuf>, MaterializeError> {
    let dest = &project.destination;

    // Re-checked here; the prompt-time check may be stale.
    if fs::symlink_metadata(dest).is_ok() {
        return Err(MaterializeError::DestinationExists(dest.clone()));
    }

    let source_dir = &project.manifest.source_dir;
    let entries = read_dir_names(source_dir)?;

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| MaterializeError::io("create directory", parent, e))?;
    }
    fs::create_dir(dest).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => MaterializeError::DestinationExists(dest.clone()),
        _ => MaterializeError::io("create directory", dest, e),
    })?;

    let mut written = Vec::new();
    for name in entries {
        if name.to_str().is_some_and(|n| project.manifest.is_ignored(n)) {
            debug!(entry = ?name, "ignored");
            continue;
        }
        copy_entry(&source_dir.join(&name), dest, &name, &project.values, &mut written)?;
    }

    info!(
        destination = %dest.display(),
        files = written.len(),
        "project created"
    );
    Ok(written)
}

fn copy_entry(
    src: &Path,
    dest_parent: &Path,
    name: &OsStr,
    values: &TokenValues,
    written: &mut Vec<PathBuf>,
) -> Result<(), MaterializeError> {
    let metadata = fs::symlink_metadata(src)
        .map_err(|e| MaterializeError::io("read metadata of", src, e))?;
    if metadata.file_type().is_symlink() {
        warn!(link = %src.display(), "skipping symbolic link in template");
        return Ok(());
    }

    let dest = dest_parent.join(destination_name(src, name, values)?);
    if metadata.is_dir() {
        fs::create_dir(&dest).map_err(|e| MaterializeError::io("create directory", &dest, e))?;
        debug!(dir = %dest.display(), "created directory");

        for child in read_dir_names(src)? {
            copy_entry(&src.join(&child), &dest, &child, values, written)?;
        }

        // Applied last so a read-only source directory can still be filled.
        fs::set_permissions(&dest, metadata.permissions())
            .map_err(|e| MaterializeError::io("set permissions on", &dest, e))?;
    } else {
        let bytes = fs::read(src).map_err(|e| MaterializeError::io("read", src, e))?;
        let contents = match String::from_utf8(bytes) {
            Ok(text) => substitute_in_content(&text, values).into_bytes(),
            // Binary content is copied untouched
            Err(e) => e.into_bytes(),
        };

        fs::write(&dest, contents).map_err(|e| MaterializeError::io("write", &dest, e))?;
        fs::set_permissions(&dest, metadata.permissions())
            .map_err(|e| MaterializeError::io("set permissions on", &dest, e))?;
        debug!(file = %dest.display(), "wrote file");
        written.push(dest);
    }

    Ok(())
}

/// Substituted name of one entry; must stay a single path component
fn destination_name(
    src: &Path,
    name: &OsStr,
    values: &TokenValues,
) -> Result<PathBuf, MaterializeError> {
    let Some(text) = name.to_str() else {
        return Ok(PathBuf::from(name));
    };

    let substituted = substitute_in_path(text, values);
    if is_file_name(&substituted) {
        Ok(PathBuf::from(substituted))
    } else {
        Err(MaterializeError::UnsafePath {
            name: substituted,
            source_path: src.to_path_buf(),
        })
    }
}

/// True when `name` is exactly one normal path component
pub(crate) fn is_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Entry names of a directory, in listing order
fn read_dir_names(dir: &Path) -> Result<Vec<std::ffi::OsString>, MaterializeError> {
    let read = |e| MaterializeError::io("read directory", dir, e);
    fs::read_dir(dir)
        .map_err(read)?
        .map(|entry| entry.map(|e| e.file_name()).map_err(read))
        .collect()
}
