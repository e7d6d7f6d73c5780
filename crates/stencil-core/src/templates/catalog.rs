//! Template discovery in a local library root
//!
//! Every immediate subdirectory of the library root holding a
//! `template.yaml` is a template. Subdirectories are visited in the order the
//! platform's directory listing returns them; no sorting is applied.

use super::manifest::{parse_manifest, TemplateManifest, MANIFEST_FILE};
use crate::error::CatalogError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// What to do with a subdirectory whose manifest cannot be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Leave it out of the catalog (listing, menus)
    Skip,
    /// Abort the whole scan
    Fail,
}

/// Templates discovered in one library root
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
    templates: Vec<TemplateManifest>,
}

impl Catalog {
    /// Scan a library root
    pub fn scan(root: impl Into<PathBuf>, policy: LoadPolicy) -> Result<Self, CatalogError> {
        let root = root.into();
        let templates = list_templates(&root, policy)?;
        Ok(Self { root, templates })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn templates(&self) -> &[TemplateManifest] {
        &self.templates
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Template at a menu index
    pub fn get(&self, index: usize) -> Option<&TemplateManifest> {
        self.templates.get(index)
    }

    /// Template by display name or directory name
    pub fn find(&self, name: &str) -> Option<&TemplateManifest> {
        self.templates.iter().find(|t| {
            t.name == name || t.source_dir.file_name().is_some_and(|dir| dir == name)
        })
    }

    /// Display names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }
}

/// Load every template under `root`.
///
/// An empty root yields an empty list, not an error.
pub fn list_templates(
    root: &Path,
    policy: LoadPolicy,
) -> Result<Vec<TemplateManifest>, CatalogError> {
    let mut templates = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| CatalogError::ReadRoot {
            path: root.to_path_buf(),
            source,
        })?;

        if !entry.path().is_dir() {
            continue;
        }

        match load_template(entry.path()) {
            Ok(template) => {
                debug!(template = %template.name, dir = %entry.path().display(), "loaded template");
                templates.push(template);
            }
            Err(e) if policy == LoadPolicy::Skip => {
                warn!(dir = %entry.path().display(), error = %e, "skipping template");
            }
            Err(e) => return Err(e),
        }
    }

    debug!(root = %root.display(), count = templates.len(), "scanned template library");
    Ok(templates)
}

/// Read and parse the manifest of a single template directory
pub fn load_template(dir: &Path) -> Result<TemplateManifest, CatalogError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(CatalogError::MissingManifest {
            dir: dir.to_path_buf(),
        });
    }

    let bytes = std::fs::read(&manifest_path).map_err(|source| CatalogError::ReadManifest {
        path: manifest_path.clone(),
        source,
    })?;

    let mut manifest = parse_manifest(&bytes).map_err(|source| CatalogError::Parse {
        path: manifest_path,
        source,
    })?;
    manifest.source_dir = dir.to_path_buf();

    Ok(manifest)
}
