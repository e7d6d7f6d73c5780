//! Template loading, substitution, and copying
//!
//! This module provides:
//! - Template manifest types (TemplateManifest, Token)
//! - Template discovery in a local library root
//! - Placeholder substitution for contents and paths
//! - Recursive project materialization
//! - Version compatibility checking

pub mod catalog;
pub mod copier;
pub mod manifest;
pub mod substitute;
pub mod version;

pub use catalog::{list_templates, load_template, Catalog, LoadPolicy};
pub use copier::{materialize, ResolvedProject};
pub use manifest::{parse_manifest, TemplateManifest, Token, MANIFEST_FILE};
pub use substitute::{
    substitute_in_content, substitute_in_path, TokenValues, PROJECT_DIR, PROJECT_PATH,
};
pub use version::check_compatibility;
