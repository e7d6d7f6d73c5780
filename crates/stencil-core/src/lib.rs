//! Stencil Core - project creation from a local template library
//!
//! A template is a directory holding a `template.yaml` manifest plus the files
//! to reproduce. Creating a project copies that directory to a new location,
//! replacing `${TOKEN}` placeholders in file contents and `%TOKEN%`
//! placeholders in file and directory names.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template discovery, manifest parsing,
//!   placeholder substitution, and materialization (`templates`)
//! - **Layer 2: Workflow Orchestration** - The `Prompter` trait and `Workflow`
//!   state machine that collects a destination and token values (`workflow`)
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompter (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based terminal prompter
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use stencil_core::templates::{Catalog, LoadPolicy, ResolvedProject, TokenValues, materialize};
//!
//! let catalog = Catalog::scan("/path/to/library", LoadPolicy::Skip)?;
//! let template = catalog.find("html").unwrap().clone();
//! let values: TokenValues = [("TITLE", "My App")].into_iter().collect();
//! let project = ResolvedProject::new(template, "/work/myapp".into(), values);
//! materialize(&project)?;
//! ```

pub mod config;
pub mod error;
pub mod templates;
pub mod theme;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Config, LoadedConfig};
pub use error::{CatalogError, ConfigError, ManifestError, MaterializeError, ValidationError};
pub use templates::{
    materialize, Catalog, LoadPolicy, ResolvedProject, TemplateManifest, Token, TokenValues,
};
pub use theme::Theme;
pub use workflow::{Outcome, Prompter, Workflow};

#[cfg(feature = "tui")]
pub use tui::{list, run};

/// Library version - used for template compatibility checking
/// The binary passes its own version; this is the fallback
pub const DEFAULT_CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shown when a template asks for a newer version
pub const UPGRADE_COMMAND: &str = "cargo install stencil --force";
