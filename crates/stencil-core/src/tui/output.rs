//! Plain colored output for non-interactive commands

use crate::config::{Config, LoadedConfig, CONFIG_FILE};
use crate::templates::{Catalog, LoadPolicy};
use anyhow::{bail, Context, Result};

/// Print every loadable template's name and description
pub fn list(config: &Config) -> Result<()> {
    let theme = config.theme();
    let root = &config.templates_dir;
    let catalog = Catalog::scan(root, LoadPolicy::Skip)
        .with_context(|| format!("Failed to read templates from {}", root.display()))?;

    if catalog.is_empty() {
        println!("{}", theme.error("No templates found."));
        println!("  Add some templates in {:?}.", root.display().to_string());
        println!("  Or adjust the `templates_dir` location in the config file.");
        bail!("No templates found in {}", root.display());
    }

    println!("{}", theme.header("Available templates:"));
    for template in catalog.templates() {
        println!("  {}", theme.instruction(&template.name));
        if !template.description.is_empty() {
            println!("    {}", template.description);
        }
    }
    Ok(())
}

/// Explain the configuration directory created on first use
pub fn print_setup_message(loaded: &LoadedConfig) {
    let theme = loaded.config.theme();
    println!("{}", theme.header("Config Setup"));
    println!(
        "{}",
        theme.instruction("It looks like this is the first time you're using stencil.")
    );
    println!(
        "{}",
        theme.instruction(&format!(
            "Created {} with a sample template in {}.",
            loaded.dir.join(CONFIG_FILE).display(),
            loaded.config.templates_dir.display()
        ))
    );
    println!(
        "{}",
        theme.instruction("Edit the config file to move the template library or change colors.")
    );
    println!();
}
