//! Parameter collection workflow
//!
//! Runs the steps of one project creation in order:
//!
//! 1. select a template (numbered menu, or a name given up front)
//! 2. choose a destination that does not exist yet
//! 3. collect a value for every declared token
//! 4. materialize the project
//! 5. report success
//!
//! Steps 2 and 3 re-prompt on invalid input; nothing is written until step 4.
//! All terminal I/O goes through a [`Prompter`], so the workflow can be driven
//! by a script in tests.

use crate::config::Config;
use crate::error::ValidationError;
use crate::templates::copier::is_file_name;
use crate::templates::{
    check_compatibility, load_template, materialize, Catalog, LoadPolicy, ResolvedProject,
    TemplateManifest, Token, TokenValues,
};
use crate::UPGRADE_COMMAND;
use anyhow::{anyhow, bail, Context, Result};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// One entry of a numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem<'a> {
    pub label: &'a str,
    pub hint: &'a str,
}

/// Line-based terminal interaction used by the workflow
pub trait Prompter {
    /// Section heading
    fn header(&mut self, text: &str) -> io::Result<()>;

    /// Labelled informational line
    fn info(&mut self, label: &str, value: &str) -> io::Result<()>;

    fn warning(&mut self, text: &str) -> io::Result<()>;

    fn error(&mut self, text: &str) -> io::Result<()>;

    /// Numbered menu. `None` means the user chose to quit.
    fn choose(&mut self, title: &str, items: &[MenuItem<'_>]) -> io::Result<Option<usize>>;

    /// Read one line. `default` is only displayed; an empty line comes back empty.
    fn read_line(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String>;

    /// Yes/no question
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// How a workflow run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The project was written
    Created {
        destination: PathBuf,
        files: Vec<PathBuf>,
    },
    /// The user quit at the template menu; nothing was written
    Quit,
}

pub struct Workflow<'a, P: Prompter> {
    config: &'a Config,
    prompter: &'a mut P,
    cli_version: &'a str,
    cwd: Option<PathBuf>,
}

impl<'a, P: Prompter> Workflow<'a, P> {
    pub fn new(config: &'a Config, prompter: &'a mut P, cli_version: &'a str) -> Self {
        Self {
            config,
            prompter,
            cli_version,
            cwd: None,
        }
    }

    /// Resolve relative destinations against `cwd` instead of the process directory
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Run all steps. `template` skips the menu and selects by name.
    pub fn run(&mut self, template: Option<&str>) -> Result<Outcome> {
        let Some(manifest) = self.select_template(template)? else {
            debug!("quit at template menu");
            return Ok(Outcome::Quit);
        };
        self.show_choice(&manifest)?;

        let destination = self.choose_destination()?;
        let values = self.collect_tokens(&manifest)?;
        let project = ResolvedProject::new(manifest, destination, values);

        let files = materialize(&project).with_context(|| {
            format!("Failed to create project at {}", project.destination.display())
        })?;

        self.report_success(&project, files.len())?;
        Ok(Outcome::Created {
            destination: project.destination,
            files,
        })
    }

    fn select_template(&mut self, preselected: Option<&str>) -> Result<Option<TemplateManifest>> {
        let root = &self.config.templates_dir;
        let catalog = Catalog::scan(root, LoadPolicy::Skip)
            .with_context(|| format!("Failed to read templates from {}", root.display()))?;

        if catalog.is_empty() {
            self.prompter.error("No templates found.")?;
            self.prompter
                .info("Add some templates in", &root.display().to_string())?;
            self.prompter
                .info("Or adjust", "the `templates_dir` location in the config file")?;
            bail!("No templates found in {}", root.display());
        }

        let dir = match preselected {
            Some(name) => match catalog.find(name) {
                Some(template) => template.source_dir.clone(),
                // Present on disk but skipped by the scan: load it to surface why
                None if root.join(name).is_dir() => root.join(name),
                None => bail!(
                    "Template '{}' not found. Available templates: {}",
                    name,
                    catalog.names().join(", ")
                ),
            },
            None => {
                let items: Vec<MenuItem<'_>> = catalog
                    .templates()
                    .iter()
                    .map(|t| MenuItem {
                        label: &t.name,
                        hint: &t.description,
                    })
                    .collect();

                let Some(index) = self.prompter.choose("Choose a project type:", &items)? else {
                    return Ok(None);
                };
                catalog
                    .get(index)
                    .map(|t| t.source_dir.clone())
                    .ok_or_else(|| anyhow!("Menu choice {} is out of range", index + 1))?
            }
        };

        // The menu is built tolerantly; the chosen template must load cleanly.
        let manifest = load_template(&dir)
            .with_context(|| format!("Failed to load template from {}", dir.display()))?;

        if let Some(required) = &manifest.version {
            let warning = check_compatibility(self.cli_version, required, UPGRADE_COMMAND);
            if let Some(warning) = warning {
                self.prompter.warning(&warning)?;
            }
        }

        Ok(Some(manifest))
    }

    fn show_choice(&mut self, manifest: &TemplateManifest) -> Result<()> {
        if self.config.verbose {
            self.prompter.header("Project Info:")?;
            self.prompter.info("Project:", &manifest.name)?;
            self.prompter.info("Description:", &manifest.description)?;
        }
        if !manifest.pre_message.is_empty() {
            self.prompter.info("Note:", &manifest.pre_message)?;
        }
        Ok(())
    }

    /// Prompt until the destination is valid, confirmed, and free
    fn choose_destination(&mut self) -> Result<PathBuf> {
        let cwd = match &self.cwd {
            Some(cwd) => cwd.clone(),
            None => std::env::current_dir().context("Failed to read the current directory")?,
        };

        loop {
            self.prompter.header("Project Location:")?;
            let input = self
                .prompter
                .read_line("Directory to create project in:", None)?;

            if let Err(e) = validate_path_value("Directory name", &input, self.config) {
                self.prompter.error(&e.to_string())?;
                continue;
            }

            let path = absolute_path(&cwd, Path::new(&input));

            if self.config.verbose {
                self.prompter
                    .info("You entered:", &path.display().to_string())?;
                if !self.prompter.confirm("Is that correct?")? {
                    continue;
                }
            }

            if std::fs::symlink_metadata(&path).is_ok() {
                let e = ValidationError::AlreadyExists(path);
                self.prompter.error(&e.to_string())?;
                continue;
            }

            debug!(destination = %path.display(), "destination chosen");
            return Ok(path);
        }
    }

    /// Collect every declared token in declaration order
    fn collect_tokens(&mut self, manifest: &TemplateManifest) -> Result<TokenValues> {
        let mut values = TokenValues::new();
        if manifest.tokens.is_empty() {
            return Ok(values);
        }

        self.prompter.header("Define values for any tokens:")?;
        for token in &manifest.tokens {
            let value = self.read_token(token)?;
            values.insert(&token.name, value);
        }
        Ok(values)
    }

    /// Prompt for one token until its value is acceptable
    fn read_token(&mut self, token: &Token) -> Result<String> {
        let prompt = format!("Value for {:?}:", token.name);
        loop {
            let input = self.prompter.read_line(&prompt, token.default_value())?;
            let value = match (input.is_empty(), token.default_value()) {
                (true, Some(default)) => default.to_string(),
                _ => input,
            };

            match validate_token_value(token, &value, self.config) {
                Ok(()) => return Ok(value),
                Err(e) => self.prompter.error(&e.to_string())?,
            }
        }
    }

    fn report_success(&mut self, project: &ResolvedProject, files: usize) -> Result<()> {
        self.prompter.header(&format!(
            "Success creating the {:?} project!",
            project.manifest.name
        ))?;
        self.prompter
            .info("Location:", &project.destination.display().to_string())?;
        if self.config.verbose {
            self.prompter.info("Files created:", &files.to_string())?;
        }
        if !project.manifest.post_message.is_empty() {
            self.prompter
                .info("Instructions:", &project.manifest.post_message)?;
        }
        Ok(())
    }
}

/// Check a value that will be used in a filesystem path
pub fn validate_path_value(
    what: &'static str,
    value: &str,
    config: &Config,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { what });
    }
    match config.invalid_char_in(value) {
        Some(ch) => Err(ValidationError::InvalidChar { what, ch }),
        None => Ok(()),
    }
}

/// Check the effective value of a token
pub fn validate_token_value(
    token: &Token,
    value: &str,
    config: &Config,
) -> Result<(), ValidationError> {
    if token.is_path {
        validate_path_value("Path", value, config)?;
        if !is_file_name(value) {
            return Err(ValidationError::NotAFileName { what: "Path" });
        }
        return Ok(());
    }
    if token.required && value.is_empty() {
        return Err(ValidationError::Empty { what: "Value" });
    }
    Ok(())
}

/// Join onto `cwd` when relative and drop `.`/`..` components lexically
fn absolute_path(cwd: &Path, input: &Path) -> PathBuf {
    let joined = if input.is_absolute() {
        input.to_path_buf()
    } else {
        cwd.join(input)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
