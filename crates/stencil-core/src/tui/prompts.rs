//! Charm-style CLI prompts using cliclack

use crate::config::Config;
use crate::theme::Theme;
use crate::workflow::{MenuItem, Outcome, Prompter, Workflow};
use anyhow::Result;
use std::io;

/// CLI arguments for the build command
#[derive(Debug, Clone, Default)]
pub struct BuildArgs {
    /// Template name to use instead of showing the menu
    pub template: Option<String>,
}

/// Prompter that talks to the terminal through cliclack
pub struct ConsolePrompter {
    theme: Theme,
}

impl ConsolePrompter {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Prompter for ConsolePrompter {
    fn header(&mut self, text: &str) -> io::Result<()> {
        cliclack::log::step(self.theme.header(text))
    }

    fn info(&mut self, label: &str, value: &str) -> io::Result<()> {
        cliclack::log::info(format!("{} {}", self.theme.instruction(label), value))
    }

    fn warning(&mut self, text: &str) -> io::Result<()> {
        cliclack::log::warning(text)
    }

    fn error(&mut self, text: &str) -> io::Result<()> {
        cliclack::log::error(self.theme.error(text))
    }

    fn choose(&mut self, title: &str, items: &[MenuItem<'_>]) -> io::Result<Option<usize>> {
        let mut select = cliclack::select(self.theme.header(title));
        for (idx, item) in items.iter().enumerate() {
            select = select.item(Some(idx), format!("{}. {}", idx + 1, item.label), item.hint);
        }
        select = select.item(None, "q. Quit", "");

        match select.interact() {
            // Esc at the menu is the same as choosing quit
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            other => other,
        }
    }

    fn read_line(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String> {
        let prompt = match default {
            Some(default) => format!(
                "{} {}",
                self.theme.instruction(prompt),
                self.theme.default_value(&format!("({})", default))
            ),
            None => self.theme.instruction(prompt).to_string(),
        };

        cliclack::input(prompt).required(false).interact()
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        cliclack::confirm(self.theme.instruction(prompt))
            .initial_value(true)
            .interact()
    }
}

/// Run the CLI with interactive prompts
pub fn run(config: &Config, args: BuildArgs, cli_version: &str) -> Result<Outcome> {
    let theme = config.theme();
    cliclack::intro(theme.header(" stencil "))?;

    let mut prompter = ConsolePrompter::new(theme);
    let outcome = Workflow::new(config, &mut prompter, cli_version).run(args.template.as_deref())?;

    match &outcome {
        Outcome::Created { .. } => cliclack::outro("Happy coding!")?,
        Outcome::Quit => cliclack::outro_cancel("Nothing was created")?,
    }

    Ok(outcome)
}
