use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;

use crate::{
    clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard},
    config::{Config, ConfigManager},
    form::{FieldName, FormState},
    render::SummaryMode,
};

use super::commands;
use super::core::{CliError, CommandError, CommandResult, LoopControl};
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Which clipboard the `copy` command writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardChoice {
    System,
    Memory,
}

impl ClipboardChoice {
    /// `ORDER_FORM_CLIPBOARD=memory` keeps copies inside the process.
    pub fn from_env() -> Self {
        match std::env::var("ORDER_FORM_CLIPBOARD") {
            Ok(value) if value.eq_ignore_ascii_case("memory") => ClipboardChoice::Memory,
            _ => ClipboardChoice::System,
        }
    }
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub state: FormState,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub theme: ColorfulTheme,
    pub running: bool,
    clipboard_choice: ClipboardChoice,
    clipboard: Option<Box<dyn Clipboard>>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new();
        let config = config_manager.load()?;
        Ok(Self::with_config(
            mode,
            config,
            config_manager,
            ClipboardChoice::from_env(),
        ))
    }

    pub fn with_config(
        mode: CliMode,
        config: Config,
        config_manager: ConfigManager,
        clipboard_choice: ClipboardChoice,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        output::set_preferences(output::OutputPreferences {
            color: config.color && mode == CliMode::Interactive,
        });

        let state = FormState::new(config.catalog(), config.validator(), config.renderer());

        Self {
            mode,
            registry,
            state,
            config,
            config_manager,
            theme: ColorfulTheme::default(),
            running: true,
            clipboard_choice,
            clipboard: None,
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn prompt(&self) -> String {
        let filled = self
            .state
            .data()
            .entries()
            .filter(|(_, value)| !value.is_empty())
            .count();
        format!("order[{}/{}]> ", filled, FieldName::ALL.len())
    }

    /// Display name of `mode` for the configured form variant.
    pub fn mode_label(&self, mode: SummaryMode) -> &'static str {
        self.config.variant.mode_label(mode)
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Updates one setting, saves it, and applies it to the live form.
    pub(crate) fn set_config_value(&mut self, key: &str, value: &str) -> CommandResult {
        let mut updated = self.config.clone();
        updated.set_value(key, value)?;
        self.config = updated;
        self.persist_config()?;

        self.state.reconfigure(
            self.config.catalog(),
            self.config.validator(),
            self.config.renderer(),
        );
        output::set_preferences(output::OutputPreferences {
            color: self.config.color && self.mode == CliMode::Interactive,
        });
        output::success("Configuration updated.");
        Ok(())
    }

    /// Copies the rendered summary. The clipboard backend is resolved on
    /// first use so a missing tool only matters once something is copied.
    pub fn copy_summary(&mut self) -> Result<(), ClipboardError> {
        let clipboard = resolve_clipboard(&mut self.clipboard, self.clipboard_choice)?;
        self.state.copy_summary(clipboard)
    }

    pub fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(entry) = self.registry.get(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        let handler = entry.handler;
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub fn suggest_command(&self, input: &str) {
        output::warning(format!("Unknown command `{}`.", input));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &input.to_lowercase()), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        super::io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    pub fn report_error(&self, err: CommandError) -> CommandResult {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(&message);
                output::info("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                output::error(other);
                Ok(())
            }
        }
    }
}

fn resolve_clipboard(
    slot: &mut Option<Box<dyn Clipboard>>,
    choice: ClipboardChoice,
) -> Result<&mut (dyn Clipboard + 'static), ClipboardError> {
    if slot.is_none() {
        let backend: Box<dyn Clipboard> = match choice {
            ClipboardChoice::Memory => Box::new(MemoryClipboard::default()),
            ClipboardChoice::System => Box::new(SystemClipboard::detect()?),
        };
        *slot = Some(backend);
    }
    match slot.as_deref_mut() {
        Some(clipboard) => Ok(clipboard),
        None => Err(ClipboardError::Unavailable("no backend".into())),
    }
}
