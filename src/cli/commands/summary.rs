use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::render::SummaryMode;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "check",
            "Validate and render the check summary",
            "check",
            cmd_check,
        ),
        CommandEntry::new(
            "confirm",
            "Validate and render the confirmation with total",
            "confirm",
            cmd_confirm,
        ),
        CommandEntry::new("eng", "Alias of `check`", "eng", cmd_check),
        CommandEntry::new("vn", "Alias of `confirm`", "vn", cmd_confirm),
        CommandEntry::new(
            "submit",
            "Validate and render the given mode",
            "submit <check|confirm|eng|vn>",
            cmd_submit,
        ),
        CommandEntry::new(
            "summary",
            "Print the last rendered summary",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "copy",
            "Copy the last rendered summary to the clipboard",
            "copy",
            cmd_copy,
        ),
        CommandEntry::new(
            "errors",
            "List validation errors from the last submit",
            "errors",
            cmd_errors,
        ),
    ]
}

fn cmd_check(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    submit(context, SummaryMode::Check)
}

fn cmd_confirm(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    submit(context, SummaryMode::Confirm)
}

fn cmd_submit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [mode] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: submit <check|confirm|eng|vn>".into(),
        ));
    };
    submit(context, mode.parse()?)
}

fn submit(context: &mut ShellContext, mode: SummaryMode) -> CommandResult {
    let label = context.mode_label(mode);
    match context.state.submit(mode) {
        Ok(summary) => {
            output::section(label);
            output::raw(summary);
        }
        Err(errors) => {
            for error in errors.iter() {
                output::error(format!("{}: {}", error.field.key(), error.message));
            }
            output::warning("Validation failed");
        }
    }
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.state.summary();
    if summary.is_empty() {
        output::info("Nothing rendered yet.");
    } else {
        output::raw(summary);
    }
    Ok(())
}

fn cmd_copy(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.state.summary().is_empty() {
        output::warning("Nothing rendered yet; copying empty text.");
    }
    let result = context.copy_summary();
    match result {
        Ok(()) => output::success("Text copied to clipboard!"),
        Err(err) => output::error(format!("Copy failed: {}", err)),
    }
    Ok(())
}

fn cmd_errors(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let errors = context.state.errors();
    if errors.is_empty() {
        output::info("No validation errors.");
        return Ok(());
    }
    for error in errors.iter() {
        output::error(format!("{}: {}", error.field.key(), error.message));
    }
    Ok(())
}
