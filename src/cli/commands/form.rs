use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::form::FieldName;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "set",
            "Set a field (omit the value to clear it)",
            "set <field> [value...]",
            cmd_set,
        ),
        CommandEntry::new("show", "Show every field", "show", cmd_show),
        CommandEntry::new(
            "devices",
            "Type into the device field and list matching plans",
            "devices [query...]",
            cmd_devices,
        ),
        CommandEntry::new(
            "pick",
            "Choose a device suggestion by number or exact name",
            "pick <number|name>",
            cmd_pick,
        ),
        CommandEntry::new(
            "fill",
            "Walk through every field interactively",
            "fill",
            cmd_fill,
        ),
        CommandEntry::new("reset", "Clear the whole form", "reset", cmd_reset),
    ]
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((name, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: set <field> [value...]".into(),
        ));
    };
    let field: FieldName = name.parse()?;
    let raw = rest.join(" ");
    let stored = context.state.apply_input(field, &raw).to_string();
    output::info(format!("{} = {}", field.key(), stored));
    if field == FieldName::Device {
        print_suggestions(context);
    }
    Ok(())
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Order Information");
    let width = FieldName::ALL
        .iter()
        .map(|field| field.label().chars().count())
        .max()
        .unwrap_or(0);
    let errors = context.state.errors();
    for (field, value) in context.state.data().entries() {
        output::raw(format!("  {:<width$}  {}", field.label(), value));
        if let Some(message) = errors.get(field) {
            output::error(format!("{}: {}", field.key(), message));
        }
    }
    Ok(())
}

fn cmd_devices(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        let query = args.join(" ");
        context.state.apply_input(FieldName::Device, &query);
    }
    if context.state.suggestions().is_empty() {
        output::info("No matching devices.");
    } else {
        print_suggestions(context);
    }
    Ok(())
}

fn cmd_pick(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: pick <number|name>".into(),
        ));
    }
    let choice = args.join(" ");
    let picked = match choice.parse::<usize>() {
        Ok(number) if number >= 1 => context
            .state
            .select_suggestion(number - 1)
            .map(str::to_string)
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!("no suggestion numbered {}", number))
            })?,
        Ok(_) => {
            return Err(CommandError::InvalidArguments(
                "suggestions are numbered from 1".into(),
            ))
        }
        Err(_) => context
            .state
            .select_device(&choice)
            .map(str::to_string)
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!("`{}` is not in the device list", choice))
            })?,
    };
    output::success(format!("device = {}", picked));
    Ok(())
}

fn cmd_fill(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode != CliMode::Interactive {
        return Err(CommandError::InvalidArguments(
            "`fill` needs an interactive terminal; use `set` instead".into(),
        ));
    }
    for field in FieldName::ALL {
        let current = context.state.data().get(field).to_string();
        let raw = io::prompt_text(&context.theme, field.label(), &current)?;
        context.state.apply_input(field, &raw);

        if field == FieldName::Device && !context.state.suggestions().is_empty() {
            let mut options = context.state.suggestions().to_vec();
            options.push(format!("Keep \"{}\"", raw));
            let keep_index = options.len() - 1;
            if let Some(index) = io::select(&context.theme, "Matching devices", &options)? {
                if index != keep_index {
                    context.state.select_suggestion(index);
                }
            }
        }
    }
    output::success("Form filled. Use `check` or `confirm` to render the summary.");
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.state.reset();
    output::success("Form cleared.");
    Ok(())
}

fn print_suggestions(context: &ShellContext) {
    let suggestions = context.state.suggestions();
    if suggestions.is_empty() {
        return;
    }
    output::info(format!("{} matching device(s):", suggestions.len()));
    for (index, device) in suggestions.iter().enumerate() {
        output::raw(format!("  [{}] {}", index + 1, device));
    }
}
