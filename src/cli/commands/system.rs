use crate::cli::core::{CommandError, CommandResult};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::config::Config;
use crate::form::EmailPolicy;
use crate::render::{format_amount, SummaryMode};
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "config",
            "Show or change form settings",
            "config [show|set <key> <value>]",
            cmd_config,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
        CommandEntry::new("quit", "Exit the shell", "quit", cmd_exit),
    ]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_lowercase()).as_deref() {
        None | Some("show") => show_config(context),
        Some("set") => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <key> <value> (keys: {})",
                    Config::SETTABLE_KEYS.join(", ")
                )));
            }
            let value = args[2..].join(" ");
            context.set_config_value(args[1], value.trim())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{}`",
            other
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    let policy = context.state.validator().policy();
    let renderer = context.state.renderer();
    let modes: Vec<&str> = SummaryMode::ALL
        .iter()
        .map(|mode| context.mode_label(*mode))
        .collect();

    output::section("Configuration");
    output::raw(format!("  File          : {}", context.config_manager.path().display()));
    output::raw(format!("  Variant       : {:?}", context.config.variant));
    output::raw(format!("  Modes         : {}", modes.join(" / ")));
    output::raw(format!(
        "  Email check   : {}",
        match policy.email_policy {
            EmailPolicy::WhenPresent => "when present",
            EmailPolicy::Required => "required",
        }
    ));
    output::raw(format!("  Phone digits  : {}", policy.strict_phone_check));
    output::raw(format!("  Capitalize    : {}", renderer.capitalize_name));
    output::raw(format!(
        "  Delivery fee  : {}",
        format_amount(renderer.delivery_fee)
    ));
    output::raw(format!("  Devices       : {}", context.state.catalog().len()));
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Order Form {}", meta.version));
    output::raw(format!("  Build hash   : {} ({})", meta.git_hash, meta.git_status));
    output::raw(format!("  Built at     : {}", meta.timestamp));
    output::raw(format!("  Target       : {}", meta.target));
    output::raw(format!("  Profile      : {}", meta.profile));
    output::raw(format!("  Rustc        : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
