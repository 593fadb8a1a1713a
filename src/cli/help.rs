use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::form::FieldName;

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    for entry in registry.list() {
        output::raw(format!("  {:<10} {}", entry.name, entry.description));
    }
    output::raw(format!(
        "Fields: {}",
        FieldName::ALL.map(FieldName::key).join(", ")
    ));
    output::raw("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    output::raw(format!("  Description: {}", entry.description));
    output::raw(format!("  Usage: {}", entry.usage));
}
