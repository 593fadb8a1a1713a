pub mod form;
pub mod summary;
pub mod system;

use crate::cli::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in form::definitions()
        .into_iter()
        .chain(summary::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}
