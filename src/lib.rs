#![doc(test(attr(deny(warnings))))]

//! Order Form turns a customer's device order into a ready-to-paste summary:
//! field formatting, device-plan suggestions, validation, and the two
//! summary templates, plus a small shell for driving them from a terminal.

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod form;
pub mod render;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Order Form tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
