use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".order_form";
const CONFIG_FILE: &str = "config.json";
const HISTORY_FILE: &str = "history.txt";

/// Returns the application data directory, defaulting to `~/.order_form`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("ORDER_FORM_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

/// Shell history for interactive sessions.
pub fn history_file() -> PathBuf {
    app_data_dir().join(HISTORY_FILE)
}
