use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".finex";
const RECORDS_DIR: &str = "records";
const CONFIG_FILE: &str = "config.json";

/// Returns the application-specific data directory, defaulting to `~/.finex`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FINEX_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the persisted record documents.
pub fn records_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(RECORDS_DIR)
}

/// Path to the configuration file inside a base directory.
pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
