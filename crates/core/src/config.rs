//! Configuration path utilities for jobtrack.
//!
//! This module resolves the records file path, expanding shell variables
//! like `~`.

use crate::confirmation::ConfirmationConfig;

/// Default path for the records file
const DEFAULT_DATA_PATH: &str = "~/.jobtrack/applications.yml";

/// Resolves the records file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// records path. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `data_path_arg` - Optional custom records file path
///
/// # Returns
///
/// The resolved path to the records file
///
/// # Examples
///
/// ```
/// use jobtrack_core::config::get_data_path;
///
/// // Use default path
/// let default_path = get_data_path(&None);
///
/// // Use custom path
/// let custom_path = get_data_path(&Some("/path/to/applications.yml".to_string()));
/// ```
pub fn get_data_path(data_path_arg: &Option<String>) -> String {
    let data_path = match data_path_arg {
        Some(data_path) => data_path,
        None => DEFAULT_DATA_PATH,
    };

    shellexpand::tilde(data_path).to_string()
}

/// Builds the confirmation settings for a session.
///
/// Confirmations are approved automatically when the user asked for it or
/// when nobody is at a terminal to answer.
#[must_use]
pub fn confirmation_config(assume_yes: bool, interactive: bool) -> ConfirmationConfig {
    ConfirmationConfig {
        auto_approve: assume_yes || !interactive,
    }
}
