//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

/// Command-line arguments for the jobtrack CLI tool.
///
/// Without a trailing command the `jt` binary starts an interactive shell;
/// with one it runs that single command line and exits.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use jobtrack_cli::cli_args::Args;
///
/// let args = Args::parse_from(["jt", "--yes", "delete", "1", "3"]);
/// assert_eq!(args.command_line(), Some("delete 1 3".to_string()));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the YAML file holding the tracked applications.
    ///
    /// If not provided, defaults to `~/.jobtrack/applications.yml`.
    #[arg(long, short = 'd')]
    pub data_path: Option<String>,

    /// Approve destructive actions such as `delete` without asking.
    #[arg(long, short = 'y', action)]
    pub yes: bool,

    /// Do not write changes back to the data file.
    #[arg(long, short = 's', action)]
    pub skip_save: bool,

    /// A single command line to run instead of starting the shell.
    ///
    /// # Examples
    /// ```bash
    /// jt add n/Acme Corp s/applied t/remote
    /// ```
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Args {
    /// The one-shot command line, if one was given.
    #[must_use]
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["jt"]);

        assert!(args.data_path.is_none());
        assert!(!args.yes);
        assert!(!args.skip_save);
        assert!(args.command.is_empty());
        assert!(args.command_line().is_none());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["jt", "-d", "/custom/applications.yml", "-y", "-s"]);

        assert_eq!(args.data_path, Some("/custom/applications.yml".to_string()));
        assert!(args.yes);
        assert!(args.skip_save);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "jt",
            "--data-path",
            "/custom/applications.yml",
            "--yes",
            "--skip-save",
        ]);

        assert_eq!(args.data_path, Some("/custom/applications.yml".to_string()));
        assert!(args.yes);
        assert!(args.skip_save);
    }

    #[test]
    fn test_args_command_line() {
        let args = Args::parse_from(["jt", "-y", "edit", "1,3", "s/rejected"]);

        assert!(args.yes);
        assert_eq!(args.command, ["edit", "1,3", "s/rejected"]);
        assert_eq!(args.command_line(), Some("edit 1,3 s/rejected".to_string()));
    }

    #[test]
    fn test_args_flags_after_command_belong_to_command() {
        let args = Args::parse_from(["jt", "filter", "-s", "t/remote"]);

        assert!(!args.skip_save);
        assert_eq!(args.command, ["filter", "-s", "t/remote"]);
    }
}
