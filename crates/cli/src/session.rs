//! The interactive shell and one-shot runner.
//!
//! A [`Session`] owns the record book for the lifetime of the process and
//! runs command lines against it one at a time. After every completed
//! command that can change records, the book is written back to the data
//! file unless saving is disabled.

use std::io::{stdin, stdout, Write};

use jobtrack_core::commands::{Command, CommandResult};
use jobtrack_core::confirmation::Confirmation;
use jobtrack_core::error::Result;
use jobtrack_core::file_handling;
use jobtrack_core::model::{RecordBook, RecordCollection};
use jobtrack_core::parser::parse_command;
use log::{debug, info};

use crate::display;

const PROMPT: &str = "jt> ";

const WELCOME_MESSAGE: &str = "Tracking job applications. Type `help` for commands.";

pub struct Session<C: Confirmation> {
    book: RecordBook,
    confirmation: C,
    data_path: Option<String>,
}

impl<C: Confirmation> Session<C> {
    /// Creates a session over `book`.
    ///
    /// # Arguments
    ///
    /// * `book` - The records to work on
    /// * `confirmation` - Asked before destructive commands
    /// * `data_path` - Where to save after changes, or `None` to never save
    #[must_use]
    pub fn new(book: RecordBook, confirmation: C, data_path: Option<String>) -> Self {
        Self {
            book,
            confirmation,
            data_path,
        }
    }

    #[must_use]
    pub fn book(&self) -> &RecordBook {
        &self.book
    }

    /// Parses and runs one command line, saving if records changed.
    ///
    /// # Errors
    ///
    /// Returns the parse or execution error of the command, or a storage
    /// error if saving fails.
    pub fn execute_line(&mut self, line: &str) -> Result<CommandResult> {
        let command = parse_command(line)?;
        let result = command.execute(&mut self.book, &self.confirmation)?;

        if command.modifies_records() && !result.is_cancelled() {
            self.save()?;
        }

        Ok(result)
    }

    /// Runs one command line and writes everything it produces to `output`.
    ///
    /// Returns whether the session should keep reading commands.
    ///
    /// # Errors
    ///
    /// Returns the command's error, or an error if writing to `output` fails.
    pub fn handle_line(&mut self, line: &str, output: &mut impl Write) -> Result<bool> {
        let shows_records = matches!(
            parse_command(line),
            Ok(Command::List(_) | Command::Filter(_))
        );

        let result = self.execute_line(line)?;
        display::print_result(output, &result)?;

        if shows_records {
            display::print_plain(output, &display::record_listing(&self.book.displayed()))?;
        }
        if result.show_help {
            display::print_plain(output, &display::help_text())?;
        }
        if result.show_metrics {
            display::print_plain(output, &display::metrics_text(&self.book.status_counts()))?;
        }

        Ok(!result.exit)
    }

    /// Reads command lines from standard input until `exit` or end of input.
    ///
    /// Command errors are reported and the shell carries on.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read from or written to.
    pub fn run_interactive(&mut self) -> Result<()> {
        let mut stdout = stdout();
        display::print_plain(&mut stdout, WELCOME_MESSAGE)?;
        display::print_plain(&mut stdout, &display::record_listing(&self.book.displayed()))?;

        loop {
            write!(stdout, "{PROMPT}")?;
            stdout.flush()?;

            // Not holding the stdin lock here, the confirmation prompt reads
            // from it too.
            let mut line = String::new();
            if stdin().read_line(&mut line)? == 0 {
                info!("End of input, leaving the shell");
                return Ok(());
            }

            if line.trim().is_empty() {
                continue;
            }
            debug!("Read command line `{}`", line.trim());

            match self.handle_line(&line, &mut stdout) {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e) => display::print_error(&mut stdout, &e)?,
            }
        }
    }

    /// Runs a single command line from the process arguments.
    ///
    /// # Errors
    ///
    /// Returns the command's error so the process can exit with a failure.
    pub fn run_once(&mut self, line: &str) -> Result<()> {
        self.handle_line(line, &mut stdout()).map(|_| ())
    }

    fn save(&self) -> Result<()> {
        match &self.data_path {
            Some(data_path) => {
                debug!("Saving {} applications to `{data_path}`", self.book.records().len());
                file_handling::write_records(data_path, self.book.records())
            }
            None => {
                debug!("Saving is disabled, changes stay in memory");
                Ok(())
            }
        }
    }
}
