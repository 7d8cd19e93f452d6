use std::io::{stdin, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use jobtrack_cli::cli_args::Args;
use jobtrack_cli::confirmation::TerminalConfirmation;
use jobtrack_cli::session::Session;
use jobtrack_core::error::Result;
use jobtrack_core::model::RecordBook;
use jobtrack_core::{config, file_handling};
use log::{debug, info};

fn execute() -> Result<()> {
    let args = Args::parse();

    let data_path = config::get_data_path(&args.data_path);
    debug!("Data path: `{}`", data_path);

    let interactive = stdin().is_terminal();
    if !interactive {
        info!("Standard input is not a terminal, confirmations are approved automatically");
    }
    let confirmation =
        TerminalConfirmation::new(config::confirmation_config(args.yes, interactive));

    let records = file_handling::load_records(&data_path)?;
    info!("Loaded {} applications from `{}`", records.len(), data_path);

    let save_path = if args.skip_save {
        info!("Skipping save was specified. Not writing to `{data_path}`.");
        None
    } else {
        Some(data_path)
    };

    let mut session = Session::new(RecordBook::new(records), confirmation, save_path);

    match args.command_line() {
        Some(line) => session.run_once(&line),
        None => session.run_interactive(),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
