//! Jobtrack CLI Library
//!
//! This crate provides the command-line interface for jobtrack, a tracker for
//! job applications. It loads the applications from a YAML file, runs command
//! lines against them, prints the results and saves changes back.
//!
//! # Key Features
//!
//! - **Interactive Shell**: Read commands until `exit` or end of input
//! - **One-shot Mode**: Run a single command given on the command line
//! - **Delete Confirmation**: Terminal prompt before records are removed
//! - **Headless Use**: Confirmations are approved when stdin is not a terminal
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`session`]: The shell loop and saving after changes
//! - [`confirmation`]: The terminal confirmation prompt
//! - [`display`]: Colored feedback, record listings, help and metrics
//!
//! # Examples
//!
//! The CLI binary (`jt`) can be used in several ways:
//!
//! ```bash
//! # Interactive shell
//! jt
//!
//! # One command, then exit
//! jt add n/Acme Corp s/applied t/remote
//!
//! # Delete without being asked, using another data file
//! jt --yes --data-path ./applications.yml delete 2,4-5
//!
//! # Try things out without touching the data file
//! jt --skip-save
//! ```

pub mod cli_args;
pub mod confirmation;
pub mod display;
pub mod session;
