//! Jobtrack Core Library
//!
//! This crate provides the command interpreter behind jobtrack, a tool for
//! tracking job applications. Users type short commands that add, edit,
//! delete or filter applications by their position in the displayed list.
//!
//! # Key Features
//!
//! - **Tokenizer**: Split command arguments into prefixed field values and a preamble
//! - **Index Expressions**: Resolve `1`, `2-4` and `1,3,5-7` into validated positions
//! - **Field Validation**: Typed values for names, phones, emails, tags and statuses
//! - **Edit Descriptors**: Sparse partial updates that distinguish "unchanged" from "cleared"
//! - **Commands**: All-or-nothing execution against a [`model::RecordCollection`]
//! - **Error Handling**: One error type whose messages name the violated constraint
//!
//! # Examples
//!
//! Parsing and running commands against an in-memory record book:
//!
//! ```
//! use jobtrack_core::confirmation::FixedAnswer;
//! use jobtrack_core::model::RecordBook;
//! use jobtrack_core::parser::parse_command;
//!
//! let mut book = RecordBook::default();
//! let command = parse_command("add n/Acme Corp s/applied t/remote")?;
//! let result = command.execute(&mut book, &FixedAnswer(true))?;
//! println!("{}", result.feedback);
//!
//! let command = parse_command("delete 1")?;
//! command.execute(&mut book, &FixedAnswer(true))?;
//! assert!(book.records().is_empty());
//! # Ok::<(), jobtrack_core::error::Error>(())
//! ```

pub mod commands;
pub mod config;
pub mod confirmation;
pub mod descriptor;
pub mod error;
pub mod fields;
pub mod file_handling;
pub mod filter;
pub mod index;
pub mod model;
pub mod parser;
pub mod record;
