use itertools::Itertools;
use thiserror::Error;

use crate::fields::{address, email, name, phone, status, tag};

pub type Result<T> = std::result::Result<T, Error>;

/// Broad failure category, used by the shell to tell syntax mistakes apart
/// from constraint violations and from problems with the chosen index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Validation,
    OutOfBounds,
    DuplicateRecord,
    Storage,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown command: `{}`. Type `help` to see available commands.", .0)]
    UnknownCommand(String),

    #[error("Invalid command format!\n{}", .usage)]
    InvalidCommandFormat { usage: &'static str },

    #[error("Empty index in `{}`: check for stray or consecutive delimiters.", .0)]
    EmptyIndex(String),

    #[error("Index `{}` is not a number.", .0)]
    NotANumber(String),

    #[error("Range `{}` is malformed, expected START-END.", .0)]
    MalformedRange(String),

    #[error("Range `{}-{}` is reversed: the start must not be greater than the end.", .start, .end)]
    ReversedRange { start: usize, end: usize },

    #[error("Index `{}` is too large.", .0)]
    IndexTooLarge(String),

    #[error("Range `{}-{}` spans {} indices, at most {} are allowed.", .start, .end, .span, .limit)]
    RangeTooLarge {
        start: usize,
        end: usize,
        span: usize,
        limit: usize,
    },

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,

    #[error("At least one of status or tag must be provided to filter.")]
    MissingFilterCriteria,

    #[error("Index must be a positive integer, got `{}`.", .0)]
    NonPositiveIndex(String),

    #[error("Invalid index list, contains duplicate: {}", .0.iter().join(", "))]
    DuplicateIndices(Vec<usize>),

    #[error("Multiple values specified for the following single-valued field(s): {}", .0.iter().join(" "))]
    DuplicatePrefixes(Vec<String>),

    #[error("{}", name::MESSAGE_CONSTRAINTS)]
    InvalidName(String),

    #[error("{}", phone::MESSAGE_CONSTRAINTS)]
    InvalidPhone(String),

    #[error("{}", email::MESSAGE_CONSTRAINTS)]
    InvalidEmail(String),

    #[error("{}", address::MESSAGE_CONSTRAINTS)]
    InvalidAddress(String),

    #[error("{}", tag::MESSAGE_CONSTRAINTS)]
    InvalidTag(String),

    #[error("Tag `{}` is too long: tags may be at most {} characters, got {}.", .tag, tag::MAX_LENGTH, .length)]
    TagTooLong { tag: String, length: usize },

    #[error("{}", status::message_constraints())]
    InvalidStatus(String),

    #[error("Filter tag keywords may not be blank.")]
    BlankFilterKeyword,

    #[error("The displayed list is empty, there is nothing at index {}.", .0.iter().join(", "))]
    EmptyList(Vec<usize>),

    #[error("Index out of bounds: {} (the displayed list has {} entries).", .indices.iter().join(", "), .size)]
    IndexOutOfBounds { indices: Vec<usize>, size: usize },

    #[error("An application for `{}` already exists.", .0)]
    DuplicateRecord(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Invalid entry in records file `{}`: {}", .path, .reason)]
    CorruptRecord { path: String, reason: String },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownCommand(_)
            | Self::InvalidCommandFormat { .. }
            | Self::EmptyIndex(_)
            | Self::NotANumber(_)
            | Self::MalformedRange(_)
            | Self::ReversedRange { .. }
            | Self::IndexTooLarge(_)
            | Self::RangeTooLarge { .. }
            | Self::NothingToEdit
            | Self::MissingFilterCriteria => ErrorKind::Format,

            Self::NonPositiveIndex(_)
            | Self::DuplicateIndices(_)
            | Self::DuplicatePrefixes(_)
            | Self::InvalidName(_)
            | Self::InvalidPhone(_)
            | Self::InvalidEmail(_)
            | Self::InvalidAddress(_)
            | Self::InvalidTag(_)
            | Self::TagTooLong { .. }
            | Self::InvalidStatus(_)
            | Self::BlankFilterKeyword => ErrorKind::Validation,

            Self::EmptyList(_) | Self::IndexOutOfBounds { .. } => ErrorKind::OutOfBounds,

            Self::DuplicateRecord(_) => ErrorKind::DuplicateRecord,

            Self::Yaml { .. } | Self::Io { .. } | Self::CorruptRecord { .. } | Self::Stdio(_) => {
                ErrorKind::Storage
            }
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
