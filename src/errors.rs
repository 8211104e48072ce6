use std::fmt;
use std::ops::Index;

use thiserror::Error as ThisError;

use crate::arg::ArgId;
use crate::registry::FlagId;

/// Broad phase in which an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorGroup {
    /// Raised by the declaration API.
    Define,
    /// Raised by `parse`.
    Parse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FlagRedeclared,
    InvalidFlag,
    NamelessArgument,
    ArgVEmpty,
    ArgCountMismatch,
    RequiredFlagValueMissing,
    RequiredArgumentMissing,
}

impl ErrorKind {
    pub fn group(self) -> ErrorGroup {
        match self {
            ErrorKind::FlagRedeclared
            | ErrorKind::InvalidFlag
            | ErrorKind::NamelessArgument => ErrorGroup::Define,
            _ => ErrorGroup::Parse,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::FlagRedeclared => {
                "flag declared more than once"
            }
            ErrorKind::InvalidFlag => {
                "flag has no well-formed spelling"
            }
            ErrorKind::NamelessArgument => {
                "argument declared without a name"
            }
            ErrorKind::ArgVEmpty => {
                "argument vector is empty"
            }
            ErrorKind::ArgCountMismatch => {
                "argument count exceeds the argument vector"
            }
            ErrorKind::RequiredFlagValueMissing => {
                "required flag value was not given"
            }
            ErrorKind::RequiredArgumentMissing => {
                "required argument was not given"
            }
        }
    }
}

/// What an error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suspect {
    None,
    Flag(FlagId),
    Arg(ArgId),
}

/// One accumulated error record.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub suspect: Suspect,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, detail: &str, suspect: Suspect) -> Error {
        let message = if detail.is_empty() {
            kind.description().to_string()
        } else {
            format!("{}: {}", kind.description(), detail)
        };
        Error { kind, message, suspect }
    }

    pub fn group(&self) -> ErrorGroup {
        self.kind.group()
    }
}

/// Append-only list of errors kept by a parser.
///
/// Displaying it yields the report printed by CLIs on failure: one
/// `error: <message>` line per record.
#[derive(Debug, Clone, Default)]
pub struct Errors {
    data: Vec<Error>,
}

impl Errors {
    pub(crate) fn push(&mut self, err: Error) {
        self.data.push(err);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn select(&self, group: ErrorGroup) -> Vec<&Error> {
        self.data.iter().filter(|e| e.group() == group).collect()
    }

    pub fn count_of(&self, kind: ErrorKind) -> usize {
        self.data.iter().filter(|e| e.kind == kind).count()
    }

    /// Whether any parse error was recorded at or after position `mark`.
    pub(crate) fn has_parse_errors_since(&self, mark: usize) -> bool {
        self.data[mark..].iter().any(|e| e.group() == ErrorGroup::Parse)
    }
}

impl Index<usize> for Errors {
    type Output = Error;

    fn index(&self, idx: usize) -> &Error {
        &self.data[idx]
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for e in self.data.iter() {
            writeln!(f, "error: {}", e)?;
        }
        Ok(())
    }
}
