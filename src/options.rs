use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

/// Which entries the help printer lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpShow {
    /// Only entries that carry a description.
    Described = 0,
    /// Every declared entry.
    Declared = 1,
    /// Declared entries plus whatever parsing discovered.
    All = 2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpOptions {
    /// Declare `--help`/`-h` when the parser is built.
    pub add: bool,
    /// Leave out the blank lines between help sections.
    pub compact: bool,
    /// Minimum column at which descriptions start.
    pub margin: usize,
    pub show: HelpShow,
    /// Indentation for entries.
    pub tab: String,
}

impl Default for HelpOptions {
    fn default() -> Self {
        HelpOptions {
            add: true,
            compact: true,
            margin: 0,
            show: HelpShow::Declared,
            tab: "    ".to_string(),
        }
    }
}

/// Parser configuration, usually written as an interlaced string such as
/// `"program.name=tool,help.show=2"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Shown in the usage line; seeded from `argv[0]` when left empty.
    pub program_name: String,
    /// Reserved; the parser does not consult it.
    pub strict: bool,
    pub help: HelpOptions,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("option is not a key=value pair: {0:?}")]
    MissingSeparator(String),
    #[error("option {key} expects a boolean, got {value:?}")]
    InvalidBool { key: String, value: String },
    #[error("option {key} expects a number, got {value:?}: {source}")]
    InvalidNumber {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("help.show expects 0, 1 or 2, got {0:?}")]
    InvalidShow(String),
}

impl Options {
    pub fn named(program_name: &str) -> Options {
        Options {
            program_name: program_name.to_string(),
            ..Options::default()
        }
    }

    /// Parses a comma-interlaced option string on top of the defaults.
    pub fn parse(interlaced: &str) -> Result<Options, OptionsError> {
        let mut opts = Options::default();
        for item in split_interlaced(interlaced) {
            opts.apply_pair(item)?;
        }
        Ok(opts)
    }

    /// Same as [`Options::parse`] for an already split list of `key=value`
    /// strings.
    pub fn from_list<I, S>(items: I) -> Result<Options, OptionsError>
        where I: IntoIterator<Item = S>, S: AsRef<str>
    {
        let mut opts = Options::default();
        for item in items {
            opts.apply_pair(item.as_ref())?;
        }
        Ok(opts)
    }

    /// Applies a single `key=value` item.
    pub fn apply_pair(&mut self, item: &str) -> Result<(), OptionsError> {
        match item.split_once('=') {
            Some((key, value)) => self.set(key.trim(), value),
            None => Err(OptionsError::MissingSeparator(item.to_string())),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), OptionsError> {
        match key {
            "program.name" => self.program_name = value.trim().to_string(),
            "mode.strict" => self.strict = parse_bool(key, value)?,
            "help.add" => self.help.add = parse_bool(key, value)?,
            "help.compact" => self.help.compact = parse_bool(key, value)?,
            "help.margin" => {
                self.help.margin = value.trim().parse().map_err(|e| OptionsError::InvalidNumber {
                    key: key.to_string(),
                    value: value.to_string(),
                    source: e,
                })?
            }
            "help.show" => {
                self.help.show = match value.trim() {
                    "0" => HelpShow::Described,
                    "1" => HelpShow::Declared,
                    "2" => HelpShow::All,
                    _ => return Err(OptionsError::InvalidShow(value.to_string())),
                }
            }
            "help.tab" => self.help.tab = value.to_string(),
            _ => warn!(key, "ignoring unknown option"),
        }
        Ok(())
    }
}

impl FromStr for Options {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Options::parse(s)
    }
}

pub(crate) fn split_interlaced(interlaced: &str) -> impl Iterator<Item = &str> {
    interlaced.split(',').filter(|item| !item.trim().is_empty())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, OptionsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(OptionsError::InvalidBool { key: key.to_string(), value: value.to_string() }),
    }
}
