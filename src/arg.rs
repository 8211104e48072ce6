use std::str::FromStr;

use crate::value::Value;

/// Handle to a positional slot inside a [`Parser`](crate::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArgId(usize);

impl ArgId {
    /// Returned by [`Parser::def_arg`](crate::Parser::def_arg) when the
    /// declaration was rejected.
    pub const WRONG: ArgId = ArgId(usize::MAX);

    pub(crate) fn new(idx: usize) -> ArgId {
        ArgId(idx)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_wrong(self) -> bool {
        self == ArgId::WRONG
    }
}

/// A positional argument.
///
/// Arguments with an empty name are anonymous: they are appended by the parser
/// when more positional tokens arrive than were declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub name: String,
    pub description: String,
    pub value: Value,
    pub is_set: bool,
    pub is_required: bool,
}

impl Arg {
    pub const REQUIRED: bool = true;

    /// Declares a named argument. Named arguments start out required.
    pub fn new(name: &str) -> Arg {
        Arg {
            name: name.to_string(),
            description: String::new(),
            value: Value::default(),
            is_set: false,
            is_required: true,
        }
    }

    pub(crate) fn anonymous(text: &str) -> Arg {
        let mut arg = Arg::new("").required(false);
        arg.set(text);
        arg
    }

    pub(crate) fn blank() -> Arg {
        Arg::new("").required(false)
    }

    pub fn description(mut self, desc: &str) -> Arg {
        self.description = desc.to_string();
        self
    }

    pub fn required(mut self, required: bool) -> Arg {
        self.is_required = required;
        self
    }

    pub fn with_value(mut self, value: Value) -> Arg {
        self.value = value;
        self
    }

    pub fn default_value(self, default: &str) -> Arg {
        self.with_value(Value::new(default))
    }

    pub fn is_declared(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.value.text
    }

    pub fn read<T: FromStr>(&self) -> Result<T, T::Err> {
        self.value.read()
    }

    pub(crate) fn set(&mut self, text: &str) {
        self.is_set = true;
        self.value.set(text);
    }
}
