use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::value::Value;

/// Invoked once after a clean parse for every matched flag that carries one.
pub type Callback = Rc<dyn Fn()>;

/// A named switch spelled `--long` and/or `-s`, optionally carrying a
/// [`Value`].
#[derive(Clone, Default)]
pub struct Flag {
    pub long: String,
    pub short: String,
    pub description: String,
    pub is_set: bool,
    pub is_declared: bool,
    pub has_value: bool,
    pub value: Value,

    callback: Option<Callback>,
}

impl Flag {
    pub fn new(long: &str, short: &str, desc: &str) -> Flag {
        Flag {
            long: long.to_string(),
            short: short.to_string(),
            description: desc.to_string(),
            ..Flag::default()
        }
    }

    pub fn with_value(mut self, value: Value) -> Flag {
        self.value = value;
        self.has_value = true;
        self
    }

    /// A flag discovered while parsing: exactly one spelling, not declared.
    pub(crate) fn undeclared(spelling: &str) -> Flag {
        if spelling.starts_with("--") {
            Flag::new(spelling, "", "")
        } else {
            Flag::new("", spelling, "")
        }
    }

    /// Valid when either spelling is well-formed.
    pub fn is_valid(&self) -> bool {
        is_long_spelling(&self.long) || is_short_spelling(&self.short)
    }

    /// Concatenation of both spellings; unique per stored flag.
    pub fn key(&self) -> String {
        format!("{}{}", self.long, self.short)
    }

    /// `-s, --long`, `-s` or `--long`.
    pub fn spellings(&self) -> String {
        match (self.short.is_empty(), self.long.is_empty()) {
            (false, false) => format!("{}, {}", self.short, self.long),
            (false, true) => self.short.clone(),
            _ => self.long.clone(),
        }
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    pub fn read<T: FromStr>(&self) -> Result<T, T::Err> {
        self.value.read()
    }

    pub(crate) fn callback(&self) -> Option<&Callback> {
        self.callback.as_ref()
    }

    pub(crate) fn set_callback(&mut self, callback: Option<Callback>) {
        self.callback = callback;
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Flag")
            .field("long", &self.long)
            .field("short", &self.short)
            .field("description", &self.description)
            .field("is_set", &self.is_set)
            .field("is_declared", &self.is_declared)
            .field("has_value", &self.has_value)
            .field("value", &self.value)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

pub(crate) fn is_long_spelling(s: &str) -> bool {
    s.len() > 2 && s.starts_with("--")
}

pub(crate) fn is_short_spelling(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some('-'), Some(c), None) if c != '-'
    )
}
