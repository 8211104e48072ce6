use std::str::FromStr;

/// The scalar payload shared by flags and positional arguments.
///
/// A value carries its current text, whether a following token *must* supply
/// it, an optional display name/description used by the help printer, and an
/// optional closed list of accepted spellings (the choose-list).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Value {
    pub text: String,
    pub required: bool,
    pub name: String,
    pub description: String,

    default: String,
    choose_list: Vec<String>,
}

impl Value {
    pub const REQUIRED: bool = true;

    pub fn new(default: &str) -> Value {
        Value {
            text: default.to_string(),
            default: default.to_string(),
            ..Value::default()
        }
    }

    /// Builds a value restricted to `choices`. The first choice becomes the
    /// default text.
    pub fn choose<S: AsRef<str>>(choices: &[S]) -> Value {
        Value::new("").with_choices(choices)
    }

    pub fn required(mut self, required: bool) -> Value {
        self.required = required;
        self
    }

    pub fn name(mut self, name: &str) -> Value {
        self.name = name.to_string();
        self
    }

    pub fn description(mut self, desc: &str) -> Value {
        self.description = desc.to_string();
        self
    }

    pub fn with_choices<S: AsRef<str>>(mut self, choices: &[S]) -> Value {
        self.choose_list = choices.iter().map(|c| c.as_ref().to_string()).collect();
        if !self.accepts(&self.text) || self.text.is_empty() {
            if let Some(first) = self.choose_list.first() {
                self.text = first.clone();
                self.default = first.clone();
            }
        }
        self
    }

    pub fn choose_list(&self) -> &[String] {
        &self.choose_list
    }

    pub fn default_text(&self) -> &str {
        &self.default
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// An empty choose-list accepts anything.
    pub fn accepts(&self, candidate: &str) -> bool {
        self.choose_list.is_empty() || self.choose_list.iter().any(|c| c == candidate)
    }

    /// Renders the choose-list as `A|B|C`. A non-zero `limit` truncates the
    /// list and appends `|...` when more choices remain.
    pub fn choose_str(&self, limit: usize) -> String {
        if limit == 0 || limit >= self.choose_list.len() {
            return self.choose_list.join("|");
        }
        format!("{}|...", self.choose_list[..limit].join("|"))
    }

    /// Parses the current text, falling back to the default when the current
    /// text does not parse.
    pub fn read<T: FromStr>(&self) -> Result<T, T::Err> {
        T::from_str(&self.text).or_else(|e| {
            if self.text == self.default {
                Err(e)
            } else {
                T::from_str(&self.default)
            }
        })
    }

    pub(crate) fn set(&mut self, text: &str) {
        self.text = text.to_string();
    }
}
