use std::fmt;

use crate::arg::Arg;
use crate::flag::Flag;
use crate::options::{HelpOptions, HelpShow};
use crate::value::Value;

// gap between the widest left column and the descriptions
const MID_PAD_LENGTH: usize = 4;

/// `<name>` for a required value, `[<name>]` otherwise. Choose-lists stand in
/// for a missing name.
pub fn value_placeholder(value: &Value, required: bool) -> String {
    let name = if !value.name.is_empty() {
        value.name.clone()
    } else if !value.choose_list().is_empty() {
        value.choose_str(0)
    } else {
        "value".to_string()
    };

    if required {
        format!("<{}>", name)
    } else {
        format!("[<{}>]", name)
    }
}

trait Descriptor {
    fn left(&self) -> String;

    fn left_len(&self) -> usize {
        self.left().chars().count()
    }
}
trait Printable {
    fn should_print(&self, show: HelpShow) -> bool;
    fn print(&self, f: &mut fmt::Formatter, tab: &str, column: usize) -> fmt::Result;
}


pub struct Entry {
    left: String,
    desc: String,
    default: String,
    choices: String,
    required: bool,
    declared: bool,
}
impl Entry {
    pub fn from_flag(flag: &Flag) -> Entry {
        let left = if flag.has_value {
            format!("{} {}", flag.spellings(), value_placeholder(&flag.value, flag.value.required))
        } else {
            flag.spellings()
        };

        let (default, choices) = if flag.has_value {
            (flag.value.default_text().to_string(), flag.value.choose_str(0))
        } else {
            (String::new(), String::new())
        };

        Entry {
            left,
            desc: flag.description.clone(),
            default,
            choices,
            required: false,
            declared: flag.is_declared,
        }
    }

    pub fn from_arg(idx: usize, arg: &Arg) -> Entry {
        let left = if arg.is_declared() {
            arg.name.clone()
        } else {
            format!("#{}", idx)
        };

        Entry {
            left,
            desc: arg.description.clone(),
            default: arg.value.default_text().to_string(),
            choices: arg.value.choose_str(0),
            required: arg.is_required,
            declared: arg.is_declared(),
        }
    }

    fn accessories(&self) -> String {
        let mut parts: Vec<String> = vec!();
        if self.required {
            parts.push("required".to_string());
        }
        if !self.choices.is_empty() {
            parts.push(format!("one of: {}", self.choices));
        }
        if !self.default.is_empty() {
            parts.push(format!("default: {}", self.default));
        }

        if parts.is_empty() {
            "".to_string()
        } else {
            format!("[{}]", parts.join(", "))
        }
    }
}
impl Descriptor for Entry {
    fn left(&self) -> String {
        self.left.clone()
    }
}
impl Printable for Entry {
    fn should_print(&self, show: HelpShow) -> bool {
        match show {
            HelpShow::Described => self.declared && !self.desc.is_empty(),
            HelpShow::Declared => self.declared,
            HelpShow::All => true,
        }
    }
    fn print(&self, f: &mut fmt::Formatter, tab: &str, column: usize) -> fmt::Result {
        let used = tab.chars().count() + self.left_len();
        let mid = " ".repeat(column.saturating_sub(used).max(1));

        let desc = if self.declared {
            self.desc.clone()
        } else {
            "(undeclared)".to_string()
        };
        let right = [desc, self.accessories()].iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<String>>()
            .join(" ");

        if right.is_empty() {
            writeln!(f, "{}{}", tab, self.left)
        } else {
            writeln!(f, "{}{}{}{}", tab, self.left, mid, right)
        }
    }
}


/// Renders help text for a parser: a usage line, then the `Arguments:` and
/// `Flags:` sections.
pub struct Printer {
    program: String,
    options: HelpOptions,
    args: Vec<Entry>,
    flags: Vec<Entry>,
    usage_args: Vec<String>,

    longest_left: usize,
}
impl Printer {
    pub fn new(program: &str, options: &HelpOptions) -> Printer {
        Printer {
            program: program.to_string(),
            options: options.clone(),
            args: vec!(),
            flags: vec!(),
            usage_args: vec!(),
            longest_left: 0,
        }
    }

    fn calculate_longest<T: Descriptor>(&mut self, desc: &T) {
        self.longest_left = std::cmp::max(self.longest_left, desc.left_len());
    }

    pub fn add_arg(&mut self, idx: usize, arg: &Arg) {
        let entry = Entry::from_arg(idx, arg);
        if !entry.should_print(self.options.show) {
            return;
        }
        if arg.is_declared() {
            self.usage_args.push(if arg.is_required {
                format!("<{}>", arg.name)
            } else {
                format!("[<{}>]", arg.name)
            });
        }
        self.calculate_longest(&entry);
        self.args.push(entry);
    }

    pub fn add_flag(&mut self, flag: &Flag) {
        let entry = Entry::from_flag(flag);
        if !entry.should_print(self.options.show) {
            return;
        }
        self.calculate_longest(&entry);
        self.flags.push(entry);
    }

    fn column(&self) -> usize {
        std::cmp::max(
            self.options.margin,
            self.options.tab.chars().count() + self.longest_left + MID_PAD_LENGTH,
        )
    }

    fn generate_usage(&self) -> String {
        let mut parts = vec!(self.program.clone());
        if !self.flags.is_empty() {
            parts.push("[flags]".to_string());
        }
        parts.extend(self.usage_args.iter().cloned());
        parts.join(" ")
    }

    fn print_section(&self, f: &mut fmt::Formatter, name: &str, entries: &[Entry]) -> fmt::Result {
        if entries.is_empty() {
            return Ok(());
        }
        if !self.options.compact {
            writeln!(f)?;
        }
        writeln!(f, "{}:", name)?;
        let column = self.column();
        for e in entries.iter() {
            e.print(f, &self.options.tab, column)?;
        }
        Ok(())
    }
}

impl fmt::Display for Printer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "usage: {}", self.generate_usage())?;
        self.print_section(f, "Arguments", &self.args)?;
        self.print_section(f, "Flags", &self.flags)
    }
}
