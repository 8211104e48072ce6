//! A registry-based command-line parser.
//!
//! Flags and positional arguments are declared up front on a [`Parser`],
//! then a single call to [`Parser::parse`] walks the argument vector. Tokens
//! that look like flags but were never declared are registered on the fly
//! instead of failing the parse, and every problem is accumulated as an
//! [`Error`] record rather than returned early.
//!
//! ```no_run
//! use argparse_lite::{argparse, Arg, Flag, Value};
//!
//! let mut p = argparse!("help.show=2");
//! p.def_flag(Flag::new("--verbose", "-v", "Talk more."));
//! p.def_flag(Flag::new("--level", "-l", "Compression level.").with_value(Value::new("6")));
//! p.def_arg(Arg::new("input").description("File to read."));
//!
//! if !p.parse_env() || p.check("--help") {
//!     eprint!("{}", p.error());
//!     p.print_help();
//!     std::process::exit(1);
//! }
//! let level: u32 = p["--level"].read().unwrap_or(6);
//! ```

extern crate bit_set;

mod arg;
mod counts;
pub mod errors;
mod flag;
mod kind;
mod options;
mod parser;
mod printer;
mod registry;
mod value;

pub use arg::{Arg, ArgId};
pub use counts::{ArgCounts, Counts, ParamCounts, ParsedCounts};
pub use errors::*;
pub use flag::{Callback, Flag};
pub use kind::ParamKind;
pub use options::{HelpOptions, HelpShow, Options, OptionsError};
pub use parser::Parser;
pub use registry::FlagId;
pub use value::Value;

#[cfg(test)] mod test_count;
#[cfg(test)] mod test_errors;
#[cfg(test)] mod test_help;
#[cfg(test)] mod test_kind;

/// Builds a [`Parser`] named after the calling crate, optionally applying an
/// interlaced option string on top.
#[macro_export]
macro_rules! argparse {
    () => {{
        $crate::Parser::with_options($crate::Options::named(env!("CARGO_PKG_NAME")))
    }};
    ($opts:expr) => {{
        $crate::Parser::from_interlaced(
            &format!("program.name={},{}", env!("CARGO_PKG_NAME"), $opts)
        )
    }};
}
