use std::env;
use std::ops::Index;
use std::rc::Rc;
use std::str::FromStr;

use bit_set::BitSet;
use tracing::{debug, trace, warn};

use crate::arg::{Arg, ArgId};
use crate::counts::Counts;
use crate::errors::{Error, ErrorKind, Errors, Suspect};
use crate::flag::{Callback, Flag};
use crate::kind::ParamKind;
use crate::options::{split_interlaced, Options};
use crate::printer::Printer;
use crate::registry::{lead_spelling, FlagId, FlagStore};
use crate::value::Value;

/// Where a matched flag takes its value from.
#[derive(Debug, Clone, Copy)]
enum ValueSource<'t> {
    /// The token after index `.0`, if any.
    Next(usize),
    /// Text after the `=` of `--name=value`.
    Inline(&'t str),
    /// Leading letters of a short run never take a value.
    Switch,
}

/// State of a single walk over the argument vector.
struct Pass<'t> {
    tokens: &'t [String],
    /// Indices not yet consumed, either as a parameter or as a flag value.
    pending: BitSet,
    /// Flags whose callbacks fire after a clean run, in match order.
    queue: Vec<FlagId>,
    cursor: usize,
    outstanding: usize,
}

/// Registry of declared flags and arguments plus everything a parse left
/// behind: values, counters and errors.
///
/// ```
/// use argparse_lite::{Arg, Flag, Parser, Value};
///
/// let mut p = Parser::new();
/// p.def_flag(Flag::new("--size", "-s", "Size in bytes.").with_value(Value::new("0").required(true)));
/// p.def_arg(Arg::new("file"));
///
/// assert!(p.parse(vec!["prog", "--size", "300", "data.bin"]));
/// assert_eq!(p["-s"].value.text, "300");
/// assert_eq!(p[0].text(), "data.bin");
/// ```
pub struct Parser {
    options: Options,
    program: String,

    flags: FlagStore,
    args: Vec<Arg>,
    errors: Errors,
    counts: Counts,

    wrong_flag: Flag,
    wrong_arg: Arg,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl Parser {
    pub fn new() -> Parser {
        Parser::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Parser {
        let mut p = Parser {
            program: options.program_name.clone(),
            options,
            flags: FlagStore::default(),
            args: vec!(),
            errors: Errors::default(),
            counts: Counts::default(),
            wrong_flag: Flag::default(),
            wrong_arg: Arg::blank(),
        };

        if p.options.help.add {
            p.def_flag(Flag::new("--help", "-h", "Show this help."));
        }
        p
    }

    /// Builds a parser from `"key=value,key=value"`. Malformed items are
    /// logged and skipped; use [`Options::parse`] to get them as errors.
    pub fn from_interlaced(interlaced: &str) -> Parser {
        Parser::from_option_list(split_interlaced(interlaced))
    }

    pub fn from_option_list<I, S>(items: I) -> Parser
        where I: IntoIterator<Item = S>, S: AsRef<str>
    {
        let mut options = Options::default();
        for item in items {
            if let Err(e) = options.apply_pair(item.as_ref()) {
                warn!(error = %e, "skipping parser option");
            }
        }
        Parser::with_options(options)
    }


    //----------------------------------------------------------------
    // declaration
    //----------------------------------------------------------------

    /// Declares `flag` and returns its handle.
    ///
    /// An invalid flag records an [`ErrorKind::InvalidFlag`] error and yields
    /// [`FlagId::WRONG`]. A flag sharing a spelling
    /// with an existing one records a [`ErrorKind::FlagRedeclared`] error and
    /// yields the existing handle.
    pub fn def_flag(&mut self, flag: Flag) -> FlagId {
        self.declare(flag, None)
    }

    /// Like [`Parser::def_flag`]; `callback` runs once after a clean parse
    /// that matched the flag.
    pub fn def_flag_with_callback<F>(&mut self, flag: Flag, callback: F) -> FlagId
        where F: Fn() + 'static
    {
        self.declare(flag, Some(Rc::new(callback)))
    }

    fn declare(&mut self, mut flag: Flag, callback: Option<Callback>) -> FlagId {
        if !flag.is_valid() {
            warn!(long = %flag.long, short = %flag.short, "rejecting malformed flag");
            let detail = format!("{:?} / {:?}", flag.long, flag.short);
            self.errors.push(Error::new(ErrorKind::InvalidFlag, &detail, Suspect::None));
            return FlagId::WRONG;
        }

        if let Some(existing) = self.flags.conflict(&flag) {
            warn!(flag = %flag.spellings(), "flag already declared");
            self.errors.push(Error::new(
                ErrorKind::FlagRedeclared, &flag.spellings(), Suspect::Flag(existing)
            ));
            return existing;
        }

        flag.is_declared = true;
        flag.set_callback(callback);
        self.counts.defined.flags += 1;
        self.flags.insert(flag)
    }

    /// Appends a positional slot. Arguments without a name are rejected with
    /// [`ArgId::WRONG`] and an [`ErrorKind::NamelessArgument`] error.
    pub fn def_arg(&mut self, arg: Arg) -> ArgId {
        if !arg.is_declared() {
            warn!("rejecting argument without a name");
            self.errors.push(Error::new(ErrorKind::NamelessArgument, "", Suspect::None));
            return ArgId::WRONG;
        }

        if arg.is_required {
            self.counts.defined.args.required += 1;
        } else {
            self.counts.defined.args.non_required += 1;
        }
        self.args.push(arg);
        ArgId::new(self.args.len() - 1)
    }


    //----------------------------------------------------------------
    // parsing
    //----------------------------------------------------------------

    /// Parses a full argument vector, program name first.
    ///
    /// Returns `true` when this call recorded no parse errors.
    pub fn parse<I, S>(&mut self, argv: I) -> bool
        where I: IntoIterator<Item = S>, S: Into<String>
    {
        let tokens: Vec<String> = argv.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return self.fail(ErrorKind::ArgVEmpty);
        }
        self.run(&tokens)
    }

    /// Parses a C-style `argc`/`argv` pair where both the vector and its
    /// elements may be absent.
    pub fn parse_argv<S: AsRef<str>>(&mut self, argc: i32, argv: Option<&[Option<S>]>) -> bool {
        let argv = match argv {
            Some(v) if argc >= 1 && v.first().map_or(false, Option::is_some) => v,
            _ => return self.fail(ErrorKind::ArgVEmpty),
        };

        let argc = argc as usize;
        if argc > argv.len() || argv[..argc].iter().any(Option::is_none) {
            return self.fail(ErrorKind::ArgCountMismatch);
        }

        let tokens: Vec<String> = argv[..argc].iter()
            .flatten()
            .map(|s| s.as_ref().to_string())
            .collect();
        self.run(&tokens)
    }

    pub fn parse_env(&mut self) -> bool {
        self.parse(env::args())
    }

    fn fail(&mut self, kind: ErrorKind) -> bool {
        debug!(?kind, "argument vector rejected");
        self.errors.push(Error::new(kind, "", Suspect::None));
        false
    }

    fn run(&mut self, tokens: &[String]) -> bool {
        let mark = self.errors.len();
        if self.program.is_empty() {
            self.program = tokens[0].clone();
        }

        let mut pending = BitSet::with_capacity(tokens.len());
        for i in 1..tokens.len() {
            pending.insert(i);
        }

        let mut pass = Pass {
            tokens,
            pending,
            queue: vec!(),
            cursor: 0,
            outstanding: self.args.iter().filter(|a| a.is_declared() && a.is_required).count(),
        };

        for idx in 1..tokens.len() {
            // claimed as the value of the previous flag
            if !pass.pending.remove(idx) {
                continue;
            }

            let token = tokens[idx].as_str();
            let kind = ParamKind::from(token);
            debug!(idx, token, ?kind, "classified");

            match kind {
                ParamKind::Positional => self.take_positional(&mut pass, token),
                ParamKind::ShortFlag | ParamKind::LongFlagBare => {
                    let id = self.resolve_or_add(token);
                    self.set_flag(&mut pass, id, ValueSource::Next(idx));
                }
                ParamKind::ShortFlagCluster => {
                    let letters = token[1..].chars().count();
                    for (n, c) in token[1..].chars().enumerate() {
                        if c == '-' {
                            trace!(token, "skipping dash inside short run");
                            continue;
                        }
                        let source = if n + 1 == letters {
                            ValueSource::Next(idx)
                        } else {
                            ValueSource::Switch
                        };
                        let id = self.resolve_or_add(&format!("-{}", c));
                        self.set_flag(&mut pass, id, source);
                    }
                }
                ParamKind::LongFlagWithEquals(eq) => {
                    if let Some(id) = self.flags.long(token) {
                        self.set_flag(&mut pass, id, ValueSource::Next(idx));
                        continue;
                    }

                    let name = &token[..eq];
                    if lead_spelling(token).is_none() {
                        // `--=value`: nothing to split on, keep the token whole
                        let id = self.resolve_or_add(token);
                        self.set_flag(&mut pass, id, ValueSource::Next(idx));
                        continue;
                    }

                    let id = match self.flags.long(name) {
                        Some(id) => id,
                        None => {
                            // keeps the inline text, unlike a bare undeclared flag
                            debug!(flag = name, "adding undeclared flag with value");
                            self.flags.insert(Flag::undeclared(name).with_value(Value::new("")))
                        }
                    };
                    self.set_flag(&mut pass, id, ValueSource::Inline(&token[eq + 1..]));
                }
            }
        }

        self.report_missing_args(&pass);

        let ok = !self.errors.has_parse_errors_since(mark);
        debug!(ok, errors = self.errors.len() - mark, "parse finished");
        if ok {
            let callbacks: Vec<Callback> = pass.queue.iter()
                .filter_map(|id| self.flags[*id].callback().cloned())
                .collect();
            for cb in callbacks {
                cb();
            }
        }
        ok
    }

    fn take_positional(&mut self, pass: &mut Pass, token: &str) {
        match self.args.get_mut(pass.cursor) {
            Some(arg) if arg.is_declared() => {
                arg.set(token);
                if arg.is_required {
                    self.counts.parsed.defined.args.required += 1;
                    pass.outstanding = pass.outstanding.saturating_sub(1);
                } else {
                    self.counts.parsed.defined.args.non_required += 1;
                }
            }
            Some(arg) => {
                arg.set(token);
                self.counts.parsed.undefined.args.non_required += 1;
            }
            None => {
                trace!(token, "adding undeclared argument");
                self.args.push(Arg::anonymous(token));
                self.counts.parsed.undefined.args.non_required += 1;
            }
        }
        pass.cursor += 1;
    }

    fn resolve_or_add(&mut self, spelling: &str) -> FlagId {
        match self.flags.find(spelling) {
            Some(id) => id,
            None => {
                debug!(flag = spelling, "adding undeclared flag");
                self.flags.insert(Flag::undeclared(spelling))
            }
        }
    }

    fn set_flag(&mut self, pass: &mut Pass, id: FlagId, source: ValueSource) {
        let (declared, has_value, required, has_callback) = {
            let f = &mut self.flags[id];
            f.is_set = true;
            (f.is_declared, f.has_value, f.value.required, f.has_callback())
        };

        if declared {
            self.counts.parsed.defined.flags += 1;
        } else {
            self.counts.parsed.undefined.flags += 1;
        }
        if has_callback && !pass.queue.contains(&id) {
            pass.queue.push(id);
        }
        if !has_value {
            return;
        }

        let tokens = pass.tokens;
        let (candidate, claim) = match source {
            ValueSource::Switch => return,
            ValueSource::Inline(text) => (text, None),
            ValueSource::Next(idx) => match tokens.get(idx + 1) {
                None => {
                    if required {
                        self.missing_value(id, "no value follows");
                    }
                    return;
                }
                Some(next) => {
                    let next = next.as_str();
                    if required && ParamKind::from(next).is_flag() && self.flags.resolve(next).is_some() {
                        self.missing_value(id, &format!("{} is a flag", next));
                        return;
                    }
                    (next, Some(idx + 1))
                }
            },
        };

        // a rejected next token stays pending and is parsed on its own
        if !self.flags[id].value.accepts(candidate) {
            let detail = format!("{:?} is not one of {}", candidate, self.flags[id].value.choose_str(0));
            self.missing_value(id, &detail);
            return;
        }
        if let Some(next) = claim {
            pass.pending.remove(next);
        }

        let flag = &mut self.flags[id];
        trace!(flag = %flag.spellings(), value = candidate, "value taken");
        flag.value.set(candidate);
    }

    fn missing_value(&mut self, id: FlagId, why: &str) {
        let detail = format!("{} ({})", self.flags[id].spellings(), why);
        self.errors.push(Error::new(ErrorKind::RequiredFlagValueMissing, &detail, Suspect::Flag(id)));
    }

    fn report_missing_args(&mut self, pass: &Pass) {
        if pass.outstanding == 0 {
            return;
        }

        let missing: Vec<usize> = (pass.cursor..self.args.len())
            .rev()
            .filter(|&i| self.args[i].is_declared() && self.args[i].is_required)
            .take(pass.outstanding)
            .collect();
        for i in missing {
            let name = self.args[i].name.clone();
            self.errors.push(Error::new(
                ErrorKind::RequiredArgumentMissing, &name, Suspect::Arg(ArgId::new(i))
            ));
        }
    }


    //----------------------------------------------------------------
    // queries
    //----------------------------------------------------------------

    /// Handle of the flag a query resolves to, see [`Parser::flag`].
    pub fn flag_id(&self, spelling: &str) -> Option<FlagId> {
        self.flags.resolve(spelling)
    }

    pub fn get_flag(&self, spelling: &str) -> Option<&Flag> {
        self.flag_id(spelling).map(|id| &self.flags[id])
    }

    /// Looks a flag up by long or short spelling, by `--name=value` or by a
    /// short run such as `-abc` (which stands for `-a`).
    ///
    /// An unknown flag-shaped query adds a blank undeclared flag and returns
    /// it. A positional-shaped query returns a blank placeholder.
    pub fn flag(&mut self, spelling: &str) -> &Flag {
        let id = match self.flags.resolve(spelling) {
            Some(id) => id,
            None => match lead_spelling(spelling) {
                Some(lead) => self.flags.insert(Flag::undeclared(lead)),
                None => return &self.wrong_flag,
            },
        };
        &self.flags[id]
    }

    pub fn flag_at(&self, id: FlagId) -> Option<&Flag> {
        self.flags.get(id)
    }

    /// Every stored flag, declared and undeclared, in insertion order.
    pub fn flags(&self) -> impl Iterator<Item = (FlagId, &Flag)> {
        self.flags.iter()
    }

    pub fn get_arg(&self, idx: usize) -> Option<&Arg> {
        self.args.get(idx)
    }

    /// Positional argument `idx`; blank undeclared slots are added up to it
    /// when it does not exist yet.
    pub fn arg(&mut self, idx: usize) -> &Arg {
        while self.args.len() <= idx {
            self.args.push(Arg::blank());
        }
        &self.args[idx]
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Whether the flag was given on the command line.
    pub fn check(&self, spelling: &str) -> bool {
        self.get_flag(spelling).map_or(false, |f| f.is_set)
    }

    /// The flag's value when it was given and its value parses as `T`.
    pub fn check_and_read<T: FromStr>(&self, spelling: &str) -> Option<T> {
        self.get_flag(spelling)
            .filter(|f| f.is_set)
            .and_then(|f| f.read().ok())
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn counts(&self) -> &Counts {
        &self.counts
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn program_name(&self) -> &str {
        &self.program
    }

    /// Every recorded error, one `error: <message>` line each.
    pub fn error(&self) -> String {
        self.errors.to_string()
    }

    pub fn help(&self) -> String {
        let mut printer = Printer::new(&self.program, &self.options.help);
        for (idx, a) in self.args.iter().enumerate() {
            printer.add_arg(idx, a);
        }
        for (_, f) in self.flags.iter() {
            printer.add_flag(f);
        }
        printer.to_string()
    }

    pub fn print_help(&self) {
        print!("{}", self.help());
    }
}

impl<'a> Index<&'a str> for Parser {
    type Output = Flag;

    /// Unknown flags index to a blank placeholder rather than panicking.
    fn index(&self, spelling: &'a str) -> &Flag {
        self.get_flag(spelling).unwrap_or(&self.wrong_flag)
    }
}

impl Index<FlagId> for Parser {
    type Output = Flag;

    fn index(&self, id: FlagId) -> &Flag {
        self.flags.get(id).unwrap_or(&self.wrong_flag)
    }
}

impl Index<usize> for Parser {
    type Output = Arg;

    fn index(&self, idx: usize) -> &Arg {
        self.args.get(idx).unwrap_or(&self.wrong_arg)
    }
}

impl Index<ArgId> for Parser {
    type Output = Arg;

    fn index(&self, id: ArgId) -> &Arg {
        &self[id.index()]
    }
}
