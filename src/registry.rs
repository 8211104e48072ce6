use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use crate::flag::{is_long_spelling, is_short_spelling, Flag};
use crate::kind::ParamKind;

/// Stable handle to a flag stored inside a [`Parser`](crate::Parser).
///
/// Both spellings of a flag resolve to the same handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlagId(usize);

impl FlagId {
    /// Returned by [`Parser::def_flag`](crate::Parser::def_flag) when the
    /// flag was rejected.
    pub const WRONG: FlagId = FlagId(usize::MAX);

    pub fn is_wrong(self) -> bool {
        self == FlagId::WRONG
    }
}

/// Owning arena of flags plus the lookup indexes into it.
///
/// The indexes only ever hold handles, so growing the arena never invalidates
/// a lookup.
#[derive(Debug, Default)]
pub(crate) struct FlagStore {
    data: Vec<Flag>,
    keys: BTreeMap<String, FlagId>,
    longs: BTreeMap<String, FlagId>,
    shorts: BTreeMap<String, FlagId>,
}

impl FlagStore {
    pub fn get(&self, id: FlagId) -> Option<&Flag> {
        self.data.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FlagId, &Flag)> {
        self.data.iter().enumerate().map(|(i, f)| (FlagId(i), f))
    }

    pub fn long(&self, spelling: &str) -> Option<FlagId> {
        self.longs.get(spelling).copied()
    }

    pub fn short(&self, spelling: &str) -> Option<FlagId> {
        self.shorts.get(spelling).copied()
    }

    /// Exact lookup by either spelling.
    pub fn find(&self, spelling: &str) -> Option<FlagId> {
        self.long(spelling).or_else(|| self.short(spelling))
    }

    /// The already-stored flag sharing a spelling with `flag`, if any.
    pub fn conflict(&self, flag: &Flag) -> Option<FlagId> {
        self.keys.get(&flag.key()).copied()
            .or_else(|| if flag.long.is_empty() { None } else { self.long(&flag.long) })
            .or_else(|| if flag.short.is_empty() { None } else { self.short(&flag.short) })
    }

    /// Resolves a query the way the parser would see it as a token: exact
    /// matches win, `--name=value` falls back to `--name` and a short run
    /// `-abc` to its leading `-a`.
    pub fn resolve(&self, query: &str) -> Option<FlagId> {
        self.find(query)
            .or_else(|| lead_spelling(query).and_then(|s| self.find(s)))
    }

    /// Stores `flag` and indexes each of its well-formed spellings. Callers
    /// check for conflicts first.
    pub fn insert(&mut self, flag: Flag) -> FlagId {
        let id = FlagId(self.data.len());
        if is_long_spelling(&flag.long) {
            self.longs.insert(flag.long.clone(), id);
        }
        if is_short_spelling(&flag.short) {
            self.shorts.insert(flag.short.clone(), id);
        }
        self.keys.insert(flag.key(), id);
        self.data.push(flag);
        id
    }
}

impl Index<FlagId> for FlagStore {
    type Output = Flag;

    fn index(&self, id: FlagId) -> &Flag {
        &self.data[id.0]
    }
}

impl IndexMut<FlagId> for FlagStore {
    fn index_mut(&mut self, id: FlagId) -> &mut Flag {
        &mut self.data[id.0]
    }
}

/// The single flag spelling a flag-shaped token stands for, or `None` when the
/// token is positional or has no usable name (`--=x`).
pub(crate) fn lead_spelling(token: &str) -> Option<&str> {
    match ParamKind::from(token) {
        ParamKind::Positional => None,
        ParamKind::ShortFlag | ParamKind::LongFlagBare => Some(token),
        ParamKind::ShortFlagCluster => {
            let end = token.char_indices().nth(2).map_or(token.len(), |(i, _)| i);
            Some(&token[..end])
        }
        ParamKind::LongFlagWithEquals(eq) => {
            let name = &token[..eq];
            if is_long_spelling(name) { Some(name) } else { None }
        }
    }
}
