/// Positional tallies split by required-ness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArgCounts {
    pub required: usize,
    pub non_required: usize,
}

impl ArgCounts {
    pub fn all(&self) -> usize {
        self.required + self.non_required
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamCounts {
    pub flags: usize,
    pub args: ArgCounts,
}

impl ParamCounts {
    pub fn all(&self) -> usize {
        self.flags + self.args.all()
    }
}

/// Occurrences seen while parsing, split by whether the matched flag or slot
/// was declared up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsedCounts {
    pub defined: ParamCounts,
    pub undefined: ParamCounts,
}

impl ParsedCounts {
    pub fn flags(&self) -> usize {
        self.defined.flags + self.undefined.flags
    }

    pub fn args(&self) -> usize {
        self.defined.args.all() + self.undefined.args.all()
    }

    pub fn all(&self) -> usize {
        self.flags() + self.args()
    }
}

/// Counters kept by a [`Parser`](crate::Parser).
///
/// Nothing here is ever reset: parsing the same parser twice adds to the
/// parsed tallies again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub defined: ParamCounts,
    pub parsed: ParsedCounts,
}
