/// The shape of a single argv token.
///
/// * A token of length one, one that does not start with `-`, or exactly `--`
///   is positional.
/// * `-x` is a short flag; `-xyz` is a run of short flags.
/// * `--name` is a long flag; `--name=value` carries its value inline. The
///   number is the byte offset of the first `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Positional,
    ShortFlag,
    ShortFlagCluster,
    LongFlagWithEquals(usize),
    LongFlagBare,
}

impl From<&str> for ParamKind {
    fn from(token: &str) -> Self {
        let bytes = token.as_bytes();
        if bytes.len() <= 1 || bytes[0] != b'-' || token == "--" {
            return ParamKind::Positional;
        }

        if bytes[1] != b'-' {
            // Short: count characters, not bytes, so `-é` stays a single flag.
            return if token.chars().count() == 2 {
                ParamKind::ShortFlag
            } else {
                ParamKind::ShortFlagCluster
            };
        }

        match bytes[2..].iter().position(|&b| b == b'=') {
            Some(pos) => ParamKind::LongFlagWithEquals(pos + 2),
            None => ParamKind::LongFlagBare,
        }
    }
}

impl ParamKind {
    pub fn is_flag(self) -> bool {
        self != ParamKind::Positional
    }
}
