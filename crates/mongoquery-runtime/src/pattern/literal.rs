//! Regex literal parsing

/// Longest flag suffix accepted in a literal
const MAX_LITERAL_FLAGS: usize = 4;

/// Regex options, independent of any engine's flag encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PatternFlags {
    /// `i`
    pub case_insensitive: bool,
    /// `m`: `^`/`$` match at line boundaries
    pub multi_line: bool,
    /// `s`: `.` matches newlines
    pub dot_all: bool,
    /// `x`: whitespace and `#` comments are ignored
    pub extended: bool,
}

impl PatternFlags {
    /// Parse flag letters. Repeats are allowed; any letter outside `imsx` fails.
    pub fn parse(letters: &str) -> Option<Self> {
        letters.chars().try_fold(Self::default(), |mut flags, c| {
            match c {
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_all = true,
                'x' => flags.extended = true,
                _ => return None,
            }
            Some(flags)
        })
    }
}

/// A `$regex` condition string split into pattern and flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegexLiteral<'a> {
    pub pattern: &'a str,
    pub flags: PatternFlags,
}

impl<'a> RegexLiteral<'a> {
    /// Parse `/pattern/flags`, where the pattern is non-empty and flags are up
    /// to four of `imsx`. Returns `None` when `source` is not in that form.
    pub fn parse(source: &'a str) -> Option<Self> {
        let body = source.strip_prefix('/')?;
        let slash = body.rfind('/')?;
        let (pattern, letters) = (&body[..slash], &body[slash + 1..]);

        if pattern.is_empty() || letters.len() > MAX_LITERAL_FLAGS {
            return None;
        }

        Some(Self {
            pattern,
            flags: PatternFlags::parse(letters)?,
        })
    }

    /// Parse a literal, falling back to the whole string as a flagless pattern
    pub fn from_source(source: &'a str) -> Self {
        Self::parse(source).unwrap_or(Self {
            pattern: source,
            flags: PatternFlags::default(),
        })
    }
}
