//! Two-letter candidate language codes and their enumeration.

use crate::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::ops::RangeInclusive;

const LETTERS: RangeInclusive<u8> = b'a'..=b'z';

/// Number of codes produced by [`codes`].
pub const CODE_COUNT: usize = 26 * 26;

/// A code made of exactly two ASCII lowercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code([u8; 2]);

impl Code {
    fn from_letters(first: u8, second: u8) -> Self {
        Code([first, second])
    }

    pub fn parse(code: &str) -> Result<Self, Error> {
        static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]{2}$").expect("valid regex"));

        if !RE.is_match(code) {
            return Err(Error::InvalidCode(code.to_string()));
        }

        let bytes = code.as_bytes();
        Ok(Code::from_letters(bytes[0], bytes[1]))
    }

    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII lowercase letters.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for Code {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

/// Every code from `aa` to `zz`, first letter varying slowest.
pub fn codes() -> impl Iterator<Item = Code> {
    LETTERS.flat_map(|first| LETTERS.map(move |second| Code::from_letters(first, second)))
}
