//! Content-Type normalization.
//!
//! Client libraries don't agree on how they render a media type: some pass the
//! server's bytes through (`application/json; charset=utf-8`), others rebuild
//! the value from a parsed form (`application/json;charset=UTF-8`). Values are
//! therefore compared after parsing.

use std::fmt;
use std::str::FromStr;

use mime::Mime;

/// A parsed `Content-Type` value.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentType(Mime);

impl ContentType {
    /// `type/subtype`, lowercase.
    pub fn essence(&self) -> &str {
        self.0.essence_str()
    }

    /// Value of the `charset` parameter without surrounding quotes.
    pub fn charset(&self) -> Option<&str> {
        self.0
            .get_param(mime::CHARSET)
            .map(|name| name.as_str().trim_matches('"'))
    }

    /// Whether `self` (a received value) satisfies `expected`.
    ///
    /// The essence must be equal. A charset is only compared when `expected`
    /// names one, and then case-insensitively. Other parameters are ignored.
    pub fn satisfies(&self, expected: &ContentType) -> bool {
        if !self.essence().eq_ignore_ascii_case(expected.essence()) {
            return false;
        }
        match expected.charset() {
            None => true,
            Some(want) => self
                .charset()
                .is_some_and(|got| got.eq_ignore_ascii_case(want)),
        }
    }
}

impl FromStr for ContentType {
    type Err = mime::FromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<Mime>().map(ContentType)
    }
}

impl From<Mime> for ContentType {
    fn from(mime: Mime) -> Self {
        ContentType(mime)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
