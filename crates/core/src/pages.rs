//! Page count scalar with a custom textual wire format.
//!
//! On the wire a page count is a quoted string, not a bare number: it
//! serializes as `"<N> pages"` and deserializes only from the exact form
//! `"<N> pgs"`. The two suffixes differ deliberately; see DESIGN.md for
//! the convention decision.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

/// Suffix literal appended when encoding a page count.
pub const ENCODE_SUFFIX: &str = "pages";

/// Suffix literal required when decoding a page count.
pub const DECODE_SUFFIX: &str = "pgs";

/// A book's page count.
///
/// The inner value is a 32-bit magnitude matching the INTEGER column it is
/// stored in. Zero is representable on the wire but rejected by book
/// validation, which requires a strictly positive count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pages(pub i32);

/// The wire text did not match the `"<N> pgs"` pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid pages format")]
pub struct InvalidPagesFormat;

impl fmt::Display for Pages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {ENCODE_SUFFIX}", self.0)
    }
}

impl From<i32> for Pages {
    fn from(count: i32) -> Self {
        Pages(count)
    }
}

impl FromStr for Pages {
    type Err = InvalidPagesFormat;

    /// Parse the decode form: exactly two space-separated parts, the second
    /// being the `pgs` literal and the first a base-10 32-bit integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(' ').collect();
        if parts.len() != 2 || parts[1] != DECODE_SUFFIX {
            return Err(InvalidPagesFormat);
        }
        parts[0]
            .parse::<i32>()
            .map(Pages)
            .map_err(|_| InvalidPagesFormat)
    }
}

impl Serialize for Pages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Pages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Any non-string value is the same wire error as a malformed string.
        let raw = String::deserialize(deserializer)
            .map_err(|_| de::Error::custom(InvalidPagesFormat))?;
        raw.parse().map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
