//! Field-keyed validation error accumulator.
//!
//! A [`Validator`] collects at most one error message per field key, so a
//! single validation pass reports every violated rule without later checks
//! overwriting earlier ones. Each validation call constructs a fresh
//! instance; there is no shared state and no I/O.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// Accumulates validation errors keyed by field name.
///
/// The first error recorded for a key wins; subsequent errors for the same
/// key are ignored.
#[derive(Debug, Default)]
pub struct Validator {
    errors: BTreeMap<String, String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no errors have been recorded.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record `message` for `key` unless the key already has an error.
    pub fn add_error(&mut self, key: &str, message: &str) {
        self.errors
            .entry(key.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Record an error for `key` iff `ok` is false.
    pub fn check(&mut self, ok: bool, key: &str, message: &str) {
        if !ok {
            self.add_error(key, message);
        }
    }

    /// Borrow the accumulated field -> message map.
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Consume the validator, yielding the field -> message map.
    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }
}

/// True iff the slice contains no duplicate values.
pub fn unique<T: Eq + Hash>(values: &[T]) -> bool {
    let distinct: HashSet<&T> = values.iter().collect();
    distinct.len() == values.len()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Validator -----------------------------------------------------------

    #[test]
    fn fresh_validator_is_valid() {
        assert!(Validator::new().valid());
    }

    #[test]
    fn add_error_marks_invalid() {
        let mut v = Validator::new();
        v.add_error("title", "must be provided");
        assert!(!v.valid());
        assert_eq!(v.errors().get("title").unwrap(), "must be provided");
    }

    #[test]
    fn first_error_per_key_wins() {
        let mut v = Validator::new();
        v.add_error("year", "must be provided");
        v.add_error("year", "must not be in the future");
        assert_eq!(v.errors().get("year").unwrap(), "must be provided");
        assert_eq!(v.errors().len(), 1);
    }

    #[test]
    fn errors_on_distinct_keys_all_recorded() {
        let mut v = Validator::new();
        v.add_error("title", "must be provided");
        v.add_error("year", "must be provided");
        assert_eq!(v.errors().len(), 2);
    }

    #[test]
    fn check_records_error_only_when_condition_fails() {
        let mut v = Validator::new();
        v.check(true, "title", "must be provided");
        assert!(v.valid());
        v.check(false, "title", "must be provided");
        assert!(!v.valid());
    }

    #[test]
    fn into_errors_yields_the_map() {
        let mut v = Validator::new();
        v.add_error("pages", "must be provided");
        let errors = v.into_errors();
        assert_eq!(errors.get("pages").unwrap(), "must be provided");
    }

    // -- unique --------------------------------------------------------------

    #[test]
    fn unique_true_for_distinct_values() {
        assert!(unique(&["a", "b"]));
    }

    #[test]
    fn unique_false_for_duplicates() {
        assert!(!unique(&["a", "a"]));
    }

    #[test]
    fn unique_true_for_empty_slice() {
        assert!(unique::<String>(&[]));
    }
}
