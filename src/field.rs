//! Field-level validation
//!
//! Decides whether a value can be written to a CoNLL file verbatim and read
//! back unchanged.

use crate::error::WriteError;
use std::fmt;

/// Reserved token for an empty LEMMA or FEATS
pub const EMPTY: &str = "_";

/// Columns per data line, including the two unused trailing ones
pub const FIELD_COUNT: usize = 10;

/// Separator between FEATS entries
pub const FEATS_SEPARATOR: char = '|';

/// Return whether `text` can be written as a field.
///
/// Tabs, newlines and spaces are never allowed. A required field must be
/// non-empty. An optional field must not be `_`, which would read back as
/// empty.
pub fn is_valid(text: &str, empty_allowed: bool) -> bool {
    if memchr::memchr3(b'\t', b'\n', b' ', text.as_bytes()).is_some() {
        return false;
    }

    if empty_allowed {
        text != EMPTY
    } else {
        !text.is_empty()
    }
}

/// The validated columns of a node line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Form,
    Lemma,
    CPosTag,
    PosTag,
    Feats,
    DepRel,
}

impl Field {
    /// Column index in a data line
    pub fn index(self) -> usize {
        match self {
            Field::Form => 1,
            Field::Lemma => 2,
            Field::CPosTag => 3,
            Field::PosTag => 4,
            Field::Feats => 5,
            Field::DepRel => 7,
        }
    }

    /// Whether the field may hold the empty value.
    ///
    /// For FEATS this applies to each entry, not to the list.
    pub fn empty_allowed(self) -> bool {
        matches!(self, Field::Lemma)
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Form => "FORM",
            Field::Lemma => "LEMMA",
            Field::CPosTag => "CPOSTAG",
            Field::PosTag => "POSTAG",
            Field::Feats => "FEATS",
            Field::DepRel => "DEPREL",
        }
    }

    /// Validate a single value for this field
    pub fn check(self, value: &str) -> Result<(), WriteError> {
        if is_valid(value, self.empty_allowed()) {
            Ok(())
        } else {
            Err(WriteError::InvalidField {
                field: self,
                value: value.to_string(),
            })
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validate every FEATS entry; the list itself may be empty
pub fn check_feats(feats: &[String]) -> Result<(), WriteError> {
    if feats.iter().all(|feat| is_valid(feat, Field::Feats.empty_allowed())) {
        Ok(())
    } else {
        Err(WriteError::InvalidFeats {
            value: feats.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_whitespace() {
        for text in ["a b", "a\tb", "a\nb", " ", "\t", "\n", "x "] {
            assert!(!is_valid(text, false), "{:?}", text);
            assert!(!is_valid(text, true), "{:?}", text);
        }
    }

    #[test]
    fn test_required_must_be_non_empty() {
        assert!(!is_valid("", false));
        assert!(is_valid("dog", false));
        // Underscore is an ordinary value in a required field
        assert!(is_valid("_", false));
    }

    #[test]
    fn test_optional_rejects_sentinel() {
        assert!(is_valid("", true));
        assert!(!is_valid("_", true));
        assert!(is_valid("__", true));
        assert!(is_valid("a_b", true));
    }

    #[test]
    fn test_other_whitespace_is_allowed() {
        // Only tab, newline and plain space are reserved
        assert!(is_valid("a\u{00a0}b", false));
        assert!(is_valid("a\rb", false));
    }

    #[test]
    fn test_field_check() {
        assert!(Field::Form.check("dog").is_ok());
        assert!(Field::Lemma.check("").is_ok());

        match Field::Lemma.check("_") {
            Err(WriteError::InvalidField { field, value }) => {
                assert_eq!(field, Field::Lemma);
                assert_eq!(value, "_");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let err = Field::DepRel.check("").unwrap_err();
        assert_eq!(err.to_string(), "invalid DEPREL: \"\"");
    }

    #[test]
    fn test_check_feats() {
        assert!(check_feats(&[]).is_ok());
        assert!(check_feats(&["Case=Nom".to_string(), "_".to_string()]).is_ok());

        let err = check_feats(&["Case=Nom".to_string(), String::new()]).unwrap_err();
        assert_eq!(err.to_string(), "invalid FEATS: [\"Case=Nom\", \"\"]");
    }
}
