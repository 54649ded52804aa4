//! Station identifier type.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A validated station identifier.
///
/// Station identifiers are the keys of the station dataset: non-empty
/// strings with no leading or trailing whitespace. This type guarantees
/// that any `StationId` value is valid by construction.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationId;
///
/// let tajrish = StationId::parse("Tajrish").unwrap();
/// assert_eq!(tajrish.as_str(), "Tajrish");
///
/// // Surrounding whitespace is trimmed
/// assert_eq!(StationId::parse(" Tajrish ").unwrap().as_str(), "Tajrish");
///
/// // Empty and all-whitespace input is rejected
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier from a string.
    ///
    /// Surrounding whitespace is trimmed; the trimmed input must be non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationId {
                reason: "must be non-empty",
            });
        }

        Ok(StationId(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid identifiers: non-whitespace-only strings.
    fn valid_id_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z][A-Za-z ]{0,30}[A-Za-z]").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the trimmed original.
        #[test]
        fn roundtrip(s in valid_id_string()) {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.trim());
        }

        /// Any string with a non-whitespace character parses.
        #[test]
        fn non_blank_always_parses(s in "\\s*[a-z0-9]+\\s*") {
            prop_assert!(StationId::parse(&s).is_ok());
        }

        /// Whitespace-only strings are always rejected.
        #[test]
        fn blank_rejected(s in "[ \\t\\n]{0,10}") {
            prop_assert!(StationId::parse(&s).is_err());
        }

        /// Parsing is idempotent: re-parsing an id's string yields an equal id.
        #[test]
        fn parse_idempotent(s in valid_id_string()) {
            let once = StationId::parse(&s).unwrap();
            let twice = StationId::parse(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
