//! Shared traits, identifiers, and tag parsing for finance records.

use std::fmt;

use uuid::Uuid;

/// Exposes a stable identifier for records in a dataset.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Provides read-only access to a record's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving the primary numeric amount.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Generates a fresh record identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Returned when a textual tag does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParseError {
    pub kind: &'static str,
    pub value: String,
}

impl TagParseError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for TagParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.value)
    }
}

impl std::error::Error for TagParseError {}

/// Looks up `value` among `(tag, variant)` pairs, ignoring ASCII case and surrounding whitespace.
pub(crate) fn parse_tag<T: Copy>(
    kind: &'static str,
    value: &str,
    table: &[(&'static str, T)],
) -> Result<T, TagParseError> {
    let needle = value.trim();
    table
        .iter()
        .find(|(tag, _)| tag.eq_ignore_ascii_case(needle))
        .map(|(_, variant)| *variant)
        .ok_or_else(|| TagParseError::new(kind, needle))
}

/// Upper-cases the first character of a tag (`food` becomes `Food`).
pub fn title_case(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalises_first_letter_only() {
        assert_eq!(title_case("food"), "Food");
        assert_eq!(title_case("semester break"), "Semester break");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn parse_tag_reports_kind_and_value() {
        let table = [("one", 1), ("two", 2)];
        assert_eq!(parse_tag("number", " TWO ", &table), Ok(2));
        let err = parse_tag("number", "three", &table).unwrap_err();
        assert_eq!(err.to_string(), "unknown number `three`");
    }
}
