use std::fmt::{Display, Formatter};

/// The component separator of a person name value.
pub const COMPONENT_SEPARATOR: char = '^';
/// The separator of component groups (alphabetic, ideographic, phonetic).
pub const GROUP_SEPARATOR: char = '=';

/// Represents a person name with its five components,
/// each owned independently.
///
/// The wire form is `last^first^middle^prefix^suffix`.
/// Only the first (alphabetic) component group is kept.
/// Missing components are empty.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct PersonName {
    prefix: String,
    first: String,
    middle: String,
    last: String,
    suffix: String,
}

fn trim_padding(s: &str) -> &str {
    s.trim_matches(|c: char| c == ' ' || c == '\0')
}

impl PersonName {
    /// Create a person name from its components.
    pub fn new(
        prefix: impl Into<String>,
        first: impl Into<String>,
        middle: impl Into<String>,
        last: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        PersonName {
            prefix: prefix.into(),
            first: first.into(),
            middle: middle.into(),
            last: last.into(),
            suffix: suffix.into(),
        }
    }

    /// Split a single person name value into its components.
    ///
    /// Each component is trimmed of space and NUL padding.
    /// Components beyond the fifth are ignored.
    pub fn parse(value: &str) -> Self {
        let group = value.split(GROUP_SEPARATOR).next().unwrap_or_default();
        let mut parts = group.split(COMPONENT_SEPARATOR).map(trim_padding);
        let last = parts.next().unwrap_or_default().to_string();
        let first = parts.next().unwrap_or_default().to_string();
        let middle = parts.next().unwrap_or_default().to_string();
        let prefix = parts.next().unwrap_or_default().to_string();
        let suffix = parts.next().unwrap_or_default().to_string();
        PersonName {
            prefix,
            first,
            middle,
            last,
            suffix,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
    pub fn first(&self) -> &str {
        &self.first
    }
    pub fn middle(&self) -> &str {
        &self.middle
    }
    pub fn last(&self) -> &str {
        &self.last
    }
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether all components are empty.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
            && self.first.is_empty()
            && self.middle.is_empty()
            && self.last.is_empty()
            && self.suffix.is_empty()
    }

    /// Build the wire form, dropping trailing empty components.
    pub fn to_dicom_string(&self) -> String {
        let parts = [
            self.last.as_str(),
            self.first.as_str(),
            self.middle.as_str(),
            self.prefix.as_str(),
            self.suffix.as_str(),
        ];
        let used = parts
            .iter()
            .rposition(|p| !p.is_empty())
            .map(|i| i + 1)
            .unwrap_or(0);
        parts[..used].join("^")
    }
}

/// Renders the non-empty components in reading order:
/// prefix, first, middle, last, suffix.
impl Display for PersonName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut sep = "";
        for part in [
            &self.prefix,
            &self.first,
            &self.middle,
            &self.last,
            &self.suffix,
        ] {
            if !part.is_empty() {
                write!(f, "{}{}", sep, part)?;
                sep = " ";
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_components() {
        let name = PersonName::parse("Doe^John^^Dr^Jr");
        assert_eq!(name.last(), "Doe");
        assert_eq!(name.first(), "John");
        assert_eq!(name.middle(), "");
        assert_eq!(name.prefix(), "Dr");
        assert_eq!(name.suffix(), "Jr");
    }

    #[test]
    fn parse_with_fewer_delimiters() {
        let name = PersonName::parse("Adams^John Robert ");
        assert_eq!(name.last(), "Adams");
        assert_eq!(name.first(), "John Robert");
        assert_eq!(name.middle(), "");
        assert_eq!(name.prefix(), "");
        assert_eq!(name.suffix(), "");

        let name = PersonName::parse("SMITH");
        assert_eq!(name.last(), "SMITH");
        assert_eq!(name.first(), "");
    }

    #[test]
    fn parse_keeps_alphabetic_group_only() {
        let name = PersonName::parse("Yamada^Tarou=山田^太郎");
        assert_eq!(name.last(), "Yamada");
        assert_eq!(name.first(), "Tarou");
    }

    #[test]
    fn display_and_wire_form() {
        let name = PersonName::new("Rev.", "John", "Robert", "Adams", "B.A.");
        assert_eq!(name.to_string(), "Rev. John Robert Adams B.A.");
        assert_eq!(name.to_dicom_string(), "Adams^John^Robert^Rev.^B.A.");

        let name = PersonName::parse("Doe^Jane");
        assert_eq!(name.to_string(), "Jane Doe");
        assert_eq!(name.to_dicom_string(), "Doe^Jane");
        assert!(PersonName::parse("  ").is_empty());
    }
}
