//! The issued identifier type.

use crate::error::IdParseError;

/// An identifier issued by a registry, rendered as `{key}-{suffix}`.
///
/// The suffix is lowercase base-36 and never contains `-`, so the rendered
/// form splits unambiguously at the last separator even when the key itself
/// contains one. The split point is recorded at construction, which keeps
/// [`ScopedId::key`] and [`ScopedId::suffix`] exact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopedId {
    rendered: String,
    /// Byte offset of the first suffix character. Always `rfind('-') + 1`.
    suffix_start: usize,
}

impl ScopedId {
    /// Assembles an id from a key and a generated suffix.
    pub(crate) fn new(key: &str, suffix: &str) -> Self {
        Self {
            rendered: format!("{}-{}", key, suffix),
            suffix_start: key.len() + 1,
        }
    }

    /// Parses a rendered identifier.
    ///
    /// The string must contain a `-` separator followed by a non-empty
    /// lowercase base-36 suffix.
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        if s.is_empty() {
            return Err(IdParseError::Empty);
        }

        let Some(sep) = s.rfind('-') else {
            return Err(IdParseError::MissingSeparator);
        };

        let suffix = &s[sep + 1..];
        if suffix.is_empty() || !suffix.bytes().all(is_base36_lower) {
            return Err(IdParseError::InvalidSuffix(suffix.to_string()));
        }

        Ok(Self {
            rendered: s.to_string(),
            suffix_start: sep + 1,
        })
    }

    /// Returns the rendered identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Returns the key portion of the identifier.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.rendered[..self.suffix_start - 1]
    }

    /// Returns the random suffix portion of the identifier.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.rendered[self.suffix_start..]
    }

    /// Consumes the id, returning the rendered string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.rendered
    }
}

fn is_base36_lower(b: u8) -> bool {
    b.is_ascii_digit() || b.is_ascii_lowercase()
}

impl std::fmt::Display for ScopedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rendered)
    }
}

impl std::str::FromStr for ScopedId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ScopedId {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

impl From<ScopedId> for String {
    fn from(id: ScopedId) -> Self {
        id.rendered
    }
}

impl serde::Serialize for ScopedId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.rendered)
    }
}

impl<'de> serde::Deserialize<'de> for ScopedId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        let id = ScopedId::parse("row-k3f").unwrap();
        assert_eq!(id.key(), "row");
        assert_eq!(id.suffix(), "k3f");
        assert_eq!(id.to_string(), "row-k3f");
    }

    #[test]
    fn test_parse_key_containing_separator() {
        let id = ScopedId::parse("dialog-title-x0q").unwrap();
        assert_eq!(id.key(), "dialog-title");
        assert_eq!(id.suffix(), "x0q");
    }

    #[test]
    fn test_new_matches_parse_for_hyphenated_key() {
        let built = ScopedId::new("dialog-title", "x0q");
        let parsed = ScopedId::parse("dialog-title-x0q").unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_parse_empty() {
        let result = ScopedId::parse("");
        assert!(matches!(result.unwrap_err(), IdParseError::Empty));
    }

    #[test]
    fn test_parse_missing_separator() {
        let result = ScopedId::parse("rowk3f");
        assert!(matches!(result.unwrap_err(), IdParseError::MissingSeparator));
    }

    #[test]
    fn test_parse_invalid_suffix() {
        assert!(matches!(
            ScopedId::parse("row-").unwrap_err(),
            IdParseError::InvalidSuffix(_)
        ));
        assert!(matches!(
            ScopedId::parse("row-K3F").unwrap_err(),
            IdParseError::InvalidSuffix(_)
        ));
    }

    #[test]
    fn test_from_str() {
        let id: ScopedId = "menu-a1b".parse().unwrap();
        assert_eq!(id.as_str(), "menu-a1b");
    }

    #[test]
    fn test_json_roundtrip() {
        let id = ScopedId::parse("row-k3f").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"row-k3f\"");
        let parsed: ScopedId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_json_rejects_invalid() {
        let result: Result<ScopedId, _> = serde_json::from_str("\"rowk3f\"");
        assert!(result.is_err());
    }
}
