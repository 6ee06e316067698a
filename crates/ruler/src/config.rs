//! Factory-wide configuration
//!
//! A [`RulerConfig`] is supplied once to a [`RuleFactory`](crate::RuleFactory)
//! and shared by every chain it constructs.

use serde::{Deserialize, Serialize};

use crate::value::TypeTag;

/// Environment variable naming the initial type tag of new chains.
pub const ENV_DEFAULT_TYPE: &str = "RULER_DEFAULT_TYPE";

/// Environment variable selecting how string length is measured.
pub const ENV_LENGTH_MODE: &str = "RULER_LENGTH_MODE";

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How `min`, `max` and `length` count the length of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
    /// Count UTF-16 code units, matching host string `length` semantics.
    Utf16,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
            LengthMode::Utf16 => input.encode_utf16().count(),
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bytes" => Some(LengthMode::Bytes),
            "chars" => Some(LengthMode::Chars),
            "utf16" | "utf-16" => Some(LengthMode::Utf16),
            _ => None,
        }
    }
}

// ============================================================================
// CONFIG
// ============================================================================

/// Configuration shared by all chains of one factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    /// Type tag a fresh chain starts with.
    pub default_type: TypeTag,
    /// String length measurement for `min` / `max` / `length`.
    pub length_mode: LengthMode,
}

impl RulerConfig {
    /// Create configuration from environment variables.
    ///
    /// Unset variables keep their defaults; unparsable ones are logged and
    /// ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through
    /// `lookup` instead of the process environment.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DEFAULT_TYPE) {
            match raw.parse::<TypeTag>() {
                Ok(tag) => config = config.with_default_type(tag),
                Err(error) => tracing::warn!(
                    var = ENV_DEFAULT_TYPE,
                    %error,
                    "ignoring invalid default type"
                ),
            }
        }

        if let Some(raw) = lookup(ENV_LENGTH_MODE) {
            match LengthMode::parse(&raw) {
                Some(mode) => config = config.with_length_mode(mode),
                None => tracing::warn!(
                    var = ENV_LENGTH_MODE,
                    value = %raw,
                    "ignoring invalid length mode"
                ),
            }
        }

        config
    }

    /// Counts string length in UTF-16 code units.
    #[must_use]
    pub fn utf16() -> Self {
        Self::default().with_length_mode(LengthMode::Utf16)
    }

    /// Sets the initial type tag.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_type(mut self, tag: TypeTag) -> Self {
        self.default_type = tag;
        self
    }

    /// Sets the string length mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_measure_modes() {
        let s = "h\u{e9}\u{1f600}";
        assert_eq!(LengthMode::Bytes.measure(s), 1 + 2 + 4);
        assert_eq!(LengthMode::Chars.measure(s), 3);
        assert_eq!(LengthMode::Utf16.measure(s), 4);
    }

    #[test]
    fn test_defaults() {
        let config = RulerConfig::default();
        assert_eq!(config.default_type, TypeTag::String);
        assert_eq!(config.length_mode, LengthMode::Chars);
        assert_eq!(RulerConfig::utf16().length_mode, LengthMode::Utf16);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: RulerConfig = serde_json::from_str(r#"{"length_mode":"utf16"}"#).unwrap();
        assert_eq!(config.length_mode, LengthMode::Utf16);
        assert_eq!(config.default_type, TypeTag::String);

        let config: RulerConfig = serde_json::from_str(r#"{"default_type":"bigint"}"#).unwrap();
        assert_eq!(config.default_type, TypeTag::BigInt);
    }

    #[test]
    fn test_parse_length_mode() {
        assert_eq!(LengthMode::parse("UTF-16"), Some(LengthMode::Utf16));
        assert_eq!(LengthMode::parse(" bytes "), Some(LengthMode::Bytes));
        assert_eq!(LengthMode::parse("graphemes"), None);
    }

    #[test]
    fn test_from_lookup_applies_valid_overrides() {
        let config = RulerConfig::from_lookup(lookup(&[
            (ENV_DEFAULT_TYPE, "array"),
            (ENV_LENGTH_MODE, "UTF-16"),
        ]));
        assert_eq!(config.default_type, TypeTag::Array);
        assert_eq!(config.length_mode, LengthMode::Utf16);
    }

    #[test]
    fn test_from_lookup_ignores_invalid_values() {
        let config = RulerConfig::from_lookup(lookup(&[
            (ENV_DEFAULT_TYPE, "date"),
            (ENV_LENGTH_MODE, "graphemes"),
        ]));
        assert_eq!(config, RulerConfig::default());

        let partial = RulerConfig::from_lookup(lookup(&[
            (ENV_DEFAULT_TYPE, "nope"),
            (ENV_LENGTH_MODE, "bytes"),
        ]));
        assert_eq!(partial.default_type, TypeTag::String);
        assert_eq!(partial.length_mode, LengthMode::Bytes);
    }

    #[test]
    fn test_from_lookup_without_variables_is_default() {
        assert_eq!(RulerConfig::from_lookup(|_| None), RulerConfig::default());
    }

    #[test]
    fn test_builders() {
        let config = RulerConfig::default()
            .with_default_type(TypeTag::Number)
            .with_length_mode(LengthMode::Bytes);
        assert_eq!(config.default_type, TypeTag::Number);
        assert_eq!(config.length_mode, LengthMode::Bytes);
    }
}
