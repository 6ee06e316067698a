//! Type tags shared by values and chain contexts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The semantic type a chain has declared, and the kind a [`Value`](super::Value) has.
///
/// A chain starts out tagged [`TypeTag::String`]. Type-declaration methods
/// retag it; type-scoped checks read the tag when they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    #[default]
    String,
    Number,
    Array,
    Boolean,
    Object,
    Symbol,
    #[serde(rename = "bigint")]
    BigInt,
    Null,
    Undefined,
}

impl TypeTag {
    /// All tags, in declaration order.
    pub const ALL: [TypeTag; 9] = [
        TypeTag::String,
        TypeTag::Number,
        TypeTag::Array,
        TypeTag::Boolean,
        TypeTag::Object,
        TypeTag::Symbol,
        TypeTag::BigInt,
        TypeTag::Null,
        TypeTag::Undefined,
    ];

    /// Lowercase name of the tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Array => "array",
            TypeTag::Boolean => "boolean",
            TypeTag::Object => "object",
            TypeTag::Symbol => "symbol",
            TypeTag::BigInt => "bigint",
            TypeTag::Null => "null",
            TypeTag::Undefined => "undefined",
        }
    }

    /// Returns true for `number` and `bigint`.
    #[inline]
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, TypeTag::Number | TypeTag::BigInt)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown type tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type tag '{0}'")]
pub struct UnknownTypeTag(pub String);

impl FromStr for TypeTag {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.name() == needle)
            .ok_or_else(|| UnknownTypeTag(s.to_string()))
    }
}
