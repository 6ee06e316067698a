//! Dynamic value model
//!
//! A chain validates one dynamically-typed [`Value`]. The variants line up
//! one-to-one with the [`TypeTag`]s a chain can declare.

mod conversions;
mod kind;
mod numeric;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use num_bigint::BigInt;

pub use kind::{TypeTag, UnknownTypeTag};
pub use numeric::Numeric;

/// Ordered key/value map backing [`Value::Object`].
pub type Object = IndexMap<String, Value>;

/// Any value a rule can be evaluated against.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Undefined,

    /// Explicit null.
    Null,

    /// Boolean value.
    Bool(bool),

    /// IEEE-754 double.
    Number(f64),

    /// Arbitrary-precision integer.
    BigInt(BigInt),

    /// UTF-8 text.
    String(String),

    /// Unique symbol, compared by identity.
    Symbol(Symbol),

    /// Ordered list of values.
    Array(Vec<Value>),

    /// Plain key/value object.
    Object(Object),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a text value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create a bigint value.
    pub fn bigint(v: impl Into<BigInt>) -> Self {
        Self::BigInt(v.into())
    }

    /// Create an array value from anything convertible to values.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Create an object value from key/value pairs.
    pub fn object<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Create a fresh symbol value.
    pub fn symbol(description: impl Into<String>) -> Self {
        Self::Symbol(Symbol::new(description))
    }

    // ==================== Type queries ====================

    /// The type tag this value satisfies.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> TypeTag {
        match self {
            Self::Undefined => TypeTag::Undefined,
            Self::Null => TypeTag::Null,
            Self::Bool(_) => TypeTag::Boolean,
            Self::Number(_) => TypeTag::Number,
            Self::BigInt(_) => TypeTag::BigInt,
            Self::String(_) => TypeTag::String,
            Self::Symbol(_) => TypeTag::Symbol,
            Self::Array(_) => TypeTag::Array,
            Self::Object(_) => TypeTag::Object,
        }
    }

    /// Borrow the text of a string value.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the elements of an array value.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the entries of an object value.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// The boolean payload, if any.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numbers and bigints as a [`Numeric`]; `None` for everything else.
    #[must_use]
    pub fn as_numeric(&self) -> Option<Numeric> {
        match self {
            Self::Number(n) => Some(Numeric::Float(*n)),
            Self::BigInt(b) => Some(Numeric::BigInt(b.clone())),
            _ => None,
        }
    }

    /// Looks up a key on an object value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::BigInt(a), Self::BigInt(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k) == Some(v))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::BigInt(b) => write!(f, "{b}n"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Symbol(sym) => write!(f, "{sym}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// ============================================================================
// SYMBOL
// ============================================================================

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// A unique token. Every [`Symbol::new`] is distinct; clones share identity.
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Arc<str>,
}

impl Symbol {
    /// Mints a new symbol.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: Arc::from(description.into()),
        }
    }

    /// The description given at creation.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description)
    }
}
