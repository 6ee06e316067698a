//! Evaluation-time state shared between a chain and its validators
//!
//! Validators hold a [`SharedScope`], never the rule list, so a chain's rules
//! cannot keep themselves alive. Everything here is read when a rule runs,
//! not when it is registered.

use std::borrow::Cow;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::{LengthMode, RulerConfig};
use crate::value::{TypeTag, Value};

/// A custom value transformer installed with `transform`.
pub type Transformer = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// The trim / case flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformFlags {
    pub trim: bool,
    pub to_lower_case: bool,
    pub to_upper_case: bool,
}

impl TransformFlags {
    fn any(self) -> bool {
        self.trim || self.to_lower_case || self.to_upper_case
    }

    /// Trim, then lowercase, then uppercase.
    fn apply(self, input: &str) -> String {
        let mut out = if self.trim {
            input.trim().to_string()
        } else {
            input.to_string()
        };
        if self.to_lower_case {
            out = out.to_lowercase();
        }
        if self.to_upper_case {
            out = out.to_uppercase();
        }
        out
    }
}

struct Scope {
    type_tag: TypeTag,
    flags: TransformFlags,
    custom: Option<Transformer>,
}

/// Cloneable handle to one chain's evaluation state.
#[derive(Clone)]
pub(crate) struct SharedScope {
    inner: Arc<RwLock<Scope>>,
    length_mode: LengthMode,
}

impl SharedScope {
    pub(crate) fn new(config: &RulerConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Scope {
                type_tag: config.default_type,
                flags: TransformFlags::default(),
                custom: None,
            })),
            length_mode: config.length_mode,
        }
    }

    pub(crate) fn type_tag(&self) -> TypeTag {
        self.inner.read().type_tag
    }

    pub(crate) fn set_type_tag(&self, tag: TypeTag) {
        self.inner.write().type_tag = tag;
    }

    pub(crate) fn flags(&self) -> TransformFlags {
        self.inner.read().flags
    }

    pub(crate) fn update_flags(&self, f: impl FnOnce(&mut TransformFlags)) {
        f(&mut self.inner.write().flags);
    }

    pub(crate) fn set_transformer(&self, transformer: Transformer) {
        self.inner.write().custom = Some(transformer);
    }

    pub(crate) fn has_custom_transformer(&self) -> bool {
        self.inner.read().custom.is_some()
    }

    pub(crate) fn length_mode(&self) -> LengthMode {
        self.length_mode
    }

    /// Applies the active transformer.
    ///
    /// A custom transformer replaces the flags entirely. Without one, the
    /// flags apply only to string values while the chain is tagged `string`.
    /// The lock is released before any user code runs.
    pub(crate) fn transform<'a>(&self, value: &'a Value) -> Cow<'a, Value> {
        let (tag, flags, custom) = {
            let scope = self.inner.read();
            (scope.type_tag, scope.flags, scope.custom.clone())
        };

        if let Some(custom) = custom {
            return Cow::Owned(custom(value));
        }

        match value {
            Value::String(s) if tag == TypeTag::String && flags.any() => {
                Cow::Owned(Value::String(flags.apply(s)))
            }
            _ => Cow::Borrowed(value),
        }
    }
}
