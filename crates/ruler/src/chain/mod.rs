//! The chain-construction engine
//!
//! A chain is one [`ChainContext`]: an ordered rule list, a type tag, the
//! transform flags and an optional custom transformer. Every chain method
//! takes `&self` and returns `&Self`, so the context identity never changes
//! and later calls see earlier mutations.
//!
//! The method surface is split across three traits, all blanket-implemented
//! for any [`RuleChain`]:
//!
//! - [`RuleChain`]: the choke point (`add_rule`), `done`, the type tag and
//!   the transform pipeline
//! - [`DeclareType`]: `string`, `number`, `array`, ... type declarations
//! - [`Checks`]: the validation catalog (`min`, `email`, `uniq`, `is`, ...)
//!
//! # Type scope
//!
//! Scoped checks read the type tag when the rule *runs*. A check whose scope
//! does not include the current tag always passes; it never reports a type
//! error. Chain checks after the matching type declaration:
//!
//! ```rust,ignore
//! let rules = ruler().array(()).min(2, "Too few").done(); // fails on [1]
//! let rules = ruler().boolean(()).min(2, "Too few").done(); // never fails
//! ```

mod checks;
mod context;
mod declare;
mod ruler;
mod scope;

use std::borrow::Cow;
use std::sync::Arc;

pub use checks::Checks;
pub use context::ChainContext;
pub use declare::DeclareType;
pub use ruler::Ruler;
pub use scope::{TransformFlags, Transformer};

use crate::foundation::{Message, RuleResult};
use crate::value::{TypeTag, Value};

/// The handle an extension hook receives: a clone of the chain's context.
pub type ExtensionContext<R, P> = ChainContext<R, P>;

// ============================================================================
// RULE CHAIN
// ============================================================================

/// Core chain surface shared by [`Ruler`](crate::Ruler) and [`ChainContext`].
///
/// Implementors only provide [`context`](RuleChain::context); everything else
/// is provided.
pub trait RuleChain {
    /// The generator's output type.
    type Rule;

    /// Opaque per-rule parameters forwarded to the generator.
    type Params;

    /// The chain's shared context.
    fn context(&self) -> &ChainContext<Self::Rule, Self::Params>;

    /// Appends a rule built from `validator`.
    ///
    /// This is the single choke point: the transformer runs before
    /// `validator`, `params` reach the generator, and the generator's output
    /// is appended.
    fn add_rule<F>(
        &self,
        code: impl Into<Cow<'static, str>>,
        validator: F,
        params: Option<Self::Params>,
    ) -> &Self
    where
        F: Fn(&Value) -> RuleResult + Send + Sync + 'static,
    {
        self.context().push_rule(code, validator, params);
        self
    }

    /// The rules accumulated so far, in order.
    ///
    /// The chain stays usable afterwards; later calls keep appending.
    fn done(&self) -> Vec<Self::Rule>
    where
        Self::Rule: Clone,
    {
        self.context().rules()
    }

    /// Number of rules accumulated so far.
    fn rules_len(&self) -> usize {
        self.context().rules_len()
    }

    /// The most recently declared type tag.
    fn current_type(&self) -> TypeTag {
        self.context().scope().type_tag()
    }

    /// Retags the chain without appending a rule.
    fn set_type(&self, tag: TypeTag) -> &Self {
        self.context().scope().set_type_tag(tag);
        self
    }

    /// Resolves a message, running it if it is lazy.
    fn get_message(&self, message: &Message) -> String {
        message.resolve()
    }

    // ==================== Transform pipeline ====================

    /// Trim string values before each check.
    fn trim(&self) -> &Self {
        self.context().scope().update_flags(|f| f.trim = true);
        self
    }

    /// Lowercase string values before each check.
    fn to_lower_case(&self) -> &Self {
        self.context().scope().update_flags(|f| f.to_lower_case = true);
        self
    }

    /// Uppercase string values before each check.
    fn to_upper_case(&self) -> &Self {
        self.context().scope().update_flags(|f| f.to_upper_case = true);
        self
    }

    fn should_trim(&self) -> bool {
        self.context().scope().flags().trim
    }

    fn should_to_lower_case(&self) -> bool {
        self.context().scope().flags().to_lower_case
    }

    fn should_to_upper_case(&self) -> bool {
        self.context().scope().flags().to_upper_case
    }

    /// Installs a custom transformer.
    ///
    /// Replaces the flag-driven transform entirely; the last one installed
    /// wins. Applies to every rule of the chain, including those appended
    /// earlier.
    fn transform<F>(&self, f: F) -> &Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        tracing::debug!("custom transformer installed");
        self.context().scope().set_transformer(Arc::new(f));
        self
    }

    /// Applies the chain's current transformer to `value`.
    fn transformer(&self, value: &Value) -> Value {
        self.context().scope().transform(value).into_owned()
    }
}

impl<R, P> RuleChain for ChainContext<R, P> {
    type Rule = R;
    type Params = P;

    fn context(&self) -> &ChainContext<R, P> {
        self
    }
}
