//! Rule factories, generators and the extension hook
//!
//! A [`RuleFactory`] is built once from a generator (and optionally an
//! extension hook and a [`RulerConfig`]). Each [`RuleFactory::ruler`] call
//! then starts an independent chain.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ruler::prelude::*;
//!
//! let factory = rule_factory(describe::<&'static str>);
//! let rules = factory
//!     .ruler()
//!     .string(("Must be string", "type"))
//!     .min(3, ("Too short", "length"))
//!     .done();
//! assert_eq!(rules[1].params, Some("length"));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::chain::{ChainContext, ExtensionContext, Ruler};
use crate::config::RulerConfig;
use crate::foundation::{RuleResult, Validate, Validator};
use crate::value::Value;

/// Turns a wrapped validator and its optional params into a rule.
pub type Generator<R, P> = Arc<dyn Fn(Validator, Option<P>) -> R + Send + Sync>;

/// Builds the extension fields for one chain.
pub type ExtensionHook<R, P, E> = Arc<dyn Fn(&ExtensionContext<R, P>) -> E + Send + Sync>;

// ============================================================================
// RULE FACTORY
// ============================================================================

/// Constructs chains that share one generator, extension hook and config.
///
/// Cheap to clone and safe to share across threads; chains built from it
/// share no mutable state.
pub struct RuleFactory<R, P = (), E = ()> {
    generator: Generator<R, P>,
    extend: ExtensionHook<R, P, E>,
    config: RulerConfig,
}

impl<R, P> RuleFactory<R, P, ()> {
    /// Creates a factory without extension fields.
    pub fn new<G>(generator: G) -> Self
    where
        G: Fn(Validator, Option<P>) -> R + Send + Sync + 'static,
    {
        Self {
            generator: Arc::new(generator),
            extend: Arc::new(|_: &ExtensionContext<R, P>| ()),
            config: RulerConfig::default(),
        }
    }
}

impl<R, P, E> RuleFactory<R, P, E> {
    /// Replaces the extension hook.
    ///
    /// `hook` runs once per [`ruler`](RuleFactory::ruler) call with a handle
    /// onto the fresh chain; clone the handle to keep it. Whatever it returns
    /// becomes the chain's [`ext`](Ruler::ext).
    #[must_use]
    pub fn with_extension<E2, F>(self, hook: F) -> RuleFactory<R, P, E2>
    where
        F: Fn(&ExtensionContext<R, P>) -> E2 + Send + Sync + 'static,
    {
        RuleFactory {
            generator: self.generator,
            extend: Arc::new(hook),
            config: self.config,
        }
    }

    /// Replaces the configuration used by chains built from now on.
    #[must_use]
    pub fn with_config(mut self, config: RulerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &RulerConfig {
        &self.config
    }

    /// Starts a new, empty chain.
    #[must_use]
    pub fn ruler(&self) -> Ruler<R, P, E> {
        let ctx = ChainContext::new(Arc::clone(&self.generator), self.config);
        let ext = (self.extend)(&ctx);
        tracing::trace!(default_type = %self.config.default_type, "chain started");
        Ruler::new(ctx, ext)
    }
}

impl<R, P, E> Clone for RuleFactory<R, P, E> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            extend: Arc::clone(&self.extend),
            config: self.config,
        }
    }
}

impl<R, P, E> fmt::Debug for RuleFactory<R, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleFactory")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`RuleFactory::new`].
pub fn rule_factory<R, P, G>(generator: G) -> RuleFactory<R, P>
where
    G: Fn(Validator, Option<P>) -> R + Send + Sync + 'static,
{
    RuleFactory::new(generator)
}

// ============================================================================
// STOCK GENERATORS
// ============================================================================

/// Generator that keeps the validator as the rule and drops params.
#[must_use]
pub fn identity<P>(validator: Validator, _params: Option<P>) -> Validator {
    validator
}

/// Generator that records the rule code and params next to the validator.
#[must_use]
pub fn describe<P>(validator: Validator, params: Option<P>) -> RuleDescriptor<P> {
    RuleDescriptor {
        code: validator.code().to_string(),
        validator,
        params,
    }
}

/// A validator together with the chain method that produced it and the
/// params it was given.
#[derive(Debug, Clone)]
pub struct RuleDescriptor<P> {
    pub code: String,
    pub validator: Validator,
    pub params: Option<P>,
}

impl<P> Validate for RuleDescriptor<P> {
    type Input = Value;

    fn validate(&self, input: &Value) -> RuleResult {
        self.validator.call(input)
    }
}
