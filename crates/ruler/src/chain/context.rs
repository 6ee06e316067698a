//! The per-chain context and its single rule-append choke point

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::chain::scope::SharedScope;
use crate::config::RulerConfig;
use crate::factory::Generator;
use crate::foundation::{RuleResult, Validator};
use crate::value::Value;

/// State of one chain: the ordered rules, the evaluation scope and the
/// generator that turns validators into rules.
///
/// Cloning yields another handle onto the *same* chain; this is how an
/// extension shares the rule list and type tag with the built-in methods.
/// Contexts are never shared between two chains.
pub struct ChainContext<R, P> {
    rules: Arc<Mutex<Vec<R>>>,
    scope: SharedScope,
    generator: Generator<R, P>,
    config: RulerConfig,
}

impl<R, P> ChainContext<R, P> {
    pub(crate) fn new(generator: Generator<R, P>, config: RulerConfig) -> Self {
        Self {
            rules: Arc::new(Mutex::new(Vec::new())),
            scope: SharedScope::new(&config),
            generator,
            config,
        }
    }

    pub(crate) fn scope(&self) -> &SharedScope {
        &self.scope
    }

    /// The factory configuration this chain was built with.
    #[must_use]
    pub fn config(&self) -> &RulerConfig {
        &self.config
    }

    /// Number of rules appended so far.
    #[must_use]
    pub fn rules_len(&self) -> usize {
        self.rules.lock().len()
    }

    /// Clones out the rules appended so far, in order.
    #[must_use]
    pub fn rules(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.rules.lock().clone()
    }

    /// Appends one rule.
    ///
    /// The validator is wrapped so the chain's transformer runs on the input
    /// immediately before the check; the wrapped validator and `params` go to
    /// the generator and its output is pushed onto the rule list. Every
    /// rule-producing method ends up here.
    pub fn push_rule<F>(&self, code: impl Into<Cow<'static, str>>, validator: F, params: Option<P>)
    where
        F: Fn(&Value) -> RuleResult + Send + Sync + 'static,
    {
        let code = code.into();
        let scope = self.scope.clone();
        let wrapped = Validator::new(code.clone(), move |input: &Value| {
            let value = scope.transform(input);
            let result = validator(&value);
            if let Err(error) = &result {
                tracing::debug!(code = %error.code, message = %error.message, "rule failed");
            }
            result
        });

        let rule = (self.generator)(wrapped, params);
        let mut rules = self.rules.lock();
        tracing::trace!(code = %code, index = rules.len(), "rule appended");
        rules.push(rule);
    }
}

impl<R, P> Clone for ChainContext<R, P> {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
            scope: self.scope.clone(),
            generator: Arc::clone(&self.generator),
            config: self.config,
        }
    }
}

impl<R, P> fmt::Debug for ChainContext<R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainContext")
            .field("rules", &self.rules_len())
            .field("type", &self.scope.type_tag())
            .field("flags", &self.scope.flags())
            .field("custom_transformer", &self.scope.has_custom_transformer())
            .finish()
    }
}
