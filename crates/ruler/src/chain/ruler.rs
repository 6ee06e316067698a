//! The chain handle returned by [`RuleFactory::ruler`](crate::RuleFactory::ruler)

use std::fmt;

use crate::chain::{ChainContext, RuleChain};

/// One chain: the shared [`ChainContext`] plus whatever the factory's
/// extension hook returned for it.
///
/// Built-in methods come from [`RuleChain`], [`DeclareType`](crate::chain::DeclareType)
/// and [`Checks`](crate::chain::Checks). Extension members live in `E` and are
/// reached through [`ext`](Ruler::ext) or [`with_ext`](Ruler::with_ext), so
/// they can never shadow a built-in.
///
/// # Examples
///
/// ```rust,ignore
/// let ruler = factory.ruler();
/// ruler.string(()).with_ext(|ext| ext.slug("Bad slug")).max(64, ());
/// let rules = ruler.done();
/// ```
pub struct Ruler<R, P = (), E = ()> {
    ctx: ChainContext<R, P>,
    ext: E,
}

impl<R, P, E> Ruler<R, P, E> {
    pub(crate) fn new(ctx: ChainContext<R, P>, ext: E) -> Self {
        Self { ctx, ext }
    }

    /// The extension fields.
    #[must_use]
    pub fn ext(&self) -> &E {
        &self.ext
    }

    /// Mutable access to the extension fields.
    pub fn ext_mut(&mut self) -> &mut E {
        &mut self.ext
    }

    /// Calls `f` with the extension fields and returns the chain, keeping
    /// extension calls inline with built-in ones.
    pub fn with_ext(&self, f: impl FnOnce(&E)) -> &Self {
        f(&self.ext);
        self
    }

    /// Splits the chain into its context and extension fields.
    pub fn into_parts(self) -> (ChainContext<R, P>, E) {
        (self.ctx, self.ext)
    }
}

impl<R, P, E> RuleChain for Ruler<R, P, E> {
    type Rule = R;
    type Params = P;

    fn context(&self) -> &ChainContext<R, P> {
        &self.ctx
    }
}

impl<R, P, E: fmt::Debug> fmt::Debug for Ruler<R, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ruler")
            .field("context", &self.ctx)
            .field("ext", &self.ext)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{Checks, DeclareType};
    use crate::factory::{RuleFactory, identity};
    use crate::foundation::Validator;
    use crate::value::{TypeTag, Value};

    #[test]
    fn test_with_ext_keeps_chaining() {
        let factory = RuleFactory::new(identity::<()>).with_extension(|ctx| ctx.clone());
        let ruler: Ruler<Validator, (), _> = factory.ruler();
        ruler
            .number(())
            .with_ext(|ext| {
                ext.set_type(TypeTag::Array);
            })
            .min(2, "x");

        let rules = ruler.done();
        assert_eq!(rules.len(), 2);
        assert!(rules[1].call(&Value::array([1])).is_err());
    }

    #[test]
    fn test_ext_mut_updates_extension_state() {
        let factory = RuleFactory::new(identity::<()>).with_extension(|_| Vec::<&str>::new());
        let mut ruler: Ruler<Validator, (), Vec<&str>> = factory.ruler();
        ruler.ext_mut().push("slug");
        ruler.string(());
        assert_eq!(ruler.ext(), &vec!["slug"]);
        assert_eq!(ruler.rules_len(), 1);
    }

    #[test]
    fn test_into_parts_shares_rules() {
        let ruler: Ruler<Validator> = RuleFactory::new(identity).ruler();
        ruler.string(());
        let (ctx, ()) = ruler.into_parts();
        assert_eq!(ctx.rules_len(), 1);
    }
}
