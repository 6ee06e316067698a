//! Type-declaration methods

use crate::chain::{ChainContext, RuleChain};
use crate::foundation::{RuleError, RuleMessage};
use crate::guards;
use crate::macros::declare_types;
use crate::value::{TypeTag, Value};

/// Retags the chain and appends the matching type assertion.
///
/// Without a message the appended rule always passes: the call only exists
/// to set the tag for later scoped checks.
pub(crate) fn declare<R, P, F>(
    ctx: &ChainContext<R, P>,
    tag: TypeTag,
    code: &'static str,
    message: RuleMessage<P>,
    accepts: F,
) where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    ctx.scope().set_type_tag(tag);

    let (message, params) = message.into_parts();
    ctx.push_rule(
        code,
        move |value: &Value| match &message {
            Some(message) if !accepts(value) => Err(RuleError::new(code, message.resolve())),
            _ => Ok(()),
        },
        params,
    );
}

/// Type declarations: one method per [`TypeTag`], plus the literal
/// `true` / `false` variants.
///
/// Pass `()` to declare without asserting; pass a message to also fail on
/// values of the wrong type.
///
/// # Examples
///
/// ```rust,ignore
/// let rules = ruler().number("Must be number").done();
/// assert!(rules[0].call(&Value::from("abc")).is_err());
///
/// let rules = ruler().number(()).done();
/// assert!(rules[0].call(&Value::from("abc")).is_ok());
/// ```
pub trait DeclareType: RuleChain {
    declare_types! {
        /// Declares a string.
        fn string("string") => String, |v| guards::is_string(v);

        /// Declares a native number.
        fn number("number") => Number, |v| guards::is_number(v);

        /// Declares an array.
        fn array("array") => Array, |v| guards::is_array(v);

        /// Declares a boolean.
        fn boolean("boolean") => Boolean, |v| guards::is_boolean(v);

        /// Declares a plain object.
        fn object("object") => Object, |v| guards::is_plain_object(v);

        /// Declares a symbol.
        fn symbol("symbol") => Symbol, |v| guards::is_symbol(v);

        /// Declares an arbitrary-precision integer.
        fn bigint("bigint") => BigInt, |v| guards::is_bigint(v);

        /// Declares exactly `null`.
        fn null("null") => Null, |v| matches!(v, Value::Null);

        /// Declares exactly `undefined`.
        fn undefined("undefined") => Undefined, |v| matches!(v, Value::Undefined);

        /// Declares exactly `true`; tags the chain `boolean`.
        fn is_true("true") => Boolean, |v| v.as_bool() == Some(true);

        /// Declares exactly `false`; tags the chain `boolean`.
        fn is_false("false") => Boolean, |v| v.as_bool() == Some(false);
    }
}

impl<T: RuleChain> DeclareType for T {}
