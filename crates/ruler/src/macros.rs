//! Macros that stamp out the repetitive parts of the chain surface.
//!
//! - [`declare_types!`]: one type-declaration method per tag

// ============================================================================
// DECLARE TYPES MACRO
// ============================================================================

/// Generates type-declaration methods inside a trait that extends
/// [`RuleChain`](crate::chain::RuleChain).
///
/// Each entry names the method, the rule code, the [`TypeTag`](crate::TypeTag)
/// it sets, and the predicate an accepted value satisfies:
///
/// ```rust,ignore
/// declare_types! {
///     /// Declares a string.
///     fn string("string") => String, |v| guards::is_string(v);
/// }
/// ```
///
/// The generated method retags the chain unconditionally and appends a rule
/// that fails only when a message was given and the predicate rejects the
/// (transformed) value.
macro_rules! declare_types {
    ($(
        $(#[$meta:meta])*
        fn $name:ident($code:literal) => $tag:ident, |$v:ident| $accepts:expr;
    )*) => {
        $(
            $(#[$meta])*
            fn $name(&self, message: impl Into<$crate::foundation::RuleMessage<Self::Params>>) -> &Self {
                $crate::chain::declare::declare(
                    self.context(),
                    $crate::value::TypeTag::$tag,
                    $code,
                    message.into(),
                    |$v: &$crate::value::Value| $accepts,
                );
                self
            }
        )*
    };
}

pub(crate) use declare_types;
