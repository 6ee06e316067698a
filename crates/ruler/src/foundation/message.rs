//! Failure messages and per-rule parameters
//!
//! A [`Message`] is either literal text or a thunk. Thunks run only inside a
//! failing branch, so an expensive message costs nothing when the rule passes.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// MESSAGE
// ============================================================================

/// Text reported when a rule fails.
#[derive(Clone)]
pub enum Message {
    /// Literal text.
    Static(Cow<'static, str>),
    /// Produced on demand at failure time.
    Lazy(Arc<dyn Fn() -> String + Send + Sync>),
}

impl Message {
    /// Creates a message that is computed only when a rule fails.
    ///
    /// ```rust,ignore
    /// let msg = Message::lazy(|| format!("expected at most {} items", limits.max()));
    /// ```
    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Lazy(Arc::new(f))
    }

    /// Resolves the message text, running the thunk if there is one.
    #[must_use]
    pub fn resolve(&self) -> String {
        match self {
            Self::Static(text) => text.to_string(),
            Self::Lazy(f) => f(),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<&'static str> for Message {
    fn from(text: &'static str) -> Self {
        Self::Static(Cow::Borrowed(text))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Static(Cow::Owned(text))
    }
}

impl From<Cow<'static, str>> for Message {
    fn from(text: Cow<'static, str>) -> Self {
        Self::Static(text)
    }
}

// ============================================================================
// RULE MESSAGE
// ============================================================================

/// The trailing arguments every rule-producing chain method accepts: an
/// optional message and optional opaque parameters for the generator.
///
/// Chain methods take `impl Into<RuleMessage<P>>`, so callers write:
///
/// ```rust,ignore
/// ruler.string(());                       // declare only, never fails
/// ruler.string("Must be string");         // literal message
/// ruler.min(3, Message::lazy(|| ...));    // deferred message
/// ruler.min(3, ("Too short", params));    // message plus generator params
/// ruler.max(9, RuleMessage::params(p));   // default message, with params
/// ```
#[derive(Debug, Clone)]
pub struct RuleMessage<P> {
    /// Message to report; `None` means "not given".
    pub message: Option<Message>,
    /// Opaque parameters forwarded to the generator.
    pub params: Option<P>,
}

impl<P> RuleMessage<P> {
    /// Neither message nor parameters.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            message: None,
            params: None,
        }
    }

    /// Parameters only.
    pub fn params(params: P) -> Self {
        Self {
            message: None,
            params: Some(params),
        }
    }

    /// Attaches parameters.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_params(mut self, params: P) -> Self {
        self.params = Some(params);
        self
    }

    /// Splits into message and parameters.
    pub fn into_parts(self) -> (Option<Message>, Option<P>) {
        (self.message, self.params)
    }
}

impl<P> Default for RuleMessage<P> {
    fn default() -> Self {
        Self::none()
    }
}

impl<P> From<()> for RuleMessage<P> {
    fn from((): ()) -> Self {
        Self::none()
    }
}

impl<P> From<Message> for RuleMessage<P> {
    fn from(message: Message) -> Self {
        Self {
            message: Some(message),
            params: None,
        }
    }
}

impl<P> From<&'static str> for RuleMessage<P> {
    fn from(text: &'static str) -> Self {
        Message::from(text).into()
    }
}

impl<P> From<String> for RuleMessage<P> {
    fn from(text: String) -> Self {
        Message::from(text).into()
    }
}

impl<P, M> From<Option<M>> for RuleMessage<P>
where
    M: Into<Message>,
{
    fn from(message: Option<M>) -> Self {
        Self {
            message: message.map(Into::into),
            params: None,
        }
    }
}

impl<P, M> From<(M, P)> for RuleMessage<P>
where
    M: Into<Message>,
{
    fn from((message, params): (M, P)) -> Self {
        Self {
            message: Some(message.into()),
            params: Some(params),
        }
    }
}
