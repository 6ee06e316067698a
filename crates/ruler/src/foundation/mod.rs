//! Building blocks shared by the chain and its consumers
//!
//! - **Errors**: [`RuleError`], [`RulerError`]
//! - **Messages**: [`Message`], [`RuleMessage`]
//! - **Validators**: [`Validator`] and the [`Validate`] trait

pub mod error;
pub mod message;
pub mod traits;
pub mod validator;

pub use error::{RuleError, RuleResult, RulerError};
pub use message::{Message, RuleMessage};
pub use traits::{Validate, first_failure};
pub use validator::{Validator, ValidatorFn};
