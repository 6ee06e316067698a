//! # ruler
//!
//! A fluent rule builder. A chain of calls such as
//! `.string(..).trim().min(3, ..).email(..)` compiles into an ordered list of
//! rules, where the shape of each rule is decided by a caller-supplied
//! generator.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ruler::prelude::*;
//!
//! let factory = rule_factory(identity);
//! let rules = factory
//!     .ruler()
//!     .string("Must be string")
//!     .trim()
//!     .min(3, "Too short")
//!     .email("Invalid email")
//!     .done();
//!
//! assert!(first_failure(&rules, &Value::from("  test@example.com ")).is_none());
//! ```
//!
//! ## Pieces
//!
//! - **Factory**: [`RuleFactory`] holds the generator, an optional extension
//!   hook and a [`RulerConfig`]; [`RuleFactory::ruler`] starts a chain
//! - **Chain**: [`Ruler`] with the [`RuleChain`](chain::RuleChain),
//!   [`DeclareType`](chain::DeclareType) and [`Checks`](chain::Checks) traits
//! - **Values**: the dynamic [`Value`] model and [`Numeric`] comparisons
//! - **Rules**: [`Validator`](foundation::Validator), [`RuleDescriptor`] and
//!   the [`Validate`](foundation::Validate) trait for running them
//!
//! Scoped checks read the chain's type tag when the rule runs, so declare
//! the type before the checks that depend on it.

#![allow(clippy::type_complexity)]

mod macros;

pub mod chain;
pub mod config;
pub mod factory;
pub mod foundation;
pub mod guards;
pub mod prelude;
pub mod value;

pub use chain::Ruler;
pub use config::{LengthMode, RulerConfig};
pub use factory::{RuleDescriptor, RuleFactory, describe, identity, rule_factory};
pub use foundation::{Message, RuleError, RuleMessage, RulerError};
pub use value::{Numeric, TypeTag, Value};
