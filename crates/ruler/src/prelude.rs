//! Prelude module for convenient imports.
//!
//! `use ruler::prelude::*;` brings in the chain traits, the factory and the
//! value model.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ruler::prelude::*;
//!
//! let rules = rule_factory(identity).ruler().number(()).positive(()).done();
//! assert!(rules[0].is_valid(&Value::from(1)));
//! ```

// ============================================================================
// CHAIN: Traits and the chain handle
// ============================================================================

pub use crate::chain::{
    ChainContext, Checks, DeclareType, ExtensionContext, RuleChain, Ruler, TransformFlags,
};

// ============================================================================
// FACTORY: Construction and stock generators
// ============================================================================

pub use crate::factory::{RuleDescriptor, RuleFactory, describe, identity, rule_factory};

// ============================================================================
// FOUNDATION: Errors, messages, validators
// ============================================================================

pub use crate::foundation::{
    Message, RuleError, RuleMessage, RuleResult, RulerError, Validate, Validator, first_failure,
};

// ============================================================================
// VALUES AND CONFIG
// ============================================================================

pub use crate::config::{LengthMode, RulerConfig};
pub use crate::value::{Numeric, Object, TypeTag, Value};
