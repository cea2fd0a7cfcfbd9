//! Operators: named numeric rules that render themselves as markup.
//!
//! This module provides:
//! - The immutable [`Operator`] value and its sentinels
//! - Template expansion for expression text
//! - The ordered [`OperatorRegistry`] and the standard keypad table

mod definition;
mod registry;
pub mod template;

pub use definition::{NumericFn, Operator};
pub use registry::OperatorRegistry;
