//! # Keypad calculator core
//!
//! Operators are immutable values pairing a pure numeric rule with a format
//! template, so the same value computes a result and renders the expression
//! that produced it:
//!
//! ```
//! use zcalc::OperatorRegistry;
//!
//! let registry = OperatorRegistry::standard();
//! let power = registry.lookup("power").unwrap();
//! assert_eq!(power.apply(&[2.0, 10.0]), 1024.0);
//! assert_eq!(power.format_values(&[2.0, 10.0]), "2<sup>10</sup>");
//! assert_eq!(power.format_values(&[2.0]), "2<sup>⛶</sup>");
//! ```
//!
//! A [`Session`] drives the keypad: digits go into the primary display,
//! operator keys capture operands, `=` applies the queued operator and writes
//! the rounded result and the rendered expression to a [`DisplaySurface`].
//!
//! ```
//! use zcalc::{DisplaySurface, InputEvent, Session, TextDisplay};
//!
//! let mut session = Session::standard(TextDisplay::new()).unwrap();
//! for event in [
//!     InputEvent::Digit(8),
//!     InputEvent::operator("divide"),
//!     InputEvent::Digit(0),
//!     InputEvent::Equals,
//! ] {
//!     session.handle(event);
//! }
//! assert_eq!(session.display().primary(), "undefined");
//! assert_eq!(session.display().secondary(), "8 ÷ 0");
//! ```
//!
//! Results are rounded to [`RESULT_DECIMAL_PLACES`] decimal places, so
//! `0.1 + 0.2` shows as `0.3`. Other numeric edge cases (`ln` of a negative
//! number, square roots of negatives) show as `NaN` rather than failing.
//!
//! Standard operators: add, subtract, multiply, divide, hundredth, square,
//! square-root, power, nth-root, scientific, modulus, log10, ln, logb and the
//! circular and hyperbolic sine, cosine and tangent.

pub mod calculator;
pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod logging;
pub mod operator;

pub use calculator::{
    Calculation, DisplaySurface, InputStage, RESULT_DECIMAL_PLACES, Session, TextDisplay,
};
pub use config::{CalculatorConfig, KeyBinding};
pub use error::ConfigurationError;
pub use input::{Constant, InputEvent, KeyboardMapper};
pub use operator::{NumericFn, Operator, OperatorRegistry};
