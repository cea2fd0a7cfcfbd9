//! Discrete input events and the ways they are produced.
//!
//! This module provides:
//! - [`InputEvent`], one variant per calculator key
//! - Key bindings for keys carrying a second function
//! - A mapper from physical keyboard keys to events

mod bindings;
mod keyboard;

pub use bindings::KeyBindings;
pub use keyboard::KeyboardMapper;

/// A single key press, fully handled before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A digit from 0 to 9.
    Digit(u8),
    /// The decimal point (scientific notation in second-function mode).
    Decimal,
    /// An operator key, identified by its key name.
    Operator(String),
    /// `=`, run the queued operator.
    Equals,
    /// `%`, hundredth or percentage of the first operand.
    Percentage,
    ClearAll,
    /// Clear the number being entered only.
    Correction,
    Backspace,
    MemoryAdd,
    MemoryRecall,
    MemoryClear,
    ToggleSecondFunction,
    Constant(Constant),
}

impl InputEvent {
    pub fn operator(key: impl Into<String>) -> Self {
        Self::Operator(key.into())
    }
}

/// Constants with a key of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constant {
    Pi,
    Euler,
}

impl Constant {
    /// Label shown on the secondary display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pi => "π",
            // U+212F SCRIPT SMALL E
            Self::Euler => "\u{212F}",
        }
    }

    /// Value entered into the primary display, to ten significant figures.
    pub fn value(&self) -> f64 {
        match self {
            Self::Pi => 3.141592654,
            Self::Euler => 2.718281828,
        }
    }
}
