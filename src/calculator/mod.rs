//! Calculator module for the keypad state machine.
//!
//! This module provides functionality to:
//! - Stage operand entry around a queued operator and apply it
//! - Round results and convert them to and from display text
//! - Keep a memory register and briefly show recalled values

mod display;
mod memory;
mod number;
mod session;
mod transient;

pub use display::{DisplaySurface, TextDisplay};
pub use memory::MemoryRegister;
pub use number::{RESULT_DECIMAL_PLACES, UNDEFINED, format_number, parse_display, round_decimal};
pub use session::{Calculation, InputStage, Session};
pub use transient::PendingRevert;
