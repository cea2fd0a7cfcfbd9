//! The calculation session: staged operand entry around a queued operator.
//!
//! Entry runs through three stages. Typing a number moves from
//! [`InputStage::None`] to [`InputStage::First`]; selecting a binary operator
//! captures the first operand and waits in [`InputStage::Second`]; `=` applies
//! the operator and returns to [`InputStage::None`]. Pressing `=` again
//! repeats the operator on the previous result.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::error::ConfigurationError;
use crate::input::{Constant, InputEvent, KeyBindings};
use crate::operator::{Operator, OperatorRegistry};

use super::display::DisplaySurface;
use super::memory::MemoryRegister;
use super::number::{RESULT_DECIMAL_PLACES, UNDEFINED, format_number, parse_display, round_decimal};
use super::transient::PendingRevert;

const MEMORY_LABEL: &str = "Memory";

/// Which operand is being typed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputStage {
    /// Nothing typed since start, clear or the last calculation.
    #[default]
    None,
    First,
    Second,
}

/// Result of pressing `=`.
#[derive(Clone, Debug, PartialEq)]
pub enum Calculation {
    /// The operator produced a value (possibly `NaN` or infinite).
    Success {
        /// Rendered expression, as shown on the secondary display.
        expression: String,
        /// The rounded value.
        value: f64,
        /// The value as shown on the primary display.
        display_result: String,
    },
    /// Division by zero.
    Undefined {
        /// Rendered expression, as shown on the secondary display.
        expression: String,
    },
}

impl Calculation {
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Undefined { expression } => expression,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The text written to the primary display.
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Undefined { .. } => UNDEFINED,
        }
    }
}

/// One running calculator.
pub struct Session<D: DisplaySurface> {
    registry: Arc<OperatorRegistry>,
    bindings: KeyBindings,
    display: D,
    operands: Vec<f64>,
    pending: Arc<Operator>,
    stage: InputStage,
    second_function: bool,
    /// Set after a calculation: the next keystroke starts a new number.
    blank_on_input: bool,
    memory: MemoryRegister,
    transient: Option<PendingRevert>,
    transient_delay: Duration,
}

impl<D: DisplaySurface> Session<D> {
    /// Create a session over `registry`, resolving the configured key bindings.
    pub fn new(
        registry: Arc<OperatorRegistry>,
        display: D,
        config: &CalculatorConfig,
    ) -> Result<Self, ConfigurationError> {
        let bindings = KeyBindings::resolve(&config.bindings, &registry)?;

        Ok(Self {
            registry,
            bindings,
            display,
            operands: Vec::new(),
            pending: Operator::identity(),
            stage: InputStage::None,
            second_function: false,
            blank_on_input: false,
            memory: MemoryRegister::default(),
            transient: None,
            transient_delay: config.transient_delay(),
        })
    }

    /// A session over the standard operators with the default configuration.
    pub fn standard(display: D) -> Result<Self, ConfigurationError> {
        Self::new(
            OperatorRegistry::standard(),
            display,
            &CalculatorConfig::default(),
        )
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    pub fn stage(&self) -> InputStage {
        self.stage
    }

    /// The operator `=` will apply.
    pub fn pending(&self) -> &Arc<Operator> {
        &self.pending
    }

    pub fn operands(&self) -> &[f64] {
        &self.operands
    }

    pub fn second_function(&self) -> bool {
        self.second_function
    }

    pub fn memory_value(&self) -> f64 {
        self.memory.value()
    }

    /// Whether the memory lamp is lit.
    pub fn memory_indicator(&self) -> bool {
        self.memory.is_set()
    }

    /// Handle one input event.
    pub fn handle(&mut self, event: InputEvent) {
        debug!(?event, stage = ?self.stage, "input event");
        match event {
            InputEvent::Digit(digit) => self.input_digit(digit),
            InputEvent::Decimal => self.input_decimal(),
            InputEvent::Operator(key) => self.press_operator_key(&key),
            InputEvent::Equals => {
                self.calculate();
            }
            InputEvent::Percentage => self.percentage(),
            InputEvent::ClearAll => self.clear_all(),
            InputEvent::Correction => self.correction(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::MemoryAdd => self.memory_add(),
            InputEvent::MemoryRecall => self.memory_recall(),
            InputEvent::MemoryClear => self.memory_clear(),
            InputEvent::ToggleSecondFunction => self.toggle_second_function(),
            InputEvent::Constant(constant) => self.show_constant(constant),
        }
    }

    /// Type a digit into the primary display.
    pub fn input_digit(&mut self, digit: u8) {
        match char::from_digit(u32::from(digit), 10) {
            Some(c) => self.input_char(c),
            None => warn!(digit, "ignoring invalid digit"),
        }
    }

    /// Type a decimal point, or select scientific notation in second-function mode.
    pub fn input_decimal(&mut self) {
        if self.second_function {
            self.select_named("scientific");
        } else {
            self.input_char('.');
        }
    }

    fn input_char(&mut self, c: char) {
        self.flush_transient();
        if std::mem::take(&mut self.blank_on_input) {
            self.blank(true, true);
        }

        let current = self.display.primary().to_string();
        if c == '.' && current.contains('.') {
            return;
        }
        if self.stage == InputStage::None {
            self.stage = InputStage::First;
        }

        let next = match current.as_str() {
            "" | "0" if c == '.' => "0.".to_string(),
            "" | "0" => c.to_string(),
            _ => format!("{current}{c}"),
        };
        self.display.set_primary(&next);
    }

    /// Select the operator bound to `key`.
    ///
    /// Keys without a binding select the registry operator they name.
    pub fn press_operator_key(&mut self, key: &str) {
        let operator = self
            .bindings
            .operator_for(key, self.second_function)
            .or_else(|| self.registry.lookup(key))
            .cloned();

        match operator {
            Some(operator) => self.select_operator(operator),
            None => warn!(key, "no operator for key"),
        }
    }

    fn select_named(&mut self, name: &str) {
        match self.registry.lookup(name).cloned() {
            Some(operator) => self.select_operator(operator),
            None => warn!(name, "operator missing from registry"),
        }
    }

    /// Queue `operator` with the primary display as its first operand.
    ///
    /// Unary operators are applied at once. Others wait for a second operand.
    pub fn select_operator(&mut self, operator: Arc<Operator>) {
        self.flush_transient();
        debug!(operator = operator.name(), "operator selected");

        self.operands = vec![self.buffer_value()];
        self.operands.truncate(operator.arity());
        self.display
            .set_secondary(&operator.format_values(&self.operands));
        self.pending = operator;

        if self.pending.arity() == 1 {
            self.calculate();
        } else {
            self.display.set_primary("0");
            self.stage = InputStage::Second;
            self.blank_on_input = false;
        }
    }

    /// `%`: scientific notation in second-function mode, the hundredth of the
    /// current number before a second operand exists, and otherwise the
    /// second operand as a percentage of the first.
    pub fn percentage(&mut self) {
        if self.second_function {
            self.select_named("scientific");
        } else if self.stage != InputStage::Second {
            self.select_named("hundredth");
        } else {
            self.calculate_with(true);
        }
    }

    /// `=`: apply the queued operator.
    ///
    /// Returns `None` when nothing can be applied.
    pub fn calculate(&mut self) -> Option<Calculation> {
        self.calculate_with(false)
    }

    fn calculate_with(&mut self, percentage: bool) -> Option<Calculation> {
        self.flush_transient();
        if self.pending.is_empty() {
            debug!("no operator queued");
            return None;
        }

        let operator = Arc::clone(&self.pending);
        let arity = operator.arity();

        // A repeat (stage None) overwrites the first operand with the last result.
        let slot = if self.stage == InputStage::None || arity < 2 {
            0
        } else {
            1
        };
        if self.operands.len() <= slot {
            self.operands.resize(slot + 1, f64::NAN);
        }
        self.operands[slot] = self.buffer_value();
        self.operands.truncate(arity);

        let percent = percentage && arity >= 2;
        let mut applied = self.operands.clone();
        if percent {
            applied[1] = applied[0] * (applied[1] / 100.0);
        }

        let value = round_decimal(operator.apply(&applied), RESULT_DECIMAL_PLACES);

        let mut shown: Vec<String> = self.operands.iter().map(|&v| format_number(v)).collect();
        if percent {
            shown[1].push('%');
        }
        let expression = operator.format(&shown);
        self.display.set_secondary(&expression);

        let outcome = if operator.name() == "divide" && applied.get(1) == Some(&0.0) {
            debug!(%expression, "division by zero");
            self.display.set_primary(UNDEFINED);
            self.pending = Operator::empty();
            Calculation::Undefined { expression }
        } else {
            let display_result = format_number(value);
            debug!(%expression, result = %display_result, "calculated");
            self.display.set_primary(&display_result);
            Calculation::Success {
                expression,
                value,
                display_result,
            }
        };

        self.stage = InputStage::None;
        self.second_function = false;
        self.blank_on_input = true;
        Some(outcome)
    }

    /// Reset operands, queued operator, stage and both displays.
    pub fn clear_all(&mut self) {
        self.flush_transient();
        self.blank(true, true);
        self.operands.clear();
        self.pending = Operator::identity();
        self.stage = InputStage::None;
        self.second_function = false;
        self.blank_on_input = false;
    }

    /// Clear the number being entered, keeping the expression.
    pub fn correction(&mut self) {
        self.flush_transient();
        self.blank(true, false);
    }

    /// Delete the last typed character.
    ///
    /// A trailing decimal point goes together with the digit before it, and
    /// the buffer never becomes empty: `"12."` gives `"1"`, `"1.5"` gives
    /// `"1"` and `"5"` gives `"0"`. Results that are not finite numbers
    /// (`undefined`, `NaN`, `Infinity`) are cleared to `"0"`.
    pub fn backspace(&mut self) {
        self.flush_transient();

        let mut text = self.display.primary().to_string();
        if !parse_display(&text).is_finite() {
            text.clear();
        }
        if text.pop() == Some('.') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        if text.is_empty() || text == "-" {
            text = "0".to_string();
        }

        self.display.set_primary(&text);
    }

    pub fn toggle_second_function(&mut self) {
        self.flush_transient();
        self.second_function = !self.second_function;
        debug!(enabled = self.second_function, "second function toggled");
    }

    /// M+: add the primary display to memory.
    pub fn memory_add(&mut self) {
        self.flush_transient();
        let value = self.buffer_value();
        if value.is_finite() {
            self.memory.add(value);
        } else {
            warn!(value, "not adding to memory");
        }
        self.recall(false);
    }

    /// MR: enter the stored value.
    pub fn memory_recall(&mut self) {
        self.recall(true);
    }

    /// MC: reset memory to zero.
    pub fn memory_clear(&mut self) {
        self.memory.clear();
        self.recall(false);
    }

    /// Enter `constant` into the primary display.
    pub fn show_constant(&mut self, constant: Constant) {
        self.show_transient(constant.label(), &format_number(constant.value()), true);
    }

    fn recall(&mut self, overwrite: bool) {
        let value = format_number(self.memory.value());
        self.show_transient(MEMORY_LABEL, &value, overwrite);
    }

    /// Show `label` and `value` until the transient delay passes.
    ///
    /// With `overwrite`, `value` stays in the primary display afterwards.
    fn show_transient(&mut self, label: &str, value: &str, overwrite: bool) {
        self.flush_transient();

        let keep_primary = (!overwrite).then(|| self.display.primary().to_string());
        self.transient = Some(PendingRevert::new(
            self.display.secondary(),
            keep_primary,
            Instant::now() + self.transient_delay,
        ));

        self.display.set_primary(value);
        self.display.set_secondary(label);
    }

    /// When the pending display revert is due, if any.
    pub fn transient_deadline(&self) -> Option<Instant> {
        self.transient.as_ref().map(PendingRevert::due)
    }

    /// Apply the pending display revert if it is due at `now`.
    pub fn revert_if_due(&mut self, now: Instant) -> bool {
        if self.transient.as_ref().is_some_and(|t| t.is_due(now)) {
            self.flush_transient();
            true
        } else {
            false
        }
    }

    /// Apply the pending display revert now.
    ///
    /// Every input event does this first, so a revert never lands on top of
    /// newer display state.
    pub fn flush_transient(&mut self) {
        if let Some(revert) = self.transient.take() {
            revert.apply(&mut self.display);
        }
    }

    fn blank(&mut self, primary: bool, secondary: bool) {
        if primary {
            self.display.set_primary("0");
        }
        if secondary {
            self.display.set_secondary("");
        }
    }

    fn buffer_value(&self) -> f64 {
        parse_display(self.display.primary())
    }
}
