//! The ordered table of operators a calculator offers.

use std::collections::HashSet;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::error::ConfigurationError;

use super::definition::{NumericFn, Operator};

lazy_static! {
    static ref STANDARD: Arc<OperatorRegistry> = Arc::new(
        OperatorRegistry::new(standard_operators()).expect("standard operator table is valid")
    );
}

/// An ordered, read-only list of operators with unique names.
#[derive(Clone, Debug, Default)]
pub struct OperatorRegistry {
    operators: Vec<Arc<Operator>>,
}

impl OperatorRegistry {
    /// Build a registry, rejecting duplicate names.
    pub fn new(operators: Vec<Operator>) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::new();
        for operator in &operators {
            if !seen.insert(operator.name().to_string()) {
                return Err(ConfigurationError::DuplicateName(operator.name().to_string()));
            }
        }

        Ok(Self {
            operators: operators.into_iter().map(Arc::new).collect(),
        })
    }

    /// The operators of the standard calculator keypad.
    pub fn standard() -> Arc<OperatorRegistry> {
        Arc::clone(&STANDARD)
    }

    /// Find an operator by name, then by symbol, then by position.
    ///
    /// Returns `None` when nothing matches.
    pub fn lookup(&self, key: &str) -> Option<&Arc<Operator>> {
        self.operators
            .iter()
            .find(|op| op.name() == key)
            .or_else(|| {
                self.operators
                    .iter()
                    .find(|op| !op.symbol().is_empty() && op.symbol() == key)
            })
            .or_else(|| key.parse::<usize>().ok().and_then(|i| self.get(i)))
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Operator>> {
        self.operators.get(index)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Operator>> {
        self.operators.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().map(|op| op.name())
    }
}

// Templates use ⛶ (U+26F6 SQUARE FOUR CORNERS) where a second operand is still to come.
fn standard_operators() -> Vec<Operator> {
    use NumericFn::{Binary, Unary};

    let table: [(&str, &str, NumericFn, Option<&str>); 21] = [
        ("identity", "{1} = ", Unary(|x| x), None),
        ("add", "{1} + {2}", Binary(|a, b| a + b), None),
        ("subtract", "{1} - {2}", Binary(|a, b| a - b), None),
        ("multiply", "{1} \u{00D7} {2}", Binary(|a, b| a * b), None),
        ("divide", "{1} ÷ {2}", Binary(|a, b| a / b), None),
        ("hundredth", "{sup: {1}}/{sub: 100}", Unary(|a| a / 100.0), Some("%")),
        ("square", "{1}²", Unary(|a| a * a), None),
        ("square-root", "√{1}", Unary(f64::sqrt), None),
        ("power", "{1}{sup: {2|⛶}}", Binary(f64::powf), Some("^")),
        ("nth-root", "{sup: {1}}√{2|⛶}", Binary(|a, b| b.powf(1.0 / a)), Some("ʸ√")),
        ("scientific", "{1}\u{00D7}10{sup: {2|⛶}}", Binary(|a, b| a * 10f64.powf(b)), Some("E")),
        ("modulus", "{1} mod {2}", Binary(|a, b| a % b), None),
        ("log10", "log{sub: 10}{1}", Unary(f64::log10), None),
        ("ln", "ln {1}", Unary(f64::ln), None),
        ("logb", "log{sub: {1}}{2|⛶}", Binary(|a, b| b.ln() / a.ln()), Some("logᵧ")),
        ("sine", "sin({1})", Unary(f64::sin), Some("sin")),
        ("cosine", "cos({1})", Unary(f64::cos), Some("cos")),
        ("tangent", "tan({1})", Unary(f64::tan), Some("tan")),
        ("hyperbolic-sine", "sinh({1})", Unary(f64::sinh), Some("sinh")),
        ("hyperbolic-cosine", "cosh({1})", Unary(f64::cosh), Some("cosh")),
        ("hyperbolic-tangent", "tanh({1})", Unary(f64::tanh), Some("tanh")),
    ];

    table
        .into_iter()
        .map(|(name, template, func, symbol)| {
            let operator =
                Operator::new(name, template, func).expect("standard operator is well-formed");
            match symbol {
                Some(symbol) => operator.with_symbol(symbol),
                None => operator,
            }
        })
        .collect()
}
