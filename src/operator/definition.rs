//! The operator value type.

use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::calculator::format_number;
use crate::error::ConfigurationError;

use super::template;

/// The numeric rule behind an [`Operator`].
///
/// Plain function pointers cannot capture state, so every operator is a pure
/// function of its operands. The variant fixes the arity.
#[derive(Clone, Copy, Debug)]
pub enum NumericFn {
    Nullary(fn() -> f64),
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

impl NumericFn {
    /// Number of operands the function declares.
    pub fn arity(&self) -> usize {
        match self {
            Self::Nullary(_) => 0,
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Call the function. Missing operands are passed as `NaN`.
    fn call(&self, operands: &[f64]) -> f64 {
        let operand = |i: usize| operands.get(i).copied().unwrap_or(f64::NAN);
        match self {
            Self::Nullary(f) => f(),
            Self::Unary(f) => f(operand(0)),
            Self::Binary(f) => f(operand(0), operand(1)),
        }
    }
}

/// A named numeric operation that knows how to render itself.
///
/// Operators are immutable once built: fields are private and only readable
/// through accessors. Registries share them as `Arc<Operator>`.
#[derive(Clone, Debug)]
pub struct Operator {
    name: String,
    template: String,
    symbol: String,
    func: NumericFn,
}

lazy_static! {
    static ref EMPTY: Arc<Operator> = Arc::new(Operator {
        name: "empty".to_string(),
        template: "␀".to_string(),
        symbol: "␀".to_string(),
        func: NumericFn::Nullary(|| f64::NAN),
    });
    static ref IDENTITY: Arc<Operator> = Arc::new(Operator {
        name: "identity".to_string(),
        template: "{1} = ".to_string(),
        symbol: "=".to_string(),
        func: NumericFn::Unary(|x| x),
    });
}

impl Operator {
    /// Build an operator from its name, format template and numeric rule.
    ///
    /// The template may only reference operands `{1}` up to `{arity}`.
    /// See [`template`](super::template) for the template syntax.
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
        func: NumericFn,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        let template = template.into();

        if name.trim().is_empty() {
            return Err(ConfigurationError::EmptyName);
        }

        let arity = func.arity();
        if let Some(index) = template::operand_indices(&template)
            .into_iter()
            .find(|&i| i == 0 || i > arity)
        {
            return Err(ConfigurationError::PlaceholderOutOfRange { name, index, arity });
        }

        let symbol = template::literal_text(&template);
        Ok(Self {
            name,
            template,
            symbol,
            func,
        })
    }

    /// Replace the symbol derived from the template.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// The operator that does nothing, queued when no operation may run.
    pub fn empty() -> Arc<Operator> {
        Arc::clone(&EMPTY)
    }

    /// `f(x) = x`, queued when nothing else is.
    pub fn identity() -> Arc<Operator> {
        Arc::clone(&IDENTITY)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn arity(&self) -> usize {
        self.func.arity()
    }

    /// Whether this is the do-nothing sentinel itself, not merely an
    /// operator with the same name.
    pub fn is_empty(&self) -> bool {
        std::ptr::eq(self, Arc::as_ptr(&*EMPTY))
    }

    /// Apply the operator to `operands`.
    ///
    /// Extra operands are ignored and missing ones are `NaN`, which usually
    /// makes the result `NaN` as well. That is a value, not an error.
    pub fn apply(&self, operands: &[f64]) -> f64 {
        let arity = self.arity();
        self.func.call(&operands[..operands.len().min(arity)])
    }

    /// Render the operator applied to `operands` as markup text.
    ///
    /// Only the first `arity` operands are used. Missing operands render as
    /// the template's fallback or nothing.
    pub fn format<S: AsRef<str>>(&self, operands: &[S]) -> String {
        let arity = self.arity();
        template::expand(&self.template, &operands[..operands.len().min(arity)])
    }

    /// [`format`](Self::format) for numeric operands.
    pub fn format_values(&self, operands: &[f64]) -> String {
        let texts: Vec<String> = operands
            .iter()
            .take(self.arity())
            .map(|&value| format_number(value))
            .collect();
        self.format(&texts)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<String> = ('a'..='z')
            .take(self.arity())
            .map(String::from)
            .collect();
        write!(f, "(Operator) {} ({})", self.name, self.format(&letters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add() -> Operator {
        Operator::new("add", "{1} + {2}", NumericFn::Binary(|a, b| a + b)).unwrap()
    }

    fn square_root() -> Operator {
        Operator::new("square-root", "√{1}", NumericFn::Unary(f64::sqrt)).unwrap()
    }

    #[test]
    fn test_apply_and_format() {
        let add = add();
        assert_eq!(add.apply(&[2.0, 3.0]), 5.0);
        assert_eq!(add.format_values(&[2.0, 3.0]), "2 + 3");
        assert_eq!(square_root().format_values(&[6.0]), "√6");
    }

    #[test]
    fn test_arity_follows_function() {
        assert_eq!(add().arity(), 2);
        assert_eq!(square_root().arity(), 1);
        assert_eq!(Operator::empty().arity(), 0);
        assert_eq!(Operator::identity().arity(), 1);
    }

    #[test]
    fn test_operand_count_normalised() {
        let add = add();
        assert!(add.apply(&[2.0]).is_nan());
        assert!(add.apply(&[]).is_nan());
        assert_eq!(add.apply(&[2.0, 3.0, 100.0]), 5.0);
        assert_eq!(add.format(&["1", "2", "3"]), "1 + 2");
        assert_eq!(add.format(&["1"]), "1 + ");
        assert_eq!(add.format::<&str>(&[]), " + ");
    }

    #[test]
    fn test_apply_is_deterministic() {
        let add = add();
        let first = add.apply(&[0.1, 0.2]);
        for _ in 0..10 {
            assert_eq!(add.apply(&[0.1, 0.2]).to_bits(), first.to_bits());
        }
        let root = square_root();
        assert!(root.apply(&[-4.0]).is_nan());
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            Operator::new("", "{1}", NumericFn::Unary(|x| x)).unwrap_err(),
            ConfigurationError::EmptyName
        );
        assert_eq!(
            Operator::new("neg", "-{2}", NumericFn::Unary(|x| -x)).unwrap_err(),
            ConfigurationError::PlaceholderOutOfRange {
                name: "neg".to_string(),
                index: 2,
                arity: 1,
            }
        );
    }

    #[test]
    fn test_symbol() {
        assert_eq!(add().symbol(), "+");
        assert_eq!(square_root().symbol(), "√");
        let power = Operator::new("power", "{1}{sup: {2|⛶}}", NumericFn::Binary(f64::powf))
            .unwrap()
            .with_symbol("^");
        assert_eq!(power.symbol(), "^");
        assert_eq!(power.format_values(&[2.0]), "2<sup>⛶</sup>");
    }

    #[test]
    fn test_sentinels() {
        let empty = Operator::empty();
        assert!(empty.is_empty());
        assert!(empty.apply(&[1.0]).is_nan());
        assert_eq!(empty.format(&["1"]), "␀");

        let named_empty = Operator::new("empty", "{1}", NumericFn::Unary(|x| x)).unwrap();
        assert!(!named_empty.is_empty());
        assert_eq!(named_empty.apply(&[2.0]), 2.0);

        let identity = Operator::identity();
        assert!(!identity.is_empty());
        assert_eq!(identity.apply(&[4.5]), 4.5);
        assert_eq!(identity.format_values(&[12.0]), "12 = ");
    }

    #[test]
    fn test_display() {
        assert_eq!(add().to_string(), "(Operator) add (a + b)");
        assert_eq!(square_root().to_string(), "(Operator) square-root (√a)");
    }
}
