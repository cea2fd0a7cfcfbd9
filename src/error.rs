//! Errors raised while building operators, registries and key bindings.

/// A calculator definition that cannot be used.
///
/// Operators, registries and bindings are built once at startup, so these
/// errors are meant to surface immediately rather than be recovered from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Operator name must not be empty")]
    EmptyName,

    #[error("Operator '{name}' references operand {{{index}}} but takes {arity} operand(s)")]
    PlaceholderOutOfRange {
        name: String,
        index: usize,
        arity: usize,
    },

    #[error("Operator '{0}' is defined more than once")]
    DuplicateName(String),

    #[error("Key '{key}' is bound to unknown operator '{operator}'")]
    UnknownBinding { key: String, operator: String },
}

impl ConfigurationError {
    pub fn unknown_binding(key: impl Into<String>, operator: impl Into<String>) -> Self {
        Self::UnknownBinding {
            key: key.into(),
            operator: operator.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigurationError::PlaceholderOutOfRange {
            name: "add".to_string(),
            index: 3,
            arity: 2,
        };
        assert_eq!(
            err.to_string(),
            "Operator 'add' references operand {3} but takes 2 operand(s)"
        );
        assert_eq!(
            ConfigurationError::unknown_binding("multiply", "cube").to_string(),
            "Key 'multiply' is bound to unknown operator 'cube'"
        );
    }
}
