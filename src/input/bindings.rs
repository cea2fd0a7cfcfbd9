//! Keys resolved to operators.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::KeyBinding;
use crate::error::ConfigurationError;
use crate::operator::{Operator, OperatorRegistry};

#[derive(Clone, Debug)]
struct Binding {
    primary: Arc<Operator>,
    second: Option<Arc<Operator>>,
}

/// Key bindings checked against a registry.
#[derive(Clone, Debug, Default)]
pub struct KeyBindings {
    keys: HashMap<String, Binding>,
}

impl KeyBindings {
    /// Resolve every operator name in `bindings`, failing on the first unknown one.
    pub fn resolve(
        bindings: &[KeyBinding],
        registry: &OperatorRegistry,
    ) -> Result<Self, ConfigurationError> {
        let find = |key: &str, name: &str| {
            registry
                .lookup(name)
                .cloned()
                .ok_or_else(|| ConfigurationError::unknown_binding(key, name))
        };

        let mut keys = HashMap::new();
        for binding in bindings {
            let primary = find(binding.key.as_str(), binding.primary.as_str())?;
            let second = match &binding.second {
                Some(name) => Some(find(binding.key.as_str(), name.as_str())?),
                None => None,
            };
            keys.insert(binding.key.clone(), Binding { primary, second });
        }

        Ok(Self { keys })
    }

    /// The operator `key` selects. Keys without a second function select
    /// their primary operator in either mode.
    pub fn operator_for(&self, key: &str, second_function: bool) -> Option<&Arc<Operator>> {
        let binding = self.keys.get(key)?;
        match (&binding.second, second_function) {
            (Some(second), true) => Some(second),
            _ => Some(&binding.primary),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;

    #[test]
    fn test_default_bindings_resolve() {
        let registry = OperatorRegistry::standard();
        let bindings =
            KeyBindings::resolve(&CalculatorConfig::default().bindings, &registry).unwrap();

        assert_eq!(bindings.len(), 9);
        assert_eq!(bindings.operator_for("multiply", false).unwrap().name(), "multiply");
        assert_eq!(bindings.operator_for("multiply", true).unwrap().name(), "power");
        assert_eq!(bindings.operator_for("divide", true).unwrap().name(), "nth-root");
        assert!(bindings.operator_for("percentage", false).is_none());
    }

    #[test]
    fn test_primary_without_second() {
        let registry = OperatorRegistry::standard();
        let bindings = KeyBindings::resolve(
            &[KeyBinding::new("root", "square-root", None)],
            &registry,
        )
        .unwrap();
        assert_eq!(bindings.operator_for("root", true).unwrap().name(), "square-root");
    }

    #[test]
    fn test_unknown_operator_rejected() {
        let registry = OperatorRegistry::standard();
        let err = KeyBindings::resolve(
            &[KeyBinding::new("multiply", "multiply", Some("cube"))],
            &registry,
        )
        .unwrap_err();
        assert_eq!(err, ConfigurationError::unknown_binding("multiply", "cube"));
    }
}
