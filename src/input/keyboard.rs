//! Physical keyboard handling.
//!
//! Holding `m` turns `+`, `r` and `c` into the memory keys M+, MR and MC.

use super::InputEvent;

const MEMORY_MODIFIER: &str = "m";

/// Turns key names, as reported by the windowing layer, into input events.
#[derive(Clone, Debug, Default)]
pub struct KeyboardMapper {
    memory_modifier: bool,
}

impl KeyboardMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. Returns `None` for keys with no calculator meaning.
    pub fn key_down(&mut self, key: &str) -> Option<InputEvent> {
        if key == MEMORY_MODIFIER {
            self.memory_modifier = true;
            return None;
        }

        if let Some(digit) = parse_digit(key) {
            return Some(InputEvent::Digit(digit));
        }

        let event = match key {
            "x" => InputEvent::ClearAll,
            "/" => InputEvent::operator("divide"),
            "*" => InputEvent::operator("multiply"),
            "+" if self.memory_modifier => InputEvent::MemoryAdd,
            "+" => InputEvent::operator("add"),
            "-" => InputEvent::operator("subtract"),
            "." => InputEvent::Decimal,
            "Enter" | "=" => InputEvent::Equals,
            "Backspace" => InputEvent::Backspace,
            "r" if self.memory_modifier => InputEvent::MemoryRecall,
            "c" if self.memory_modifier => InputEvent::MemoryClear,
            "c" => InputEvent::Correction,
            _ => return None,
        };
        Some(event)
    }

    /// Handle a key release.
    pub fn key_up(&mut self, key: &str) {
        if key == MEMORY_MODIFIER {
            self.memory_modifier = false;
        }
    }

    pub fn memory_modifier_held(&self) -> bool {
        self.memory_modifier
    }
}

fn parse_digit(key: &str) -> Option<u8> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_operators() {
        let mut keys = KeyboardMapper::new();
        assert_eq!(keys.key_down("0"), Some(InputEvent::Digit(0)));
        assert_eq!(keys.key_down("7"), Some(InputEvent::Digit(7)));
        assert_eq!(keys.key_down("/"), Some(InputEvent::operator("divide")));
        assert_eq!(keys.key_down("*"), Some(InputEvent::operator("multiply")));
        assert_eq!(keys.key_down("+"), Some(InputEvent::operator("add")));
        assert_eq!(keys.key_down("-"), Some(InputEvent::operator("subtract")));
        assert_eq!(keys.key_down("Enter"), Some(InputEvent::Equals));
        assert_eq!(keys.key_down("="), Some(InputEvent::Equals));
        assert_eq!(keys.key_down("."), Some(InputEvent::Decimal));
        assert_eq!(keys.key_down("x"), Some(InputEvent::ClearAll));
        assert_eq!(keys.key_down("Backspace"), Some(InputEvent::Backspace));
    }

    #[test]
    fn test_memory_modifier() {
        let mut keys = KeyboardMapper::new();
        assert_eq!(keys.key_down("c"), Some(InputEvent::Correction));
        assert_eq!(keys.key_down("r"), None);

        assert_eq!(keys.key_down("m"), None);
        assert!(keys.memory_modifier_held());
        assert_eq!(keys.key_down("+"), Some(InputEvent::MemoryAdd));
        assert_eq!(keys.key_down("r"), Some(InputEvent::MemoryRecall));
        assert_eq!(keys.key_down("c"), Some(InputEvent::MemoryClear));

        keys.key_up("m");
        assert!(!keys.memory_modifier_held());
        assert_eq!(keys.key_down("+"), Some(InputEvent::operator("add")));
    }

    #[test]
    fn test_unmapped_keys() {
        let mut keys = KeyboardMapper::new();
        assert_eq!(keys.key_down("F5"), None);
        assert_eq!(keys.key_down("12"), None);
        assert_eq!(keys.key_down(""), None);
    }
}
