//! The two text fields a calculator writes to.

/// A primary field holding the number being entered or the last result, and
/// a secondary field holding the expression trace.
///
/// The session treats the primary text as its live input buffer.
pub trait DisplaySurface {
    fn primary(&self) -> &str;

    fn set_primary(&mut self, text: &str);

    fn secondary(&self) -> &str;

    fn set_secondary(&mut self, text: &str);
}

/// In-memory display, useful headless and in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextDisplay {
    primary: String,
    secondary: String,
}

impl Default for TextDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay {
    pub fn new() -> Self {
        Self {
            primary: "0".to_string(),
            secondary: String::new(),
        }
    }
}

impl DisplaySurface for TextDisplay {
    fn primary(&self) -> &str {
        &self.primary
    }

    fn set_primary(&mut self, text: &str) {
        self.primary = text.to_string();
    }

    fn secondary(&self) -> &str {
        &self.secondary
    }

    fn set_secondary(&mut self, text: &str) {
        self.secondary = text.to_string();
    }
}
