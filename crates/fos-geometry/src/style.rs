//! Style declarations
//!
//! Flat property → value lists. Elements carry only a handful of
//! declarations, so a linear scan beats hashing.

/// A list of style declarations keyed by property name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a property value. Property names are ASCII case-insensitive.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(property))
            .map(|(_, value)| value.as_str())
    }

    /// Set a property, replacing any previous value
    pub fn set(&mut self, property: &str, value: &str) {
        for (name, existing) in self.entries.iter_mut() {
            if name.eq_ignore_ascii_case(property) {
                *existing = value.trim().to_string();
                return;
            }
        }
        self.entries
            .push((property.to_ascii_lowercase(), value.trim().to_string()));
    }
}
