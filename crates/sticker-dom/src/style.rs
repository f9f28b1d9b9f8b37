//! Inline style declarations (the `style` attribute)

/// Ordered list of inline `property: value` declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    decls: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `style` attribute text. Malformed declarations are skipped.
    pub fn parse(text: &str) -> Self {
        let mut style = Self::new();
        for decl in text.split(';') {
            if let Some((name, value)) = decl.split_once(':') {
                let name = name.trim();
                if !name.is_empty() {
                    style.set(&name.to_ascii_lowercase(), value.trim());
                }
            }
        }
        style
    }

    /// Get a declared value
    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Set a declaration. An empty value removes it, like `el.style.top = ''`.
    pub fn set(&mut self, property: &str, value: &str) {
        if value.is_empty() {
            self.remove(property);
            return;
        }
        match self.decls.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.decls.push((property.to_string(), value.to_string())),
        }
    }

    /// Remove a declaration, returning the old value
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let pos = self.decls.iter().position(|(name, _)| name == property)?;
        Some(self.decls.remove(pos).1)
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Serialize as `style` attribute text
    pub fn css_text(&self) -> String {
        self.decls
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
