//! Form field value objects

/// Type-safe field values (string | boolean)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// One selectable entry of a radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

/// How a field is edited and drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Free text drawn masked
    Secret,
    /// One of a fixed set of choices, cycled with arrow keys
    Radio(&'static [Choice]),
    /// Value picked from a list supplied at runtime
    Dropdown,
    /// Boolean tick box
    Checkbox,
}

/// Represents a single form field with its configuration, value and touched state
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: String,
    pub kind: FieldKind,
    pub value: FieldValue,
    /// Set once the field has lost focus at least once
    pub touched: bool,
}

impl FormField {
    fn new(name: &'static str, label: &str, kind: FieldKind, value: FieldValue) -> Self {
        Self {
            name,
            label: label.to_string(),
            kind,
            value,
            touched: false,
        }
    }

    /// Create a new text field
    pub fn text(name: &'static str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text, FieldValue::default())
    }

    /// Create a new masked text field
    pub fn secret(name: &'static str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Secret, FieldValue::default())
    }

    /// Create a radio group starting at `initial`
    pub fn radio(name: &'static str, label: &str, choices: &'static [Choice], initial: &str) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Radio(choices),
            FieldValue::Text(initial.to_string()),
        )
    }

    /// Create a dropdown with nothing selected
    pub fn dropdown(name: &'static str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Dropdown, FieldValue::default())
    }

    /// Create an unticked checkbox
    pub fn checkbox(name: &'static str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Checkbox, FieldValue::Flag(false))
    }

    /// Whether typed characters go into this field
    pub fn accepts_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text | FieldKind::Secret)
    }

    /// Get the text value (returns empty string for flag fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (returns false for text fields)
    pub fn as_flag(&self) -> bool {
        match self.value {
            FieldValue::Flag(b) => b,
            FieldValue::Text(_) => false,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = FieldValue::Text(value.into());
    }

    /// Push a character to a text field
    pub fn push_char(&mut self, c: char) {
        if !self.accepts_text() {
            return;
        }
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character of a text field
    pub fn pop_char(&mut self) {
        if !self.accepts_text() {
            return;
        }
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Flip a checkbox
    pub fn toggle(&mut self) {
        if let FieldValue::Flag(b) = &mut self.value {
            *b = !*b;
        }
    }

    /// Move a radio group to the next (or previous) choice, wrapping around
    pub fn cycle_choice(&mut self, forward: bool) {
        let FieldKind::Radio(choices) = self.kind else {
            return;
        };
        if choices.is_empty() {
            return;
        }
        let current = choices
            .iter()
            .position(|c| c.value == self.as_text())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % choices.len()
        } else if current == 0 {
            choices.len() - 1
        } else {
            current - 1
        };
        self.set_text(choices[next].value);
    }

    /// Mark the field as having lost focus
    pub fn blur(&mut self) {
        self.touched = true;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match (&self.kind, &self.value) {
            (FieldKind::Secret, FieldValue::Text(s)) => "•".repeat(s.chars().count()),
            (FieldKind::Radio(choices), FieldValue::Text(s)) => choices
                .iter()
                .map(|c| {
                    let mark = if c.value == s.as_str() { "(•)" } else { "( )" };
                    format!("{mark} {}", c.label)
                })
                .collect::<Vec<_>>()
                .join("   "),
            (FieldKind::Dropdown, FieldValue::Text(s)) if s.is_empty() => {
                "Select Country".to_string()
            }
            (FieldKind::Dropdown, FieldValue::Text(s)) => format!("{s} ▾"),
            (_, FieldValue::Flag(checked)) => {
                let mark = if *checked { "[x]" } else { "[ ]" };
                format!("{mark} {}", self.label)
            }
            (_, FieldValue::Text(s)) => s.clone(),
        }
    }
}
