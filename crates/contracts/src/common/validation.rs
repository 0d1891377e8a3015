//! Declarative validation rules shared by entity forms.

use std::collections::HashMap;

/// Validation rules for a single string field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn length(min: usize, max: usize) -> Self {
        Self {
            required: true,
            min_length: Some(min),
            max_length: Some(max),
        }
    }

    pub fn validate_string(&self, value: &str, label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if self.required && trimmed.is_empty() {
            return Err(format!("{} is required", label));
        }
        if let Some(min) = self.min_length {
            if !trimmed.is_empty() && trimmed.chars().count() < min {
                return Err(format!("{} must be at least {} characters", label, min));
            }
        }
        if let Some(max) = self.max_length {
            if trimmed.chars().count() > max {
                return Err(format!("{} must be at most {} characters", label, max));
            }
        }
        Ok(())
    }
}

/// Per-field error messages in declaration order, so forms render them
/// in a stable sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if self.get(&field).is_none() {
            self.entries.push((field, message.into()));
        }
    }

    pub fn check(&mut self, field: &str, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// Fold server-side field errors into the local set. The first message
    /// per field wins, matching how the forms display them.
    pub fn merge_server_errors(&mut self, errors: &HashMap<String, Vec<String>>) {
        let mut fields: Vec<&String> = errors.keys().collect();
        fields.sort();
        for field in fields {
            if let Some(message) = errors[field].first() {
                self.add(field.clone(), message.clone());
            }
        }
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("  ", "Name").is_err());
        assert!(rules.validate_string("ok", "Name").is_ok());
    }

    #[test]
    fn length_bounds() {
        let rules = ValidationRules::length(2, 5);
        assert!(rules.validate_string("a", "Name").is_err());
        assert!(rules.validate_string("abcdef", "Name").is_err());
        assert!(rules.validate_string("abc", "Name").is_ok());
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.iter().count(), 1);
    }

    #[test]
    fn merge_server_errors_keeps_local() {
        let mut errors = FieldErrors::new();
        errors.add("name", "local");
        let mut server = HashMap::new();
        server.insert("name".to_string(), vec!["server".to_string()]);
        server.insert("description".to_string(), vec!["too long".to_string()]);
        errors.merge_server_errors(&server);
        assert_eq!(errors.get("name"), Some("local"));
        assert_eq!(errors.get("description"), Some("too long"));
    }
}
