//! Output formatting

use serde_json::{Map, Value};

/// Output builder for formatted CLI output
pub struct Output {
    json_mode: bool,
    fields: Map<String, Value>,
    message: Option<String>,
}

impl Output {
    /// Create a new output builder
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            fields: Map::new(),
            message: None,
        }
    }

    /// Add a string field to the output
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.fields.insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add a JSON value field to the output
    pub fn field_value(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Set the human-readable message
    pub fn message(mut self, msg: &str) -> Self {
        self.message = Some(msg.to_string());
        self
    }

    /// Text that `print` writes, if any
    pub fn render(&self) -> Option<String> {
        if self.json_mode {
            serde_json::to_string_pretty(&self.fields).ok()
        } else {
            self.message.clone()
        }
    }

    /// Print the output
    pub fn print(self) {
        if let Some(text) = self.render() {
            println!("{}", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_renders_fields() {
        let out = Output::new(true)
            .field("hash", "0xabc")
            .field_value("values", Value::Array(vec![Value::Bool(true)]))
            .message("ignored");
        let value: Value = serde_json::from_str(&out.render().unwrap()).unwrap();
        assert_eq!(value["hash"], "0xabc");
        assert_eq!(value["values"][0], true);
    }

    #[test]
    fn test_text_mode_renders_message() {
        let out = Output::new(false).field("hash", "0xabc").message("0xabc");
        assert_eq!(out.render().as_deref(), Some("0xabc"));
        assert!(Output::new(false).render().is_none());
    }
}
