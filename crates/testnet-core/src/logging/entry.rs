//! One line of a JSONL log file.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single self-contained log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLogEntry {
    /// RFC 3339 timestamp with milliseconds
    pub ts: String,

    /// trace, debug, info, warn or error
    pub level: String,

    /// Portal instance that wrote the line
    pub instance: String,

    /// Module path of the event
    pub target: String,

    pub msg: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Enclosing spans, outermost first, joined with " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl JsonLogEntry {
    pub fn new(
        level: impl Into<String>,
        instance: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            instance: instance.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Serialize without a trailing newline.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_shape() {
        let entry = JsonLogEntry::new("info", "main", "testnet_core::session", "Wallet connected")
            .with_fields(serde_json::json!({ "network": "devnet" }));

        let json = entry.to_json_line().unwrap();
        assert!(json.contains("\"level\":\"info\""));
        assert!(json.contains("\"instance\":\"main\""));
        assert!(json.contains("\"network\":\"devnet\""));
        assert!(!json.contains("\"span\""));

        let parsed = JsonLogEntry::from_json_line(&json).unwrap();
        assert_eq!(parsed.msg, "Wallet connected");
    }
}
