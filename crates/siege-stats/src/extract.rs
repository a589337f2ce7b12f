//! Locate the preloaded state assignment in a page and pull out its payload.

use regex::Regex;
use serde_json::Value;

use crate::types::{RawPayload, StatsError, StatsResult};

/// Window variable the portal hydrates its client from.
pub const PRELOADED_STATE_VAR: &str = "__PRELOADED_STATE__";

/// Top-level field of the preloaded state holding the content entries.
pub const CONTENT_FIELD: &str = "ContentfulGraphQl";

/// Extracts one named field from a `window.<VAR> = <JSON>;` script block.
#[derive(Debug, Clone)]
pub struct PayloadExtractor {
    pattern: Regex,
    variable: String,
    field: String,
}

impl PayloadExtractor {
    /// Extractor for `window.__PRELOADED_STATE__` / `ContentfulGraphQl`.
    pub fn new() -> StatsResult<Self> {
        Self::with_names(PRELOADED_STATE_VAR, CONTENT_FIELD)
    }

    pub fn with_names(variable: &str, field: &str) -> StatsResult<Self> {
        // Payload may be minified or pretty-printed, so `.` must cross newlines.
        let pattern = Regex::new(&format!(
            r"(?s)<script>\s*window\.{}\s*=\s*(.*?);\s*</script>",
            regex::escape(variable)
        ))?;

        Ok(Self {
            pattern,
            variable: variable.to_string(),
            field: field.to_string(),
        })
    }

    /// Return the raw JSON text assigned to the window variable.
    pub fn capture<'a>(&self, html: &'a str) -> StatsResult<&'a str> {
        self.pattern
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| StatsError::Extraction(self.variable.clone()))
    }

    /// Capture, parse and select the content field.
    pub fn extract(&self, html: &str) -> StatsResult<RawPayload> {
        let raw = self.capture(html)?;
        tracing::debug!(bytes = raw.len(), "Captured {} assignment", self.variable);

        let mut state: Value = serde_json::from_str(raw)?;
        let content = state
            .get_mut(&self.field)
            .map(Value::take)
            .ok_or_else(|| StatsError::MissingField(self.field.clone()))?;

        match content {
            Value::Object(entries) => {
                tracing::debug!(keys = entries.len(), "Selected {}", self.field);
                Ok(RawPayload::new(entries))
            }
            other => Err(StatsError::InvalidPayload(format!(
                "{} is {}, expected an object",
                self.field,
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
