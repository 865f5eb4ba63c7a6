//! Text format handling for `body` and `description` fields.
//!
//! Genius always sends rich text as a mapping keyed by format, e.g.
//! `{"html": "<p>Bio</p>"}` or `{"dom": {...}}`. When the caller asked for
//! `plain` or `html`, the single string inside is lifted into a flat field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GeniusError, Result};

/// Structured rich-text mapping as received on the wire.
pub type RawText = Map<String, Value>;

/// Rendering format requested through the `text_format` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    /// Structured DOM tree. The raw mapping stays authoritative.
    #[default]
    Dom,
    /// Plain text.
    Plain,
    /// HTML markup.
    Html,
}

impl TextFormat {
    /// Get the query parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextFormat::Dom => "dom",
            TextFormat::Plain => "plain",
            TextFormat::Html => "html",
        }
    }

    /// Whether this is the structured format.
    pub fn is_structured(&self) -> bool {
        matches!(self, TextFormat::Dom)
    }
}

impl std::fmt::Display for TextFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the flat string for a rich-text field.
///
/// Returns `None` for [`TextFormat::Dom`] or when there is nothing to flatten.
/// Otherwise every value must be a string and the last one iterated wins.
pub fn flatten(raw: Option<&RawText>, format: TextFormat) -> Result<Option<String>> {
    if format.is_structured() {
        return Ok(None);
    }

    let Some(raw) = raw else {
        return Ok(None);
    };

    let mut flat = None;
    for (key, value) in raw {
        match value {
            Value::String(s) => flat = Some(s.clone()),
            other => {
                return Err(GeniusError::TextFormat(format!(
                    "expected string for \"{}\" in {} text, got {}",
                    key,
                    format,
                    json_kind(other)
                )))
            }
        }
    }

    Ok(flat)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Entities carrying a format-dependent rich-text field.
pub trait WithTextFormat: Sized {
    /// Return the value with its flat text derived for `format`.
    ///
    /// [`TextFormat::Dom`] returns the value unchanged. Other formats set the
    /// flat field from the raw mapping, which is never modified.
    fn with_text_format(self, format: TextFormat) -> Result<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawText {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_dom_leaves_flat_empty() {
        let map = raw(json!({"dom": {"tag": "root", "children": []}}));
        assert_eq!(flatten(Some(&map), TextFormat::Dom).unwrap(), None);

        let map = raw(json!({"html": "<p>Bio</p>"}));
        assert_eq!(flatten(Some(&map), TextFormat::Dom).unwrap(), None);
    }

    #[test]
    fn test_flat_formats_take_single_value() {
        let map = raw(json!({"html": "<p>Bio</p>"}));
        assert_eq!(
            flatten(Some(&map), TextFormat::Html).unwrap().as_deref(),
            Some("<p>Bio</p>")
        );

        let map = raw(json!({"plain": "Bio"}));
        assert_eq!(
            flatten(Some(&map), TextFormat::Plain).unwrap().as_deref(),
            Some("Bio")
        );
    }

    #[test]
    fn test_missing_or_empty_mapping() {
        assert_eq!(flatten(None, TextFormat::Plain).unwrap(), None);
        assert_eq!(flatten(Some(&RawText::new()), TextFormat::Html).unwrap(), None);
    }

    #[test]
    fn test_non_string_value_is_an_error() {
        let map = raw(json!({"dom": {"tag": "root"}}));
        let err = flatten(Some(&map), TextFormat::Plain).unwrap_err();
        assert!(matches!(err, GeniusError::TextFormat(_)));
        assert!(err.to_string().contains("object"));
    }

    #[test]
    fn test_text_format_wire_values() {
        assert_eq!(TextFormat::default(), TextFormat::Dom);
        assert_eq!(TextFormat::Plain.as_str(), "plain");
        assert_eq!(TextFormat::Html.to_string(), "html");
        assert_eq!(serde_json::to_string(&TextFormat::Dom).unwrap(), "\"dom\"");
    }
}
