//! Quote payloads and the tolerant parser for provider responses.
//!
//! Providers disagree on both the envelope and the key names:
//!
//! ```text
//! { "content": "...", "author": "..." }      bare object, long keys
//! [ { "q": "...", "a": "..." }, ... ]        array, short keys
//! ```
//!
//! `parse_quote` accepts either envelope and tries each configured
//! `FieldPair` in order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::source::QuoteError;

/// A quote ready for display. Both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Quote body wrapped in typographic quote marks.
    pub fn display_text(&self) -> String {
        format!("“{}”", self.text)
    }

    /// Author line with a leading em dash.
    pub fn display_author(&self) -> String {
        format!("— {}", self.author)
    }
}

/// Names of the text and author keys in a provider's JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldPair {
    pub text: String,
    pub author: String,
}

impl FieldPair {
    pub fn new(text: &str, author: &str) -> Self {
        Self {
            text: text.to_string(),
            author: author.to_string(),
        }
    }
}

/// `{content, author}` (quotable) first, then `{q, a}` (zenquotes).
pub fn default_field_pairs() -> Vec<FieldPair> {
    vec![FieldPair::new("content", "author"), FieldPair::new("q", "a")]
}

/// Extracts a quote from a decoded response body.
pub fn parse_quote(body: &Value, fields: &[FieldPair]) -> Result<Quote, QuoteError> {
    let object = match body {
        Value::Array(items) => items
            .first()
            .ok_or_else(|| QuoteError::Malformed("empty array".to_string()))?,
        other => other,
    };

    let Some(map) = object.as_object() else {
        return Err(QuoteError::Malformed(format!(
            "expected a JSON object, got {}",
            json_kind(object)
        )));
    };

    for pair in fields {
        let text = non_empty(map.get(&pair.text));
        let author = non_empty(map.get(&pair.author));
        if let (Some(text), Some(author)) = (text, author) {
            return Ok(Quote::new(text, author));
        }
    }

    let tried: Vec<String> = fields
        .iter()
        .map(|p| format!("{}/{}", p.text, p.author))
        .collect();
    Err(QuoteError::Malformed(format!(
        "missing text or author field (tried {})",
        tried.join(", ")
    )))
}

fn non_empty(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object_long_keys() {
        let body = json!({"content": "X", "author": "Y", "tags": ["wisdom"]});
        let quote = parse_quote(&body, &default_field_pairs()).unwrap();
        assert_eq!(quote, Quote::new("X", "Y"));
    }

    #[test]
    fn test_parse_array_short_keys() {
        let body = json!([{"q": "A", "a": "B", "h": "<blockquote>"}]);
        let quote = parse_quote(&body, &default_field_pairs()).unwrap();
        assert_eq!(quote.display_text(), "“A”");
        assert_eq!(quote.display_author(), "— B");
    }

    #[test]
    fn test_array_uses_first_element_only() {
        let body = json!([{"q": "first", "a": "one"}, {"q": "second", "a": "two"}]);
        let quote = parse_quote(&body, &default_field_pairs()).unwrap();
        assert_eq!(quote.text, "first");
    }

    #[test]
    fn test_missing_author_is_malformed() {
        let body = json!({"content": "Orphaned words"});
        let err = parse_quote(&body, &default_field_pairs()).unwrap_err();
        assert!(matches!(err, QuoteError::Malformed(_)));
        assert!(err.to_string().contains("content/author"));
    }

    #[test]
    fn test_blank_values_are_rejected() {
        let body = json!({"content": "  ", "author": "Someone"});
        let err = parse_quote(&body, &default_field_pairs()).unwrap_err();
        assert!(matches!(err, QuoteError::Malformed(_)));

        let body = json!({"q": "Words", "a": "\t\n"});
        assert!(parse_quote(&body, &default_field_pairs()).is_err());
    }

    #[test]
    fn test_pairs_are_not_mixed() {
        // text from one convention, author from the other
        let body = json!({"content": "X", "a": "Y"});
        assert!(parse_quote(&body, &default_field_pairs()).is_err());
    }

    #[test]
    fn test_empty_array_is_malformed() {
        let err = parse_quote(&json!([]), &default_field_pairs()).unwrap_err();
        assert_eq!(err, QuoteError::Malformed("empty array".to_string()));
    }

    #[test]
    fn test_non_object_is_malformed() {
        let err = parse_quote(&json!("just a string"), &default_field_pairs()).unwrap_err();
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn test_custom_field_pair() {
        let body = json!({"quote": "Custom", "by": "Provider"});
        let fields = vec![FieldPair::new("quote", "by")];
        let quote = parse_quote(&body, &fields).unwrap();
        assert_eq!(quote, Quote::new("Custom", "Provider"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let body = json!({"q": " Padded \n", "a": " Author "});
        let quote = parse_quote(&body, &default_field_pairs()).unwrap();
        assert_eq!(quote, Quote::new("Padded", "Author"));
    }
}
