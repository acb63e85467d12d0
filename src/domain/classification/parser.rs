//! Mapping of free-form model replies onto a verdict.
//!
//! Parsing fails closed: anything that does not name one of the two
//! predictions is reported as [`GatewayError::UnparseableResponse`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::{ClassificationVerdict, GatewayError, Prediction, ValidatedName};

static FENCED_JSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)```(?:json)?\s*(\{.*?\})\s*```").unwrap());

/// Characters stripped around a free-text prediction
const DECORATION: &[char] = &['"', '\'', '`', '*', '.', '!'];

/// Separators between a negative prediction and its reason
const REASON_SEPARATORS: &[char] = &['—', '–', '-', ':', ',', ';'];

#[derive(Debug, Deserialize)]
struct JsonReply {
    prediction: Option<String>,
    reason: Option<String>,
}

/// Parse the model's reply for `name` into a verdict
pub fn parse_verdict(
    name: &ValidatedName,
    reply: &str,
) -> Result<ClassificationVerdict, GatewayError> {
    let (prediction, reason) = match extract_json(reply) {
        Some(json) => parse_json_reply(json)?,
        None => parse_text_reply(reply)?,
    };

    Ok(match prediction {
        Prediction::Realistic => ClassificationVerdict::realistic(name.as_str()),
        Prediction::NotRealistic => ClassificationVerdict::not_realistic(name.as_str(), reason),
    })
}

fn extract_json(reply: &str) -> Option<&str> {
    if let Some(captures) = FENCED_JSON.captures(reply) {
        return captures.get(1).map(|m| m.as_str());
    }

    let trimmed = reply.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return Some(trimmed);
    }

    None
}

fn parse_json_reply(json: &str) -> Result<(Prediction, Option<String>), GatewayError> {
    let parsed: JsonReply = serde_json::from_str(json)
        .map_err(|e| GatewayError::unparseable(format!("Invalid JSON reply: {}", e)))?;

    let value = parsed
        .prediction
        .ok_or_else(|| GatewayError::unparseable("JSON reply has no 'prediction' field"))?;

    let prediction = match normalize(&value).as_str() {
        "realistic" => Prediction::Realistic,
        "not realistic" => Prediction::NotRealistic,
        _ => {
            return Err(GatewayError::unparseable(format!(
                "Unknown prediction value: {:?}",
                value
            )));
        }
    };

    Ok((prediction, parsed.reason))
}

fn parse_text_reply(reply: &str) -> Result<(Prediction, Option<String>), GatewayError> {
    let text = reply.trim().trim_matches(DECORATION).trim();

    if let Some(rest) = strip_keyword(text, "not realistic") {
        return Ok((Prediction::NotRealistic, extract_reason(rest)));
    }

    if let Some(rest) = strip_keyword(text, "realistic") {
        // A positive verdict must stand alone; anything after it is a hedge.
        if rest.trim().trim_matches(DECORATION).trim().is_empty() {
            return Ok((Prediction::Realistic, None));
        }
    }

    Err(GatewayError::unparseable(format!(
        "Reply does not contain a known prediction: {:?}",
        reply.trim()
    )))
}

/// Strip a leading ASCII `keyword`, matched case-insensitively and followed
/// by a word boundary, returning the rest of `text`.
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let head = text.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }

    let rest = &text[keyword.len()..];
    at_word_boundary(rest).then_some(rest)
}

/// Reason text after a negative prediction. Leading separators are dropped and
/// a single wrapping `(...)` pair is unwrapped; the reason itself is kept intact.
fn extract_reason(rest: &str) -> Option<String> {
    let reason = rest
        .trim_start_matches(|c: char| c.is_whitespace() || REASON_SEPARATORS.contains(&c))
        .trim_end();

    let reason = reason
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .filter(|inner| !inner.contains(['(', ')']))
        .unwrap_or(reason)
        .trim()
        .trim_matches(DECORATION)
        .trim();

    (!reason.is_empty()).then(|| reason.to_string())
}

fn at_word_boundary(rest: &str) -> bool {
    rest.chars().next().is_none_or(|c| !c.is_alphanumeric())
}

fn normalize(value: &str) -> String {
    value
        .trim()
        .trim_matches(DECORATION)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::{validate_name, NameRules};

    fn name(value: &str) -> ValidatedName {
        validate_name(value, &NameRules::default()).unwrap()
    }

    #[test]
    fn test_plain_realistic() {
        let verdict = parse_verdict(&name("John Doe"), "Realistic").unwrap();
        assert_eq!(verdict, ClassificationVerdict::realistic("John Doe"));
    }

    #[test]
    fn test_realistic_casing_and_whitespace() {
        for reply in ["  realistic \n", "REALISTIC", "\"Realistic\"", "**Realistic.**"] {
            let verdict = parse_verdict(&name("John Doe"), reply).unwrap();
            assert_eq!(verdict.prediction, Prediction::Realistic, "reply: {:?}", reply);
            assert_eq!(verdict.reason, None);
        }
    }

    #[test]
    fn test_not_realistic_with_reason_after_dash() {
        let verdict =
            parse_verdict(&name("Table Chair"), "Not Realistic — common phrase").unwrap();

        assert_eq!(verdict.prediction, Prediction::NotRealistic);
        assert_eq!(verdict.reason.as_deref(), Some("common phrase"));
    }

    #[test]
    fn test_not_realistic_separators() {
        let replies = [
            "not realistic - placeholder text",
            "Not Realistic: placeholder text",
            "NOT REALISTIC (placeholder text)",
            "Not realistic, placeholder text.",
        ];

        for reply in replies {
            let verdict = parse_verdict(&name("Lorem Ipsum"), reply).unwrap();
            assert_eq!(verdict.prediction, Prediction::NotRealistic, "reply: {:?}", reply);
            assert_eq!(verdict.reason.as_deref(), Some("placeholder text"), "reply: {:?}", reply);
        }
    }

    #[test]
    fn test_reason_keeps_trailing_parenthesis() {
        let reply = "Not Realistic — contains numbers (123)";
        let verdict = parse_verdict(&name("Abdullah"), reply).unwrap();
        assert_eq!(verdict.reason.as_deref(), Some("contains numbers (123)"));

        let json = r#"{"prediction": "Not Realistic", "reason": "contains numbers (123)"}"#;
        let from_json = parse_verdict(&name("Abdullah"), json).unwrap();
        assert_eq!(from_json.reason, verdict.reason);
    }

    #[test]
    fn test_not_realistic_without_reason() {
        let verdict = parse_verdict(&name("Qwert"), "Not Realistic").unwrap();
        assert_eq!(verdict.prediction, Prediction::NotRealistic);
        assert_eq!(verdict.reason, None);
    }

    #[test]
    fn test_json_reply() {
        let verdict = parse_verdict(
            &name("Table Chair"),
            r#"{"prediction": "Not Realistic", "reason": "common phrase"}"#,
        )
        .unwrap();

        assert_eq!(verdict.reason.as_deref(), Some("common phrase"));
    }

    #[test]
    fn test_fenced_json_reply() {
        let reply = "```json\n{\n  \"prediction\": \"Realistic\"\n}\n```";
        let verdict = parse_verdict(&name("Aisha Khan"), reply).unwrap();
        assert_eq!(verdict, ClassificationVerdict::realistic("Aisha Khan"));
    }

    #[test]
    fn test_json_reason_on_positive_verdict_is_dropped() {
        let verdict = parse_verdict(
            &name("Aisha Khan"),
            r#"{"prediction": "realistic", "reason": " "}"#,
        )
        .unwrap();

        assert_eq!(verdict.prediction, Prediction::Realistic);
        assert_eq!(verdict.reason, None);
    }

    #[test]
    fn test_unknown_replies_fail_closed() {
        for reply in [
            "maybe?",
            "",
            "Unrealistic",
            "Realisticish",
            "I think it is realistic",
            r#"{"prediction": "Probably"}"#,
            r#"{"verdict": "Realistic"}"#,
            "{not json}",
            "Realistic or Not Realistic",
            "Realistic? No, Not Realistic — common phrase",
            "Realistic, though it could be a placeholder",
        ] {
            let err = parse_verdict(&name("John Doe"), reply).unwrap_err();
            assert!(
                matches!(err, GatewayError::UnparseableResponse { .. }),
                "reply: {:?}",
                reply
            );
        }
    }

    #[test]
    fn test_verdict_echoes_validated_name() {
        let verdict = parse_verdict(&name("  Mary-Jane  "), "Realistic").unwrap();
        assert_eq!(verdict.name, "Mary-Jane");
    }
}
