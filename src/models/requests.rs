//! Request DTOs for the joke service and the submission microservice
//!
//! Fields arrive optional so that missing values are reported as validation
//! failures (400) instead of deserialization rejections.

use serde::{Deserialize, Serialize};

/// Count used when the query string omits `count` or it cannot be parsed.
pub const DEFAULT_JOKE_COUNT: i64 = 1;

/// Query string for GET /joke/:type
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JokeQuery {
    /// Raw `count` value; parsed leniently by [`JokeQuery::count`]
    #[serde(default)]
    pub count: Option<String>,
}

impl JokeQuery {
    /// Requested number of jokes.
    ///
    /// Reads the leading signed integer, ignoring anything after it, so
    /// `5abc` is 5 and `3.7` is 3. Missing, non-numeric and zero values
    /// fall back to one joke. Negative values are passed through and select
    /// nothing.
    pub fn count(&self) -> i64 {
        self.count
            .as_deref()
            .and_then(leading_integer)
            .filter(|count| *count != 0)
            .unwrap_or(DEFAULT_JOKE_COUNT)
    }
}

/// Parses an optional sign followed by digits at the start of `raw`,
/// after leading whitespace. Saturates instead of overflowing.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    seen_digit.then_some(if negative { -value } else { value })
}

/// Request body for POST /submit on the joke service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitJokeRequest {
    /// Name of an existing joke type
    #[serde(default, rename = "type")]
    pub joke_type: Option<String>,
    #[serde(default)]
    pub setup: Option<String>,
    #[serde(default)]
    pub punchline: Option<String>,
}

/// A submission that passed boundary validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJoke {
    pub type_name: String,
    pub setup: String,
    pub punchline: String,
}

impl SubmitJokeRequest {
    /// Checks that `type`, `setup` and `punchline` are present and not blank.
    ///
    /// Values are kept exactly as sent: whitespace only decides blankness,
    /// so the type lookup stays an exact match.
    pub fn validate(self) -> Result<NewJoke, String> {
        match (
            present(self.joke_type),
            present(self.setup),
            present(self.punchline),
        ) {
            (Some(type_name), Some(setup), Some(punchline)) => Ok(NewJoke {
                type_name,
                setup,
                punchline,
            }),
            _ => Err("Missing required fields (type, setup, punchline)".to_string()),
        }
    }
}

/// Request body for POST /submit on the submission microservice
///
/// Also serialized by the terminal client; absent fields are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub punchline: Option<String>,
    /// Existing type picked from the list
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub joke_type: Option<String>,
    /// Free-text type created on the fly
    #[serde(default, rename = "newType", skip_serializing_if = "Option::is_none")]
    pub new_type: Option<String>,
}

/// A validated submission for the microservice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub setup: String,
    pub punchline: String,
    /// Type chosen from the list, if any
    pub joke_type: Option<String>,
    /// New type name, if any; takes precedence over `joke_type`
    pub new_type: Option<String>,
}

impl SubmissionRequest {
    /// Requires `setup`, `punchline` and at least one of `type`/`newType`.
    pub fn validate(self) -> Result<Submission, String> {
        let setup = non_blank(self.setup);
        let punchline = non_blank(self.punchline);
        let joke_type = non_blank(self.joke_type);
        let new_type = non_blank(self.new_type);

        match (setup, punchline) {
            (Some(setup), Some(punchline)) if joke_type.is_some() || new_type.is_some() => {
                Ok(Submission {
                    setup,
                    punchline,
                    joke_type,
                    new_type,
                })
            }
            _ => Err("All fields required".to_string()),
        }
    }
}

impl From<Submission> for SubmissionRequest {
    fn from(submission: Submission) -> Self {
        Self {
            setup: Some(submission.setup),
            punchline: Some(submission.punchline),
            joke_type: submission.joke_type,
            new_type: submission.new_type,
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(count: Option<&str>) -> JokeQuery {
        JokeQuery {
            count: count.map(str::to_string),
        }
    }

    #[test]
    fn test_count_defaults_to_one() {
        assert_eq!(query(None).count(), 1);
        assert_eq!(query(Some("abc")).count(), 1);
        assert_eq!(query(Some("0")).count(), 1);
        assert_eq!(query(Some("")).count(), 1);
    }

    #[test]
    fn test_count_parses_numbers() {
        assert_eq!(query(Some("5")).count(), 5);
        assert_eq!(query(Some("-2")).count(), -2);
        assert_eq!(query(Some("+4")).count(), 4);
    }

    #[test]
    fn test_count_reads_leading_digits() {
        assert_eq!(query(Some("5abc")).count(), 5);
        assert_eq!(query(Some("3.7")).count(), 3);
        assert_eq!(query(Some("  12 jokes")).count(), 12);
        assert_eq!(query(Some("-0")).count(), 1);
        assert_eq!(query(Some("-")).count(), 1);
        assert_eq!(query(Some("x5")).count(), 1);
        assert_eq!(query(Some("99999999999999999999999")).count(), i64::MAX);
    }

    #[test]
    fn test_submit_request_deserialize() {
        let json = r#"{"type": "pun", "setup": "A", "punchline": "B"}"#;
        let req: SubmitJokeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.joke_type.as_deref(), Some("pun"));

        let joke = req.validate().unwrap();
        assert_eq!(joke.type_name, "pun");
        assert_eq!(joke.setup, "A");
        assert_eq!(joke.punchline, "B");
    }

    #[test]
    fn test_submit_request_missing_fields() {
        let req: SubmitJokeRequest = serde_json::from_str(r#"{"type": "pun"}"#).unwrap();
        assert!(req.validate().is_err());

        let req: SubmitJokeRequest =
            serde_json::from_str(r#"{"type": "", "setup": "A", "punchline": "B"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_submit_request_keeps_raw_values() {
        let json = r#"{"type": "  pun ", "setup": "  Why?\n", "punchline": " Because. "}"#;
        let req: SubmitJokeRequest = serde_json::from_str(json).unwrap();

        let joke = req.validate().unwrap();
        assert_eq!(joke.type_name, "  pun ");
        assert_eq!(joke.setup, "  Why?\n");
        assert_eq!(joke.punchline, " Because. ");
    }

    #[test]
    fn test_submit_request_rejects_whitespace_only() {
        let json = r#"{"type": "pun", "setup": " \t", "punchline": "B"}"#;
        let req: SubmitJokeRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_submission_accepts_new_type_only() {
        let json = r#"{"setup": "A", "punchline": "B", "newType": "dad"}"#;
        let req: SubmissionRequest = serde_json::from_str(json).unwrap();
        let submission = req.validate().unwrap();
        assert_eq!(submission.new_type.as_deref(), Some("dad"));
        assert!(submission.joke_type.is_none());
    }

    #[test]
    fn test_submission_serializes_wire_names() {
        let submission = SubmissionRequest {
            setup: Some(" A ".to_string()),
            punchline: Some("B".to_string()),
            joke_type: None,
            new_type: Some("dad ".to_string()),
        }
        .validate()
        .unwrap();

        let json = serde_json::to_value(SubmissionRequest::from(submission)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"setup": "A", "punchline": "B", "newType": "dad"})
        );
    }

    #[test]
    fn test_submission_requires_some_type() {
        let json = r#"{"setup": "A", "punchline": "B", "type": " ", "newType": ""}"#;
        let req: SubmissionRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_err());
    }
}
