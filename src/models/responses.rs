//! Response DTOs for the joke service and the submission microservice

use serde::{Deserialize, Serialize};

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Number of cached jokes, when the service has a cache
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_jokes: Option<usize>,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            cached_jokes: None,
        }
    }

    /// Attaches the current cache size.
    pub fn with_cached_jokes(mut self, count: usize) -> Self {
        self.cached_jokes = Some(count);
        self
    }
}

/// Joke echoed back by the submission microservice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedJoke {
    pub setup: String,
    pub punchline: String,
    #[serde(rename = "type")]
    pub joke_type: String,
}

/// Response body for POST /submit on the submission microservice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub message: String,
    pub joke: SubmittedJoke,
}

impl SubmissionResponse {
    pub fn accepted(joke: SubmittedJoke) -> Self {
        Self {
            message: "Joke submitted".to_string(),
            joke,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
        assert!(!json.contains("cached_jokes"));
    }

    #[test]
    fn test_health_response_with_cache_size() {
        let resp = HealthResponse::healthy().with_cached_jokes(12);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["cached_jokes"], 12);
    }

    #[test]
    fn test_submission_response_uses_type_key() {
        let resp = SubmissionResponse::accepted(SubmittedJoke {
            setup: "A".to_string(),
            punchline: "B".to_string(),
            joke_type: "pun".to_string(),
        });
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["message"], "Joke submitted");
        assert_eq!(json["joke"]["type"], "pun");
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
