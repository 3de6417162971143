use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A resolved timestamp: epoch milliseconds plus the matching UTC string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimestampDto {
    pub unix: i64,
    pub utc: String,
}

/// Payload for unparseable input. Returned with HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InvalidDateDto {
    pub error: String,
}

/// Either outcome of a parse attempt; serializes flat as one or the other
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampResult {
    Resolved(TimestampDto),
    Invalid(InvalidDateDto),
}

/// Greeting response for the hello probe
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GreetingDto {
    pub greeting: String,
}
