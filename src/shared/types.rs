use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body used for every error status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the administrative bulk-delete endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    pub result: DeleteResult,
}

/// Outcome of a bulk delete. Field names match the historical wire format
/// of the document-store driver the clients were written against.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResult {
    pub acknowledged: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

impl DeleteResponse {
    pub fn new(message: impl Into<String>, deleted_count: u64) -> Self {
        Self {
            message: message.into(),
            result: DeleteResult {
                acknowledged: true,
                deleted_count,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_response_wire_format() {
        let response = DeleteResponse::new("All users have been deleted!", 3);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["message"], "All users have been deleted!");
        assert_eq!(json["result"]["acknowledged"], true);
        assert_eq!(json["result"]["deletedCount"], 3);
    }
}
