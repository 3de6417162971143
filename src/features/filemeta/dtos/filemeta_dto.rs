use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Upload request DTO for OpenAPI documentation.
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadFileDto {
    /// The file to analyse
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub upfile: String,
}

/// Metadata echoed back for one uploaded file
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileMetadataDto {
    /// Original filename as uploaded
    pub name: String,
    /// Client-declared MIME type (never sniffed from content)
    #[serde(rename = "type")]
    pub content_type: String,
    /// Size of the payload in bytes
    pub size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_wire_format_uses_type_key() {
        let dto = FileMetadataDto {
            name: "test.txt".to_string(),
            content_type: "text/plain".to_string(),
            size: 42,
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["name"], "test.txt");
        assert_eq!(json["type"], "text/plain");
        assert_eq!(json["size"], 42);
        assert!(json.get("content_type").is_none());
    }
}
