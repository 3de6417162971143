//! File metadata handler

use axum::{extract::Multipart, Json};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::filemeta::dtos::{FileMetadataDto, UploadFileDto};

/// Analyse an uploaded file
///
/// Accepts multipart/form-data with a single `upfile` field and echoes back
/// its name, declared MIME type and byte size. The payload itself is
/// discarded with the request.
#[utoipa::path(
    post,
    path = "/api/fileanalyse",
    tag = "filemeta",
    request_body(
        content = UploadFileDto,
        content_type = "multipart/form-data",
        description = "Form with a single `upfile` field",
    ),
    responses(
        (status = 200, description = "Metadata of the uploaded file", body = FileMetadataDto),
        (status = 400, description = "No file attached"),
        (status = 413, description = "File too large")
    )
)]
pub async fn analyse_file(mut multipart: Multipart) -> Result<Json<FileMetadataDto>> {
    let mut metadata: Option<FileMetadataDto> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "upfile" => {
                let name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                metadata = Some(FileMetadataDto {
                    name,
                    content_type,
                    size: data.len(),
                });
            }
            _ => {
                // Ignore unknown fields
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let metadata =
        metadata.ok_or_else(|| AppError::BadRequest("Upload file is required".to_string()))?;

    tracing::info!(
        "File analysed: name={}, type={}, size={}",
        metadata.name,
        metadata.content_type,
        metadata.size
    );

    Ok(Json(metadata))
}

#[cfg(test)]
mod tests {
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;

    use crate::core::config::UploadConfig;
    use crate::features::filemeta::routes;

    fn test_server() -> TestServer {
        let config = UploadConfig {
            max_upload_size: 1024 * 1024,
        };
        TestServer::new(routes::routes(&config)).unwrap()
    }

    #[tokio::test]
    async fn test_analyse_reports_name_type_and_size() {
        let server = test_server();

        let payload = vec![b'x'; 42];
        let form = MultipartForm::new().add_part(
            "upfile",
            Part::bytes(payload)
                .file_name("test.txt")
                .mime_type("text/plain"),
        );

        let response = server.post("/api/fileanalyse").multipart(form).await;

        response.assert_status_ok();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["name"], "test.txt");
        assert_eq!(json["type"], "text/plain");
        assert_eq!(json["size"], 42);
    }

    #[tokio::test]
    async fn test_unknown_fields_are_ignored() {
        let server = test_server();

        let form = MultipartForm::new()
            .add_text("comment", "not a file")
            .add_part(
                "upfile",
                Part::bytes(b"hello".to_vec())
                    .file_name("hello.bin")
                    .mime_type("application/octet-stream"),
            );

        let response = server.post("/api/fileanalyse").multipart(form).await;

        response.assert_status_ok();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["name"], "hello.bin");
        assert_eq!(json["size"], 5);
    }

    #[tokio::test]
    async fn test_missing_file_is_a_client_error() {
        let server = test_server();

        let form = MultipartForm::new().add_text("comment", "no file here");
        let response = server.post("/api/fileanalyse").multipart(form).await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["message"], "Upload file is required");
    }
}
