//! Timestamp handlers

use axum::{extract::Path, Json};

use crate::features::timestamp::dtos::{GreetingDto, TimestampDto, TimestampResult};
use crate::features::timestamp::services;

/// Current time
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Current time as unix ms and UTC string", body = TimestampDto)
    ),
    tag = "timestamp"
)]
pub async fn current_timestamp() -> Json<TimestampDto> {
    Json(services::current())
}

/// Parse a date string or epoch-millisecond integer
///
/// Unparseable input returns `{"error": "Invalid Date"}` with HTTP 200.
#[utoipa::path(
    get,
    path = "/api/{date}",
    params(
        ("date" = String, Path, description = "ISO date/time string or epoch-ms integer")
    ),
    responses(
        (status = 200, description = "Resolved timestamp or Invalid Date payload", body = TimestampDto)
    ),
    tag = "timestamp"
)]
pub async fn parse_timestamp(Path(date): Path<String>) -> Json<TimestampResult> {
    Json(services::resolve(Some(&date)))
}

/// Greeting probe
#[utoipa::path(
    get,
    path = "/api/hello",
    responses(
        (status = 200, description = "Greeting", body = GreetingDto)
    ),
    tag = "timestamp"
)]
pub async fn hello() -> Json<GreetingDto> {
    Json(GreetingDto {
        greeting: "hello API".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use chrono::Utc;

    use crate::features::timestamp::routes;

    fn test_server() -> TestServer {
        TestServer::new(routes::routes()).unwrap()
    }

    #[tokio::test]
    async fn test_iso_date_and_epoch_forms_agree() {
        let server = test_server();

        for path in ["/api/2015-12-25", "/api/1451001600000"] {
            let response = server.get(path).await;
            response.assert_status_ok();

            let json = response.json::<serde_json::Value>();
            assert_eq!(json["unix"], 1451001600000i64, "for {}", path);
            assert_eq!(json["utc"], "Fri, 25 Dec 2015 00:00:00 GMT", "for {}", path);
        }
    }

    #[tokio::test]
    async fn test_unparseable_input_is_still_http_200() {
        let server = test_server();

        let response = server.get("/api/not-a-date").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"], "Invalid Date");
        assert!(json.get("unix").is_none());
    }

    #[tokio::test]
    async fn test_missing_parameter_returns_current_time() {
        let server = test_server();

        let before = Utc::now().timestamp_millis();
        let response = server.get("/api").await;
        let after = Utc::now().timestamp_millis();

        response.assert_status_ok();
        let json = response.json::<serde_json::Value>();
        let unix = json["unix"].as_i64().unwrap();
        assert!(before <= unix && unix <= after);
        assert!(json["utc"].as_str().unwrap().ends_with("GMT"));
    }

    #[tokio::test]
    async fn test_hello_probe() {
        let server = test_server();

        let response = server.get("/api/hello").await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<serde_json::Value>()["greeting"],
            "hello API"
        );
    }
}
