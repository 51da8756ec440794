//! Image upload integration tests

#[cfg(feature = "ssr")]
#[macro_use]
mod common;

#[cfg(feature = "ssr")]
mod tests {
    use axum::body::Bytes;
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::common::{create_test_server, test_config, write_response};

    const PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52,
    ];
    const UPLOAD_PATH: &str =
        r"^/repos/lirilabs/liri-database-v1-2025/contents/fall/\d+/filesent\.(png|jpg)$";

    #[tokio::test]
    async fn test_upload_png() {
        let mock = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path_regex(UPLOAD_PATH))
            .respond_with(ResponseTemplate::new(201).set_body_json(write_response("fall/1/filesent.png", "sha-1")))
            .expect(1)
            .mount(&mock)
            .await;
        let server = create_test_server(test_config(&mock)).await;

        let response = server
            .post("/api/upload-image")
            .bytes(Bytes::from_static(PNG))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["format"], "png");

        let stored = body["path"].as_str().unwrap();
        assert!(stored.starts_with("fall/"));
        assert!(stored.ends_with("/filesent.png"));
        assert_eq!(
            body["imageUrl"],
            format!("{}/lirilabs/liri-database-v1-2025/main/{}", mock.uri(), stored)
        );
        assert_eq!(
            body["githubUrl"],
            "https://github.com/lirilabs/liri-database-v1-2025/blob/main/fall/1/filesent.png"
        );

        // New uploads never carry a content hash.
        let requests = mock.received_requests().await.unwrap();
        let put: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(put.get("sha").is_none());
    }

    #[tokio::test]
    async fn test_upload_alias_route_and_jpeg_extension() {
        let mock = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path_regex(UPLOAD_PATH))
            .respond_with(ResponseTemplate::new(201).set_body_json(write_response("fall/1/filesent.jpg", "sha-1")))
            .mount(&mock)
            .await;
        let server = create_test_server(test_config(&mock)).await;

        let response = server
            .post("/upload-image")
            .bytes(Bytes::from_static(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["format"], "jpg");
        assert_contains!(body["path"].as_str().unwrap(), "/filesent.jpg");
    }

    #[tokio::test]
    async fn test_upload_too_large() {
        let mock = MockServer::start().await;
        let config = crate::common::config_builder(&mock)
            .max_image_bytes(8)
            .build()
            .unwrap();
        let server = create_test_server(config).await;

        let response = server
            .post("/api/upload-image")
            .bytes(Bytes::from_static(PNG))
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        assert!(mock.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_unknown_format() {
        let mock = MockServer::start().await;
        let server = create_test_server(test_config(&mock)).await;

        let response = server
            .post("/api/upload-image")
            .bytes(Bytes::from_static(b"%PDF-1.7 not an image"))
            .await;

        assert_error_response!(response, StatusCode::BAD_REQUEST, "Unsupported image format");
        assert!(mock.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_remote_error_passes_through() {
        let mock = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path_regex(UPLOAD_PATH))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({ "message": "Invalid request" })),
            )
            .mount(&mock)
            .await;
        let server = create_test_server(test_config(&mock)).await;

        let response = server
            .post("/api/upload-image")
            .bytes(Bytes::from_static(PNG))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response.assert_json(&json!({ "message": "Invalid request" }));
    }
}
