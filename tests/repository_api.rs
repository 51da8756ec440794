//! Repository metadata and versions integration tests

#[cfg(feature = "ssr")]
#[macro_use]
mod common;

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::common::{create_test_server, test_config, OWNER, REPO};

    const APP_REPO: &str = "liri-app-";

    fn app_contents(sub: &str) -> String {
        if sub.is_empty() {
            format!("/repos/{}/{}/contents", OWNER, APP_REPO)
        } else {
            format!("/repos/{}/{}/contents/{}", OWNER, APP_REPO, sub)
        }
    }

    fn dir(path: &str) -> Value {
        json!({ "name": path.rsplit('/').next(), "path": path, "sha": "s", "type": "dir" })
    }

    fn file(path: &str, download_url: Option<String>) -> Value {
        json!({
            "name": path.rsplit('/').next(),
            "path": path,
            "sha": "s",
            "size": 8,
            "type": "file",
            "download_url": download_url,
        })
    }

    async fn mount(mock: &MockServer, url_path: String, body: Value) {
        Mock::given(method("GET"))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(mock)
            .await;
    }

    #[tokio::test]
    async fn test_repository_metadata_passthrough() {
        let mock = MockServer::start().await;
        let metadata = json!({ "full_name": "lirilabs/liri-database-v1-2025", "private": true });
        mount(&mock, format!("/repos/{}/{}", OWNER, REPO), metadata.clone()).await;
        let server = create_test_server(test_config(&mock)).await;

        let response = server.get("/api/repo").await;
        response.assert_status_ok();
        response.assert_json(&metadata);

        server.get("/repos").await.assert_json(&metadata);
    }

    #[tokio::test]
    async fn test_repository_metadata_error_status() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/repos/{}/{}", OWNER, REPO)))
            .respond_with(ResponseTemplate::new(401).set_body_string("Bad credentials"))
            .mount(&mock)
            .await;
        let server = create_test_server(test_config(&mock)).await;

        assert_error_response!(
            server.get("/api/repo").await,
            StatusCode::UNAUTHORIZED,
            "Bad credentials"
        );
    }

    #[tokio::test]
    async fn test_versions_tree() {
        let mock = MockServer::start().await;
        let config_url = format!("{}/raw/v2/config.json", mock.uri());
        let broken_url = format!("{}/raw/v2/sub/broken.json", mock.uri());

        mount(
            &mock,
            app_contents(""),
            json!([dir("v1"), dir("v2"), dir("assets"), file("README.md", None)]),
        )
        .await;
        mount(&mock, app_contents("v1"), json!([])).await;
        mount(
            &mock,
            app_contents("v2"),
            json!([file("v2/config.json", Some(config_url)), dir("v2/sub")]),
        )
        .await;
        mount(
            &mock,
            app_contents("v2/sub"),
            json!([file("v2/sub/broken.json", Some(broken_url)), file("v2/sub/logo.png", None)]),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/raw/v2/config.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"theme":"dark"}"#))
            .mount(&mock)
            .await;
        Mock::given(method("GET"))
            .and(path("/raw/v2/sub/broken.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{oops"))
            .mount(&mock)
            .await;

        let server = create_test_server(test_config(&mock)).await;
        let response = server.get("/api/versions").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["total"], 2);
        assert_eq!(body["versions"][0]["name"], "v2");
        assert_eq!(body["versions"][1]["name"], "v1");
        assert_eq!(body["latest"]["number"], 2);

        let latest = &body["latest"]["files"];
        assert_eq!(latest[0]["type"], "file");
        assert_eq!(latest[0]["jsonContent"], json!({ "theme": "dark" }));
        assert_eq!(latest[1]["type"], "directory");
        assert_eq!(
            latest[1]["children"][0]["jsonContent"],
            json!({ "invalidJson": true, "raw": "{oops" })
        );
        assert!(latest[1]["children"][1].get("jsonContent").is_none());
        assert_eq!(body["content"]["v1"], json!([]));
    }

    #[tokio::test]
    async fn test_versions_missing_repository() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(app_contents("")))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock)
            .await;
        let server = create_test_server(test_config(&mock)).await;

        server
            .get("/api/versions")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
