//! Custom assertion macros
//!
//! Error responses share one shape, `{ "error": ..., "status": ... }`;
//! these macros check it with a readable failure message.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a response is a JSON error with the given status and message
#[macro_export]
macro_rules! assert_error_response {
    ($response:expr, $status:expr, $message:expr) => {{
        let response = $response;
        response.assert_status($status);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], serde_json::json!($message), "body: {}", body);
        assert_eq!(
            body["status"],
            serde_json::json!($status.as_u16()),
            "body: {}",
            body
        );
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
