//! Tests for `run_verification` and the exit code policy (--fail-on flag).

use httptest::{matchers::*, responders::*, Expectation, Server, ServerBuilder};
use tempfile::TempDir;

use http_get_verifier::{
    evaluate_exit_code, run_verification, Config, ErrorCategory, FailOn, Transport,
};

const USER_JSON: &str = r#"{"id": 1, "name": "Leanne Graham", "username": "Bret"}"#;

fn local_server() -> Server {
    ServerBuilder::new()
        .bind_addr("127.0.0.1:0".parse().unwrap())
        .run()
        .expect("mock server binds to 127.0.0.1")
}

fn config_for(server: &Server) -> Config {
    Config {
        url: format!("http://{}/users/1", server.addr()),
        timeout_seconds: 5,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_all_transports_pass_against_matching_server() {
    let server = local_server();
    server.expect(
        Expectation::matching(request::method_path("GET", "/users/1"))
            .times(6)
            .respond_with(
                status_code(200)
                    .append_header("Content-Type", "application/json; charset=utf-8")
                    .body(USER_JSON),
            ),
    );

    let report = run_verification(config_for(&server)).await.unwrap();

    assert_eq!(report.outcomes.len(), 6);
    assert_eq!(report.passed, 6);
    assert_eq!(report.failed, 0);
    assert!(report.all_passed());
    assert!(report.outcomes.iter().all(|o| o.status == Some(200)));
    assert_eq!(evaluate_exit_code(FailOn::AnyFailure, &report), 0);
}

#[tokio::test]
async fn test_selected_transports_run_in_given_order() {
    let server = local_server();
    server.expect(
        Expectation::matching(request::method_path("GET", "/users/1"))
            .times(2)
            .respond_with(
                status_code(200)
                    .append_header("Content-Type", "application/json; charset=utf-8")
                    .body(USER_JSON),
            ),
    );

    let config = Config {
        transports: vec![Transport::Minreq, Transport::HyperConnection],
        ..config_for(&server)
    };
    let report = run_verification(config).await.unwrap();

    let order: Vec<Transport> = report.outcomes.iter().map(|o| o.transport).collect();
    assert_eq!(order, vec![Transport::Minreq, Transport::HyperConnection]);
}

#[tokio::test]
async fn test_failed_checks_are_recorded_not_raised() {
    let server = local_server();
    server.expect(
        Expectation::matching(request::method_path("GET", "/users/1"))
            .times(2)
            .respond_with(
                status_code(500)
                    .append_header("Content-Type", "text/html")
                    .body("<h1>oops</h1>"),
            ),
    );

    let config = Config {
        transports: vec![Transport::Reqwest, Transport::HttpReq],
        ..config_for(&server)
    };
    let report = run_verification(config).await.unwrap();

    assert_eq!(report.passed, 0);
    assert_eq!(report.failed, 2);
    for outcome in &report.outcomes {
        assert!(!outcome.passed);
        assert_eq!(outcome.status, Some(500));
        assert_eq!(outcome.error_category, Some(ErrorCategory::Assertion));
        let message = outcome.error.as_deref().unwrap();
        assert!(message.contains("expected status 200, got 500"), "{message}");
    }
    assert_eq!(evaluate_exit_code(FailOn::AnyFailure, &report), 2);
    assert_eq!(evaluate_exit_code(FailOn::Never, &report), 0);
}

#[tokio::test]
async fn test_custom_expectations_are_applied() {
    let server = local_server();
    server.expect(
        Expectation::matching(request::method_path("GET", "/health"))
            .respond_with(
                status_code(201)
                    .append_header("Content-Type", "text/plain")
                    .body("ok"),
            ),
    );

    let config = Config {
        url: format!("http://{}/health", server.addr()),
        transports: vec![Transport::HyperUtil],
        expected_status: 201,
        expected_content_type: "text/plain".to_string(),
        expected_body: String::new(),
        ..Default::default()
    };
    let report = run_verification(config).await.unwrap();

    assert!(report.all_passed(), "{:?}", report.outcomes);
}

#[tokio::test]
async fn test_report_file_is_written() {
    let server = local_server();
    server.expect(
        Expectation::matching(request::method_path("GET", "/users/1"))
            .respond_with(
                status_code(200)
                    .append_header("Content-Type", "application/json; charset=utf-8")
                    .body(USER_JSON),
            ),
    );

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    let config = Config {
        transports: vec![Transport::ReqwestBlocking],
        report: Some(path.clone()),
        ..config_for(&server)
    };
    run_verification(config).await.unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["passed"], 1);
    assert_eq!(json["failed"], 0);
    assert_eq!(json["outcomes"][0]["transport"], "reqwest-blocking");
    assert_eq!(json["outcomes"][0]["passed"], true);
    assert!(json["url"].as_str().unwrap().ends_with("/users/1"));
}

#[tokio::test]
async fn test_unwritable_report_path_is_an_error() {
    let server = local_server();
    server.expect(
        Expectation::matching(request::method_path("GET", "/users/1"))
            .respond_with(
                status_code(200)
                    .append_header("Content-Type", "application/json; charset=utf-8")
                    .body(USER_JSON),
            ),
    );

    let dir = TempDir::new().unwrap();
    let config = Config {
        transports: vec![Transport::Reqwest],
        report: Some(dir.path().join("missing").join("report.json")),
        ..config_for(&server)
    };

    let err = run_verification(config).await.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to write report"));
}

#[tokio::test]
async fn test_invalid_url_fails_before_any_request() {
    let config = Config {
        url: "ftp://example.com/users/1".to_string(),
        ..Default::default()
    };

    let err = run_verification(config).await.unwrap_err();
    assert!(format!("{err:#}").contains("unsupported scheme"));
}

#[tokio::test]
async fn test_zero_timeout_is_rejected() {
    let config = Config {
        timeout_seconds: 0,
        ..Default::default()
    };

    let err = run_verification(config).await.unwrap_err();
    assert!(format!("{err:#}").contains("at least 1 second"));
}
