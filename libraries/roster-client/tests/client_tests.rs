//! Tests for the Roster client library.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real server connection.

use roster_client::{
    ClientConfig, ClientError, FormField, RegistrationForm, RosterClient, SubmitOutcome,
};
use roster_core::CreateUser;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn stored_ann() -> serde_json::Value {
    serde_json::json!({
        "id": "65a1f0c2e4b0a1b2c3d4e5f6",
        "name": "Ann",
        "last_name": "Lee",
        "city": "Reno",
        "email": "ann@example.com",
        "password": "x",
        "created_at": "2026-10-19T12:00:00Z"
    })
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_default_points_at_local_server() {
        let client = RosterClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.url(), "http://localhost:3000");
    }

    #[test]
    fn test_url_normalization_trailing_slash() {
        let client = RosterClient::new(ClientConfig::new("https://example.com/")).unwrap();
        assert_eq!(client.url(), "https://example.com");
    }

    #[test]
    fn test_empty_url_rejected() {
        match RosterClient::new(ClientConfig::new("")).unwrap_err() {
            ClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        let result = RosterClient::new(ClientConfig::new("example.com"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_ftp_scheme_rejected() {
        let result = RosterClient::new(ClientConfig::new("ftp://example.com"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}

// =============================================================================
// API Tests
// =============================================================================

mod api {
    use super::*;

    #[tokio::test]
    async fn test_create_user_posts_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/user/createUser"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({ "name": "Ann", "city": "Reno" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored_ann()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let input = CreateUser {
            name: Some("Ann".to_string()),
            city: Some("Reno".to_string()),
            ..CreateUser::default()
        };

        let user = client.create_user(&input).await.unwrap();

        assert_eq!(user.id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(user.email.as_deref(), Some("ann@example.com"));
    }

    #[tokio::test]
    async fn test_create_user_accepts_201() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/user/createUser"))
            .respond_with(ResponseTemplate::new(201).set_body_json(stored_ann()))
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        assert!(client.create_user(&CreateUser::default()).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_user_store_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/user/createUser"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Database error: write rejected",
                "kind": "DatabaseError"
            })))
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(ClientConfig::new(mock_server.uri())).unwrap();

        match client.create_user(&CreateUser::default()).await.unwrap_err() {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Database error: write rejected");
            }
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_list_users() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/user/getUsers"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([stored_ann()])),
            )
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let users = client.list_users().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name.as_deref(), Some("Ann"));
    }

    #[tokio::test]
    async fn test_list_users_invalid_json_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/user/getUsers"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(ClientConfig::new(mock_server.uri())).unwrap();

        assert!(matches!(
            client.list_users().await,
            Err(ClientError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_health() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok",
                "version": "0.1.0"
            })))
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let info = client.health().await.unwrap();

        assert_eq!(info.status, "ok");
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = RosterClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();

        match client.list_users().await.unwrap_err() {
            ClientError::ServerUnreachable(_) | ClientError::Request(_) => {}
            e => panic!("Expected ServerUnreachable or Request error, got: {:?}", e),
        }
    }
}

// =============================================================================
// Form Submission Tests
// =============================================================================

mod form_submission {
    use super::*;

    #[tokio::test]
    async fn test_submit_sends_full_state_once() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/user/createUser"))
            .and(body_json(serde_json::json!({
                "name": "Ann",
                "last_name": "Lee",
                "city": "Reno",
                "email": "ann@example.com",
                "password": "x"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored_ann()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let mut form = RegistrationForm::new(client);

        form.state_mut().input(FormField::Name, "A");
        form.state_mut().input(FormField::Name, "nn");
        form.state_mut().change("last_name", "Lee");
        form.state_mut().change("city", "Reno");
        form.state_mut().change("email", "ann@example.com");
        form.state_mut().change("password", "x");

        let outcome = form.submit().await;

        assert!(outcome.is_created());
        // Fields are not reset after success
        assert_eq!(form.state().name, "Ann");
    }

    #[tokio::test]
    async fn test_submit_empty_form_sends_empty_strings() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/user/createUser"))
            .and(body_json(serde_json::json!({
                "name": "",
                "last_name": "",
                "city": "",
                "email": "",
                "password": ""
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored_ann()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let form = RegistrationForm::new(client);

        assert!(form.submit().await.is_created());
    }

    #[tokio::test]
    async fn test_submit_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/user/createUser"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "error": "unknown field `nick`" })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RosterClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let form = RegistrationForm::new(client);

        match form.submit().await {
            SubmitOutcome::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("nick"));
            }
            other => panic!("Expected Rejected, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_network_failure_is_not_retried() {
        let client = RosterClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();
        let mut form = RegistrationForm::new(client);
        form.state_mut().change("name", "Ann");

        let outcome = form.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(form.state().name, "Ann");
    }
}
