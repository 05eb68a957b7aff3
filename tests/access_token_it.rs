// std
use std::sync::Arc;
// self
use linkedin_api::{
	api::LinkedIn,
	auth::Credentials,
	config::ApiEndpoints,
	error::{Error, TransportError},
	mock::{MockTransport, Responder},
	oauth2::http::{Method, StatusCode},
	url::form_urlencoded,
};

const TOKEN_URL: &str = "https://www.linkedin.com/uas/oauth2/accessToken?";
const REDIRECT_URI: &str = "https://app.example.com/callback";

fn build_client() -> (LinkedIn<MockTransport>, Arc<MockTransport>) {
	let transport = Arc::new(MockTransport::isolated().fail_on_unmatched(true));
	let client = LinkedIn::<MockTransport>::with_transport(
		Credentials::new("client-it", "secret-it"),
		ApiEndpoints::linkedin().expect("Default endpoints should validate."),
		transport.clone(),
	);

	(client, transport)
}

#[tokio::test]
async fn exchange_stores_access_token_on_client() {
	let (mut client, transport) = build_client();

	transport.register_responder(
		"POST",
		TOKEN_URL,
		Responder::new(|request| {
			assert_eq!(request.method(), Method::POST);

			let form = form_urlencoded::parse(request.body()).into_owned().collect::<Vec<_>>();
			let value = |key: &str| {
				form.iter().find(|(name, _)| name == key).map(|(_, value)| value.clone())
			};

			assert_eq!(value("grant_type").as_deref(), Some("authorization_code"));
			assert_eq!(value("code").as_deref(), Some("code-123"));
			assert_eq!(value("redirect_uri").as_deref(), Some(REDIRECT_URI));
			assert_eq!(value("client_id").as_deref(), Some("client-it"));
			assert_eq!(value("client_secret").as_deref(), Some("secret-it"));

			Responder::json(
				StatusCode::OK,
				&serde_json::json!({ "access_token": "issued-token", "expires_in": 5_184_000 }),
			)
			.respond(request)
		}),
	);

	let record = client
		.retrieve_access_token("code-123", REDIRECT_URI)
		.await
		.expect("Code exchange should succeed.");

	assert_eq!(record.access_token.expose(), "issued-token");
	assert!(record.refresh_token.is_none());
	assert_eq!(
		record.expires_at.map(|expires_at| expires_at - record.issued_at),
		Some(time::Duration::seconds(5_184_000))
	);
	assert_eq!(client.token().map(|token| token.expose()), Some("issued-token"));
}

#[tokio::test]
async fn invalid_grant_is_reported() {
	let (mut client, transport) = build_client();

	transport.register_responder(
		"POST",
		TOKEN_URL,
		Responder::json(
			StatusCode::BAD_REQUEST,
			&serde_json::json!({
				"error": "invalid_grant",
				"error_description": "authorization code expired"
			}),
		),
	);

	let err = client
		.retrieve_access_token("stale", REDIRECT_URI)
		.await
		.expect_err("Expired code should be rejected.");

	assert!(matches!(err, Error::InvalidGrant { ref reason } if reason == "authorization code expired"));
	assert!(client.token().is_none());
}

#[tokio::test]
async fn invalid_client_is_reported() {
	let (mut client, transport) = build_client();

	transport.register_responder(
		"POST",
		TOKEN_URL,
		Responder::json(StatusCode::UNAUTHORIZED, &serde_json::json!({ "error": "invalid_client" })),
	);

	let err = client
		.retrieve_access_token("code", REDIRECT_URI)
		.await
		.expect_err("Bad credentials should be rejected.");

	assert!(matches!(err, Error::InvalidClient { .. }));
}

#[tokio::test]
async fn transport_errors_keep_their_type() {
	let (mut client, transport) = build_client();
	let err = client
		.retrieve_access_token("code", REDIRECT_URI)
		.await
		.expect_err("Unregistered token endpoint should fail.");

	match err {
		Error::Transport(TransportError::NoResponderFound { method, url }) => {
			assert_eq!(method, "POST");
			assert_eq!(url, TOKEN_URL);
		},
		other => panic!("Unexpected error: {other:?}."),
	}

	transport.register_responder("POST", TOKEN_URL, Responder::network_error("reset by peer"));

	let err = client
		.retrieve_access_token("code", REDIRECT_URI)
		.await
		.expect_err("Simulated outage should fail.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
}

#[tokio::test]
async fn unrepresentable_lifetime_is_reported() {
	let (mut client, transport) = build_client();

	transport.register_responder(
		"POST",
		TOKEN_URL,
		Responder::string(
			StatusCode::OK,
			r#"{"access_token":"t","expires_in":9223372036854775807}"#,
		),
	);

	let err = client
		.retrieve_access_token("code", "localhost")
		.await
		.expect_err("Lifetime past the date range should be rejected.");

	assert!(matches!(err, Error::TokenEndpoint { ref message, .. } if message.contains("out of range")));
	assert!(client.token().is_none());
}
