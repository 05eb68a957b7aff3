// std
use std::sync::Arc;
// self
use linkedin_api::{
	api::{GroupId, LinkedIn, MemberId},
	auth::Credentials,
	config::ApiEndpoints,
	error::Error,
	fields::Fields,
	mock::{MockTransport, Responder},
	oauth2::http::{StatusCode, header::HeaderName},
	url::Url,
};

const TOKEN: &str = "api-it-token";

fn build_client() -> (LinkedIn<MockTransport>, Arc<MockTransport>) {
	let transport = Arc::new(MockTransport::isolated().fail_on_unmatched(true));
	let mut client = LinkedIn::<MockTransport>::with_transport(
		Credentials::new("client-it", "secret-it"),
		ApiEndpoints::linkedin().expect("Default endpoints should validate."),
		transport.clone(),
	);

	client.set_token(TOKEN);

	(client, transport)
}

fn profile_fields() -> Fields {
	[("id", vec![]), ("first-name", vec![]), ("positions", vec!["title", "company"])]
		.into_iter()
		.collect()
}

#[tokio::test]
async fn profile_of_current_member() {
	let (client, transport) = build_client();

	transport.register_responder(
		"GET",
		format!(
			"https://api.linkedin.com/v1/people/~:(id,first-name,positions:(title,company))?oauth2_access_token={TOKEN}"
		),
		Responder::json(StatusCode::OK, &serde_json::json!({ "id": "me", "firstName": "Ada" })),
	);

	let profile = client.profile(MemberId::Current, &profile_fields()).await.expect("Profile should load.");

	assert_eq!(profile.get("firstName"), Some(&serde_json::json!("Ada")));
}

#[tokio::test]
async fn profile_by_public_url_is_escaped() {
	let (client, transport) = build_client();

	transport.register_responder(
		"GET",
		format!(
			"https://api.linkedin.com/v1/people/url=https%3A%2F%2Fwww.linkedin.com%2Fin%2Fada?oauth2_access_token={TOKEN}"
		),
		Responder::json(StatusCode::OK, &serde_json::json!({ "id": "ada" })),
	);

	let profile = client
		.profile("https://www.linkedin.com/in/ada", &Fields::new())
		.await
		.expect("Profile by URL should load.");

	assert_eq!(profile.get("id"), Some(&serde_json::json!("ada")));
}

#[tokio::test]
async fn connections_forward_extra_parameters() {
	let (client, transport) = build_client();

	transport.register_responder(
		"GET",
		format!(
			"https://api.linkedin.com/v1/people/id=abc/connections:(id)?count=10&oauth2_access_token={TOKEN}&start=20"
		),
		Responder::json(StatusCode::OK, &serde_json::json!({ "_total": 0, "values": [] })),
	);

	let mut fields = Fields::new();

	fields.add_field("id");

	let connections = client
		.connections("abc", &fields, [("start", "20"), ("count", "10")])
		.await
		.expect("Connections should load.");

	assert_eq!(connections.get("_total"), Some(&serde_json::json!(0)));
}

#[tokio::test]
async fn group_by_numeric_id() {
	let (client, transport) = build_client();

	transport.register_responder(
		"GET",
		format!("https://api.linkedin.com/v1/groups/12345:(id,name)?oauth2_access_token={TOKEN}"),
		Responder::json(StatusCode::OK, &serde_json::json!({ "id": "12345", "name": "Rust" })),
	);

	let fields = [("id", Vec::<&str>::new()), ("name", vec![])].into_iter().collect::<Fields>();
	let group = client.group(GroupId::Numeric(12_345), &fields).await.expect("Group should load.");

	assert_eq!(group.get("name"), Some(&serde_json::json!("Rust")));
}

#[tokio::test]
async fn requests_ask_for_json() {
	let (client, transport) = build_client();

	transport.register_responder(
		"GET",
		format!("https://api.linkedin.com/v1/people/~?oauth2_access_token={TOKEN}"),
		Responder::new(|request| {
			let format = request
				.headers()
				.get(HeaderName::from_static("x-li-format"))
				.map(|value| value.as_bytes().to_vec())
				.unwrap_or_default();

			Ok(linkedin_api::oauth2::http::Response::builder()
				.status(StatusCode::OK)
				.body(format!(r#"{{"format":"{}"}}"#, String::from_utf8_lossy(&format)).into_bytes())
				.expect("Response fixture should build."))
		}),
	);

	let payload = client.raw("/v1/people/~").await.expect("Raw call should succeed.");

	assert_eq!(payload.get("format"), Some(&serde_json::json!("json")));
}

#[tokio::test]
async fn raw_url_is_rerooted_on_the_api_root() {
	let (client, transport) = build_client();

	transport.register_responder(
		"GET",
		format!("https://api.linkedin.com/v1/people/~/network?oauth2_access_token={TOKEN}&type=SHAR"),
		Responder::json(StatusCode::OK, &serde_json::json!({ "updates": [] })),
	);

	let url = Url::parse("https://www.linkedin.com/v1/people/~/network?type=SHAR")
		.expect("Fixture URL should parse.");
	let payload = client.raw_url(&url).await.expect("Raw URL call should succeed.");

	assert!(payload.contains_key("updates"));
}

#[tokio::test]
async fn relative_raw_endpoint_keeps_the_root_path_once() {
	let transport = Arc::new(MockTransport::isolated().fail_on_unmatched(true));
	let endpoints = ApiEndpoints::builder()
		.api_root(Url::parse("https://api.example.com/base/").expect("Fixture URL should parse."))
		.build()
		.expect("Prefixed API root should validate.");
	let mut client = LinkedIn::<MockTransport>::with_transport(
		Credentials::new("client-it", "secret-it"),
		endpoints,
		transport.clone(),
	);

	client.set_token("t");
	transport.register_responder(
		"GET",
		"https://api.example.com/base/v1/people/~?oauth2_access_token=t",
		Responder::json(StatusCode::OK, &serde_json::json!({ "id": "me" })),
	);

	let relative = client.raw("v1/people/~").await.expect("Relative endpoint should resolve.");
	let rooted = client.raw("/v1/people/~").await.expect("Rooted endpoint should resolve.");

	assert_eq!(relative.get("id"), Some(&serde_json::json!("me")));
	assert_eq!(rooted, relative);
}

#[tokio::test]
async fn missing_token_is_a_configuration_error() {
	let client = LinkedIn::<MockTransport>::with_transport(
		Credentials::new("client-it", "secret-it"),
		ApiEndpoints::linkedin().expect("Default endpoints should validate."),
		Arc::new(MockTransport::isolated()),
	);
	let err = client.raw("/v1/people/~").await.expect_err("Missing token should fail.");

	assert_eq!(err.to_string(), "No access token has been set on the client.");
}

#[tokio::test]
async fn invalid_json_reports_path_and_status() {
	let (client, transport) = build_client();

	transport.register_responder(
		"GET",
		format!("https://api.linkedin.com/v1/people/~?oauth2_access_token={TOKEN}"),
		Responder::string(StatusCode::BAD_GATEWAY, "<html>upstream</html>"),
	);

	let err = client.raw("/v1/people/~").await.expect_err("HTML body should fail to parse.");

	assert!(matches!(err, Error::ResponseParse { status: Some(502), .. }));
}

#[tokio::test]
async fn linkedin_error_payload_is_surfaced() {
	let (client, transport) = build_client();

	transport.register_responder(
		"GET",
		format!("https://api.linkedin.com/v1/groups/abc?oauth2_access_token={TOKEN}"),
		Responder::json(
			StatusCode::FORBIDDEN,
			&serde_json::json!({
				"errorCode": 0,
				"message": "Access to group denied.",
				"requestId": "REQ",
				"status": 403,
				"timestamp": 1
			}),
		),
	);

	let err = client.group("abc", &Fields::new()).await.expect_err("Error payload should fail.");

	match err {
		Error::Api(api) => {
			assert_eq!(api.status, 403);
			assert_eq!(api.message.as_deref(), Some("Access to group denied."));
			assert_eq!(api.request_id.as_deref(), Some("REQ"));
		},
		other => panic!("Unexpected error: {other:?}."),
	}
}
