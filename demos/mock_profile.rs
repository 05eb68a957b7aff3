//! Activates the process-wide mock, stubs a profile response, and reads it back through a
//! client that was built for the real network.

// crates.io
use color_eyre::Result;
// self
use linkedin_api::{
	api::{Endpoint, LinkedIn, MemberId},
	auth::Credentials,
	fields::Fields,
	mock::{Responder, global},
	oauth2::http::StatusCode,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let mut client = LinkedIn::new(Credentials::new("demo-client", "demo-secret"))?;

	client.set_token("demo-token");

	let mut fields = Fields::new();

	fields.add_field("id").add("positions", ["title", "company"]);

	let path = Endpoint::Profile.render(&MemberId::Current.segment(), &fields);
	let url = client.request_url(&path, None, &[])?;

	global::activate(true);
	global::register_responder(
		"GET",
		url.as_str(),
		Responder::json(
			StatusCode::OK,
			&serde_json::json!({
				"id": "demo-member",
				"positions": { "_total": 1, "values": [{ "title": "Engineer" }] }
			}),
		),
	);

	let profile = client.profile(MemberId::Current, &fields).await?;

	println!("Stubbed profile: {}.", serde_json::Value::Object(profile));

	match client.profile("someone-else", &fields).await {
		Ok(_) => println!("Unexpected match."),
		Err(e) => println!("Unregistered request failed fast: {e}"),
	}

	global::deactivate();

	Ok(())
}
