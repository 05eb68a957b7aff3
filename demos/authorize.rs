//! Builds the LinkedIn authorize URL and redirect, then validates the returned `state` the way
//! a callback handler would before exchanging the code.

// std
use std::collections::HashMap;
// crates.io
use color_eyre::Result;
// self
use linkedin_api::{api::LinkedIn, auth::Credentials, oauth2::http::header::LOCATION};

fn main() -> Result<()> {
	color_eyre::install()?;

	let client = LinkedIn::new(Credentials::new("demo-client", "demo-secret"))?;
	let session = client.start_authorization("https://app.example.com/linkedin/callback");

	println!("Send your member to {}.", &session.authorize_url);

	let redirect = client.authorization_redirect(&session.state, &session.redirect_uri)?;

	println!(
		"Or answer with HTTP {} and Location {:?}.",
		redirect.status(),
		redirect.headers().get(LOCATION)
	);

	let mut sessions = HashMap::new();

	sessions.insert(session.state.clone(), session.clone());

	// Simulate the callback receiving `?code=...&state=...`.
	let returned_state = session.state.clone();

	match sessions.remove(&returned_state) {
		Some(stashed) => {
			stashed.validate_state(&returned_state)?;
			println!(
				"State validated; call LinkedIn::retrieve_access_token with redirect URI {}.",
				stashed.redirect_uri
			);
		},
		None => eprintln!("State `{returned_state}` was not recognized."),
	}

	Ok(())
}
