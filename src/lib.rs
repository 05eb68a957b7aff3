//! LinkedIn REST API binding: field-selector encoding, OAuth 2.0 code exchange, JSON
//! endpoints, and a pluggable mock transport for stubbing the network in tests.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod fields;
pub mod http;
pub mod mock;
pub mod oauth;
pub mod obs;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for tests; enabled via `cfg(test)` or the `test`
	//! crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{api::LinkedIn, auth::Credentials, config::ApiEndpoints, mock::MockTransport};

	/// Client identifier used by test fixtures.
	pub const TEST_CLIENT_ID: &str = "client-test";
	/// Client secret used by test fixtures.
	pub const TEST_CLIENT_SECRET: &str = "secret-test";
	/// Access token installed on clients built by [`build_mock_linkedin`].
	pub const TEST_ACCESS_TOKEN: &str = "token-test";

	/// Client type alias backed by a [`MockTransport`].
	pub type MockLinkedIn = LinkedIn<MockTransport>;

	/// Builds a client over an isolated, fail-fast [`MockTransport`] with the default LinkedIn
	/// endpoints and [`TEST_ACCESS_TOKEN`] installed.
	///
	/// The returned transport handle is the one the client dispatches through, so responders
	/// registered on it are visible to the client immediately.
	pub fn build_mock_linkedin() -> (MockLinkedIn, Arc<MockTransport>) {
		let transport = Arc::new(MockTransport::isolated().fail_on_unmatched(true));
		let endpoints =
			ApiEndpoints::builder().build().expect("Default LinkedIn endpoints should be valid.");
		let mut client = MockLinkedIn::with_transport(
			Credentials::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET),
			endpoints,
			transport.clone(),
		);

		client.set_token(TEST_ACCESS_TOKEN);

		(client, transport)
	}
}

mod _prelude {
	pub use std::{
		collections::HashMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use oauth2::{
		HttpRequest, HttpResponse,
		http::{Method, StatusCode},
	};
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
