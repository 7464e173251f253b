#![cfg(feature = "reqwest")]

mod common;

// std
use std::time::Duration;
// crates.io
use httpmock::prelude::*;
// self
use apple_maps_kit::{
	broker::BrokerStatus,
	error::{AuthError, RemoteError},
};
use common::*;

#[tokio::test]
async fn first_call_exchanges_a_signed_credential() {
	let server = MockServer::start_async().await;
	let token_mock = mock_token(&server).await;
	let client = build_client(&server);
	let broker = client.broker();

	assert_eq!(broker.status(), BrokerStatus::NoToken);

	let token = broker.valid_token().await.expect("Token exchange should succeed.");

	assert_eq!(token.expose(), MAPS_TOKEN);
	assert_eq!(token.expires_in, time::Duration::seconds(1800));
	assert_eq!(broker.status(), BrokerStatus::TokenValid);

	let again = broker.valid_token().await.expect("Cached token should be returned.");

	assert_eq!(again, token);

	token_mock.assert_calls_async(1).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_trigger_one_exchange() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/token");
			then.status(200)
				.delay(Duration::from_millis(200))
				.header("content-type", "application/json")
				.body(r#"{"accessToken":"slow-token","expiresInSeconds":1800}"#);
		})
		.await;
	let client = build_client(&server);
	let tasks = (0..24)
		.map(|_| {
			let client = client.clone();

			tokio::spawn(async move { client.broker().valid_token().await })
		})
		.collect::<Vec<_>>();

	for task in tasks {
		let token = task
			.await
			.expect("Broker task should not panic.")
			.expect("Every caller should receive the token.");

		assert_eq!(token.expose(), "slow-token");
	}

	token_mock.assert_calls_async(1).await;

	assert_eq!(client.broker().metrics().started(), 1);
}

#[tokio::test]
async fn concurrent_callers_share_a_rejection() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/token");
			then.status(401)
				.delay(Duration::from_millis(100))
				.header("content-type", "application/json")
				.body(r#"{"error":{"message":"Not Authorized","details":["Invalid kid"]}}"#);
		})
		.await;
	let client = build_client(&server);
	let broker = client.broker();
	let results = futures::future::join_all((0..8).map(|_| broker.valid_token())).await;

	for result in results {
		let err = result.expect_err("Every waiter should observe the rejection.");
		let remote = match err {
			AuthError::Remote(remote) => remote,
			other => panic!("Expected a remote rejection, got {other:?}."),
		};

		assert_eq!(
			remote,
			RemoteError {
				status: 401,
				message: Some("Not Authorized".into()),
				details: vec!["Invalid kid".into()],
			}
		);
	}

	token_mock.assert_calls_async(1).await;

	assert_eq!(broker.status(), BrokerStatus::NoToken);

	broker.valid_token().await.expect_err("Failures are not cached; the retry fails again.");
	token_mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn malformed_token_payloads_are_rejected() {
	let server = MockServer::start_async().await;
	let mut garbage = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/token");
			then.status(200).header("content-type", "application/json").body(r#"{"token":1}"#);
		})
		.await;
	let client = build_client(&server);
	let err = client.broker().valid_token().await.expect_err("Unknown payloads must not decode.");

	assert!(matches!(err, AuthError::Decode(_)));

	garbage.delete_async().await;

	let _expired = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/token");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"accessToken":"dead","expiresInSeconds":0}"#);
		})
		.await;
	let err = client.broker().valid_token().await.expect_err("Zero lifetimes must be rejected.");

	assert!(matches!(err, AuthError::NonPositiveExpiresIn { expires_in: 0 }));
	assert!(client.broker().cached_token().is_none());
}
