//! Single-flight access token broker.
//!
//! [`TokenBroker::valid_token`] answers from the cached token while it sits outside the
//! expiration buffer. Otherwise it joins the refresh already in flight or starts one: mint a
//! credential, exchange it at the token endpoint, and commit the result. However many callers
//! race, one refresh performs exactly one exchange and every caller waiting on it receives the
//! same outcome. Failures are never cached; the next call starts over.

mod clock;
mod exchange;
mod metrics;

pub use clock::*;
pub use exchange::*;
pub use metrics::RefreshMetrics;

// std
use std::{panic::AssertUnwindSafe, sync::Weak};
// crates.io
use futures::future::{BoxFuture, FutureExt, Shared};
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, CredentialMinter, Principal},
	error::AuthError,
	obs::{self, Operation},
};

type RefreshHandle = Shared<BoxFuture<'static, Result<AccessToken, AuthError>>>;

/// Snapshot of the broker's lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrokerStatus {
	/// No token has been obtained yet (or every attempt so far failed).
	NoToken,
	/// A cached token is usable outside the expiration buffer.
	TokenValid,
	/// A cached token exists but is inside the expiration buffer or expired.
	TokenStale,
	/// A refresh is running; new callers attach to it.
	RefreshInFlight,
}

#[derive(Default)]
struct BrokerState {
	current: Option<AccessToken>,
	in_flight: Option<RefreshHandle>,
}

/// Mints, caches, and refreshes the access token used for every Maps API call.
///
/// Clones share the cache and the in-flight refresh.
#[derive(Clone)]
pub struct TokenBroker {
	minter: CredentialMinter,
	exchanger: Arc<dyn TokenExchanger>,
	clock: Arc<dyn Clock>,
	state: Arc<Mutex<BrokerState>>,
	metrics: Arc<RefreshMetrics>,
}
impl TokenBroker {
	/// Creates a broker for `principal` that trades credentials through `exchanger`.
	pub fn new(principal: impl Into<Arc<Principal>>, exchanger: impl TokenExchanger) -> Self {
		Self::with_shared_exchanger(CredentialMinter::new(principal), Arc::new(exchanger))
	}

	/// Creates a broker from an existing minter and a shared exchanger.
	pub fn with_shared_exchanger(
		minter: CredentialMinter,
		exchanger: Arc<dyn TokenExchanger>,
	) -> Self {
		Self {
			minter,
			exchanger,
			clock: Arc::new(SystemClock),
			state: Default::default(),
			metrics: Default::default(),
		}
	}

	/// Replaces the time source (defaults to [`SystemClock`]).
	pub fn with_clock(mut self, clock: impl Clock) -> Self {
		self.clock = Arc::new(clock);

		self
	}

	/// Returns the principal credentials are minted for.
	pub fn principal(&self) -> &Principal {
		self.minter.principal()
	}

	/// Returns the shared refresh counters.
	pub fn metrics(&self) -> &RefreshMetrics {
		&self.metrics
	}

	/// Returns the cached token, valid or not.
	pub fn cached_token(&self) -> Option<AccessToken> {
		self.state.lock().current.clone()
	}

	/// Reports the current lifecycle state.
	pub fn status(&self) -> BrokerStatus {
		let state = self.state.lock();

		if state.in_flight.is_some() {
			return BrokerStatus::RefreshInFlight;
		}

		match &state.current {
			None => BrokerStatus::NoToken,
			Some(token) if token.is_valid_at(self.clock.now()) => BrokerStatus::TokenValid,
			Some(_) => BrokerStatus::TokenStale,
		}
	}

	/// Returns a token that is valid at the time of the call, refreshing at most once for any
	/// number of concurrent callers.
	///
	/// A failed refresh leaves the previously cached token in place and is reported to every
	/// caller that waited on it.
	pub async fn valid_token(&self) -> Result<AccessToken, AuthError> {
		let refresh = {
			let mut state = self.state.lock();

			if let Some(in_flight) = &state.in_flight {
				self.metrics.record_joined();

				in_flight.clone()
			} else {
				let now = self.clock.now();

				if let Some(token) = state.current.as_ref().filter(|token| token.is_valid_at(now))
				{
					self.metrics.record_cache_hit();

					return Ok(token.clone());
				}

				let refresh = self.start_refresh();

				state.in_flight = Some(refresh.clone());

				refresh
			}
		};

		refresh.await
	}

	// Must be called with the state lock held so only one handle is ever installed.
	fn start_refresh(&self) -> RefreshHandle {
		let minter = self.minter.clone();
		let exchanger = self.exchanger.clone();
		let clock = self.clock.clone();
		// The handle lives inside `state`, so it must not keep `state` alive.
		let state = Arc::downgrade(&self.state);
		let metrics = self.metrics.clone();

		metrics.record_started();

		async move {
			let result = obs::observe(
				Operation::TokenRefresh,
				"valid_token",
				AssertUnwindSafe(refresh(&minter, exchanger.as_ref(), clock.as_ref()))
					.catch_unwind()
					.map(|outcome| outcome.unwrap_or(Err(AuthError::RefreshPanicked))),
			)
			.await;

			commit(&state, &result);

			match &result {
				Ok(_) => metrics.record_success(),
				Err(_) => metrics.record_failure(),
			}

			result
		}
		.boxed()
		.shared()
	}
}
impl Debug for TokenBroker {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenBroker")
			.field("principal", self.minter.principal())
			.field("status", &self.status())
			.finish()
	}
}

fn commit(state: &Weak<Mutex<BrokerState>>, result: &Result<AccessToken, AuthError>) {
	let Some(state) = state.upgrade() else { return };
	let mut state = state.lock();

	state.in_flight = None;

	if let Ok(token) = result {
		state.current = Some(token.clone());
	}
}

async fn refresh(
	minter: &CredentialMinter,
	exchanger: &dyn TokenExchanger,
	clock: &dyn Clock,
) -> Result<AccessToken, AuthError> {
	let credential = minter.mint(clock.now())?;
	let response = exchanger.exchange(&credential).await?;

	AccessToken::from_response(response, clock.now())
}
