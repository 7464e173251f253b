// self
use crate::{
	_prelude::*,
	client::MapsClient,
	http::MapsHttpClient,
	model::{
		AutocompleteRequest, AutocompleteResult, SearchRequest, SearchResponse,
		search::AutocompleteResponse,
	},
	obs::Operation,
};

const SEARCH_ENDPOINT: &str = "/v1/search";
const AUTOCOMPLETE_ENDPOINT: &str = "/v1/searchAutocomplete";

impl<C> MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	/// Searches for places matching a query.
	///
	/// Fails with [`Error::InvalidSearchResultType`] before any request when the result type
	/// filter names [`SearchResultType::Query`](crate::model::SearchResultType::Query).
	pub async fn search(&self, request: impl Into<SearchRequest>) -> Result<SearchResponse> {
		let url = self.endpoint(SEARCH_ENDPOINT, &request.into().to_query()?)?;

		self.get(Operation::Search, SEARCH_ENDPOINT, url).await
	}

	/// Suggests completions for a partial query.
	pub async fn search_autocomplete(
		&self,
		request: impl Into<AutocompleteRequest>,
	) -> Result<Vec<AutocompleteResult>> {
		let url = self.endpoint(AUTOCOMPLETE_ENDPOINT, &request.into().to_query()?)?;
		let response: AutocompleteResponse =
			self.get(Operation::SearchAutocomplete, AUTOCOMPLETE_ENDPOINT, url).await?;

		Ok(response.results)
	}
}
