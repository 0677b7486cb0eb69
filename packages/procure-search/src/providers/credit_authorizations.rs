use std::sync::Arc;

use crate::{
	BoxFuture, Result, SearchProvider,
	access::{CREDIT_AUTHORIZATIONS_READ, Policy},
	providers::ProviderSettings,
	ranking::{self, Ranked},
	result::{ResultType, SearchResult},
	sources::CreditAuthorizationSource,
};
use procure_domain::{CreditAuthorization, CreditAuthorizationParams, TokenEnum, to_url};

/// Gated by [`CREDIT_AUTHORIZATIONS_READ`] unless configured otherwise.
pub struct CreditAuthorizationSearchProvider {
	source: Arc<dyn CreditAuthorizationSource>,
	settings: ProviderSettings,
}
impl CreditAuthorizationSearchProvider {
	pub const NAME: &'static str = "credit_authorizations";

	pub fn new(source: Arc<dyn CreditAuthorizationSource>) -> Self {
		Self { source, settings: ProviderSettings::gated(CREDIT_AUTHORIZATIONS_READ) }
	}

	pub fn with_settings(mut self, settings: ProviderSettings) -> Self {
		self.settings = settings;

		self
	}
}
impl SearchProvider for CreditAuthorizationSearchProvider {
	fn name(&self) -> &str {
		Self::NAME
	}

	fn result_type(&self) -> ResultType {
		ResultType::CreditAuthorization
	}

	fn is_enabled(&self) -> bool {
		self.settings.enabled
	}

	fn required_policy(&self) -> Option<&Policy> {
		self.settings.required_policy.as_ref()
	}

	fn search<'a>(
		&'a self,
		query: &'a str,
		max_results: usize,
	) -> BoxFuture<'a, Result<Vec<SearchResult>>> {
		Box::pin(async move {
			let Some(needle) = ranking::normalize_query(query) else {
				return Ok(Vec::new());
			};
			let authorizations = self.source.credit_authorizations().await?;
			let candidates = authorizations
				.into_iter()
				.filter_map(|auth| {
					let tier = ranking::match_tier(
						&needle,
						&auth.auth_number,
						&[
							auth.customer_number.as_str(),
							auth.customer_name.as_str(),
							auth.status.label(),
						],
					)?;

					Some(Ranked { tier, recency: Some(auth.requested_on), record: auth })
				})
				.collect();

			Ok(ranking::rank(candidates, max_results)
				.into_iter()
				.map(|ranked| to_result(ranked.record))
				.collect())
		})
	}
}

fn to_result(auth: CreditAuthorization) -> SearchResult {
	let url = to_url(&CreditAuthorizationParams::for_authorization(&auth.auth_number));

	SearchResult::new(
		ResultType::CreditAuthorization,
		auth.auth_number.as_str(),
		auth.auth_number.as_str(),
		url,
	)
	.with_subtitle(auth.customer_name.as_str())
	.with_price(auth.amount)
	.with_badge(auth.status.label())
	.with_metadata("requested_on", auth.requested_on.to_string())
	.with_metadata("customer_number", auth.customer_number)
}
