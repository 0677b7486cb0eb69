use std::sync::Arc;

use crate::{
	BoxFuture, Result, SearchProvider,
	access::Policy,
	providers::ProviderSettings,
	ranking::{self, Ranked},
	result::{ResultType, SearchResult},
	sources::CustomerSource,
};
use procure_domain::{CreditAuthorizationParams, Customer, to_url};

/// Customers have no recency field, so ties keep source order. Links to the
/// customer's credit authorizations.
pub struct CustomerSearchProvider {
	source: Arc<dyn CustomerSource>,
	settings: ProviderSettings,
}
impl CustomerSearchProvider {
	pub const NAME: &'static str = "customers";

	pub fn new(source: Arc<dyn CustomerSource>) -> Self {
		Self { source, settings: ProviderSettings::default() }
	}

	pub fn with_settings(mut self, settings: ProviderSettings) -> Self {
		self.settings = settings;

		self
	}
}
impl SearchProvider for CustomerSearchProvider {
	fn name(&self) -> &str {
		Self::NAME
	}

	fn result_type(&self) -> ResultType {
		ResultType::Customer
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
			let customers = self.source.customers().await?;
			let candidates = customers
				.into_iter()
				.filter_map(|customer| {
					let tier = ranking::match_tier(
						&needle,
						&customer.customer_number,
						&[customer.name.as_str(), customer.city.as_str()],
					)?;

					Some(Ranked { tier, recency: None, record: customer })
				})
				.collect();

			Ok(ranking::rank(candidates, max_results)
				.into_iter()
				.map(|ranked| to_result(ranked.record))
				.collect())
		})
	}
}

fn to_result(customer: Customer) -> SearchResult {
	let url = to_url(&CreditAuthorizationParams::for_customer(&customer.customer_number));

	SearchResult::new(
		ResultType::Customer,
		customer.customer_number.as_str(),
		customer.name.as_str(),
		url,
	)
	.with_subtitle(customer.customer_number.as_str())
	.with_description(customer.city.as_str())
	.with_metadata("city", customer.city)
}
