use std::sync::Arc;

use crate::{
	BoxFuture, Result, SearchProvider,
	access::Policy,
	providers::ProviderSettings,
	ranking::{self, Ranked},
	result::{ResultType, SearchResult},
	sources::ItemSource,
};
use procure_domain::{Item, PricingParams, to_url};

/// Matches item number, description, category and vendor. Links to the item's
/// pricing page.
pub struct ItemSearchProvider {
	source: Arc<dyn ItemSource>,
	settings: ProviderSettings,
}
impl ItemSearchProvider {
	pub const NAME: &'static str = "items";

	pub fn new(source: Arc<dyn ItemSource>) -> Self {
		Self { source, settings: ProviderSettings::default() }
	}

	pub fn with_settings(mut self, settings: ProviderSettings) -> Self {
		self.settings = settings;

		self
	}
}
impl SearchProvider for ItemSearchProvider {
	fn name(&self) -> &str {
		Self::NAME
	}

	fn result_type(&self) -> ResultType {
		ResultType::Item
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
			let items = self.source.items().await?;
			let candidates = items
				.into_iter()
				.filter_map(|item| {
					let tier = ranking::match_tier(
						&needle,
						&item.item_number,
						&[item.description.as_str(), item.category.as_str(), item.vendor.as_str()],
					)?;

					Some(Ranked { tier, recency: None, record: item })
				})
				.collect();

			Ok(ranking::rank(candidates, max_results)
				.into_iter()
				.map(|ranked| to_result(ranked.record))
				.collect())
		})
	}
}

fn to_result(item: Item) -> SearchResult {
	let url = to_url(&PricingParams::for_item(&item.item_number));

	SearchResult::new(ResultType::Item, item.item_number.as_str(), item.description.as_str(), url)
		.with_subtitle(item.item_number.as_str())
		.with_description(item.vendor.as_str())
		.with_price(item.unit_price)
		.with_badge(item.category.as_str())
		.with_metadata("vendor", item.vendor)
		.with_metadata("category", item.category)
}
