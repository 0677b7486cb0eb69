use std::sync::Arc;

use crate::{
	BoxFuture, Result, SearchProvider,
	access::Policy,
	providers::ProviderSettings,
	ranking::{self, Ranked},
	result::{ResultType, SearchResult},
	sources::PurchaseOrderSource,
};
use procure_domain::{PurchaseOrderParams, PurchaseOrderSummary, TokenEnum, to_url};

pub struct PurchaseOrderSearchProvider {
	source: Arc<dyn PurchaseOrderSource>,
	settings: ProviderSettings,
}
impl PurchaseOrderSearchProvider {
	pub const NAME: &'static str = "purchase_orders";

	pub fn new(source: Arc<dyn PurchaseOrderSource>) -> Self {
		Self { source, settings: ProviderSettings::default() }
	}

	pub fn with_settings(mut self, settings: ProviderSettings) -> Self {
		self.settings = settings;

		self
	}
}
impl SearchProvider for PurchaseOrderSearchProvider {
	fn name(&self) -> &str {
		Self::NAME
	}

	fn result_type(&self) -> ResultType {
		ResultType::PurchaseOrder
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
			let orders = self.source.purchase_orders().await?;
			let candidates = orders
				.into_iter()
				.filter_map(|po| {
					let tier = ranking::match_tier(
						&needle,
						&po.po_number,
						&[po.vendor.as_str(), po.buyer.as_str(), po.status.label()],
					)?;

					Some(Ranked { tier, recency: Some(po.order_date), record: po })
				})
				.collect();

			Ok(ranking::rank(candidates, max_results)
				.into_iter()
				.map(|ranked| to_result(ranked.record))
				.collect())
		})
	}
}

fn to_result(po: PurchaseOrderSummary) -> SearchResult {
	let url = to_url(&PurchaseOrderParams::for_po(&po.po_number));

	SearchResult::new(ResultType::PurchaseOrder, po.po_number.as_str(), po.po_number.as_str(), url)
		.with_subtitle(po.vendor.as_str())
		.with_description(format!("Buyer {}", po.buyer))
		.with_price(po.total)
		.with_badge(po.status.label())
		.with_metadata("order_date", po.order_date.to_string())
		.with_metadata("buyer", po.buyer)
}
