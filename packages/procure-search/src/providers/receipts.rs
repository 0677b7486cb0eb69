use std::sync::Arc;

use crate::{
	BoxFuture, Result, SearchProvider,
	access::Policy,
	providers::ProviderSettings,
	ranking::{self, Ranked},
	result::{ResultType, SearchResult},
	sources::ReceiptSource,
};
use procure_domain::{Receipt, ReceiptParams, TokenEnum, to_url};

pub struct ReceiptSearchProvider {
	source: Arc<dyn ReceiptSource>,
	settings: ProviderSettings,
}
impl ReceiptSearchProvider {
	pub const NAME: &'static str = "receipts";

	pub fn new(source: Arc<dyn ReceiptSource>) -> Self {
		Self { source, settings: ProviderSettings::default() }
	}

	pub fn with_settings(mut self, settings: ProviderSettings) -> Self {
		self.settings = settings;

		self
	}
}
impl SearchProvider for ReceiptSearchProvider {
	fn name(&self) -> &str {
		Self::NAME
	}

	fn result_type(&self) -> ResultType {
		ResultType::Receipt
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
			let receipts = self.source.receipts().await?;
			let candidates = receipts
				.into_iter()
				.filter_map(|receipt| {
					let tier = ranking::match_tier(
						&needle,
						&receipt.receipt_number,
						&[
							receipt.po_number.as_str(),
							receipt.vendor.as_str(),
							receipt.warehouse.as_str(),
						],
					)?;

					Some(Ranked { tier, recency: Some(receipt.received_on), record: receipt })
				})
				.collect();

			Ok(ranking::rank(candidates, max_results)
				.into_iter()
				.map(|ranked| to_result(ranked.record))
				.collect())
		})
	}
}

fn to_result(receipt: Receipt) -> SearchResult {
	let url = to_url(&ReceiptParams::for_receipt(&receipt.receipt_number));

	SearchResult::new(
		ResultType::Receipt,
		receipt.receipt_number.as_str(),
		receipt.receipt_number.as_str(),
		url,
	)
	.with_subtitle(format!("PO {}", receipt.po_number))
	.with_description(receipt.vendor.as_str())
	.with_badge(receipt.status.label())
	.with_metadata("received_on", receipt.received_on.to_string())
	.with_metadata("warehouse", receipt.warehouse)
	.with_metadata("po_number", receipt.po_number)
}
