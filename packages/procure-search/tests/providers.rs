use std::sync::Arc;

use procure_domain::{PurchaseOrderParams, ReceiptParams, decode_query};
use procure_search::{
	CREDIT_AUTHORIZATIONS_READ, CreditAuthorizationSearchProvider, CustomerSearchProvider,
	InMemoryCatalog, ItemSearchProvider, Policy, PurchaseOrderSearchProvider,
	ReceiptSearchProvider, ResultType, SearchProvider, SearchResult,
};
use procure_testkit::sample_catalog;

fn ids(results: &[SearchResult]) -> Vec<&str> {
	results.iter().map(|result| result.id.as_str()).collect()
}

#[tokio::test]
async fn items_rank_exact_then_prefix_then_substring() {
	let provider = ItemSearchProvider::new(sample_catalog());
	let results = provider.search("a02", 10).await.expect("Item search failed.");

	assert_eq!(ids(&results), vec!["A02", "A020", "B-A02"]);
	assert!(results.iter().all(|result| result.result_type == ResultType::Item));
	assert_eq!(results[0].price, Some(0.2));
}

#[tokio::test]
async fn items_truncate_after_ranking() {
	let provider = ItemSearchProvider::new(sample_catalog());
	let results = provider.search("A02", 2).await.expect("Item search failed.");

	assert_eq!(ids(&results), vec!["A02", "A020"]);
}

#[tokio::test]
async fn item_links_open_pricing() {
	let provider = ItemSearchProvider::new(sample_catalog());
	let results = provider.search("c-100", 1).await.expect("Item search failed.");

	assert!(results[0].navigate_url.starts_with("/pricing?"));
	assert!(results[0].navigate_url.contains("item=C-100"));
}

#[tokio::test]
async fn blank_query_yields_nothing() {
	let provider = CustomerSearchProvider::new(sample_catalog());

	assert!(provider.search("  ", 10).await.expect("Customer search failed.").is_empty());
}

#[tokio::test]
async fn purchase_orders_prefer_newer_within_tier() {
	let provider = PurchaseOrderSearchProvider::new(sample_catalog());
	let results = provider.search("po-100", 10).await.expect("Purchase order search failed.");

	assert_eq!(ids(&results), vec!["PO-1002", "PO-1001"]);
	assert_eq!(results[0].badge.as_deref(), Some("Open \u{2013} Acknowledged"));

	let query = results[0].navigate_url.trim_start_matches("/purchase-orders");
	let params: PurchaseOrderParams = decode_query(query);

	assert_eq!(params.po.as_deref(), Some("PO-1002"));
}

#[tokio::test]
async fn receipts_match_on_po_number() {
	let provider = ReceiptSearchProvider::new(sample_catalog());
	let results = provider.search("PO-1001", 10).await.expect("Receipt search failed.");

	assert_eq!(ids(&results), vec!["RC-5001"]);

	let query = results[0].navigate_url.trim_start_matches("/receipts");
	let params: ReceiptParams = decode_query(query);

	assert_eq!(params.receipt.as_deref(), Some("RC-5001"));
}

#[tokio::test]
async fn customers_match_on_name() {
	let provider = CustomerSearchProvider::new(sample_catalog());
	let results = provider.search("north", 10).await.expect("Customer search failed.");

	assert_eq!(ids(&results), vec!["CU-201"]);
	assert_eq!(results[0].title, "Northwind");
}

#[tokio::test]
async fn credit_authorizations_are_gated_by_default() {
	let provider = CreditAuthorizationSearchProvider::new(sample_catalog());

	assert_eq!(provider.required_policy(), Some(&Policy::from(CREDIT_AUTHORIZATIONS_READ)));

	let results = provider.search("acme", 10).await.expect("Credit authorization search failed.");

	assert_eq!(ids(&results), vec!["CA-9001"]);
}

#[tokio::test]
async fn empty_catalog_yields_nothing() {
	let provider = ItemSearchProvider::new(Arc::new(InMemoryCatalog::default()));

	assert!(provider.search("a02", 10).await.expect("Item search failed.").is_empty());
}
