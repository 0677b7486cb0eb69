use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use clap::Parser;

use procure_query::{Args, Command, Page, canonical_link, load_catalog};
use procure_search::{ItemSearchProvider, SearchProvider};
use procure_testkit::sample_seed;

fn write_temp_seed(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let path = env::temp_dir().join(format!(
		"procure_query_seed_{}_{}_{}.json",
		std::process::id(),
		nanos,
		COUNTER.fetch_add(1, Ordering::Relaxed),
	));

	fs::write(&path, payload).expect("Failed to write seed file.");

	path
}

#[test]
fn parses_search_with_policies() {
	let args = Args::try_parse_from([
		"procure-query",
		"-c",
		"procure.toml",
		"--seed",
		"seed.json",
		"search",
		"acme",
		"-n",
		"5",
		"--policy",
		"credit.authorizations.read",
		"-p",
		"pricing.read",
	])
	.expect("Arguments must parse.");

	assert_eq!(args.seed, Some(PathBuf::from("seed.json")));

	let Command::Search { query, max_results, policies, report } = args.command else {
		panic!("Expected the search subcommand.");
	};

	assert_eq!(query, "acme");
	assert_eq!(max_results, Some(5));
	assert_eq!(policies, vec!["credit.authorizations.read", "pricing.read"]);
	assert!(!report);
}

#[test]
fn parses_link_with_kebab_page() {
	let args =
		Args::try_parse_from(["procure-query", "-c", "procure.toml", "link", "purchase-orders"])
			.expect("Arguments must parse.");
	let Command::Link { page, raw_query } = args.command else {
		panic!("Expected the link subcommand.");
	};

	assert_eq!(page, Page::PurchaseOrders);
	assert_eq!(raw_query, "");
}

#[test]
fn config_flag_is_required() {
	assert!(Args::try_parse_from(["procure-query", "link", "pricing"]).is_err());
}

#[test]
fn link_canonicalizes_tokens_and_selection() {
	let link = canonical_link(
		Page::PurchaseOrders,
		"?vendor=Acme%20%26%20Sons&status=Open-Acknowledged&lines=L1,l1&lines=L2&po=",
	);

	assert_eq!(
		link.url,
		"/purchase-orders?sort=newest&status=open-acknowledged&vendor=Acme+%26+Sons"
	);
	assert_eq!(link.selection, vec!["L1".to_string(), "L2".to_string()]);
}

#[test]
fn link_fills_defaults_for_empty_query() {
	let link = canonical_link(Page::Pricing, "");

	assert_eq!(link.url, "/pricing?basis=list&price_list=RETAIL");
	assert!(link.selection.is_empty());
}

#[test]
fn canonical_link_is_stable() {
	let first = canonical_link(Page::Receipts, "receipt=RC-1&warehouse=wh2&status=bogus");
	let path_and_query = first.url.split_once('?').map(|(_, query)| query).unwrap_or("");
	let second = canonical_link(Page::Receipts, path_and_query);

	assert_eq!(first, second);
	assert!(first.url.starts_with("/receipts?"));
}

#[tokio::test]
async fn seed_file_feeds_providers() {
	let payload = serde_json::to_string(&sample_seed()).expect("Failed to render seed.");
	let path = write_temp_seed(payload);
	let catalog = load_catalog(Some(&path)).expect("Seed must load.");
	let provider = ItemSearchProvider::new(std::sync::Arc::new(catalog));
	let results = provider.search("a02", 10).await.expect("Item search failed.");

	fs::remove_file(&path).expect("Failed to remove seed file.");

	assert_eq!(results.len(), 3);
}

#[test]
fn missing_seed_is_an_error() {
	let path = env::temp_dir().join("procure_query_seed_that_does_not_exist.json");

	assert!(load_catalog(Some(&path)).is_err());
}

#[test]
fn no_seed_means_empty_catalog() {
	assert!(load_catalog(None).is_ok());
}
