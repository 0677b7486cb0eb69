//! Shared fixtures for search tests: a small seeded catalog and scripted providers.

use std::{
	future,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	time::Duration,
};

use time::macros::date;

use procure_domain::{
	AuthorizationStatus, CreditAuthorization, Customer, Item, PurchaseOrderStatus,
	PurchaseOrderSummary, Receipt, ReceiptStatus,
};
use procure_search::{
	BoxFuture, Error, InMemoryCatalog, Policy, Result, ResultType, SearchProvider, SearchResult,
	SeedDocument, Sources,
};

pub fn sample_seed() -> SeedDocument {
	SeedDocument {
		items: vec![
			item("B-A02", "Bracket assembly", "Hardware", "Acme Supply", 4.5),
			item("A020", "Anchor bolt 20mm", "Fasteners", "Bolt Brothers", 0.35),
			item("A02", "Anchor bolt 2mm", "Fasteners", "Bolt Brothers", 0.2),
			item("C-100", "Cable tie pack", "Electrical", "Acme Supply", 12.0),
		],
		purchase_orders: vec![
			PurchaseOrderSummary {
				po_number: "PO-1001".to_string(),
				vendor: "Acme Supply".to_string(),
				buyer: "Kim".to_string(),
				status: PurchaseOrderStatus::Open,
				order_date: date!(2026 - 03 - 01),
				total: 1250.0,
			},
			PurchaseOrderSummary {
				po_number: "PO-1002".to_string(),
				vendor: "Bolt Brothers".to_string(),
				buyer: "Lee".to_string(),
				status: PurchaseOrderStatus::OpenAcknowledged,
				order_date: date!(2026 - 04 - 15),
				total: 310.75,
			},
		],
		receipts: vec![Receipt {
			receipt_number: "RC-5001".to_string(),
			po_number: "PO-1001".to_string(),
			vendor: "Acme Supply".to_string(),
			warehouse: "WH1".to_string(),
			status: ReceiptStatus::Posted,
			received_on: date!(2026 - 03 - 20),
		}],
		customers: vec![
			Customer {
				customer_number: "CU-200".to_string(),
				name: "Acme Retail".to_string(),
				city: "Springfield".to_string(),
			},
			Customer {
				customer_number: "CU-201".to_string(),
				name: "Northwind".to_string(),
				city: "Shelbyville".to_string(),
			},
		],
		credit_authorizations: vec![CreditAuthorization {
			auth_number: "CA-9001".to_string(),
			customer_number: "CU-200".to_string(),
			customer_name: "Acme Retail".to_string(),
			status: AuthorizationStatus::Pending,
			amount: 5000.0,
			requested_on: date!(2026 - 05 - 02),
		}],
	}
}

pub fn sample_catalog() -> Arc<InMemoryCatalog> {
	Arc::new(InMemoryCatalog::new(sample_seed()))
}

pub fn sample_sources() -> Sources {
	Sources::from_catalog(sample_catalog())
}

fn item(number: &str, description: &str, category: &str, vendor: &str, price: f64) -> Item {
	Item {
		item_number: number.to_string(),
		description: description.to_string(),
		category: category.to_string(),
		vendor: vendor.to_string(),
		unit_price: price,
	}
}

/// Returns a fixed list, ignoring the query. Counts invocations.
pub struct StaticProvider {
	name: &'static str,
	result_type: ResultType,
	results: Vec<SearchResult>,
	policy: Option<Policy>,
	calls: AtomicUsize,
}
impl StaticProvider {
	pub fn new(name: &'static str, result_type: ResultType, ids: &[&str]) -> Self {
		let results = ids
			.iter()
			.map(|id| SearchResult::new(result_type, *id, *id, format!("/{name}?id={id}")))
			.collect();

		Self { name, result_type, results, policy: None, calls: AtomicUsize::new(0) }
	}

	/// Reports `result_type` but returns whatever `results` holds.
	pub fn with_results(mut self, results: Vec<SearchResult>) -> Self {
		self.results = results;

		self
	}

	pub fn with_policy(mut self, policy: impl Into<Policy>) -> Self {
		self.policy = Some(policy.into());

		self
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl SearchProvider for StaticProvider {
	fn name(&self) -> &str {
		self.name
	}

	fn result_type(&self) -> ResultType {
		self.result_type
	}

	fn required_policy(&self) -> Option<&Policy> {
		self.policy.as_ref()
	}

	fn search<'a>(
		&'a self,
		_query: &'a str,
		max_results: usize,
	) -> BoxFuture<'a, Result<Vec<SearchResult>>> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		let results = self.results.iter().take(max_results).cloned().collect();

		Box::pin(async move { Ok(results) })
	}
}

pub struct FailingProvider {
	name: &'static str,
}
impl FailingProvider {
	pub fn new(name: &'static str) -> Self {
		Self { name }
	}
}
impl SearchProvider for FailingProvider {
	fn name(&self) -> &str {
		self.name
	}

	fn result_type(&self) -> ResultType {
		ResultType::Receipt
	}

	fn search<'a>(
		&'a self,
		_query: &'a str,
		_max_results: usize,
	) -> BoxFuture<'a, Result<Vec<SearchResult>>> {
		Box::pin(async move {
			Err(Error::Provider {
				provider: self.name.to_string(),
				message: "backing store unavailable".to_string(),
			})
		})
	}
}

pub struct PanickingProvider;
impl SearchProvider for PanickingProvider {
	fn name(&self) -> &str {
		"panicking"
	}

	fn result_type(&self) -> ResultType {
		ResultType::Customer
	}

	fn search<'a>(
		&'a self,
		query: &'a str,
		_max_results: usize,
	) -> BoxFuture<'a, Result<Vec<SearchResult>>> {
		Box::pin(async move {
			if query.is_empty() {
				return Ok(Vec::new());
			}

			panic!("Provider blew up on {query:?}.");
		})
	}
}

/// Never completes, or completes only after `delay` when one is set.
pub struct StallingProvider {
	delay: Option<Duration>,
	calls: AtomicUsize,
}
impl StallingProvider {
	pub fn hung() -> Self {
		Self { delay: None, calls: AtomicUsize::new(0) }
	}

	pub fn delayed(delay: Duration) -> Self {
		Self { delay: Some(delay), calls: AtomicUsize::new(0) }
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl SearchProvider for StallingProvider {
	fn name(&self) -> &str {
		"stalling"
	}

	fn result_type(&self) -> ResultType {
		ResultType::PurchaseOrder
	}

	fn search<'a>(
		&'a self,
		_query: &'a str,
		_max_results: usize,
	) -> BoxFuture<'a, Result<Vec<SearchResult>>> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		Box::pin(async move {
			match self.delay {
				Some(delay) => tokio::time::sleep(delay).await,
				None => future::pending::<()>().await,
			}

			Ok(vec![SearchResult::new(ResultType::PurchaseOrder, "PO-LATE", "PO-LATE", "/late")])
		})
	}
}

/// Holds its worker thread for `busy` without yielding, then returns one item.
pub struct BlockingProvider {
	busy: Duration,
}
impl BlockingProvider {
	pub fn new(busy: Duration) -> Self {
		Self { busy }
	}
}
impl SearchProvider for BlockingProvider {
	fn name(&self) -> &str {
		"blocking"
	}

	fn result_type(&self) -> ResultType {
		ResultType::Item
	}

	fn search<'a>(
		&'a self,
		_query: &'a str,
		_max_results: usize,
	) -> BoxFuture<'a, Result<Vec<SearchResult>>> {
		Box::pin(async move {
			std::thread::sleep(self.busy);

			let result =
				SearchResult::new(ResultType::Item, "SLOW-1", "SLOW-1", "/pricing?item=SLOW-1");

			Ok(vec![result])
		})
	}
}
