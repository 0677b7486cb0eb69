//! Read-only access to the backing catalog data, one trait per entity domain.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{BoxFuture, Result};
use procure_domain::{CreditAuthorization, Customer, Item, PurchaseOrderSummary, Receipt};

pub trait ItemSource
where
	Self: Send + Sync,
{
	fn items(&self) -> BoxFuture<'_, Result<Vec<Item>>>;
}

pub trait PurchaseOrderSource
where
	Self: Send + Sync,
{
	fn purchase_orders(&self) -> BoxFuture<'_, Result<Vec<PurchaseOrderSummary>>>;
}

pub trait ReceiptSource
where
	Self: Send + Sync,
{
	fn receipts(&self) -> BoxFuture<'_, Result<Vec<Receipt>>>;
}

pub trait CustomerSource
where
	Self: Send + Sync,
{
	fn customers(&self) -> BoxFuture<'_, Result<Vec<Customer>>>;
}

pub trait CreditAuthorizationSource
where
	Self: Send + Sync,
{
	fn credit_authorizations(&self) -> BoxFuture<'_, Result<Vec<CreditAuthorization>>>;
}

/// Seed file layout. Missing sections are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedDocument {
	pub items: Vec<Item>,
	pub purchase_orders: Vec<PurchaseOrderSummary>,
	pub receipts: Vec<Receipt>,
	pub customers: Vec<Customer>,
	pub credit_authorizations: Vec<CreditAuthorization>,
}

/// Immutable in-memory catalog serving every source trait.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
	items: Arc<[Item]>,
	purchase_orders: Arc<[PurchaseOrderSummary]>,
	receipts: Arc<[Receipt]>,
	customers: Arc<[Customer]>,
	credit_authorizations: Arc<[CreditAuthorization]>,
}
impl InMemoryCatalog {
	pub fn new(seed: SeedDocument) -> Self {
		Self {
			items: seed.items.into(),
			purchase_orders: seed.purchase_orders.into(),
			receipts: seed.receipts.into(),
			customers: seed.customers.into(),
			credit_authorizations: seed.credit_authorizations.into(),
		}
	}

	pub fn from_json(raw: &str) -> Result<Self> {
		let seed: SeedDocument = serde_json::from_str(raw)?;

		Ok(Self::new(seed))
	}
}
impl From<SeedDocument> for InMemoryCatalog {
	fn from(seed: SeedDocument) -> Self {
		Self::new(seed)
	}
}
impl ItemSource for InMemoryCatalog {
	fn items(&self) -> BoxFuture<'_, Result<Vec<Item>>> {
		Box::pin(async move { Ok(self.items.to_vec()) })
	}
}
impl PurchaseOrderSource for InMemoryCatalog {
	fn purchase_orders(&self) -> BoxFuture<'_, Result<Vec<PurchaseOrderSummary>>> {
		Box::pin(async move { Ok(self.purchase_orders.to_vec()) })
	}
}
impl ReceiptSource for InMemoryCatalog {
	fn receipts(&self) -> BoxFuture<'_, Result<Vec<Receipt>>> {
		Box::pin(async move { Ok(self.receipts.to_vec()) })
	}
}
impl CustomerSource for InMemoryCatalog {
	fn customers(&self) -> BoxFuture<'_, Result<Vec<Customer>>> {
		Box::pin(async move { Ok(self.customers.to_vec()) })
	}
}
impl CreditAuthorizationSource for InMemoryCatalog {
	fn credit_authorizations(&self) -> BoxFuture<'_, Result<Vec<CreditAuthorization>>> {
		Box::pin(async move { Ok(self.credit_authorizations.to_vec()) })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Error;

	#[tokio::test]
	async fn missing_sections_load_as_empty() {
		let catalog = InMemoryCatalog::from_json(
			r#"{
				"customers": [{ "customer_number": "C-1", "name": "Northwind", "city": "Oslo" }]
			}"#,
		)
		.expect("Failed to load seed.");

		assert_eq!(catalog.customers().await.expect("Failed to read customers.").len(), 1);
		assert!(catalog.items().await.expect("Failed to read items.").is_empty());
	}

	#[test]
	fn malformed_seed_is_a_source_error() {
		let err = InMemoryCatalog::from_json("{ \"items\": 3 }").expect_err("Expected seed error.");

		assert!(matches!(err, Error::Source { .. }), "Unexpected error: {err:?}");
	}
}
