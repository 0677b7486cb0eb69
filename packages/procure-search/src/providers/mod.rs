//! Concrete providers, one per entity domain.

mod credit_authorizations;
mod customers;
mod items;
mod purchase_orders;
mod receipts;

pub use credit_authorizations::CreditAuthorizationSearchProvider;
pub use customers::CustomerSearchProvider;
pub use items::ItemSearchProvider;
pub use purchase_orders::PurchaseOrderSearchProvider;
pub use receipts::ReceiptSearchProvider;

use crate::access::Policy;

/// Enable flag and optional gate shared by the built-in providers.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
	pub enabled: bool,
	pub required_policy: Option<Policy>,
}
impl ProviderSettings {
	pub fn gated(policy: impl Into<Policy>) -> Self {
		Self { enabled: true, required_policy: Some(policy.into()) }
	}
}
impl Default for ProviderSettings {
	fn default() -> Self {
		Self { enabled: true, required_policy: None }
	}
}
