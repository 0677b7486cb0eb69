use std::sync::Arc;

use procure_config::{Config, ProviderToggle};

use crate::{
	SearchProvider,
	access::{CREDIT_AUTHORIZATIONS_READ, Policy},
	providers::{
		CreditAuthorizationSearchProvider, CustomerSearchProvider, ItemSearchProvider,
		ProviderSettings, PurchaseOrderSearchProvider, ReceiptSearchProvider,
	},
	sources::{
		CreditAuthorizationSource, CustomerSource, InMemoryCatalog, ItemSource,
		PurchaseOrderSource, ReceiptSource,
	},
};

/// Backing data for the built-in providers.
#[derive(Clone)]
pub struct Sources {
	pub items: Arc<dyn ItemSource>,
	pub purchase_orders: Arc<dyn PurchaseOrderSource>,
	pub receipts: Arc<dyn ReceiptSource>,
	pub customers: Arc<dyn CustomerSource>,
	pub credit_authorizations: Arc<dyn CreditAuthorizationSource>,
}
impl Sources {
	pub fn from_catalog(catalog: Arc<InMemoryCatalog>) -> Self {
		Self {
			items: catalog.clone(),
			purchase_orders: catalog.clone(),
			receipts: catalog.clone(),
			customers: catalog.clone(),
			credit_authorizations: catalog,
		}
	}
}

/// Providers in registration order. Populated at startup, read-only afterwards.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
	providers: Vec<Arc<dyn SearchProvider>>,
}
impl ProviderRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Built-in providers in fixed order: items, purchase orders, receipts,
	/// customers, credit authorizations.
	pub fn from_config(cfg: &Config, sources: &Sources) -> Self {
		let toggles = &cfg.providers;

		Self::new()
			.with(Arc::new(
				ItemSearchProvider::new(sources.items.clone())
					.with_settings(settings(&toggles.items, None)),
			))
			.with(Arc::new(
				PurchaseOrderSearchProvider::new(sources.purchase_orders.clone())
					.with_settings(settings(&toggles.purchase_orders, None)),
			))
			.with(Arc::new(
				ReceiptSearchProvider::new(sources.receipts.clone())
					.with_settings(settings(&toggles.receipts, None)),
			))
			.with(Arc::new(
				CustomerSearchProvider::new(sources.customers.clone())
					.with_settings(settings(&toggles.customers, None)),
			))
			.with(Arc::new(
				CreditAuthorizationSearchProvider::new(sources.credit_authorizations.clone())
					.with_settings(settings(
						&toggles.credit_authorizations,
						Some(CREDIT_AUTHORIZATIONS_READ),
					)),
			))
	}

	pub fn with(mut self, provider: Arc<dyn SearchProvider>) -> Self {
		self.push(provider);

		self
	}

	pub fn push(&mut self, provider: Arc<dyn SearchProvider>) {
		self.providers.push(provider);
	}

	pub fn providers(&self) -> &[Arc<dyn SearchProvider>] {
		&self.providers
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}
}

fn settings(toggle: &ProviderToggle, default_policy: Option<&str>) -> ProviderSettings {
	let required_policy =
		toggle.required_policy.as_deref().or(default_policy).map(Policy::from);

	ProviderSettings { enabled: toggle.enabled, required_policy }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggle_policy_overrides_default() {
		let toggle =
			ProviderToggle { enabled: false, required_policy: Some("ops.read".to_string()) };
		let resolved = settings(&toggle, Some(CREDIT_AUTHORIZATIONS_READ));

		assert!(!resolved.enabled);
		assert_eq!(resolved.required_policy, Some(Policy::from("ops.read")));
	}

	#[test]
	fn missing_policy_keeps_default() {
		let resolved = settings(&ProviderToggle::default(), Some(CREDIT_AUTHORIZATIONS_READ));

		assert!(resolved.enabled);
		assert_eq!(resolved.required_policy, Some(Policy::from(CREDIT_AUTHORIZATIONS_READ)));
		assert_eq!(settings(&ProviderToggle::default(), None).required_policy, None);
	}
}
