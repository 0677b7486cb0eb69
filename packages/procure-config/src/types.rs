use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub search: Search,
	#[serde(default)]
	pub providers: Providers,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Search {
	/// Cap applied when a caller does not ask for a specific number of results.
	pub default_max_results: u32,
	/// Hard ceiling. Larger requested caps are clamped to this value.
	pub max_results_limit: u32,
	/// Overall dispatch deadline shared by every provider call.
	pub timeout_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Providers {
	pub items: ProviderToggle,
	pub purchase_orders: ProviderToggle,
	pub receipts: ProviderToggle,
	pub customers: ProviderToggle,
	pub credit_authorizations: ProviderToggle,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderToggle {
	pub enabled: bool,
	/// Optional. Overrides the provider's built-in policy token when present.
	pub required_policy: Option<String>,
}
impl Default for ProviderToggle {
	fn default() -> Self {
		Self { enabled: true, required_policy: None }
	}
}
