mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, ProviderToggle, Providers, Search, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.search.default_max_results == 0 {
		return Err(Error::Validation {
			message: "search.default_max_results must be greater than zero.".to_string(),
		});
	}
	if cfg.search.max_results_limit == 0 {
		return Err(Error::Validation {
			message: "search.max_results_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.search.default_max_results > cfg.search.max_results_limit {
		return Err(Error::Validation {
			message: "search.default_max_results must not exceed search.max_results_limit."
				.to_string(),
		});
	}
	if cfg.search.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "search.timeout_ms must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.log_level = cfg.service.log_level.trim().to_string();

	for toggle in [
		&mut cfg.providers.items,
		&mut cfg.providers.purchase_orders,
		&mut cfg.providers.receipts,
		&mut cfg.providers.customers,
		&mut cfg.providers.credit_authorizations,
	] {
		if toggle.required_policy.as_deref().map(|policy| policy.trim().is_empty()).unwrap_or(false)
		{
			toggle.required_policy = None;
		}
		if let Some(policy) = toggle.required_policy.as_mut() {
			*policy = policy.trim().to_string();
		}
	}
}
