use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::SearchProvider;

/// Policy token that gates read access to credit authorizations.
pub const CREDIT_AUTHORIZATIONS_READ: &str = "credit.authorizations.read";

/// Opaque capability token. Compared by exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Policy(String);
impl Policy {
	pub fn new(token: impl Into<String>) -> Self {
		Self(token.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl From<&str> for Policy {
	fn from(token: &str) -> Self {
		Self::new(token)
	}
}
impl std::fmt::Display for Policy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

/// Capabilities of whoever is searching.
#[derive(Debug, Clone, Default)]
pub struct CallerContext {
	policies: HashSet<Policy>,
}
impl CallerContext {
	pub fn anonymous() -> Self {
		Self::default()
	}

	pub fn with_policies<I, P>(policies: I) -> Self
	where
		I: IntoIterator<Item = P>,
		P: Into<Policy>,
	{
		Self { policies: policies.into_iter().map(Into::into).collect() }
	}

	pub fn grant(mut self, policy: impl Into<Policy>) -> Self {
		self.policies.insert(policy.into());

		self
	}

	pub fn satisfies(&self, policy: &Policy) -> bool {
		self.policies.contains(policy)
	}
}

/// Enabled, and either ungated or gated by a policy the caller holds.
pub(crate) fn provider_eligible(provider: &dyn SearchProvider, ctx: &CallerContext) -> bool {
	if !provider.is_enabled() {
		return false;
	}

	provider.required_policy().map(|policy| ctx.satisfies(policy)).unwrap_or(true)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn policies_compare_by_exact_value() {
		let ctx = CallerContext::with_policies(["credit.authorizations.read"]);

		assert!(ctx.satisfies(&Policy::from(CREDIT_AUTHORIZATIONS_READ)));
		assert!(!ctx.satisfies(&Policy::from("Credit.Authorizations.Read")));
		assert!(!CallerContext::anonymous().satisfies(&Policy::from(CREDIT_AUTHORIZATIONS_READ)));
	}

	#[test]
	fn grant_adds_policy() {
		let ctx = CallerContext::anonymous().grant("pricing.read");

		assert!(ctx.satisfies(&Policy::new("pricing.read")));
	}
}
