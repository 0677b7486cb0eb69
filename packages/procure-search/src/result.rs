use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
	Item,
	PurchaseOrder,
	Receipt,
	Customer,
	CreditAuthorization,
}
impl ResultType {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Item => "item",
			Self::PurchaseOrder => "purchase_order",
			Self::Receipt => "receipt",
			Self::Customer => "customer",
			Self::CreditAuthorization => "credit_authorization",
		}
	}
}

/// One matched entity. Identity is `(result_type, id)`.
///
/// `badge`, `subtitle` and `metadata` are display hints only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
	pub id: String,
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subtitle: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(rename = "type")]
	pub result_type: ResultType,
	pub navigate_url: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub badge: Option<String>,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub metadata: BTreeMap<String, String>,
}
impl SearchResult {
	pub fn new(
		result_type: ResultType,
		id: impl Into<String>,
		title: impl Into<String>,
		navigate_url: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			subtitle: None,
			description: None,
			result_type,
			navigate_url: navigate_url.into(),
			price: None,
			badge: None,
			metadata: BTreeMap::new(),
		}
	}

	pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
		self.subtitle = Some(subtitle.into());

		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());

		self
	}

	pub fn with_price(mut self, price: f64) -> Self {
		self.price = Some(price);

		self
	}

	pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
		self.badge = Some(badge.into());

		self
	}

	pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.metadata.insert(key.into(), value.into());

		self
	}

	pub fn key(&self) -> (ResultType, &str) {
		(self.result_type, self.id.as_str())
	}
}
