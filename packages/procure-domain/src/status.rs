//! Status kinds and other closed filter values carried in page query strings.
//!
//! `All` is the filter sentinel for "no status restriction" and is every status
//! enum's default, so an unknown token widens the page rather than emptying it.

use serde::{Deserialize, Serialize};

use crate::token::TokenEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PurchaseOrderStatus {
	#[default]
	All,
	Draft,
	Open,
	OpenAcknowledged,
	InTransit,
	PartiallyReceived,
	Received,
	Closed,
	Cancelled,
}
impl TokenEnum for PurchaseOrderStatus {
	const TABLE: &'static [(Self, &'static str, &'static str)] = &[
		(Self::All, "all", "All"),
		(Self::Draft, "draft", "Draft"),
		(Self::Open, "open", "Open"),
		(Self::OpenAcknowledged, "open-acknowledged", "Open \u{2013} Acknowledged"),
		(Self::InTransit, "in-transit", "In Transit"),
		(Self::PartiallyReceived, "partially-received", "Partially Received"),
		(Self::Received, "received", "Received"),
		(Self::Closed, "closed", "Closed"),
		(Self::Cancelled, "cancelled", "Cancelled"),
	];
}

/// Line-level status on the items-on-order page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStatus {
	#[default]
	All,
	Open,
	InTransit,
	PartiallyReceived,
	Received,
	Backordered,
}
impl TokenEnum for LineStatus {
	const TABLE: &'static [(Self, &'static str, &'static str)] = &[
		(Self::All, "all", "All"),
		(Self::Open, "open", "Open"),
		(Self::InTransit, "in-transit", "In Transit"),
		(Self::PartiallyReceived, "partially-received", "Partially Received"),
		(Self::Received, "received", "Received"),
		(Self::Backordered, "backordered", "Backordered"),
	];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReceiptStatus {
	#[default]
	All,
	Pending,
	Posted,
	Reversed,
}
impl TokenEnum for ReceiptStatus {
	const TABLE: &'static [(Self, &'static str, &'static str)] = &[
		(Self::All, "all", "All"),
		(Self::Pending, "pending", "Pending"),
		(Self::Posted, "posted", "Posted"),
		(Self::Reversed, "reversed", "Reversed"),
	];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorizationStatus {
	#[default]
	All,
	Pending,
	Approved,
	Declined,
	Expired,
	Voided,
}
impl TokenEnum for AuthorizationStatus {
	const TABLE: &'static [(Self, &'static str, &'static str)] = &[
		(Self::All, "all", "All"),
		(Self::Pending, "pending", "Pending"),
		(Self::Approved, "approved", "Approved"),
		(Self::Declined, "declined", "Declined"),
		(Self::Expired, "expired", "Expired"),
		(Self::Voided, "voided", "Voided"),
	];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceBasis {
	#[default]
	List,
	Contract,
	Promotional,
}
impl TokenEnum for PriceBasis {
	const TABLE: &'static [(Self, &'static str, &'static str)] = &[
		(Self::List, "list", "List Price"),
		(Self::Contract, "contract", "Contract Price"),
		(Self::Promotional, "promotional", "Promotional Price"),
	];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
	#[default]
	Newest,
	Oldest,
}
impl TokenEnum for SortOrder {
	const TABLE: &'static [(Self, &'static str, &'static str)] = &[
		(Self::Newest, "newest", "Newest First"),
		(Self::Oldest, "oldest", "Oldest First"),
	];
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::token::token_key;

	fn assert_table_is_canonical<T>()
	where
		T: TokenEnum + std::fmt::Debug + std::hash::Hash + Eq,
	{
		let mut keys = HashSet::new();
		let mut variants = HashSet::new();

		for (variant, token, label) in T::TABLE {
			assert!(variants.insert(*variant), "Variant {variant:?} listed twice.");
			assert!(keys.insert(token_key(token)), "Token {token} collides with another row.");

			// A label may share its key with its own token but with no other row.
			let label_key = token_key(label);

			if label_key != token_key(token) {
				assert!(keys.insert(label_key), "Label {label} collides with another row.");
			}

			assert_eq!(T::from_token(token), *variant);
			assert_eq!(T::from_token(label), *variant);
			assert_eq!(variant.token(), *token);
		}
	}

	#[test]
	fn tables_have_one_token_per_variant() {
		assert_table_is_canonical::<PurchaseOrderStatus>();
		assert_table_is_canonical::<LineStatus>();
		assert_table_is_canonical::<ReceiptStatus>();
		assert_table_is_canonical::<AuthorizationStatus>();
		assert_table_is_canonical::<PriceBasis>();
		assert_table_is_canonical::<SortOrder>();
	}

	#[test]
	fn in_transit_spellings_agree() {
		let spellings =
			["In Transit", "in transit", "IN-TRANSIT", " In   Transit ", "in\u{2013}transit"];

		for raw in spellings {
			assert_eq!(
				PurchaseOrderStatus::from_token(raw),
				PurchaseOrderStatus::InTransit,
				"{raw}"
			);
			assert_eq!(LineStatus::from_token(raw), LineStatus::InTransit, "{raw}");
		}
	}

	#[test]
	fn display_label_with_en_dash_resolves() {
		assert_eq!(
			PurchaseOrderStatus::from_token("Open \u{2013} Acknowledged"),
			PurchaseOrderStatus::OpenAcknowledged
		);
		assert_eq!(
			PurchaseOrderStatus::from_token("open - acknowledged"),
			PurchaseOrderStatus::OpenAcknowledged
		);
		assert_eq!(PurchaseOrderStatus::OpenAcknowledged.token(), "open-acknowledged");
	}

	#[test]
	fn unknown_tokens_fall_back_to_default() {
		assert_eq!(PurchaseOrderStatus::from_token("shipped?"), PurchaseOrderStatus::All);
		assert_eq!(ReceiptStatus::from_token(""), ReceiptStatus::All);
		assert_eq!(PriceBasis::from_token("   "), PriceBasis::List);
		assert_eq!(SortOrder::from_token("sideways"), SortOrder::Newest);
		assert_eq!(AuthorizationStatus::parse_token("nope"), None);
	}

	#[test]
	fn serde_uses_canonical_tokens() {
		let json = serde_json::to_string(&PurchaseOrderStatus::OpenAcknowledged)
			.expect("Failed to serialize status.");

		assert_eq!(json, "\"open-acknowledged\"");

		let parsed: ReceiptStatus =
			serde_json::from_str("\"posted\"").expect("Failed to parse status.");

		assert_eq!(parsed, ReceiptStatus::Posted);
	}
}
