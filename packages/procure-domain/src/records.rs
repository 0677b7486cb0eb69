//! Read-only records of the backing catalog data.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::status::{AuthorizationStatus, PurchaseOrderStatus, ReceiptStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
	pub item_number: String,
	pub description: String,
	pub category: String,
	pub vendor: String,
	pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderSummary {
	pub po_number: String,
	pub vendor: String,
	pub buyer: String,
	pub status: PurchaseOrderStatus,
	#[serde(with = "crate::date_serde")]
	pub order_date: Date,
	pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
	pub receipt_number: String,
	pub po_number: String,
	pub vendor: String,
	pub warehouse: String,
	pub status: ReceiptStatus,
	#[serde(with = "crate::date_serde")]
	pub received_on: Date,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
	pub customer_number: String,
	pub name: String,
	pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditAuthorization {
	pub auth_number: String,
	pub customer_number: String,
	pub customer_name: String,
	pub status: AuthorizationStatus,
	pub amount: f64,
	#[serde(with = "crate::date_serde")]
	pub requested_on: Date,
}
