use crate::{
	codec::{Fields, ParameterSet, ScalarMap, clean_text, insert_text, insert_token},
	status::ReceiptStatus,
};

pub const ALL_WAREHOUSES: &str = "ALL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptParams {
	pub receipt: Option<String>,
	pub po: Option<String>,
	/// Warehouse code, `ALL` when unrestricted.
	pub warehouse: String,
	pub status: ReceiptStatus,
	/// Selected receipt lines.
	pub lines: Vec<String>,
}
impl ReceiptParams {
	pub fn for_receipt(receipt_number: &str) -> Self {
		Self { receipt: clean_text(receipt_number), ..Default::default() }
	}
}
impl Default for ReceiptParams {
	fn default() -> Self {
		Self {
			receipt: None,
			po: None,
			warehouse: ALL_WAREHOUSES.to_string(),
			status: ReceiptStatus::default(),
			lines: Vec::new(),
		}
	}
}
impl ParameterSet for ReceiptParams {
	const MULTI_VALUE_KEY: Option<&'static str> = Some("lines");
	const PATH: &'static str = "/receipts";

	fn from_fields(fields: &Fields<'_>) -> Self {
		Self {
			receipt: fields.text("receipt"),
			po: fields.text("po"),
			warehouse: fields.text_or("warehouse", ALL_WAREHOUSES),
			status: fields.token("status"),
			lines: fields.selection(),
		}
	}

	fn to_scalars(&self) -> ScalarMap {
		let mut out = ScalarMap::new();

		insert_text(&mut out, "receipt", self.receipt.as_deref());
		insert_text(&mut out, "po", self.po.as_deref());
		insert_text(&mut out, "warehouse", Some(self.warehouse.as_str()));
		insert_token(&mut out, "status", self.status);

		out
	}

	fn selection(&self) -> &[String] {
		&self.lines
	}
}
