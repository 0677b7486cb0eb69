use crate::{
	codec::{Fields, ParameterSet, ScalarMap, clean_text, insert_text, insert_token},
	status::{PurchaseOrderStatus, SortOrder},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseOrderParams {
	pub po: Option<String>,
	pub vendor: Option<String>,
	pub buyer: Option<String>,
	pub status: PurchaseOrderStatus,
	pub sort: SortOrder,
	/// Selected PO lines.
	pub lines: Vec<String>,
}
impl PurchaseOrderParams {
	pub fn for_po(po_number: &str) -> Self {
		Self { po: clean_text(po_number), ..Default::default() }
	}
}
impl ParameterSet for PurchaseOrderParams {
	const MULTI_VALUE_KEY: Option<&'static str> = Some("lines");
	const PATH: &'static str = "/purchase-orders";

	fn from_fields(fields: &Fields<'_>) -> Self {
		Self {
			po: fields.text("po"),
			vendor: fields.text("vendor"),
			buyer: fields.text("buyer"),
			status: fields.token("status"),
			sort: fields.token("sort"),
			lines: fields.selection(),
		}
	}

	fn to_scalars(&self) -> ScalarMap {
		let mut out = ScalarMap::new();

		insert_text(&mut out, "po", self.po.as_deref());
		insert_text(&mut out, "vendor", self.vendor.as_deref());
		insert_text(&mut out, "buyer", self.buyer.as_deref());
		insert_token(&mut out, "status", self.status);
		insert_token(&mut out, "sort", self.sort);

		out
	}

	fn selection(&self) -> &[String] {
		&self.lines
	}
}
