use crate::{
	codec::{Fields, ParameterSet, ScalarMap, clean_text, insert_text, insert_token},
	status::{LineStatus, SortOrder},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsOnOrderParams {
	pub item: Option<String>,
	pub vendor: Option<String>,
	pub status: LineStatus,
	pub sort: SortOrder,
	/// Selected order lines.
	pub lines: Vec<String>,
}
impl ItemsOnOrderParams {
	pub fn for_item(item_number: &str) -> Self {
		Self { item: clean_text(item_number), ..Default::default() }
	}
}
impl ParameterSet for ItemsOnOrderParams {
	const MULTI_VALUE_KEY: Option<&'static str> = Some("lines");
	const PATH: &'static str = "/items-on-order";

	fn from_fields(fields: &Fields<'_>) -> Self {
		Self {
			item: fields.text("item"),
			vendor: fields.text("vendor"),
			status: fields.token("status"),
			sort: fields.token("sort"),
			lines: fields.selection(),
		}
	}

	fn to_scalars(&self) -> ScalarMap {
		let mut out = ScalarMap::new();

		insert_text(&mut out, "item", self.item.as_deref());
		insert_text(&mut out, "vendor", self.vendor.as_deref());
		insert_token(&mut out, "status", self.status);
		insert_token(&mut out, "sort", self.sort);

		out
	}

	fn selection(&self) -> &[String] {
		&self.lines
	}
}
