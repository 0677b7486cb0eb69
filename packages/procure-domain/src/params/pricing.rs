use crate::{
	codec::{Fields, ParameterSet, ScalarMap, clean_text, insert_text, insert_token},
	status::PriceBasis,
};

pub const DEFAULT_PRICE_LIST: &str = "RETAIL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingParams {
	pub item: Option<String>,
	pub customer: Option<String>,
	pub price_list: String,
	pub basis: PriceBasis,
}
impl PricingParams {
	pub fn for_item(item_number: &str) -> Self {
		Self { item: clean_text(item_number), ..Default::default() }
	}
}
impl Default for PricingParams {
	fn default() -> Self {
		Self {
			item: None,
			customer: None,
			price_list: DEFAULT_PRICE_LIST.to_string(),
			basis: PriceBasis::default(),
		}
	}
}
impl ParameterSet for PricingParams {
	const PATH: &'static str = "/pricing";

	fn from_fields(fields: &Fields<'_>) -> Self {
		Self {
			item: fields.text("item"),
			customer: fields.text("customer"),
			price_list: fields.text_or("price_list", DEFAULT_PRICE_LIST),
			basis: fields.token("basis"),
		}
	}

	fn to_scalars(&self) -> ScalarMap {
		let mut out = ScalarMap::new();

		insert_text(&mut out, "item", self.item.as_deref());
		insert_text(&mut out, "customer", self.customer.as_deref());
		insert_text(&mut out, "price_list", Some(self.price_list.as_str()));
		insert_token(&mut out, "basis", self.basis);

		out
	}
}
