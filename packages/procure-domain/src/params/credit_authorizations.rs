use crate::{
	codec::{Fields, ParameterSet, ScalarMap, clean_text, insert_text, insert_token},
	status::AuthorizationStatus,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditAuthorizationParams {
	pub auth: Option<String>,
	pub customer: Option<String>,
	pub status: AuthorizationStatus,
	/// Authorizations selected for a bulk action.
	pub selected: Vec<String>,
}
impl CreditAuthorizationParams {
	pub fn for_authorization(auth_number: &str) -> Self {
		Self { auth: clean_text(auth_number), ..Default::default() }
	}

	pub fn for_customer(customer_number: &str) -> Self {
		Self { customer: clean_text(customer_number), ..Default::default() }
	}
}
impl ParameterSet for CreditAuthorizationParams {
	const MULTI_VALUE_KEY: Option<&'static str> = Some("selected");
	const PATH: &'static str = "/credit-authorizations";

	fn from_fields(fields: &Fields<'_>) -> Self {
		Self {
			auth: fields.text("auth"),
			customer: fields.text("customer"),
			status: fields.token("status"),
			selected: fields.selection(),
		}
	}

	fn to_scalars(&self) -> ScalarMap {
		let mut out = ScalarMap::new();

		insert_text(&mut out, "auth", self.auth.as_deref());
		insert_text(&mut out, "customer", self.customer.as_deref());
		insert_token(&mut out, "status", self.status);

		out
	}

	fn selection(&self) -> &[String] {
		&self.selected
	}
}
