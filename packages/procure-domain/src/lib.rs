pub mod codec;
pub mod date_serde;
pub mod params;
pub mod records;
pub mod status;
pub mod token;

pub use codec::{
	Fields, ParameterSet, ScalarMap, build_url, decode_query, decode_scalars, encode_query,
	normalize_selection, to_url,
};
pub use params::{
	CreditAuthorizationParams, ItemsOnOrderParams, PricingParams, PurchaseOrderParams,
	ReceiptParams,
};
pub use records::{CreditAuthorization, Customer, Item, PurchaseOrderSummary, Receipt};
pub use status::{
	AuthorizationStatus, LineStatus, PriceBasis, PurchaseOrderStatus, ReceiptStatus, SortOrder,
};
pub use token::{TokenEnum, token_key};
