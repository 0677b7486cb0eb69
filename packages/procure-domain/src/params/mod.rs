//! One filter type per catalog page.

mod credit_authorizations;
mod items_on_order;
mod pricing;
mod purchase_orders;
mod receipts;

pub use credit_authorizations::CreditAuthorizationParams;
pub use items_on_order::ItemsOnOrderParams;
pub use pricing::{DEFAULT_PRICE_LIST, PricingParams};
pub use purchase_orders::PurchaseOrderParams;
pub use receipts::{ALL_WAREHOUSES, ReceiptParams};
