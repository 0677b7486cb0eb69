pub mod access;
pub mod dispatcher;
pub mod providers;
pub mod ranking;
pub mod registry;
pub mod result;
pub mod sources;

mod error;

pub use access::{CREDIT_AUTHORIZATIONS_READ, CallerContext, Policy};
pub use dispatcher::{ProviderOutcome, ProviderReport, SearchDispatcher, SearchReport};
pub use error::{Error, Result};
pub use providers::{
	CreditAuthorizationSearchProvider, CustomerSearchProvider, ItemSearchProvider,
	ProviderSettings, PurchaseOrderSearchProvider, ReceiptSearchProvider,
};
pub use registry::{ProviderRegistry, Sources};
pub use result::{ResultType, SearchResult};
pub use sources::{
	CreditAuthorizationSource, CustomerSource, InMemoryCatalog, ItemSource, PurchaseOrderSource,
	ReceiptSource, SeedDocument,
};

use std::{future::Future, pin::Pin};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Free-text search over one entity domain.
///
/// Implementations return at most `max_results` results of their own
/// [`ResultType`], best match first, and an empty list for a blank query.
pub trait SearchProvider
where
	Self: Send + Sync,
{
	fn name(&self) -> &str;

	fn result_type(&self) -> ResultType;

	/// Disabled providers are skipped by the dispatcher, never invoked.
	fn is_enabled(&self) -> bool {
		true
	}

	/// Policy the caller must hold for this provider to be invoked at all.
	fn required_policy(&self) -> Option<&Policy> {
		None
	}

	fn search<'a>(
		&'a self,
		query: &'a str,
		max_results: usize,
	) -> BoxFuture<'a, Result<Vec<SearchResult>>>;
}
