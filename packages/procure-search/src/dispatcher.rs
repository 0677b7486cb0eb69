//! Fan-out of one free-text query to every eligible provider.
//!
//! Each provider runs as its own task against one shared deadline and one shared
//! cancellation token. Whatever completes in time is merged in registration
//! order. A provider that errors, panics, overruns the deadline, or is cancelled
//! contributes nothing and never fails the whole search.

use std::{
	collections::{HashMap, HashSet},
	sync::Arc,
	time::Duration,
};

use serde::Serialize;
use tokio::{
	task::{JoinError, JoinSet},
	time::{self, Instant},
};
use tokio_util::sync::CancellationToken;

use crate::{
	SearchProvider,
	access::{self, CallerContext},
	registry::{ProviderRegistry, Sources},
	result::SearchResult,
};

pub const DEFAULT_MAX_RESULTS: usize = 20;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProviderOutcome {
	Completed { count: usize },
	Failed,
	TimedOut,
	Cancelled,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderReport {
	pub provider: String,
	pub outcome: ProviderOutcome,
}

/// Merged results plus what happened to each invoked provider. Providers that
/// were disabled or gated away are absent from `providers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchReport {
	pub results: Vec<SearchResult>,
	pub providers: Vec<ProviderReport>,
}

pub struct SearchDispatcher {
	registry: ProviderRegistry,
	timeout: Duration,
	default_max_results: usize,
	max_results_limit: usize,
}
impl SearchDispatcher {
	pub fn new(registry: ProviderRegistry, timeout: Duration) -> Self {
		Self {
			registry,
			timeout,
			default_max_results: DEFAULT_MAX_RESULTS,
			max_results_limit: usize::MAX,
		}
	}

	pub fn from_config(cfg: &procure_config::Config, sources: &Sources) -> Self {
		Self::new(
			ProviderRegistry::from_config(cfg, sources),
			Duration::from_millis(cfg.search.timeout_ms),
		)
		.with_limits(cfg.search.default_max_results as usize, cfg.search.max_results_limit as usize)
	}

	/// Requested caps above `max_results_limit` are clamped to it.
	pub fn with_limits(mut self, default_max_results: usize, max_results_limit: usize) -> Self {
		self.max_results_limit = max_results_limit;
		self.default_max_results = default_max_results.min(max_results_limit);

		self
	}

	pub fn default_max_results(&self) -> usize {
		self.default_max_results
	}

	pub fn registry(&self) -> &ProviderRegistry {
		&self.registry
	}

	pub async fn search(
		&self,
		query: &str,
		max_results: usize,
		ctx: &CallerContext,
	) -> Vec<SearchResult> {
		self.search_with_cancel(query, max_results, ctx, CancellationToken::new()).await
	}

	pub async fn search_with_cancel(
		&self,
		query: &str,
		max_results: usize,
		ctx: &CallerContext,
		cancel: CancellationToken,
	) -> Vec<SearchResult> {
		self.search_report(query, max_results, ctx, cancel).await.results
	}

	pub async fn search_report(
		&self,
		query: &str,
		max_results: usize,
		ctx: &CallerContext,
		cancel: CancellationToken,
	) -> SearchReport {
		let max_results = max_results.min(self.max_results_limit);

		if max_results == 0 || query.trim().is_empty() {
			return SearchReport::default();
		}

		let eligible: Vec<Arc<dyn SearchProvider>> = self
			.registry
			.providers()
			.iter()
			.filter(|&provider| access::provider_eligible(&**provider, ctx))
			.cloned()
			.collect();

		tracing::debug!(
			eligible = eligible.len(),
			registered = self.registry.len(),
			max_results,
			"Dispatching search."
		);

		let deadline = Instant::now() + self.timeout;
		let outcomes = run_providers(&eligible, query, max_results, deadline, &cancel).await;

		merge(&eligible, outcomes, max_results)
	}
}

/// Spawns one task per provider, so a provider that keeps its thread busy cannot
/// hold back the deadline or the other providers. Tasks still running once the
/// deadline passes or `cancel` fires are aborted when the set is dropped.
///
/// A provider that blocks without yielding still occupies a worker thread, so this
/// isolation needs the multi-threaded runtime.
async fn run_providers(
	providers: &[Arc<dyn SearchProvider>],
	query: &str,
	max_results: usize,
	deadline: Instant,
	cancel: &CancellationToken,
) -> Vec<(ProviderOutcome, Vec<SearchResult>)> {
	let query: Arc<str> = Arc::from(query);
	let mut tasks = JoinSet::new();
	let mut slots = HashMap::with_capacity(providers.len());
	let mut settled: Vec<Option<(ProviderOutcome, Vec<SearchResult>)>> =
		providers.iter().map(|_| None).collect();

	for (index, provider) in providers.iter().enumerate() {
		let provider = Arc::clone(provider);
		let query = Arc::clone(&query);
		let handle = tasks.spawn(async move { provider.search(&query, max_results).await });

		slots.insert(handle.id(), index);
	}

	let unfinished = loop {
		let joined = tokio::select! {
			biased;

			_ = cancel.cancelled() => break ProviderOutcome::Cancelled,
			joined = time::timeout_at(deadline, tasks.join_next_with_id()) => joined,
		};
		let (id, finished) = match joined {
			Err(_) | Ok(None) => break ProviderOutcome::TimedOut,
			Ok(Some(Ok((id, finished)))) => (id, Ok(finished)),
			Ok(Some(Err(err))) => (err.id(), Err(err)),
		};

		if let Some(&index) = slots.get(&id) {
			settled[index] = Some(settle(&*providers[index], finished, max_results));
		}
	};

	tasks.abort_all();

	providers
		.iter()
		.zip(settled)
		.map(|(provider, settled)| {
			settled.unwrap_or_else(|| {
				if unfinished == ProviderOutcome::Cancelled {
					tracing::info!(
						provider = provider.name(),
						"Search cancelled before provider finished."
					);
				} else {
					tracing::warn!(provider = provider.name(), "Search provider timed out.");
				}

				(unfinished, Vec::new())
			})
		})
		.collect()
}

fn settle(
	provider: &dyn SearchProvider,
	finished: Result<crate::Result<Vec<SearchResult>>, JoinError>,
	max_results: usize,
) -> (ProviderOutcome, Vec<SearchResult>) {
	let name = provider.name();

	match finished {
		Err(err) if err.is_panic() => {
			tracing::warn!(provider = name, "Search provider panicked.");

			(ProviderOutcome::Failed, Vec::new())
		},
		Err(err) => {
			tracing::warn!(provider = name, error = %err, "Search provider task did not finish.");

			(ProviderOutcome::Failed, Vec::new())
		},
		Ok(Err(err)) => {
			tracing::warn!(provider = name, error = %err, "Search provider failed.");

			(ProviderOutcome::Failed, Vec::new())
		},
		Ok(Ok(results)) => {
			let results = enforce_contract(provider, results, max_results);

			(ProviderOutcome::Completed { count: results.len() }, results)
		},
	}
}

fn enforce_contract(
	provider: &dyn SearchProvider,
	mut results: Vec<SearchResult>,
	max_results: usize,
) -> Vec<SearchResult> {
	let expected = provider.result_type();
	let before = results.len();

	results.retain(|result| result.result_type == expected);

	if results.len() != before {
		tracing::error!(
			provider = provider.name(),
			dropped = before - results.len(),
			"Search provider returned results of a foreign type."
		);
	}

	results.truncate(max_results);

	results
}

fn merge(
	eligible: &[Arc<dyn SearchProvider>],
	outcomes: Vec<(ProviderOutcome, Vec<SearchResult>)>,
	max_results: usize,
) -> SearchReport {
	let mut seen = HashSet::new();
	let mut report = SearchReport {
		results: Vec::with_capacity(max_results.min(64)),
		providers: Vec::with_capacity(eligible.len()),
	};

	for (provider, (outcome, results)) in eligible.iter().zip(outcomes) {
		report.providers.push(ProviderReport { provider: provider.name().to_string(), outcome });

		for result in results {
			if report.results.len() >= max_results {
				break;
			}

			let (result_type, id) = result.key();

			if seen.insert((result_type, id.to_string())) {
				report.results.push(result);
			}
		}
	}

	report
}
