//! Command-line front end: run a federated search against a seeded catalog, or
//! canonicalize a page link.

use std::{fs, path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use procure_domain::{
	CreditAuthorizationParams, ItemsOnOrderParams, ParameterSet, PricingParams,
	PurchaseOrderParams, ReceiptParams, decode_query, to_url,
};
use procure_search::{CallerContext, InMemoryCatalog, SearchDispatcher, Sources};

#[derive(Debug, Parser)]
#[command(
	version = procure_cli::VERSION,
	rename_all = "kebab",
	styles = procure_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// JSON catalog with `items`, `purchase_orders`, `receipts`, `customers` and
	/// `credit_authorizations` arrays.
	#[arg(long, short = 's', value_name = "FILE")]
	pub seed: Option<PathBuf>,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Search every enabled provider the caller may use.
	Search {
		query: String,
		/// Defaults to `search.default_max_results`.
		#[arg(long, short = 'n')]
		max_results: Option<usize>,
		/// Policy held by the caller. Repeatable.
		#[arg(long = "policy", short = 'p', value_name = "TOKEN")]
		policies: Vec<String>,
		/// Include per-provider outcomes in the output.
		#[arg(long)]
		report: bool,
	},
	/// Decode a page query string and print its canonical link.
	Link {
		#[arg(value_enum)]
		page: Page,
		/// Raw query string, with or without the leading `?`.
		#[arg(default_value = "")]
		raw_query: String,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Page {
	ItemsOnOrder,
	PurchaseOrders,
	Receipts,
	Pricing,
	CreditAuthorizations,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalLink {
	pub url: String,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub selection: Vec<String>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = procure_config::load(&args.config)?;

	init_tracing(&config)?;

	let output = match args.command {
		Command::Search { query, max_results, policies, report: with_report } => {
			let catalog = load_catalog(args.seed.as_deref())?;
			let dispatcher =
				SearchDispatcher::from_config(&config, &Sources::from_catalog(Arc::new(catalog)));
			let max_results = max_results.unwrap_or_else(|| dispatcher.default_max_results());
			let ctx = CallerContext::with_policies(policies.iter().map(String::as_str));
			let cancel = CancellationToken::new();
			let on_interrupt = cancel.clone();

			tokio::spawn(async move {
				if tokio::signal::ctrl_c().await.is_ok() {
					tracing::info!("Interrupted. Returning results collected so far.");
					on_interrupt.cancel();
				}
			});

			let report = dispatcher.search_report(&query, max_results, &ctx, cancel).await;

			tracing::info!(results = report.results.len(), "Search finished.");

			if with_report {
				serde_json::to_string_pretty(&report)?
			} else {
				serde_json::to_string_pretty(&report.results)?
			}
		},
		Command::Link { page, raw_query } =>
			serde_json::to_string_pretty(&canonical_link(page, &raw_query))?,
	};

	println!("{output}");

	Ok(())
}

/// Round-trips `raw_query` through the page's parameter set.
pub fn canonical_link(page: Page, raw_query: &str) -> CanonicalLink {
	match page {
		Page::ItemsOnOrder => link_for::<ItemsOnOrderParams>(raw_query),
		Page::PurchaseOrders => link_for::<PurchaseOrderParams>(raw_query),
		Page::Receipts => link_for::<ReceiptParams>(raw_query),
		Page::Pricing => link_for::<PricingParams>(raw_query),
		Page::CreditAuthorizations => link_for::<CreditAuthorizationParams>(raw_query),
	}
}

fn link_for<P>(raw_query: &str) -> CanonicalLink
where
	P: ParameterSet,
{
	let params: P = decode_query(raw_query);

	CanonicalLink { url: to_url(&params), selection: params.selection().to_vec() }
}

pub fn load_catalog(seed: Option<&std::path::Path>) -> color_eyre::Result<InMemoryCatalog> {
	let Some(path) = seed else {
		tracing::warn!("No seed file given. Searching an empty catalog.");

		return Ok(InMemoryCatalog::default());
	};
	let raw = fs::read_to_string(path)
		.map_err(|err| eyre::eyre!("Failed to read seed file at {}: {err}.", path.display()))?;

	Ok(InMemoryCatalog::from_json(&raw)?)
}

fn init_tracing(config: &procure_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init()
		.map_err(|err| eyre::eyre!("Failed to initialize tracing: {err}."))
}
