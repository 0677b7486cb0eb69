use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = procure_query::Args::parse();
	procure_query::run(args).await
}
