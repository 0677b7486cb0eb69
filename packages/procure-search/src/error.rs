pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Source error in {source_name}: {message}")]
	Source { source_name: String, message: String },
	#[error("Provider error in {provider}: {message}")]
	Provider { provider: String, message: String },
}
impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Source { source_name: "seed".to_string(), message: err.to_string() }
	}
}
