use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub backend: Backend,
	#[serde(default)]
	pub pagination: Pagination,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

/// Where the retrieval service lives and how long to wait for it.
#[derive(Clone, Debug, Deserialize)]
pub struct Backend {
	pub api_base: String,
	pub timeout_ms: u64,
}

/// Window sizes for the two display policies: the flat "show more" reveal
/// over the combined ranked list and the fixed sliding page per source card.
#[derive(Clone, Debug, Deserialize)]
pub struct Pagination {
	#[serde(default = "default_combined_initial")]
	pub combined_initial: usize,
	#[serde(default = "default_combined_step")]
	pub combined_step: usize,
	#[serde(default = "default_source_page_size")]
	pub source_page_size: usize,
}
impl Default for Pagination {
	fn default() -> Self {
		Self {
			combined_initial: default_combined_initial(),
			combined_step: default_combined_step(),
			source_page_size: default_source_page_size(),
		}
	}
}

fn default_combined_initial() -> usize {
	5
}

fn default_combined_step() -> usize {
	5
}

fn default_source_page_size() -> usize {
	8
}
