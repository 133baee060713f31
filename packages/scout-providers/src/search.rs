use serde::Deserialize;

use scout_domain::RetrievedDocument;

use crate::Result;

/// Wire shape of `POST /query`: the ranked documents plus the thread token
/// that scopes later explanation calls.
#[derive(Debug, Deserialize)]
pub struct SearchReply {
	pub thread_id: String,
	#[serde(default)]
	pub query: String,
	pub documents: Vec<RetrievedDocument>,
}

/// Submits one query. The query string travels verbatim; URL encoding is the
/// transport's concern.
pub async fn search(cfg: &scout_config::Backend, query: &str) -> Result<SearchReply> {
	let url = format!("{}/query", cfg.api_base);
	let res = crate::client(cfg)?.post(url).query(&[("q", query)]).send().await?;
	let reply = res.error_for_status()?.json::<SearchReply>().await?;

	Ok(reply)
}
