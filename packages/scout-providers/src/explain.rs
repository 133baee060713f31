use scout_domain::Explanation;

use crate::Result;

/// Fetches the generated explanation for one document of one thread.
///
/// `document_index` is the document's original rank in the query response,
/// never a position inside a grouped or paginated view.
pub async fn explain(
	cfg: &scout_config::Backend,
	thread_id: &str,
	document_index: usize,
) -> Result<Explanation> {
	let url = format!("{}/explain/{thread_id}", cfg.api_base);
	let res = crate::client(cfg)?.get(url).query(&[("docid", document_index)]).send().await?;
	let explanation = res.error_for_status()?.json::<Explanation>().await?;

	Ok(explanation)
}
