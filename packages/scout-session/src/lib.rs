//! The client-side core: session lifecycle, explanation cache, and the two
//! pagination policies. Everything here is presentation-agnostic; rendering
//! lives with the binaries.

pub mod cache;
pub mod pagination;
pub mod session;

mod error;

pub use cache::{ExplainKey, ExplanationCache, ExplanationStatus};
pub use error::{Error, Result};
pub use pagination::{PageDirection, RevealWindow, SlidingWindow};
pub use session::{Phase, SearchSession};

use std::{future::Future, pin::Pin, sync::Arc};

use scout_domain::Explanation;
use scout_providers::SearchReply;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Seam to the retrieval service: the only two operations the client
/// consumes. Implemented over HTTP by [`DefaultProviders`] and by stubs in
/// tests.
pub trait RetrievalProvider
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		cfg: &'a scout_config::Backend,
		query: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<SearchReply>>;

	fn explain<'a>(
		&'a self,
		cfg: &'a scout_config::Backend,
		thread_id: &'a str,
		document_index: usize,
	) -> BoxFuture<'a, color_eyre::Result<Explanation>>;
}

/// Production wiring: delegates to the reqwest calls in `scout-providers`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultProviders;
impl DefaultProviders {
	pub fn shared() -> Arc<dyn RetrievalProvider> {
		Arc::new(Self)
	}
}
impl RetrievalProvider for DefaultProviders {
	fn search<'a>(
		&'a self,
		cfg: &'a scout_config::Backend,
		query: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<SearchReply>> {
		Box::pin(async move { Ok(scout_providers::search(cfg, query).await?) })
	}

	fn explain<'a>(
		&'a self,
		cfg: &'a scout_config::Backend,
		thread_id: &'a str,
		document_index: usize,
	) -> BoxFuture<'a, color_eyre::Result<Explanation>> {
		Box::pin(async move {
			Ok(scout_providers::explain(cfg, thread_id, document_index).await?)
		})
	}
}
