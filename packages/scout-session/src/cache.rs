use std::{
	collections::HashMap,
	sync::{Mutex, MutexGuard},
};

use scout_domain::Explanation;

use crate::RetrievalProvider;

/// One document inside one thread.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ExplainKey {
	pub thread_id: String,
	pub original_index: usize,
}

/// Observable state of one explanation. Absence from the cache is the idle
/// state.
#[derive(Clone, Debug)]
pub enum ExplanationStatus {
	Loading,
	Loaded(Explanation),
	Failed(String),
}
impl ExplanationStatus {
	pub fn is_terminal(&self) -> bool {
		!matches!(self, Self::Loading)
	}
}

/// Accumulate-only store of explanation fetches, keyed by
/// `(thread_id, original_index)`.
///
/// Entries are never evicted, including entries whose thread a cleared
/// session no longer reaches. The presence check in [`fetch`](Self::fetch) is
/// the only synchronization the at-most-once rule needs: the map is locked
/// without awaiting, so a key observed absent is marked `Loading` before any
/// other caller can see it absent too.
#[derive(Debug, Default)]
pub struct ExplanationCache {
	entries: Mutex<HashMap<ExplainKey, ExplanationStatus>>,
}
impl ExplanationCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn status(&self, thread_id: &str, original_index: usize) -> Option<ExplanationStatus> {
		let key = ExplainKey { thread_id: thread_id.to_string(), original_index };

		self.lock().get(&key).cloned()
	}

	/// Returns the key's explanation state, issuing the external call at most
	/// once.
	///
	/// The first caller for a key transitions it to `Loading`, awaits the
	/// provider, and records `Loaded` or `Failed`. Every later caller, in any
	/// state including `Failed`, gets the current state back without a second
	/// call; failures never retry automatically and never touch other keys.
	pub async fn fetch(
		&self,
		provider: &dyn RetrievalProvider,
		cfg: &scout_config::Backend,
		thread_id: &str,
		original_index: usize,
	) -> ExplanationStatus {
		let key = ExplainKey { thread_id: thread_id.to_string(), original_index };

		{
			let mut entries = self.lock();

			if let Some(status) = entries.get(&key) {
				return status.clone();
			}

			entries.insert(key.clone(), ExplanationStatus::Loading);
		}

		let status = match provider.explain(cfg, thread_id, original_index).await {
			Ok(explanation) => ExplanationStatus::Loaded(explanation),
			Err(err) => {
				tracing::warn!(
					thread_id,
					original_index,
					error = %err,
					"Explanation fetch failed."
				);

				ExplanationStatus::Failed(err.to_string())
			},
		};

		self.lock().insert(key, status.clone());

		status
	}

	pub fn len(&self) -> usize {
		self.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.lock().is_empty()
	}

	fn lock(&self) -> MutexGuard<'_, HashMap<ExplainKey, ExplanationStatus>> {
		self.entries.lock().unwrap_or_else(|err| err.into_inner())
	}
}
