use std::{
	collections::{HashMap, HashSet},
	sync::Arc,
};

use scout_config::Config;
use scout_domain::{Document, SearchResult, SourceGroup};

use crate::{
	Error, ExplanationCache, ExplanationStatus, PageDirection, Result, RetrievalProvider,
	RevealWindow, SlidingWindow,
};

/// Top-level session lifecycle. `Searching` always resolves to `Searched`,
/// on success and failure alike.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
	NotSearched,
	Searching,
	Searched,
}

/// One user's search state: the current result set and thread token, the two
/// pagination windows, and per-document explanation visibility.
///
/// `submit` takes `&mut self`, so searches are serialized by construction and
/// the most recent response is always the one that lands. Outstanding
/// explanation fetches from an earlier search complete silently into their
/// own cache keys.
pub struct SearchSession {
	providers: Arc<dyn RetrievalProvider>,
	cfg: Config,
	cache: Arc<ExplanationCache>,
	phase: Phase,
	result: Option<SearchResult>,
	combined: RevealWindow,
	source_windows: HashMap<String, SlidingWindow>,
	expanded: HashSet<usize>,
}
impl SearchSession {
	pub fn new(cfg: Config, providers: Arc<dyn RetrievalProvider>) -> Self {
		let combined =
			RevealWindow::new(cfg.pagination.combined_initial, cfg.pagination.combined_step);

		Self {
			providers,
			cfg,
			cache: Arc::new(ExplanationCache::new()),
			phase: Phase::NotSearched,
			result: None,
			combined,
			source_windows: HashMap::new(),
			expanded: HashSet::new(),
		}
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn has_searched(&self) -> bool {
		self.phase != Phase::NotSearched
	}

	pub fn is_searching(&self) -> bool {
		self.phase == Phase::Searching
	}

	pub fn result(&self) -> Option<&SearchResult> {
		self.result.as_ref()
	}

	pub fn thread_id(&self) -> Option<&str> {
		self.result.as_ref().map(|result| result.thread_id.as_str())
	}

	pub fn groups(&self) -> &[SourceGroup] {
		self.result.as_ref().map(|result| result.groups.as_slice()).unwrap_or(&[])
	}

	/// The process-wide explanation store. Shared so concurrent fetch
	/// completions can land while the session is borrowed elsewhere.
	pub fn cache(&self) -> &Arc<ExplanationCache> {
		&self.cache
	}

	/// Runs one query against the retrieval service.
	///
	/// On success the previous result set is replaced, ranks are tagged, the
	/// grouped view recomputed, and every window returns to its initial
	/// state. On failure the previous result set stays untouched and the
	/// error comes back as a value; the phase still lands on `Searched`.
	pub async fn submit(&mut self, query: &str) -> Result<()> {
		let query = query.trim();

		if query.is_empty() {
			return Err(Error::InvalidQuery { message: "Query must be non-empty.".to_string() });
		}

		self.phase = Phase::Searching;

		let outcome = self.providers.search(&self.cfg.backend, query).await;

		self.phase = Phase::Searched;

		match outcome {
			Ok(reply) => {
				tracing::debug!(
					thread_id = %reply.thread_id,
					documents = reply.documents.len(),
					"Search completed."
				);
				self.install_result(SearchResult::new(reply.thread_id, reply.documents));

				Ok(())
			},
			Err(err) => {
				tracing::warn!(error = %err, "Search failed; keeping previous results.");

				Err(Error::Search { message: err.to_string() })
			},
		}
	}

	/// Returns to the pre-search state. Cache entries for the abandoned
	/// thread stay put; the thread token simply becomes unreachable.
	pub fn clear(&mut self) {
		self.phase = Phase::NotSearched;
		self.result = None;
		self.combined.reset();
		self.source_windows.clear();
		self.expanded.clear();
	}

	/// The first `visible` documents of the combined ranked list.
	pub fn visible_combined(&self) -> &[Document] {
		match &self.result {
			Some(result) => &result.documents[..self.combined.end(result.documents.len())],
			None => &[],
		}
	}

	pub fn show_more(&mut self) {
		self.combined.show_more();
	}

	pub fn can_show_more(&self) -> bool {
		self.result
			.as_ref()
			.is_some_and(|result| !self.combined.is_exhausted(result.documents.len()))
	}

	/// The current page of one source group.
	pub fn visible_in_group(&self, source: &str) -> &[Document] {
		let Some(group) = self.result.as_ref().and_then(|result| result.group(source)) else {
			return &[];
		};

		&group.documents[self.source_window(source).range(group.documents.len())]
	}

	/// Slides one source card by a page. A no-op beyond either edge, which is
	/// the same contract the disabled navigation controls expose.
	pub fn page_source(&mut self, source: &str, direction: PageDirection) {
		let Some(total) = self
			.result
			.as_ref()
			.and_then(|result| result.group(source))
			.map(|group| group.documents.len())
		else {
			return;
		};
		let page_size = self.cfg.pagination.source_page_size;

		self.source_windows
			.entry(source.to_string())
			.or_insert_with(|| SlidingWindow::new(page_size))
			.page(direction, total);
	}

	pub fn can_page_source(&self, source: &str, direction: PageDirection) -> bool {
		let Some(total) = self
			.result
			.as_ref()
			.and_then(|result| result.group(source))
			.map(|group| group.documents.len())
		else {
			return false;
		};
		let window = self.source_window(source);

		match direction {
			PageDirection::Backward => window.can_back(),
			PageDirection::Forward => window.can_forward(total),
		}
	}

	pub fn is_expanded(&self, original_index: usize) -> bool {
		self.expanded.contains(&original_index)
	}

	/// Flips a document's explanation visibility.
	///
	/// Expanding triggers the cache fetch when the key has no entry yet;
	/// collapsing is a pure visibility change and the cached value stays for
	/// instant re-expand. Without a completed search there is no thread to
	/// scope the request, so this is a no-op returning `None`.
	pub async fn toggle_explanation(&mut self, original_index: usize) -> Option<ExplanationStatus> {
		let thread_id = match &self.result {
			Some(result) if result.document(original_index).is_some() => {
				result.thread_id.clone()
			},
			_ => return None,
		};

		if self.expanded.remove(&original_index) {
			return self.cache.status(&thread_id, original_index);
		}

		self.expanded.insert(original_index);

		let status = self
			.cache
			.fetch(self.providers.as_ref(), &self.cfg.backend, &thread_id, original_index)
			.await;

		Some(status)
	}

	/// Current cache state for a document of the active thread, if any.
	pub fn explanation(&self, original_index: usize) -> Option<ExplanationStatus> {
		let result = self.result.as_ref()?;

		self.cache.status(&result.thread_id, original_index)
	}

	fn install_result(&mut self, result: SearchResult) {
		self.combined.reset();
		self.source_windows.clear();
		self.expanded.clear();
		self.result = Some(result);
	}

	fn source_window(&self, source: &str) -> SlidingWindow {
		self.source_windows
			.get(source)
			.copied()
			.unwrap_or_else(|| SlidingWindow::new(self.cfg.pagination.source_page_size))
	}
}
