use serde::{Deserialize, Serialize};

use crate::group::{self, SourceGroup};

/// One passage as decoded from the retrieval service, before rank tagging.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RetrievedDocument {
	#[serde(rename = "page_content")]
	pub content: String,
	#[serde(default)]
	pub metadata: DocumentMetadata,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DocumentMetadata {
	/// Catalogue the passage came from. An absent source decodes to the empty
	/// string, which forms its own unlabeled group.
	#[serde(default)]
	pub source: String,
	pub title: Option<String>,
	pub url: Option<String>,
	/// Kept verbatim as sent by the backend; parsed only for display.
	pub date_created: Option<String>,
}

/// A retrieved document tagged with its rank in the backend response.
///
/// `original_index` is the document's stable identity. Explanation requests
/// key on it, and it is never reassigned when the document is grouped or
/// sliced for display.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Document {
	pub original_index: usize,
	pub metadata: DocumentMetadata,
	pub content: String,
}

/// The outcome of one completed query: the ranked documents, the thread that
/// scopes later explanation calls, and the source-grouped projection.
#[derive(Clone, Debug)]
pub struct SearchResult {
	pub thread_id: String,
	pub documents: Vec<Document>,
	pub groups: Vec<SourceGroup>,
}
impl SearchResult {
	pub fn new(thread_id: String, retrieved: Vec<RetrievedDocument>) -> Self {
		let documents = retrieved
			.into_iter()
			.enumerate()
			.map(|(original_index, doc)| Document {
				original_index,
				metadata: doc.metadata,
				content: doc.content,
			})
			.collect::<Vec<_>>();
		let groups = group::group_by_source(&documents);

		Self { thread_id, documents, groups }
	}

	pub fn document(&self, original_index: usize) -> Option<&Document> {
		self.documents.get(original_index)
	}

	pub fn group(&self, source: &str) -> Option<&SourceGroup> {
		self.groups.iter().find(|group| group.source == source)
	}
}

/// A generated answer for one document, plus the passages that back it.
///
/// `generation` may embed bracketed markers (`[n]`) that reference
/// `chunks[n]`; see [`crate::citation`].
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Explanation {
	pub generation: String,
	#[serde(default)]
	pub chunks: Vec<Chunk>,
}
impl Explanation {
	/// Resolves a citation marker to its supporting chunk. Markers index
	/// `chunks` 0-based as written.
	pub fn chunk_for(&self, marker: usize) -> Option<&Chunk> {
		self.chunks.get(marker)
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Chunk {
	#[serde(rename = "page_content")]
	pub content: String,
}
