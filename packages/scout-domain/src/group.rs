use serde::Serialize;

use crate::document::Document;

/// Documents sharing a `metadata.source`, in rank order.
#[derive(Clone, Debug, Serialize)]
pub struct SourceGroup {
	pub source: String,
	pub documents: Vec<Document>,
}

/// Partitions ranked documents by source.
///
/// Single ordered pass: each document is appended to the group named by its
/// source, creating the group on first encounter. Group order is the order of
/// first appearance; within a group, rank order is preserved. No sorting
/// anywhere, since rank order carries relevance.
pub fn group_by_source(documents: &[Document]) -> Vec<SourceGroup> {
	let mut groups = Vec::<SourceGroup>::new();

	for document in documents {
		match groups.iter_mut().find(|group| group.source == document.metadata.source) {
			Some(group) => group.documents.push(document.clone()),
			None => groups.push(SourceGroup {
				source: document.metadata.source.clone(),
				documents: vec![document.clone()],
			}),
		}
	}

	groups
}
