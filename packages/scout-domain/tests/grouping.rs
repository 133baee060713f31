use scout_domain::{Document, DocumentMetadata, RetrievedDocument, SearchResult, group_by_source};

fn document(source: &str, original_index: usize) -> Document {
	Document {
		original_index,
		metadata: DocumentMetadata { source: source.to_string(), ..Default::default() },
		content: format!("passage {original_index}"),
	}
}

fn retrieved(source: &str) -> RetrievedDocument {
	RetrievedDocument {
		content: String::new(),
		metadata: DocumentMetadata { source: source.to_string(), ..Default::default() },
	}
}

#[test]
fn grouping_is_a_partition() {
	let sources = ["A", "B", "A", "C", "B", "A"];
	let documents =
		sources.iter().enumerate().map(|(i, source)| document(source, i)).collect::<Vec<_>>();

	let groups = group_by_source(&documents);

	assert_eq!(
		groups.iter().map(|group| group.source.as_str()).collect::<Vec<_>>(),
		vec!["A", "B", "C"],
	);

	let mut seen = groups
		.iter()
		.flat_map(|group| group.documents.iter().map(|doc| doc.original_index))
		.collect::<Vec<_>>();

	seen.sort_unstable();

	assert_eq!(seen, (0..documents.len()).collect::<Vec<_>>());

	for group in &groups {
		let indices = group.documents.iter().map(|doc| doc.original_index).collect::<Vec<_>>();
		let mut sorted = indices.clone();

		sorted.sort_unstable();

		assert_eq!(indices, sorted, "rank order lost inside group {}", group.source);
	}
}

#[test]
fn search_result_tags_ranks_and_groups() {
	let result = SearchResult::new(
		"t1".to_string(),
		vec![retrieved("A"), retrieved("B"), retrieved("A")],
	);

	for (i, doc) in result.documents.iter().enumerate() {
		assert_eq!(doc.original_index, i);
	}

	let group_a = result.group("A").expect("Missing group A.");
	let group_b = result.group("B").expect("Missing group B.");

	assert_eq!(
		group_a.documents.iter().map(|doc| doc.original_index).collect::<Vec<_>>(),
		vec![0, 2],
	);
	assert_eq!(
		group_b.documents.iter().map(|doc| doc.original_index).collect::<Vec<_>>(),
		vec![1],
	);
}

#[test]
fn missing_source_groups_under_empty_string() {
	let documents = vec![document("A", 0), document("", 1), document("", 2)];

	let groups = group_by_source(&documents);

	assert_eq!(groups.len(), 2);
	assert_eq!(groups[1].source, "");
	assert_eq!(
		groups[1].documents.iter().map(|doc| doc.original_index).collect::<Vec<_>>(),
		vec![1, 2],
	);
}

#[test]
fn wire_metadata_tolerates_missing_fields() {
	let raw = serde_json::json!({
		"page_content": "Dataset Title: X\nBody.",
		"metadata": { "title": "X", "id": 42, "score": 0.5 }
	});

	let decoded: RetrievedDocument =
		serde_json::from_value(raw).expect("Failed to decode document.");

	assert_eq!(decoded.metadata.source, "");
	assert_eq!(decoded.metadata.title.as_deref(), Some("X"));
	assert!(decoded.metadata.url.is_none());
}
