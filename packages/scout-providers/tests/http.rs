use scout_config::Backend;
use scout_testkit::{StubRetrievalServer, sample_document};

fn backend(api_base: String) -> Backend {
	Backend { api_base, timeout_ms: 2_000 }
}

#[tokio::test]
async fn search_round_trip() {
	let server = StubRetrievalServer::start(vec![
		sample_document("ADR", "Census 2021"),
		sample_document("CDRC", "Footfall"),
	])
	.await
	.expect("Failed to start stub server.");
	let cfg = backend(server.base_url());

	let reply = scout_providers::search(&cfg, "census").await.expect("Search failed.");

	assert_eq!(reply.documents.len(), 2);
	assert_eq!(reply.documents[0].metadata.source, "ADR");
	assert_eq!(reply.documents[1].metadata.source, "CDRC");
	assert_eq!(server.threads(), vec![reply.thread_id.clone()]);
}

#[tokio::test]
async fn explain_round_trip() {
	let server = StubRetrievalServer::start(vec![sample_document("ADR", "Census 2021")])
		.await
		.expect("Failed to start stub server.");
	let cfg = backend(server.base_url());

	let reply = scout_providers::search(&cfg, "census").await.expect("Search failed.");
	let explanation = scout_providers::explain(&cfg, &reply.thread_id, 0)
		.await
		.expect("Explain failed.");

	assert!(explanation.generation.contains("[0]"));
	assert_eq!(explanation.chunks.len(), 1);
	assert_eq!(server.explain_calls(0), 1);
}

#[tokio::test]
async fn server_errors_surface_as_errors() {
	let server =
		StubRetrievalServer::start_with_failing_docs(vec![sample_document("ADR", "X")], vec![0])
			.await
			.expect("Failed to start stub server.");
	let cfg = backend(server.base_url());

	let reply = scout_providers::search(&cfg, "census").await.expect("Search failed.");

	assert!(scout_providers::explain(&cfg, &reply.thread_id, 0).await.is_err());
	assert_eq!(server.explain_calls(0), 1);

	server.fail_searches();

	assert!(scout_providers::search(&cfg, "census").await.is_err());
}
