mod error;

pub use error::{Error, Result};

use std::{
	collections::HashMap,
	net::SocketAddr,
	sync::{
		Arc, Mutex,
		atomic::{AtomicBool, Ordering},
	},
};

use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::StatusCode,
	routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::{net::TcpListener, task::JoinHandle};
use uuid::Uuid;

/// In-process stand-in for the retrieval service.
///
/// Serves the two routes the client consumes (`POST /query`,
/// `GET /explain/{thread_id}`) from a scripted corpus and records every
/// explain call per document index, so tests can assert the at-most-once
/// contract over real HTTP.
pub struct StubRetrievalServer {
	addr: SocketAddr,
	state: Arc<StubState>,
	handle: JoinHandle<()>,
}
impl StubRetrievalServer {
	pub async fn start(documents: Vec<Value>) -> Result<Self> {
		Self::start_with_failing_docs(documents, Vec::new()).await
	}

	/// Starts a stub whose explain route answers HTTP 500 for the listed
	/// document indices. Calls are still counted.
	pub async fn start_with_failing_docs(
		documents: Vec<Value>,
		failing_docs: Vec<usize>,
	) -> Result<Self> {
		let state = Arc::new(StubState {
			documents,
			failing_docs,
			fail_search: AtomicBool::new(false),
			explain_calls: Mutex::new(HashMap::new()),
			threads: Mutex::new(Vec::new()),
		});
		let app = Router::new()
			.route("/query", post(query))
			.route("/explain/{thread_id}", get(explain))
			.with_state(state.clone());
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener
			.local_addr()
			.map_err(|err| Error::Message(format!("Failed to read stub address: {err}.")))?;
		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.ok();
		});

		Ok(Self { addr, state, handle })
	}

	pub fn base_url(&self) -> String {
		format!("http://{}", self.addr)
	}

	/// Makes the query route answer HTTP 500 from now on.
	pub fn fail_searches(&self) {
		self.state.fail_search.store(true, Ordering::SeqCst);
	}

	/// How many explain calls arrived for one document index.
	pub fn explain_calls(&self, document_index: usize) -> usize {
		self.state
			.explain_calls
			.lock()
			.unwrap_or_else(|err| err.into_inner())
			.get(&document_index)
			.copied()
			.unwrap_or(0)
	}

	/// Thread ids issued so far, in order.
	pub fn threads(&self) -> Vec<String> {
		self.state.threads.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}
}
impl Drop for StubRetrievalServer {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

struct StubState {
	documents: Vec<Value>,
	failing_docs: Vec<usize>,
	fail_search: AtomicBool,
	explain_calls: Mutex<HashMap<usize, usize>>,
	threads: Mutex<Vec<String>>,
}

/// A minimal catalogue document in the backend's wire shape.
pub fn sample_document(source: &str, title: &str) -> Value {
	json!({
		"page_content": format!("Dataset Title: {title}\nA description of {title}."),
		"metadata": {
			"source": source,
			"title": title,
			"url": format!("https://catalogue.example/{source}/{title}"),
			"date_created": "2021-03-03T12:00:00Z"
		}
	})
}

#[derive(Deserialize)]
struct QueryParams {
	q: String,
}

async fn query(
	State(state): State<Arc<StubState>>,
	Query(params): Query<QueryParams>,
) -> Result<Json<Value>, StatusCode> {
	if state.fail_search.load(Ordering::SeqCst) {
		return Err(StatusCode::INTERNAL_SERVER_ERROR);
	}

	let thread_id = Uuid::new_v4().to_string();

	state.threads.lock().unwrap_or_else(|err| err.into_inner()).push(thread_id.clone());

	Ok(Json(json!({
		"thread_id": thread_id,
		"query": params.q,
		"documents": state.documents.clone(),
	})))
}

#[derive(Deserialize)]
struct ExplainParams {
	docid: usize,
}

async fn explain(
	State(state): State<Arc<StubState>>,
	Path(thread_id): Path<String>,
	Query(params): Query<ExplainParams>,
) -> Result<Json<Value>, StatusCode> {
	{
		let mut calls = state.explain_calls.lock().unwrap_or_else(|err| err.into_inner());

		*calls.entry(params.docid).or_insert(0) += 1;
	}

	if state.failing_docs.contains(&params.docid) {
		return Err(StatusCode::INTERNAL_SERVER_ERROR);
	}

	let document = state.documents.get(params.docid).ok_or(StatusCode::NOT_FOUND)?;

	Ok(Json(json!({
		"thread_id": thread_id,
		"generation": format!("Document {} answers the query [0].", params.docid),
		"chunks": [ { "page_content": "A supporting snippet." } ],
		"document": document,
	})))
}
