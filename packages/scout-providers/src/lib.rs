//! HTTP calls against the retrieval service.
//!
//! The service exposes exactly two operations the client consumes:
//! `POST /query` and `GET /explain/{thread_id}`. Both are issued with a fresh
//! client carrying the configured timeout; there is no authentication.

pub mod explain;
pub mod search;

mod error;

pub use error::{Error, Result};
pub use explain::explain;
pub use search::{SearchReply, search};

use std::time::Duration as StdDuration;

use reqwest::Client;

fn client(cfg: &scout_config::Backend) -> Result<Client> {
	Ok(Client::builder().timeout(StdDuration::from_millis(cfg.timeout_ms)).build()?)
}
