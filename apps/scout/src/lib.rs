pub mod command;
pub mod render;

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use scout_session::{DefaultProviders, Error as SessionError, SearchSession};

use crate::command::Command;

#[derive(Debug, Parser)]
#[command(
	version = scout_cli::VERSION,
	rename_all = "kebab",
	styles = scout_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Run a single query, print the results, and exit instead of starting
	/// the prompt.
	#[arg(value_name = "QUERY")]
	pub query: Option<String>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = scout_config::load(&args.config)?;

	init_tracing(&config)?;
	tracing::info!(api_base = %config.backend.api_base, "Retrieval backend configured.");

	let mut session = SearchSession::new(config, DefaultProviders::shared());

	if let Some(query) = args.query {
		submit(&mut session, &query).await;
		render::print_session(&session);

		return Ok(());
	}

	repl(&mut session).await
}

async fn repl(session: &mut SearchSession) -> color_eyre::Result<()> {
	let mut lines = BufReader::new(tokio::io::stdin()).lines();

	render::print_help();

	while let Some(line) = lines.next_line().await? {
		match Command::parse(&line) {
			Command::Empty => {},
			Command::Quit => break,
			Command::Clear => {
				session.clear();
				render::print_session(session);
			},
			Command::More => {
				session.show_more();
				render::print_combined(session);
			},
			Command::Explain(original_index) => {
				match session.toggle_explanation(original_index).await {
					None => println!("No document with rank {original_index} to explain."),
					Some(status) if session.is_expanded(original_index) => {
						render::print_explanation(&status);
					},
					Some(_) => println!("Explanation for rank {original_index} collapsed."),
				}
			},
			Command::Page { source, direction } => {
				session.page_source(&source, direction);
				render::print_group(session, &source);
			},
			Command::Search(query) => {
				submit(session, &query).await;
				render::print_session(session);
			},
			Command::Unknown(raw) => {
				println!("Unrecognized command: {raw}");
				render::print_help();
			},
		}
	}

	Ok(())
}

async fn submit(session: &mut SearchSession, query: &str) {
	match session.submit(query).await {
		Ok(()) => {},
		Err(SessionError::InvalidQuery { message }) => println!("{message}"),
		Err(err) => println!("Search failed: {err}"),
	}
}

fn init_tracing(config: &scout_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();

	Ok(())
}
