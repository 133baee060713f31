//! Plain-text rendering of session state. Deliberately thin: layout and
//! styling are not part of the client core, so this stays at numbered lines
//! and indents.

use scout_domain::{CitationSegment, Document, Explanation, citation, format};
use scout_session::{ExplanationStatus, PageDirection, SearchSession};

const PREVIEW_CHARS: usize = 240;

pub fn print_help() {
	println!("Type a query to search the catalogue.");
	println!("Commands: :more, :next <source>, :prev <source>, :explain <rank>, :clear, :quit");
}

pub fn print_session(session: &SearchSession) {
	if !session.has_searched() {
		println!("Perform a search to see results.");

		return;
	}

	let Some(result) = session.result() else {
		println!("No results found.");

		return;
	};

	if result.documents.is_empty() {
		println!("No results found.");

		return;
	}

	println!(
		"{} documents across {} sources (thread {}).",
		result.documents.len(),
		result.groups.len(),
		result.thread_id,
	);

	for group in session.groups() {
		print_group(session, &group.source);
	}

	print_combined(session);
}

pub fn print_group(session: &SearchSession, source: &str) {
	let Some(group) = session.result().and_then(|result| result.group(source)) else {
		println!("No such source: {source}");

		return;
	};
	let total = group.documents.len();

	println!();
	println!("## {} ({total} documents)", display_source(source));

	for doc in session.visible_in_group(source) {
		println!("  [{}] {}", doc.original_index, title_line(doc));
	}

	let mut nav = Vec::new();

	if session.can_page_source(source, PageDirection::Backward) {
		nav.push(":prev");
	}
	if session.can_page_source(source, PageDirection::Forward) {
		nav.push(":next");
	}
	if !nav.is_empty() {
		println!("  ({} {})", nav.join("/"), display_source(source));
	}
}

pub fn print_combined(session: &SearchSession) {
	let Some(result) = session.result() else {
		return;
	};
	let visible = session.visible_combined();

	println!();
	println!("## Combined ranking");

	for (position, doc) in visible.iter().enumerate() {
		println!("{}. {}", position + 1, title_line(doc));
		println!("   {}", truncate_chars(format::preview_text(doc), PREVIEW_CHARS));

		if session.is_expanded(doc.original_index)
			&& let Some(status) = session.explanation(doc.original_index)
		{
			print_explanation(&status);
		}
	}

	let remaining = result.documents.len().saturating_sub(visible.len());

	if remaining > 0 {
		println!("({remaining} more; :more to reveal)");
	}
}

pub fn print_explanation(status: &ExplanationStatus) {
	match status {
		ExplanationStatus::Loading => println!("   explanation: loading..."),
		ExplanationStatus::Loaded(explanation) => {
			println!("   explanation: {}", rendered_generation(explanation));

			for (index, chunk) in explanation.chunks.iter().enumerate() {
				println!(
					"     {} {}",
					citation::display_label(index),
					truncate_chars(&chunk.content, PREVIEW_CHARS),
				);
			}
		},
		ExplanationStatus::Failed(reason) => println!("   explanation unavailable: {reason}"),
	}
}

/// Generation text with citation markers shown 1-based, matching the labels
/// the chunk footnotes carry.
pub fn rendered_generation(explanation: &Explanation) -> String {
	citation::parse_generation(&explanation.generation)
		.into_iter()
		.map(|segment| match segment {
			CitationSegment::Text(text) => text,
			CitationSegment::Citation { marker } => citation::display_label(marker),
		})
		.collect()
}

fn display_source(source: &str) -> &str {
	if source.is_empty() { "(unlabeled)" } else { source }
}

fn title_line(doc: &Document) -> String {
	let title = doc.metadata.title.as_deref().unwrap_or("Untitled");
	let mut line = format!("{title} ({})", display_source(&doc.metadata.source));

	if let Some(raw) = doc.metadata.date_created.as_deref() {
		let date = format::format_date(raw).unwrap_or_else(|| raw.to_string());

		line.push_str(&format!(", created {date}"));
	}

	line
}

fn truncate_chars(text: &str, max: usize) -> String {
	let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");

	if flattened.chars().count() <= max {
		return flattened;
	}

	let cut = flattened.char_indices().nth(max).map(|(i, _)| i).unwrap_or(flattened.len());

	format!("{}...", &flattened[..cut])
}
