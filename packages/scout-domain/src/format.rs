//! Display helpers for document text and metadata.

use time::{
	Date, OffsetDateTime,
	format_description::well_known::Rfc3339,
	macros::format_description,
};

use crate::document::Document;

/// Structural prefix the catalogue prepends to dataset passages.
const DATASET_TITLE_PREFIX: &str = "Dataset Title: ";

/// The passage body with the "Dataset Title: {title}" prefix stripped.
///
/// Documents without the prefix pass through untouched apart from leading
/// whitespace.
pub fn preview_text(document: &Document) -> &str {
	let Some(rest) = document.content.strip_prefix(DATASET_TITLE_PREFIX) else {
		return document.content.trim_start();
	};
	let rest = match document.metadata.title.as_deref() {
		Some(title) => rest.strip_prefix(title).unwrap_or(rest),
		None => rest,
	};

	rest.trim_start()
}

/// Formats a backend `date_created` value for display, e.g. "3 March 2021".
///
/// The backend sends RFC 3339 timestamps for most catalogues and bare dates
/// for the rest; anything else yields `None` and callers fall back to the raw
/// value.
pub fn format_date(raw: &str) -> Option<String> {
	let display = format_description!("[day padding:none] [month repr:long] [year]");
	let date = match OffsetDateTime::parse(raw, &Rfc3339) {
		Ok(timestamp) => timestamp.date(),
		Err(_) => Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()?,
	};

	date.format(display).ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::document::DocumentMetadata;

	fn document(content: &str, title: Option<&str>) -> Document {
		Document {
			original_index: 0,
			metadata: DocumentMetadata {
				source: "ADR".to_string(),
				title: title.map(str::to_string),
				url: None,
				date_created: None,
			},
			content: content.to_string(),
		}
	}

	#[test]
	fn strips_dataset_title_prefix() {
		let doc = document("Dataset Title: Census 2021\nA decennial survey.", Some("Census 2021"));

		assert_eq!(preview_text(&doc), "A decennial survey.");
	}

	#[test]
	fn passes_plain_content_through() {
		let doc = document("A decennial survey.", Some("Census 2021"));

		assert_eq!(preview_text(&doc), "A decennial survey.");
	}

	#[test]
	fn prefix_without_matching_title_keeps_body() {
		let doc = document("Dataset Title: Something Else", Some("Census 2021"));

		assert_eq!(preview_text(&doc), "Something Else");
	}

	#[test]
	fn formats_rfc3339_and_bare_dates() {
		assert_eq!(format_date("2021-03-03T12:00:00Z").as_deref(), Some("3 March 2021"));
		assert_eq!(format_date("2021-03-03").as_deref(), Some("3 March 2021"));
		assert_eq!(format_date("yesterday"), None);
	}
}
