//! Citation markers embedded in generated explanations.
//!
//! The generator cites supporting chunks inline as `[n]`, where `n` indexes
//! the explanation's `chunks` 0-based. Display labels are 1-based; the marker
//! itself is never rewritten.

use regex::Regex;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CitationSegment {
	Text(String),
	/// The number as written inside the brackets, a 0-based index into the
	/// explanation's chunks.
	Citation { marker: usize },
}

/// Splits generated text into plain-text runs and citation markers.
///
/// A bracketed number whose digits do not fit `usize` stays plain text.
pub fn parse_generation(text: &str) -> Vec<CitationSegment> {
	let Ok(pattern) = Regex::new(r"\[(\d+)\]") else {
		return vec![CitationSegment::Text(text.to_string())];
	};
	let mut segments = Vec::new();
	let mut cursor = 0;

	for captures in pattern.captures_iter(text) {
		let Some(whole) = captures.get(0) else {
			continue;
		};
		let Some(marker) = captures.get(1).and_then(|digits| digits.as_str().parse().ok()) else {
			continue;
		};

		if whole.start() > cursor {
			segments.push(CitationSegment::Text(text[cursor..whole.start()].to_string()));
		}

		segments.push(CitationSegment::Citation { marker });

		cursor = whole.end();
	}

	if cursor < text.len() {
		segments.push(CitationSegment::Text(text[cursor..].to_string()));
	}

	segments
}

/// The label shown for a marker, 1-based.
pub fn display_label(marker: usize) -> String {
	format!("[{}]", marker + 1)
}
