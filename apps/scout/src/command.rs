use scout_session::PageDirection;

/// One line of prompt input. Anything not starting with `:` is a query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
	Empty,
	Quit,
	Clear,
	More,
	Explain(usize),
	Page { source: String, direction: PageDirection },
	Search(String),
	Unknown(String),
}
impl Command {
	pub fn parse(line: &str) -> Self {
		let line = line.trim();

		if line.is_empty() {
			return Self::Empty;
		}

		let Some(rest) = line.strip_prefix(':') else {
			return Self::Search(line.to_string());
		};
		let mut parts = rest.split_whitespace();

		match parts.next() {
			Some("q") | Some("quit") => Self::Quit,
			Some("clear") => Self::Clear,
			Some("more") => Self::More,
			Some("explain") => match parts.next().and_then(|raw| raw.parse().ok()) {
				Some(index) if parts.next().is_none() => Self::Explain(index),
				_ => Self::Unknown(line.to_string()),
			},
			Some("next") => Self::page(parts, PageDirection::Forward, line),
			Some("prev") => Self::page(parts, PageDirection::Backward, line),
			_ => Self::Unknown(line.to_string()),
		}
	}

	fn page<'a>(
		parts: impl Iterator<Item = &'a str>,
		direction: PageDirection,
		line: &str,
	) -> Self {
		let source = parts.collect::<Vec<_>>().join(" ");

		if source.is_empty() {
			return Self::Unknown(line.to_string());
		}

		Self::Page { source, direction }
	}
}
