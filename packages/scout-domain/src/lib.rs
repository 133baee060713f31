pub mod citation;
pub mod document;
pub mod format;
pub mod group;

pub use citation::{CitationSegment, display_label, parse_generation};
pub use document::{
	Chunk, Document, DocumentMetadata, Explanation, RetrievedDocument, SearchResult,
};
pub use group::{SourceGroup, group_by_source};
