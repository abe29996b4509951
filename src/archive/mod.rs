pub mod build;
pub mod index;

pub use build::{build_archive, ArchiveReport};
pub use index::{
    filter_matches, sort_matches, summarize_document, summarize_documents, ArchiveListing,
    MatchFilter, MatchSummary, SkippedEntry,
};
