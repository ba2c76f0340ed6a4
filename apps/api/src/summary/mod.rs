// Technical summary: keyword filtering of extracted document text.
// Pure and synchronous. Nothing here touches the network or the filesystem.

pub mod filter;
pub mod handlers;
pub mod keywords;

pub use filter::{extract_technical_summary, TechnicalSummary};
