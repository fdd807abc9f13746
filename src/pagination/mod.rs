//! Paginated fetch engine
//!
//! The BlockChain DB pages collection responses either on explicit height
//! chunks or on an opaque "more" signal (`page.total_pages > 1`). The
//! cursors here compute successive page queries; the client issues one
//! request per query, strictly in sequence, so that each page's parameters
//! can depend on the previous page's outcome.

mod cursors;
mod types;

pub use cursors::{FixedStepCursor, SignalCursor};
pub use types::{HeightRange, PageOutcome};

#[cfg(test)]
mod tests;
