//! Search
//!
//! Engine, cancellation and dialog state for the global search dialog.

pub mod cancel;
pub mod dialog;
pub mod engine;

pub use cancel::{AbortHandle, Slot, Supersede, Ticket};
pub use dialog::{DialogState, InputOutcome, KeyOutcome, NavKey, Phase};
pub use engine::{highlight, recent_items, search, ResultKind, SearchQuery, SearchResult};
