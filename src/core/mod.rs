//! Core layer: the roster model and the pager state machine.

pub mod entry;
pub mod matcher;
pub mod pager;
pub mod state;

pub use entry::{Collection, Entry, StudentName};
pub use matcher::{QueryMatcher, SearchMode};
pub use pager::{Pager, PagerOptions, SearchOutcome};
pub use state::{PagerState, SearchResult, View};
