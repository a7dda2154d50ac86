//! # roster-pager
//!
//! Pagination and name search over a roster of rendered entries.
//!
//! A [`core::Pager`] borrows a [`core::Collection`], renders one page of it
//! into a [`display::Surface`] together with page links and a search box,
//! and switches between the full roster and the result of the latest search.
//!
//! ```rust
//! use roster_pager::core::{Collection, Entry, Pager, PagerOptions, SearchOutcome};
//! use roster_pager::display::{MemorySurface, Region};
//!
//! # fn main() -> roster_pager::Result<()> {
//! let collection: Collection = ["Aaron Ng", "Bea Ortiz", "Zoe Yu"]
//!     .iter()
//!     .map(|name| Entry::new(format!("<h3>{}</h3>", name)))
//!     .collect();
//!
//! let mut pager = Pager::new(&collection, PagerOptions::default().with_page_size(2), MemorySurface::new())?;
//! pager.show_page(2);
//! assert!(pager.surface().html(Region::List).contains("Zoe Yu"));
//!
//! assert_eq!(pager.search_students("B"), SearchOutcome::Matched { count: 1 });
//! assert!(pager.is_search_active());
//! # Ok(())
//! # }
//! ```

pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line host
pub mod core; // Pager state machine
pub mod storage; // Configuration and collection files

/// Support modules (used across layers)
pub mod display; // Markup, render targets, terminal output
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
