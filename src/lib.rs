//! Page-window, record-offset and sort-order state for paginated,
//! sortable listings
//!
//! Three building blocks, each usable on its own:
//!
//! - [`Navigation`] tracks a current page within a page count and computes
//!   the window of page links a pagination bar should show
//! - [`Pager`] adds record arithmetic on top of a [`Navigation`]: it keeps
//!   a record offset aligned with the current page and answers per-page
//!   offset and entry-count questions
//! - [`Sorter`] tracks an ordered list of sort criteria and encodes it
//!   compactly for column header links
//!
//! None of them touch a data source. They hold the state a listing view
//! needs, and the caller turns that state into queries and markup.
//!
//! # Examples
//!
//! ```
//! use listnav::Pager;
//!
//! let pager = Pager::new(123, 10)?
//! 	.with_window(5)
//! 	.with_current(7)?;
//!
//! assert_eq!(pager.total_pages(), 13);
//! assert_eq!(pager.offset(), 60);
//! assert_eq!(pager.pages().collect::<Vec<_>>(), vec![5, 6, 7, 8, 9]);
//! # Ok::<(), listnav::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod error;
mod navigation;
mod pager;
mod sorter;

pub use error::{Error, Result};
pub use navigation::{Navigation, NavigationPage};
pub use pager::{Pager, PagerPage};
pub use sorter::{SortDirection, SortKey, Sorter};
