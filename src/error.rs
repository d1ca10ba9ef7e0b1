//! Error types for listnav

use thiserror::Error;

/// Result type for listnav operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by navigation, pager and sorter operations
///
/// Every operation in this crate is a pure computation over already-parsed
/// integers and strings, so all errors are synchronous caller errors; there
/// is no retry or partial-failure concept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// A page number outside the acceptable range was supplied
	#[error("invalid page number: {page}")]
	InvalidPage {
		/// The offending page number
		page: usize,
	},

	/// The navigation has no pages, so no visible window is defined
	#[error("navigation window is undefined")]
	InvalidWindow,

	/// A pager was constructed with a page size of zero
	#[error("page size must be greater than zero")]
	InvalidPageSize,
}
