//! Record-offset management on top of a page navigation
//!
//! A [`Pager`] extends [`Navigation`] with a total record count and a page
//! size, and converts between page numbers and record offsets or 1-based
//! record-index ranges. It never touches records itself; callers feed the
//! resulting offsets into their own `LIMIT page_size OFFSET offset` style
//! fetch and the resulting page numbers into navigation links.

use crate::error::{Error, Result};
use crate::navigation::{Navigation, NavigationPage};

/// Page navigation with record-offset arithmetic
///
/// The total page count is derived from the record count and page size, and
/// the invariant `offset == page_size * (current - 1)` is maintained in both
/// directions: setting either of `current`/`offset` recomputes the other.
///
/// # Examples
///
/// ```
/// use listnav::Pager;
///
/// let pager = Pager::new(123, 10)?.with_window(5).with_offset(30)?;
///
/// assert_eq!(pager.total_pages(), 13);
/// assert_eq!(pager.current(), 4);
/// assert_eq!(pager.first(), Some(2));
/// assert_eq!(pager.last(), Some(6));
/// assert_eq!(pager.top_entry_index_for_current()?, 31);
/// assert_eq!(pager.bottom_entry_index_for_current()?, 40);
///
/// // Parameterize the data fetch with the pager's numbers:
/// // SELECT ... LIMIT pager.page_size() OFFSET pager.offset()
/// assert_eq!(pager.page_size(), 10);
/// assert_eq!(pager.offset(), 30);
/// # Ok::<(), listnav::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
	nav: Navigation,
	total_entries: usize,
	page_size: usize,
	offset: usize,
}

impl Pager {
	/// Creates a pager over `total_entries` records with `page_size` records
	/// per page
	///
	/// The navigation window starts unbounded; see
	/// [`with_window`](Self::with_window). The current page starts at 1
	/// (offset 0), which also covers the empty pager.
	///
	/// # Errors
	///
	/// [`Error::InvalidPageSize`] when `page_size` is zero.
	pub fn new(total_entries: usize, page_size: usize) -> Result<Self> {
		if page_size == 0 {
			return Err(Error::InvalidPageSize);
		}

		let total_pages = total_entries.div_ceil(page_size);
		Ok(Self {
			nav: Navigation::new(total_pages, 0),
			total_entries,
			page_size,
			offset: 0,
		})
	}

	/// Sets the visible window width of the underlying navigation
	/// (0 for unbounded)
	pub fn with_window(mut self, window: usize) -> Self {
		self.nav.set_window(window);
		self
	}

	/// Consuming form of [`set_current`](Self::set_current) for construction
	/// chains
	pub fn with_current(mut self, page: usize) -> Result<Self> {
		self.set_current(page)?;
		Ok(self)
	}

	/// Consuming form of [`set_offset`](Self::set_offset) for construction
	/// chains
	pub fn with_offset(mut self, offset: usize) -> Result<Self> {
		self.set_offset(offset)?;
		Ok(self)
	}

	/// Total record entries for the pager
	pub fn total_entries(&self) -> usize {
		self.total_entries
	}

	/// Number of record entries per page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Offset of the first record on the current page (0-based)
	pub fn offset(&self) -> usize {
		self.offset
	}

	/// The underlying page navigation
	pub fn navigation(&self) -> &Navigation {
		&self.nav
	}

	/// Moves the current page and recomputes the record offset
	///
	/// # Errors
	///
	/// Same bounds check as [`Navigation::set_current`].
	pub fn set_current(&mut self, page: usize) -> Result<()> {
		self.nav.set_current(page)?;
		self.offset = self.page_size * (page - 1);
		Ok(())
	}

	/// Moves to the page owning the record at `offset`
	///
	/// The offset is truncated to its page boundary, so an unaligned offset
	/// lands on the page containing that record.
	///
	/// # Errors
	///
	/// An offset mapping to a page outside `[1, total_pages]` is rejected
	/// through the current-page bounds check, never silently clamped.
	pub fn set_offset(&mut self, offset: usize) -> Result<()> {
		self.set_current(1 + offset / self.page_size)
	}

	/// Offset of the first record on `page` (0-based)
	///
	/// # Errors
	///
	/// Offset lookups are only meaningful for pages the navigation is
	/// currently showing: [`Error::InvalidPage`] when `page` falls outside
	/// the visible window `[first, last]`, [`Error::InvalidWindow`] when no
	/// window is defined.
	pub fn offset_for_page(&self, page: usize) -> Result<usize> {
		let (first, last) = self.visible_window()?;

		if page < first || page > last {
			return Err(Error::InvalidPage { page });
		}

		Ok(self.page_size * (page - 1))
	}

	/// Number of record entries on `page`
	///
	/// Every page holds `page_size` entries except the final page of the
	/// pager, which holds the remainder (always in `[1, page_size]`).
	///
	/// # Errors
	///
	/// Same visible-window restriction as
	/// [`offset_for_page`](Self::offset_for_page).
	pub fn entries_for_page(&self, page: usize) -> Result<usize> {
		let (first, last) = self.visible_window()?;

		if page < first || page > last {
			return Err(Error::InvalidPage { page });
		}

		if page == self.nav.total_pages() {
			Ok((self.total_entries - 1) % self.page_size + 1)
		} else {
			Ok(self.page_size)
		}
	}

	/// 1-based index of the first record on `page`
	///
	/// Returns the sentinel `0` (not an error) when the pager holds no
	/// entries or `page` lies outside `[1, total_entries]`; this sentinel
	/// convention differs from the `Option` convention of the page queries
	/// and is kept for compatibility with existing consumers.
	///
	/// # Errors
	///
	/// The visible-window restriction of
	/// [`offset_for_page`](Self::offset_for_page) still applies to pages
	/// that pass the sentinel check.
	pub fn top_entry_index_for_page(&self, page: usize) -> Result<usize> {
		if self.total_entries == 0 || page == 0 || page > self.total_entries {
			return Ok(0);
		}

		Ok(self.offset_for_page(page)? + 1)
	}

	/// 1-based index of the last record on `page`
	///
	/// Same sentinel convention as
	/// [`top_entry_index_for_page`](Self::top_entry_index_for_page).
	///
	/// # Errors
	///
	/// Same visible-window restriction as
	/// [`top_entry_index_for_page`](Self::top_entry_index_for_page).
	pub fn bottom_entry_index_for_page(&self, page: usize) -> Result<usize> {
		if self.total_entries == 0 || page == 0 || page > self.total_entries {
			return Ok(0);
		}

		Ok(self.offset_for_page(page)? + self.entries_for_page(page)?)
	}

	/// [`offset_for_page`](Self::offset_for_page) for the current page
	pub fn offset_for_current(&self) -> Result<usize> {
		self.offset_for_page(self.nav.current())
	}

	/// [`entries_for_page`](Self::entries_for_page) for the current page
	pub fn entries_for_current(&self) -> Result<usize> {
		self.entries_for_page(self.nav.current())
	}

	/// [`top_entry_index_for_page`](Self::top_entry_index_for_page) for the
	/// current page
	pub fn top_entry_index_for_current(&self) -> Result<usize> {
		self.top_entry_index_for_page(self.nav.current())
	}

	/// [`bottom_entry_index_for_page`](Self::bottom_entry_index_for_page)
	/// for the current page
	pub fn bottom_entry_index_for_current(&self) -> Result<usize> {
		self.bottom_entry_index_for_page(self.nav.current())
	}

	/// [`offset_for_page`](Self::offset_for_page) for the first visible page
	pub fn offset_for_first(&self) -> Result<usize> {
		self.offset_for_page(self.first_or_err()?)
	}

	/// [`entries_for_page`](Self::entries_for_page) for the first visible
	/// page
	pub fn entries_for_first(&self) -> Result<usize> {
		self.entries_for_page(self.first_or_err()?)
	}

	/// [`top_entry_index_for_page`](Self::top_entry_index_for_page) for the
	/// first visible page
	pub fn top_entry_index_for_first(&self) -> Result<usize> {
		self.top_entry_index_for_page(self.first_or_err()?)
	}

	/// [`bottom_entry_index_for_page`](Self::bottom_entry_index_for_page)
	/// for the first visible page
	pub fn bottom_entry_index_for_first(&self) -> Result<usize> {
		self.bottom_entry_index_for_page(self.first_or_err()?)
	}

	/// [`offset_for_page`](Self::offset_for_page) for the last visible page
	pub fn offset_for_last(&self) -> Result<usize> {
		self.offset_for_page(self.last_or_err()?)
	}

	/// [`entries_for_page`](Self::entries_for_page) for the last visible
	/// page
	pub fn entries_for_last(&self) -> Result<usize> {
		self.entries_for_page(self.last_or_err()?)
	}

	/// [`top_entry_index_for_page`](Self::top_entry_index_for_page) for the
	/// last visible page
	pub fn top_entry_index_for_last(&self) -> Result<usize> {
		self.top_entry_index_for_page(self.last_or_err()?)
	}

	/// [`bottom_entry_index_for_page`](Self::bottom_entry_index_for_page)
	/// for the last visible page
	pub fn bottom_entry_index_for_last(&self) -> Result<usize> {
		self.bottom_entry_index_for_page(self.last_or_err()?)
	}

	/// `(page, offset)` pairs over the visible window, in order
	///
	/// # Examples
	///
	/// ```
	/// use listnav::Pager;
	///
	/// let pager = Pager::new(123, 10)?.with_window(5).with_offset(30)?;
	/// let pairs: Vec<(usize, usize)> = pager.offsets().collect();
	/// assert_eq!(pairs, vec![(2, 10), (3, 20), (4, 30), (5, 40), (6, 50)]);
	/// # Ok::<(), listnav::Error>(())
	/// ```
	pub fn offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		self.nav
			.pages()
			.map(|page| (page, self.page_size * (page - 1)))
	}

	/// Page descriptors over the visible window, in order
	///
	/// Each [`PagerPage`] holds a reference back to this pager and
	/// recomputes its offset and current-page flag on every call, so later
	/// mutation of the pager is reflected by descriptors that are still
	/// alive.
	pub fn iter(&self) -> impl Iterator<Item = PagerPage<'_>> + '_ {
		self.nav.pages().map(|page| PagerPage { pager: self, page })
	}

	fn visible_window(&self) -> Result<(usize, usize)> {
		match (self.nav.first(), self.nav.last()) {
			(Some(first), Some(last)) => Ok((first, last)),
			_ => Err(Error::InvalidWindow),
		}
	}

	fn first_or_err(&self) -> Result<usize> {
		self.nav.first().ok_or(Error::InvalidWindow)
	}

	fn last_or_err(&self) -> Result<usize> {
		self.nav.last().ok_or(Error::InvalidWindow)
	}
}

// Navigation delegation: a pager answers every page-number question its
// navigation does.
impl Pager {
	/// Total pages, derived as `ceil(total_entries / page_size)`
	pub fn total_pages(&self) -> usize {
		self.nav.total_pages()
	}

	/// See [`Navigation::window`]
	pub fn window(&self) -> usize {
		self.nav.window()
	}

	/// See [`Navigation::current`]
	pub fn current(&self) -> usize {
		self.nav.current()
	}

	/// See [`Navigation::is_current`]
	pub fn is_current(&self, page: usize) -> bool {
		self.nav.is_current(page)
	}

	/// See [`Navigation::leading`]
	pub fn leading(&self) -> Option<usize> {
		self.nav.leading()
	}

	/// See [`Navigation::trailing`]
	pub fn trailing(&self) -> Option<usize> {
		self.nav.trailing()
	}

	/// See [`Navigation::first`]
	pub fn first(&self) -> Option<usize> {
		self.nav.first()
	}

	/// See [`Navigation::last`]
	pub fn last(&self) -> Option<usize> {
		self.nav.last()
	}

	/// See [`Navigation::has_leading`]
	pub fn has_leading(&self) -> bool {
		self.nav.has_leading()
	}

	/// See [`Navigation::has_trailing`]
	pub fn has_trailing(&self) -> bool {
		self.nav.has_trailing()
	}

	/// See [`Navigation::prev`]
	pub fn prev(&self) -> Option<usize> {
		self.nav.prev()
	}

	/// See [`Navigation::has_prev`]
	pub fn has_prev(&self) -> bool {
		self.nav.has_prev()
	}

	/// See [`Navigation::next`]
	pub fn next(&self) -> Option<usize> {
		self.nav.next()
	}

	/// See [`Navigation::has_next`]
	pub fn has_next(&self) -> bool {
		self.nav.has_next()
	}

	/// See [`Navigation::forward`]
	pub fn forward(&self) -> Option<usize> {
		self.nav.forward()
	}

	/// See [`Navigation::has_forward`]
	pub fn has_forward(&self) -> bool {
		self.nav.has_forward()
	}

	/// See [`Navigation::backward`]
	pub fn backward(&self) -> Option<usize> {
		self.nav.backward()
	}

	/// See [`Navigation::has_backward`]
	pub fn has_backward(&self) -> bool {
		self.nav.has_backward()
	}

	/// See [`Navigation::pages`]
	pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
		self.nav.pages()
	}

	/// See [`Navigation::iter`]; descriptors carry the captured
	/// current-page flag only
	pub fn page_numbers(&self) -> impl Iterator<Item = NavigationPage> + '_ {
		self.nav.iter()
	}
}

/// One page of a [`Pager`] window
///
/// Unlike [`NavigationPage`], this descriptor does not copy any state: it
/// keeps a reference to its pager and computes everything through it.
#[derive(Debug, Clone, Copy)]
pub struct PagerPage<'a> {
	pager: &'a Pager,
	page: usize,
}

impl PagerPage<'_> {
	/// The page number
	pub fn number(&self) -> usize {
		self.page
	}

	/// Record offset for this page, via
	/// [`Pager::offset_for_page`]
	pub fn offset(&self) -> Result<usize> {
		self.pager.offset_for_page(self.page)
	}

	/// Returns whether this is the pager's current page
	pub fn is_current(&self) -> bool {
		self.pager.is_current(self.page)
	}

	/// The page size of the owning pager
	pub fn page_size(&self) -> usize {
		self.pager.page_size()
	}
}
