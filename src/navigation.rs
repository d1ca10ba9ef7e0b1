//! Page-window arithmetic for navigation strips
//!
//! A [`Navigation`] manages nothing but page numbers: given a total page
//! count, a window width and a current page, it answers which pages belong
//! in the clickable strip around the current page and where the jump
//! targets land.
//!
//! In a typical strip
//!
//! ```text
//! <<< << 5 6 [7] 8 9 >> >>>
//! ```
//!
//! `<<<` is the [`leading`](Navigation::leading) page (usually 1), `<<` the
//! [`backward`](Navigation::backward) jump, `5` the
//! [`first`](Navigation::first) visible page, `[7]` the
//! [`current`](Navigation::current) page, `9` the
//! [`last`](Navigation::last) visible page, `>>` the
//! [`forward`](Navigation::forward) jump and `>>>` the
//! [`trailing`](Navigation::trailing) page (usually the total page count).
//!
//! For record-offset management on top of this, use
//! [`Pager`](crate::pager::Pager).

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Page-number window around a current page
///
/// The window keeps its full width whenever the total page count allows it,
/// sliding against both ends instead of shrinking, so a rendered strip does
/// not jitter in size near the boundaries.
///
/// # Examples
///
/// ```
/// use listnav::Navigation;
///
/// let nav = Navigation::new(20, 5).with_current(8)?;
///
/// assert_eq!(nav.first(), Some(6));
/// assert_eq!(nav.last(), Some(10));
/// assert!(nav.has_leading());
/// assert_eq!(nav.backward(), Some(3));
/// assert_eq!(nav.forward(), Some(13));
///
/// let strip: Vec<usize> = nav.pages().collect();
/// assert_eq!(strip, vec![6, 7, 8, 9, 10]);
/// # Ok::<(), listnav::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
	total_pages: usize,
	window: usize,
	current: usize,
}

impl Navigation {
	/// Creates a navigation over `total_pages` pages with a visible window
	/// of `window` pages
	///
	/// A `window` of 0 means unbounded: every page is visible. The current
	/// page starts at 1; use [`with_current`](Self::with_current) or
	/// [`set_current`](Self::set_current) to move it.
	pub fn new(total_pages: usize, window: usize) -> Self {
		Self {
			total_pages,
			window,
			current: 1,
		}
	}

	/// Consuming form of [`set_current`](Self::set_current) for construction
	/// chains
	pub fn with_current(mut self, page: usize) -> Result<Self> {
		self.set_current(page)?;
		Ok(self)
	}

	// Window width never constrains the current page, so swapping it is
	// always safe.
	pub(crate) fn set_window(&mut self, window: usize) {
		self.window = window;
	}

	/// Total pages for the navigation
	pub fn total_pages(&self) -> usize {
		self.total_pages
	}

	/// Count of pages in the visible window (0 for unbounded)
	pub fn window(&self) -> usize {
		self.window
	}

	/// The current page number (1-based)
	pub fn current(&self) -> usize {
		self.current
	}

	/// Returns whether `page` is the current page
	pub fn is_current(&self, page: usize) -> bool {
		self.current == page
	}

	/// Moves the current page
	///
	/// # Errors
	///
	/// [`Error::InvalidWindow`] when the navigation has no pages, and
	/// [`Error::InvalidPage`] when `page` falls outside
	/// `[leading, trailing]`.
	pub fn set_current(&mut self, page: usize) -> Result<()> {
		let (leading, trailing) = match (self.leading(), self.trailing()) {
			(Some(leading), Some(trailing)) => (leading, trailing),
			_ => return Err(Error::InvalidWindow),
		};

		if page < leading || page > trailing {
			return Err(Error::InvalidPage { page });
		}

		self.current = page;
		Ok(())
	}

	/// Top page number, `Some(1)` whenever any page exists
	pub fn leading(&self) -> Option<usize> {
		(self.total_pages > 0).then_some(1)
	}

	/// Bottom page number, the total page count whenever any page exists
	pub fn trailing(&self) -> Option<usize> {
		(self.total_pages > 0).then_some(self.total_pages)
	}

	/// First page number of the visible window
	///
	/// The window is centered on the current page, then clamped so it
	/// neither starts before [`leading`](Self::leading) nor runs past
	/// [`trailing`](Self::trailing) while the total page count still allows
	/// a full-width window.
	pub fn first(&self) -> Option<usize> {
		let leading = self.leading()?;

		if self.window == 0 {
			return Some(leading);
		}

		let centered = self
			.current
			.saturating_sub((self.window - 1) / 2)
			.max(leading);
		let end_bound = (self.total_pages + 1)
			.saturating_sub(self.window)
			.max(leading);

		Some(centered.min(end_bound))
	}

	/// Last page number of the visible window
	pub fn last(&self) -> Option<usize> {
		let trailing = self.trailing()?;

		if self.window == 0 {
			return Some(trailing);
		}

		Some((self.first()? + self.window - 1).min(trailing))
	}

	/// Returns whether pages are hidden before the visible window
	pub fn has_leading(&self) -> bool {
		self.first().is_some_and(|first| first > 1)
	}

	/// Returns whether pages are hidden after the visible window
	pub fn has_trailing(&self) -> bool {
		match (self.last(), self.trailing()) {
			(Some(last), Some(trailing)) => last < trailing,
			_ => false,
		}
	}

	/// Previous page number, when one exists
	pub fn prev(&self) -> Option<usize> {
		(self.current > 1).then(|| self.current - 1)
	}

	/// Returns whether a previous page exists
	pub fn has_prev(&self) -> bool {
		self.prev().is_some()
	}

	/// Next page number, when one exists
	pub fn next(&self) -> Option<usize> {
		(self.current < self.total_pages).then(|| self.current + 1)
	}

	/// Returns whether a next page exists
	pub fn has_next(&self) -> bool {
		self.next().is_some()
	}

	/// Landing page of a full-window jump forwards
	///
	/// The jump is exactly one window width; when `current + window` would
	/// overshoot [`trailing`](Self::trailing) there is no forward jump at
	/// all, even if a shorter jump could have reached the final page.
	pub fn forward(&self) -> Option<usize> {
		let trailing = self.trailing()?;

		if self.current == 0 || self.window == 0 {
			return None;
		}

		let target = self.current + self.window;
		(target <= trailing).then_some(target)
	}

	/// Returns whether a forward jump exists
	pub fn has_forward(&self) -> bool {
		self.forward().is_some()
	}

	/// Landing page of a full-window jump backwards
	///
	/// Mirror image of [`forward`](Self::forward): exactly one window width
	/// back, or nothing.
	pub fn backward(&self) -> Option<usize> {
		let leading = self.leading()?;

		if self.current == 0 || self.window == 0 {
			return None;
		}

		let target = self.current.checked_sub(self.window)?;
		(target >= leading).then_some(target)
	}

	/// Returns whether a backward jump exists
	pub fn has_backward(&self) -> bool {
		self.backward().is_some()
	}

	/// Page numbers of the visible window, in order
	///
	/// The range is empty when the navigation has no pages. The iterator is
	/// cheap and restartable; call again for another pass.
	pub fn pages(&self) -> RangeInclusive<usize> {
		match (self.first(), self.last()) {
			(Some(first), Some(last)) => first..=last,
			_ => RangeInclusive::new(1, 0),
		}
	}

	/// Page descriptors of the visible window, in order
	///
	/// # Examples
	///
	/// ```
	/// use listnav::Navigation;
	///
	/// let nav = Navigation::new(20, 5).with_current(4)?;
	///
	/// let strip: Vec<String> = nav
	/// 	.iter()
	/// 	.map(|page| {
	/// 		if page.is_current() {
	/// 			format!("[{}]", page.number())
	/// 		} else {
	/// 			page.number().to_string()
	/// 		}
	/// 	})
	/// 	.collect();
	///
	/// assert_eq!(strip.join(" "), "2 3 [4] 5 6");
	/// # Ok::<(), listnav::Error>(())
	/// ```
	pub fn iter(&self) -> impl Iterator<Item = NavigationPage> + '_ {
		self.pages().map(|number| NavigationPage {
			number,
			current: self.is_current(number),
		})
	}
}

/// One page of a [`Navigation`] window
///
/// A plain value; the current-page flag is captured when the descriptor is
/// yielded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationPage {
	number: usize,
	current: bool,
}

impl NavigationPage {
	/// The page number
	pub fn number(&self) -> usize {
		self.number
	}

	/// Returns whether this is the navigation's current page
	pub fn is_current(&self) -> bool {
		self.current
	}
}
