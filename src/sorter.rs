//! Multi-column sort-order state for sortable tables
//!
//! A [`Sorter`] maintains an ordered list of `(field, direction)` criteria.
//! It does not sort records; it tracks which order a listing should be in
//! after a user clicks a column header, and encodes that order compactly for
//! a URL. Callers feed [`Sorter::order`] into their own `ORDER BY` and embed
//! [`Sorter::link_for`] output in each column header's href.
//!
//! Order specs are comma-separated field tokens with an optional direction
//! suffix: `"title,created_at-"` sorts by title ascending, then creation
//! date descending. A `+` suffix is accepted as an explicit ascending
//! marker and stripped.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sorting direction of a single criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// The opposite direction
	pub fn inverted(self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	fn suffix(self) -> &'static str {
		match self {
			Self::Ascending => "",
			Self::Descending => "-",
		}
	}
}

/// One sorting criterion: a field name plus a direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
	/// Field name the criterion applies to
	pub field: String,
	/// Direction the field is sorted in
	pub direction: SortDirection,
}

impl SortKey {
	/// Creates an ascending criterion
	pub fn ascending(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			direction: SortDirection::Ascending,
		}
	}

	/// Creates a descending criterion
	pub fn descending(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			direction: SortDirection::Descending,
		}
	}

	fn encode(&self) -> String {
		format!("{}{}", self.field, self.direction.suffix())
	}
}

/// Ordered multi-column sort state
///
/// Holds an immutable default order (the server-side template) and the
/// current order derived from it by applying order specs. Mutation never
/// introduces or loses fields: explicit tokens move their field to the
/// front, everything else keeps its previous relative order, and tokens
/// naming unknown fields are dropped.
///
/// # Examples
///
/// ```
/// use listnav::{SortKey, Sorter};
///
/// let mut sorter = Sorter::new(vec![
/// 	SortKey::ascending("foo"),
/// 	SortKey::descending("bar"),
/// 	SortKey::ascending("baz"),
/// ]);
///
/// // A column header link carries the order it would switch to.
/// let href = sorter.link_for("bar");
/// assert_eq!(href, "bar-");
///
/// // Applying that order on the next request brings bar to the front.
/// sorter.sort(&href);
/// assert_eq!(
/// 	sorter.order(),
/// 	&[
/// 		SortKey::descending("bar"),
/// 		SortKey::ascending("foo"),
/// 		SortKey::ascending("baz"),
/// 	]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorter {
	default_order: Vec<SortKey>,
	current_order: Vec<SortKey>,
	single: bool,
}

impl Sorter {
	/// Creates a sorter whose current order starts at `default_order`
	///
	/// Field names in the default order are expected to be unique.
	pub fn new(default_order: Vec<SortKey>) -> Self {
		Self {
			current_order: default_order.clone(),
			default_order,
			single: false,
		}
	}

	/// Switches single-criterion mode on or off
	///
	/// In single mode only the first explicit token of an order spec is
	/// honored and link encodings carry a single criterion.
	pub fn single(mut self, single: bool) -> Self {
		self.single = single;
		self
	}

	/// Returns whether single-criterion mode is active
	pub fn is_single(&self) -> bool {
		self.single
	}

	/// The default order template
	pub fn default_order(&self) -> &[SortKey] {
		&self.default_order
	}

	/// The current order, ready to parameterize an `ORDER BY`
	pub fn order(&self) -> &[SortKey] {
		&self.current_order
	}

	/// Resets the current order to the default
	pub fn reset(&mut self) {
		self.current_order = self.default_order.clone();
	}

	/// Current direction of `field`, or `None` when absent
	pub fn order_of(&self, field: &str) -> Option<SortDirection> {
		self.current_order
			.iter()
			.find(|key| key.field == field)
			.map(|key| key.direction)
	}

	/// Returns whether `field` is the topmost criterion
	pub fn is_top(&self, field: &str) -> bool {
		self.current_order
			.first()
			.is_some_and(|key| key.field == field)
	}

	/// Returns whether `field` is the topmost criterion and ascending
	pub fn is_top_ascending(&self, field: &str) -> bool {
		self.current_order
			.first()
			.is_some_and(|key| key.field == field && key.direction == SortDirection::Ascending)
	}

	/// Returns whether `field` is the topmost criterion and descending
	pub fn is_top_descending(&self, field: &str) -> bool {
		self.current_order
			.first()
			.is_some_and(|key| key.field == field && key.direction == SortDirection::Descending)
	}

	/// Returns whether `field` currently sorts ascending
	pub fn is_ascending(&self, field: &str) -> bool {
		self.order_of(field) == Some(SortDirection::Ascending)
	}

	/// Returns whether `field` currently sorts descending
	pub fn is_descending(&self, field: &str) -> bool {
		self.order_of(field) == Some(SortDirection::Descending)
	}

	/// Applies an order spec to the current order
	///
	/// Explicit tokens move to the front in spec order with their given
	/// direction; the remaining fields follow in their previous relative
	/// order with their previous direction. Tokens naming a field absent
	/// from the previous order are dropped entirely. In single mode only
	/// the first token is honored.
	pub fn sort(&mut self, spec: &str) {
		let mut explicit: Vec<SortKey> = Vec::new();
		let mut pending: HashSet<String> = HashSet::new();

		for token in spec.split(',') {
			let token = token.trim();
			if token.is_empty() {
				continue;
			}

			let key = match token.strip_suffix('-') {
				Some(field) => SortKey::descending(field),
				None => SortKey::ascending(token.strip_suffix('+').unwrap_or(token)),
			};
			pending.insert(key.field.clone());
			explicit.push(key);

			if self.single {
				break;
			}
		}

		let mut merged = explicit;
		for key in &self.current_order {
			if pending.remove(key.field.as_str()) {
				// superseded by the explicit entry already queued
				continue;
			}
			merged.push(key.clone());
		}

		if !pending.is_empty() {
			debug!(fields = ?pending, "dropping unknown sort fields");
			merged.retain(|key| !pending.contains(key.field.as_str()));
		}

		self.current_order = merged;
	}

	/// Returns an independent copy with the order spec applied
	///
	/// The receiver, including its default-order template, is untouched.
	pub fn sorted(&self, spec: &str) -> Self {
		let mut sorter = self.clone();
		sorter.sort(spec);
		sorter
	}

	/// Brings `field` to the front of the current order
	///
	/// An explicit `-`/`+` suffix is used verbatim. Without a suffix the
	/// field keeps its current direction, unless it is already the topmost
	/// criterion, in which case the direction is inverted (the usual
	/// click-again-to-flip column header behavior). An unknown bare field
	/// is a silent no-op.
	pub fn sort_by(&mut self, field: &str) {
		if field.ends_with('-') || field.ends_with('+') {
			self.sort(field);
			return;
		}

		let Some(current) = self.order_of(field) else {
			debug!(field, "ignoring sort request for unknown field");
			return;
		};

		let direction = if self.is_top(field) {
			current.inverted()
		} else {
			current
		};

		self.sort(&format!("{field}{}", direction.suffix()));
	}

	/// Returns an independent copy with `field` brought to the front
	pub fn sorted_by(&self, field: &str) -> Self {
		let mut sorter = self.clone();
		sorter.sort_by(field);
		sorter
	}

	/// Compact string encoding of the current order, in the sorter's own
	/// single/multi mode
	///
	/// In multi mode this is the minimal spec that, re-applied against the
	/// default order, reproduces the current order; a listing still in its
	/// default order encodes as the empty string. In single mode it is just
	/// the topmost criterion.
	pub fn current_link(&self) -> String {
		self.current_link_as(self.single)
	}

	/// [`current_link`](Self::current_link) with an explicit mode override
	pub fn current_link_as(&self, single: bool) -> String {
		let keys: Vec<SortKey> = if single {
			self.current_order.first().cloned().into_iter().collect()
		} else {
			compact(&self.current_order, &self.default_order)
		};

		keys.iter()
			.map(SortKey::encode)
			.collect::<Vec<_>>()
			.join(",")
	}

	/// Order spec a column header link for `field` should carry
	///
	/// This is the encoding [`sort_by`](Self::sort_by) followed by
	/// [`current_link`](Self::current_link) would produce, computed without
	/// mutating the sorter.
	pub fn link_for(&self, field: &str) -> String {
		self.link_for_as(field, self.single)
	}

	/// [`link_for`](Self::link_for) with an explicit mode override
	pub fn link_for_as(&self, field: &str, single: bool) -> String {
		self.sorted_by(field).current_link_as(single)
	}
}

/// Reduces `target` to the shortest prefix spec that reproduces it from
/// `default`.
///
/// Walks both orders in lockstep, buffering streaks of rows that still
/// match the default; a streak only has to be emitted once a later row
/// deviates. Fields emitted out of order are skipped when their default
/// position comes around, and default rows never deviated from are dropped
/// from the tail.
fn compact(target: &[SortKey], default: &[SortKey]) -> Vec<SortKey> {
	if target == default {
		return Vec::new();
	}

	let mut target = target.iter();
	let mut default: std::collections::VecDeque<&SortKey> = default.iter().collect();
	let mut result: Vec<SortKey> = Vec::new();
	let mut stock: Vec<SortKey> = Vec::new();
	let mut stored: HashSet<&str> = HashSet::new();

	for row in &mut target {
		// skip default rows already emitted out of order
		while let Some(head) = default.front() {
			if stored.remove(head.field.as_str()) {
				default.pop_front();
			} else {
				break;
			}
		}

		if default.front().is_some_and(|head| *head == row) {
			// tentative match; emitted only if a later row deviates
			stock.push(row.clone());
			default.pop_front();
			continue;
		}

		result.append(&mut stock);
		result.push(row.clone());
		stored.insert(row.field.as_str());
	}

	// a trailing matched streak needs no emission; the default tail keeps
	// only rows that were never emitted explicitly
	result.extend(
		default
			.into_iter()
			.filter(|row| !stored.contains(row.field.as_str()))
			.cloned(),
	);

	result
}
