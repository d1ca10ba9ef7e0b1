use listnav::{Navigation, Pager, SortKey, Sorter};
use proptest::prelude::*;

prop_compose! {
	fn navigation_position()
		(total_pages in 1usize..200, window in 0usize..20)
		(current in 1..=total_pages,
		 total_pages in Just(total_pages),
		 window in Just(window))
		-> (usize, usize, usize) {
		(total_pages, window, current)
	}
}

proptest! {
	#[test]
	fn window_always_contains_the_current_page(
		(total_pages, window, current) in navigation_position()
	) {
		let nav = Navigation::new(total_pages, window)
			.with_current(current)
			.expect("current is drawn from the page range");

		let first = nav.first().expect("pages exist");
		let last = nav.last().expect("pages exist");

		prop_assert!(first <= current);
		prop_assert!(current <= last);
		prop_assert!(first >= 1);
		prop_assert!(last <= total_pages);
	}

	#[test]
	fn window_width_is_exact_when_pages_allow(
		(total_pages, window, current) in navigation_position()
	) {
		prop_assume!(window > 0);

		let nav = Navigation::new(total_pages, window)
			.with_current(current)
			.expect("current is drawn from the page range");

		let first = nav.first().expect("pages exist");
		let last = nav.last().expect("pages exist");

		prop_assert_eq!(last - first + 1, window.min(total_pages));
	}

	#[test]
	fn window_jumps_always_land_a_window_width_away(
		(total_pages, window, current) in navigation_position()
	) {
		let nav = Navigation::new(total_pages, window)
			.with_current(current)
			.expect("current is drawn from the page range");

		if let Some(target) = nav.forward() {
			prop_assert_eq!(target, current + window);
			prop_assert!(target <= total_pages);
		}
		if let Some(target) = nav.backward() {
			prop_assert_eq!(target + window, current);
			prop_assert!(target >= 1);
		}
	}

	#[test]
	fn offset_stays_aligned_under_mixed_mutation(
		total_entries in 1usize..2000,
		page_size in 1usize..50,
		moves in prop::collection::vec((any::<bool>(), 0usize..2100), 0..20),
	) {
		let mut pager = Pager::new(total_entries, page_size)
			.expect("page size is non-zero");

		for (by_offset, value) in moves {
			// out-of-range moves are rejected and must leave state intact
			let _ = if by_offset {
				pager.set_offset(value)
			} else {
				pager.set_current(value)
			};

			prop_assert_eq!(
				pager.offset(),
				pager.page_size() * (pager.current() - 1)
			);
			prop_assert!(pager.current() >= 1);
			prop_assert!(pager.current() <= pager.total_pages());
		}
	}

	#[test]
	fn per_page_entry_counts_sum_to_the_total(
		total_entries in 1usize..2000,
		page_size in 1usize..50,
	) {
		// unbounded window, so every page is queryable
		let pager = Pager::new(total_entries, page_size)
			.expect("page size is non-zero");

		let mut sum = 0;
		for page in pager.pages() {
			let entries = pager.entries_for_page(page)
				.expect("page is inside the unbounded window");
			prop_assert!(entries >= 1);
			prop_assert!(entries <= page_size);
			sum += entries;
		}

		prop_assert_eq!(sum, total_entries);
	}

	#[test]
	fn entry_index_ranges_tile_the_records(
		total_entries in 1usize..2000,
		page_size in 1usize..50,
	) {
		let pager = Pager::new(total_entries, page_size)
			.expect("page size is non-zero");

		let mut expected_top = 1;
		for page in pager.pages() {
			let top = pager.top_entry_index_for_page(page).unwrap();
			let bottom = pager.bottom_entry_index_for_page(page).unwrap();

			prop_assert_eq!(top, expected_top);
			prop_assert!(bottom >= top);
			expected_top = bottom + 1;
		}
	}

	#[test]
	fn sorting_permutes_but_never_invents_fields(
		spec_fields in prop::collection::vec("[a-e]", 0..6),
	) {
		let mut sorter = Sorter::new(vec![
			SortKey::ascending("a"),
			SortKey::descending("b"),
			SortKey::ascending("c"),
		]);

		let spec = spec_fields.join(",");
		sorter.sort(&spec);

		let mut fields: Vec<&str> = sorter
			.order()
			.iter()
			.map(|key| key.field.as_str())
			.collect();
		fields.sort_unstable();

		prop_assert_eq!(fields, vec!["a", "b", "c"]);
	}

	#[test]
	fn current_link_replays_to_the_same_order(
		spec_fields in prop::collection::vec("[a-e][+-]?", 0..8),
	) {
		let template = Sorter::new(vec![
			SortKey::ascending("a"),
			SortKey::descending("b"),
			SortKey::ascending("c"),
			SortKey::descending("d"),
			SortKey::ascending("e"),
		]);

		let mut sorter = template.clone();
		sorter.sort(&spec_fields.join(","));

		let mut replayed = template;
		replayed.sort(&sorter.current_link());

		prop_assert_eq!(replayed.order(), sorter.order());
	}
}
