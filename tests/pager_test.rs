use listnav::{Error, Pager};
use rstest::*;

#[fixture]
fn pager() -> Pager {
	Pager::new(123, 10)
		.expect("page size is non-zero")
		.with_window(5)
}

#[rstest]
fn total_pages_is_derived_from_the_record_count(pager: Pager) {
	assert_eq!(pager.total_pages(), 13);
}

#[rstest]
fn fresh_pager_starts_on_the_first_page(pager: Pager) {
	assert_eq!(pager.current(), 1);
	assert_eq!(pager.offset(), 0);
	assert_eq!(pager.top_entry_index_for_current().unwrap(), 1);
	assert_eq!(pager.bottom_entry_index_for_current().unwrap(), 10);
}

#[rstest]
fn offset_lookup_is_limited_to_the_visible_window(pager: Pager) {
	// window is [1, 5]
	assert_eq!(pager.offset_for_page(5).unwrap(), 40);
	assert_eq!(pager.offset_for_page(0), Err(Error::InvalidPage { page: 0 }));
	assert_eq!(
		pager.offset_for_page(20),
		Err(Error::InvalidPage { page: 20 })
	);
}

#[rstest]
fn seeking_an_offset_moves_the_current_page(pager: Pager) {
	let mut pager = pager;
	pager.set_offset(30).unwrap();

	assert_eq!(pager.current(), 4);
	assert_eq!(pager.top_entry_index_for_current().unwrap(), 31);
	assert_eq!(pager.bottom_entry_index_for_current().unwrap(), 40);
	assert_eq!(pager.first(), Some(2));
	assert_eq!(pager.last(), Some(6));
	assert_eq!(pager.backward(), None);
	assert_eq!(pager.forward(), Some(9));
}

#[rstest]
fn invalid_current_pages_are_rejected(pager: Pager) {
	let mut pager = pager;
	assert_eq!(pager.set_current(0), Err(Error::InvalidPage { page: 0 }));
	assert_eq!(pager.set_current(20), Err(Error::InvalidPage { page: 20 }));
	assert_eq!(pager.current(), 1);
	assert_eq!(pager.offset(), 0);
}

#[rstest]
fn final_page_holds_the_remainder(pager: Pager) {
	let pager = pager.with_current(13).unwrap();
	assert_eq!(pager.entries_for_current().unwrap(), 3);
	assert_eq!(pager.top_entry_index_for_current().unwrap(), 121);
	assert_eq!(pager.bottom_entry_index_for_current().unwrap(), 123);
}

#[rstest]
fn entry_indexes_for_the_window_edges(pager: Pager) {
	let pager = pager.with_offset(30).unwrap();

	// window is [2, 6]
	assert_eq!(pager.offset_for_first().unwrap(), 10);
	assert_eq!(pager.offset_for_last().unwrap(), 50);
	assert_eq!(pager.top_entry_index_for_first().unwrap(), 11);
	assert_eq!(pager.bottom_entry_index_for_first().unwrap(), 20);
	assert_eq!(pager.top_entry_index_for_last().unwrap(), 51);
	assert_eq!(pager.bottom_entry_index_for_last().unwrap(), 60);
	assert_eq!(pager.entries_for_first().unwrap(), 10);
	assert_eq!(pager.entries_for_last().unwrap(), 10);
}

#[rstest]
fn empty_pager_reports_zero_entry_indexes() {
	let pager = Pager::new(0, 10).expect("page size is non-zero");
	assert_eq!(pager.total_pages(), 0);
	assert_eq!(pager.top_entry_index_for_current().unwrap(), 0);
	assert_eq!(pager.bottom_entry_index_for_current().unwrap(), 0);
}

#[rstest]
fn offsets_enumerates_page_offset_pairs(pager: Pager) {
	let pager = pager.with_offset(30).unwrap();
	let pairs: Vec<(usize, usize)> = pager.offsets().collect();
	assert_eq!(pairs, vec![(2, 10), (3, 20), (4, 30), (5, 40), (6, 50)]);
}

#[rstest]
fn iter_yields_live_page_descriptors(pager: Pager) {
	let pager = pager.with_offset(30).unwrap();
	let pages: Vec<(usize, bool, usize, usize)> = pager
		.iter()
		.map(|page| {
			(
				page.number(),
				page.is_current(),
				page.offset().unwrap(),
				page.page_size(),
			)
		})
		.collect();

	assert_eq!(
		pages,
		vec![
			(2, false, 10, 10),
			(3, false, 20, 10),
			(4, true, 30, 10),
			(5, false, 40, 10),
			(6, false, 50, 10),
		]
	);
}

#[rstest]
fn descriptors_observe_pager_mutation() {
	let mut pager = Pager::new(123, 10)
		.expect("page size is non-zero")
		.with_window(5)
		.with_offset(30)
		.unwrap();

	{
		let descriptor = pager.iter().nth(1).unwrap();
		assert_eq!(descriptor.number(), 3);
		assert!(!descriptor.is_current());
	}

	pager.set_current(3).unwrap();
	let descriptor = pager.iter().nth(1).unwrap();
	assert!(descriptor.is_current());
	assert_eq!(pager.offset(), 20);
}
