use super::*;

#[test]
fn default_listing_is_idle_and_empty() {
    let listing = Listing::<u32>::default();
    assert!(listing.items.is_empty());
    assert!(!listing.loading);
    assert_eq!(listing.error, None);
    assert!(listing.is_empty());
}

#[test]
fn start_sets_loading_and_clears_error() {
    let mut listing = Listing::<u32> { error: Some("boom".to_owned()), ..Listing::default() };
    listing.start();
    assert!(listing.loading);
    assert_eq!(listing.error, None);
    assert!(!listing.is_empty());
}

#[test]
fn finish_ok_replaces_items() {
    let mut listing = Listing { items: vec![1], ..Listing::default() };
    listing.start();
    listing.finish(Ok(vec![2, 3]));
    assert_eq!(listing.items, vec![2, 3]);
    assert!(!listing.loading);
}

#[test]
fn finish_err_keeps_previous_items() {
    let mut listing = Listing { items: vec![1], ..Listing::default() };
    listing.start();
    listing.finish(Err("offline".to_owned()));
    assert_eq!(listing.items, vec![1]);
    assert_eq!(listing.error.as_deref(), Some("offline"));
    assert!(!listing.is_empty());
}
