use super::*;

fn paged(skip: u32, total: u32) -> Pagination {
    Pagination { limit: 10, skip, total }
}

#[test]
fn new_starts_at_first_page_with_single_page_floor() {
    let p = Pagination::new(10);
    assert_eq!(p.current_page(), 1);
    assert_eq!(p.total_pages(), 1);
    assert!(!p.has_prev());
    assert!(!p.has_next());
}

#[test]
fn zero_limit_is_clamped() {
    assert_eq!(Pagination::new(0).limit, 1);
}

#[test]
fn page_counts_round_up() {
    assert_eq!(paged(0, 208).total_pages(), 21);
    assert_eq!(paged(0, 200).total_pages(), 20);
    assert_eq!(paged(30, 208).current_page(), 4);
}

#[test]
fn prev_clamps_at_zero() {
    let mut p = paged(5, 208);
    p.prev();
    assert_eq!(p.skip, 0);
    p.prev();
    assert_eq!(p.skip, 0);
}

#[test]
fn next_clamps_at_last_page() {
    let mut p = paged(190, 208);
    p.next();
    assert_eq!(p.skip, 200);
    assert!(!p.has_next());
    p.next();
    assert_eq!(p.skip, 200);
}

#[test]
fn next_before_first_response_stays_put() {
    let mut p = Pagination::new(10);
    p.next();
    assert_eq!(p.skip, 0);
}

#[test]
fn has_next_uses_total() {
    assert!(paged(0, 11).has_next());
    assert!(!paged(0, 10).has_next());
    assert!(paged(10, 30).has_prev());
}

#[test]
fn summary_reports_page_and_total() {
    assert_eq!(paged(10, 208).summary(), "Page 2 / 21 (208 total)");
}
