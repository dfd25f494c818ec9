use super::*;

#[test]
fn request_target_skips_without_any_url() {
    assert_eq!(request_target(None, None), None);
}

#[test]
fn request_target_reuses_current_url_on_plain_refetch() {
    let current = Some("https://dummyjson.com/users?limit=10&skip=0".to_owned());
    assert_eq!(request_target(current.clone(), None), current);
}

#[test]
fn request_target_swaps_in_replacement_url() {
    let current = Some("https://dummyjson.com/users?limit=10&skip=0".to_owned());
    let next = "https://dummyjson.com/users?limit=10&skip=10".to_owned();
    assert_eq!(request_target(current, Some(next.clone())), Some(next.clone()));
    assert_eq!(request_target(None, Some(next.clone())), Some(next));
}

#[test]
fn fetch_state_stays_idle_without_url() {
    let state = FetchState::<u32>::pending(false);
    assert!(!state.loading);
    assert!(state.data.is_none());
}
