use super::*;

#[test]
fn default_points_at_public_directory() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.directory_url, "https://dummyjson.com");
    assert_eq!(cfg.page_size, 10);
    assert_eq!(cfg.retry, RetryPolicy::default());
}

#[test]
fn override_strips_trailing_slash() {
    let cfg = ClientConfig::with_directory_url(Some("http://localhost:8080/"));
    assert_eq!(cfg.directory_url, "http://localhost:8080");
}

#[test]
fn blank_override_falls_back_to_default() {
    let cfg = ClientConfig::with_directory_url(Some("   "));
    assert_eq!(cfg.directory_url, DEFAULT_DIRECTORY_URL);
    let cfg = ClientConfig::with_directory_url(None);
    assert_eq!(cfg.directory_url, DEFAULT_DIRECTORY_URL);
}
