use super::*;

const BASE: &str = "https://dummyjson.com";

fn user(id: i64, email: Option<&str>) -> DirectoryUser {
    DirectoryUser { id, email: email.map(str::to_owned), ..DirectoryUser::default() }
}

#[test]
fn search_endpoint_encodes_query() {
    assert_eq!(
        search_endpoint(BASE, "emily.johnson@x.dummyjson.com"),
        "https://dummyjson.com/users/search?q=emily.johnson%40x.dummyjson.com"
    );
    assert_eq!(search_endpoint(BASE, "a b&c"), "https://dummyjson.com/users/search?q=a%20b%26c");
}

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint(BASE, "12"), "https://dummyjson.com/users/12");
}

#[test]
fn users_page_endpoint_carries_limit_and_skip() {
    assert_eq!(users_page_endpoint(BASE, 10, 20), "https://dummyjson.com/users?limit=10&skip=20");
}

#[test]
fn login_endpoint_formats_expected_path() {
    assert_eq!(login_endpoint(BASE), "https://dummyjson.com/auth/login");
}

#[test]
fn login_status_maps_to_verdict() {
    assert_eq!(classify_login_status(200, "OK"), Ok(CredentialCheck::Accepted));
    assert_eq!(classify_login_status(400, "Bad Request"), Ok(CredentialCheck::Rejected));
    assert_eq!(classify_login_status(401, "Unauthorized"), Ok(CredentialCheck::Rejected));
    assert_eq!(
        classify_login_status(503, "Service Unavailable"),
        Err(FetchError::Status { status: 503, status_text: "Service Unavailable".to_owned() })
    );
}

#[test]
fn find_by_email_ignores_case_and_whitespace() {
    let users = vec![user(1, Some("a@x.com")), user(2, Some("Emily@X.com")), user(3, None)];
    assert_eq!(find_by_email(&users, "  emily@x.COM ").map(|u| u.id), Some(2));
}

#[test]
fn find_by_email_requires_exact_match() {
    let users = vec![user(1, Some("emily.johnson@x.com"))];
    assert!(find_by_email(&users, "emily@x.com").is_none());
    assert!(find_by_email(&[], "emily@x.com").is_none());
}
