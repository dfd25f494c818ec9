use super::*;
use crate::state::auth::{Role, SessionUser};

fn loaded(user: Option<SessionUser>) -> AuthState {
    AuthState { user, loading: false }
}

fn officer() -> SessionUser {
    SessionUser {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@x.com".to_owned(),
        role: Some(Role::Officer),
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&loaded(None)));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&loaded(Some(officer()))));
}

#[test]
fn signed_in_redirect_targets_landing_path() {
    assert_eq!(signed_in_redirect(&loaded(Some(officer()))).as_deref(), Some("/pages/clients"));
}

#[test]
fn signed_in_redirect_waits_for_loading_and_user() {
    assert_eq!(signed_in_redirect(&AuthState::default()), None);
    assert_eq!(signed_in_redirect(&loaded(None)), None);
}
