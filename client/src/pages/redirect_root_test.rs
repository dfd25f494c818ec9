use super::*;
use crate::state::auth::{Role, SessionUser};

fn session(role: Option<Role>) -> SessionUser {
    SessionUser {
        id: "5".to_owned(),
        name: "Emily Johnson".to_owned(),
        email: "emily@x.com".to_owned(),
        role,
    }
}

#[test]
fn waits_while_session_is_loading() {
    assert_eq!(root_target(&AuthState::default()), None);
}

#[test]
fn anonymous_visitors_go_to_login() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(root_target(&state).as_deref(), Some("/login"));
}

#[test]
fn officers_land_on_clients_and_users_on_their_profile() {
    let mut state = AuthState::default();
    state.login(session(Some(Role::Officer)));
    assert_eq!(root_target(&state).as_deref(), Some("/pages/clients"));
    state.login(session(None));
    assert_eq!(root_target(&state).as_deref(), Some("/pages/user/5/pi"));
}
