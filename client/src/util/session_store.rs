//! Browser localStorage persistence for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session record is mirrored under one key on every change and removed
//! on logout. Reads are best-effort: a missing, malformed or unknown-role
//! record is logged and treated as "no session".

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::state::auth::SessionUser;

pub const STORAGE_KEY: &str = "authUser";

/// Decode a stored session record.
pub fn decode_session(raw: &str) -> Option<SessionUser> {
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<SessionUser>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("discarding stored session: {e}");
            None
        }
    }
}

/// Encode a session record for storage.
pub fn encode_session(user: &SessionUser) -> Option<String> {
    serde_json::to_string(user)
        .map_err(|e| log::warn!("failed to encode session: {e}"))
        .ok()
}

/// Load the stored session, if any.
pub fn load_session() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        decode_session(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Mirror `user` into storage, or remove the record when `None`.
pub fn persist_session(user: Option<&SessionUser>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let result = match user.and_then(encode_session) {
            Some(raw) => storage.set_item(STORAGE_KEY, &raw),
            None => storage.remove_item(STORAGE_KEY),
        };
        if let Err(e) = result {
            log::error!("failed to persist session: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}
