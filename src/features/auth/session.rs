//! Durable session state for the web client. The API issues a bearer token and
//! a role at login; this module persists that pair in browser storage so a
//! reload keeps the user signed in, and reads it back as an all-or-nothing
//! [`Session`] value. Storage access goes through the [`SessionStorage`] trait
//! so the store can run against an in-memory double in native tests.

use crate::features::auth::types::Role;
use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "mc_token";
/// Storage key for the authenticated role.
pub const ROLE_KEY: &str = "mc_role";
/// Storage key for the role picked on the landing page before login.
pub const SELECTED_ROLE_KEY: &str = "mc_selected_role";

/// An authenticated session: the token and the role it was issued for.
///
/// A `Session` only exists as a complete pair. When either half is missing or
/// the stored role no longer parses, the whole session reads as absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

/// Minimal key-value surface the session store needs from its backing storage.
pub trait SessionStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage` backing. Every operation degrades to a no-op when the
/// browser denies storage access (private mode, disabled storage).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}

/// In-memory storage double for tests and non-browser targets.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Typed facade over the raw storage keys.
///
/// All writes happen on the single UI thread, so `set_session`'s two writes
/// are never observed half-done; `session()` additionally refuses to return a
/// torn pair left behind by older clients or manual storage edits.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore<S = BrowserStorage> {
    storage: S,
}

impl SessionStore<BrowserStorage> {
    /// Store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persists the token/role pair issued at login.
    pub fn set_session(&self, token: &str, role: Role) {
        self.storage.write(TOKEN_KEY, token);
        self.storage.write(ROLE_KEY, role.as_str());
    }

    /// The stored token, treating an empty string as absent.
    pub fn token(&self) -> Option<String> {
        self.storage.read(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// The stored role, `None` when missing or unparseable.
    pub fn role(&self) -> Option<Role> {
        self.storage.read(ROLE_KEY).as_deref().and_then(Role::parse)
    }

    /// The complete session, or `None` when either half is missing.
    pub fn session(&self) -> Option<Session> {
        let token = self.token()?;
        let role = self.role()?;
        Some(Session { token, role })
    }

    /// Removes every session key, including the pre-login role selection.
    /// Clearing an already-empty store is a no-op.
    pub fn clear_session(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(ROLE_KEY);
        self.storage.remove(SELECTED_ROLE_KEY);
    }

    /// Remembers the role chosen on the landing page so the login form can
    /// default to it.
    pub fn set_selected_role(&self, role: Role) {
        self.storage.write(SELECTED_ROLE_KEY, role.as_str());
    }

    pub fn selected_role(&self) -> Option<Role> {
        self.storage
            .read(SELECTED_ROLE_KEY)
            .as_deref()
            .and_then(Role::parse)
    }
}

impl Default for SessionStore<BrowserStorage> {
    fn default() -> Self {
        Self::browser()
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStorage, ROLE_KEY, Session, SessionStorage, SessionStore, TOKEN_KEY};
    use crate::features::auth::types::Role;

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::new())
    }

    #[test]
    fn set_then_read_returns_the_same_pair() {
        let store = store();
        store.set_session("tok-123", Role::Doctor);

        assert_eq!(
            store.session(),
            Some(Session {
                token: "tok-123".to_string(),
                role: Role::Doctor,
            })
        );
    }

    #[test]
    fn session_is_absent_until_both_halves_exist() {
        let store = store();
        assert_eq!(store.session(), None);

        store.storage.write(TOKEN_KEY, "tok-123");
        assert_eq!(store.session(), None, "token alone is not a session");

        store.storage.write(ROLE_KEY, "PATIENT");
        assert!(store.session().is_some());
    }

    #[test]
    fn session_rejects_unparseable_role() {
        let store = store();
        store.storage.write(TOKEN_KEY, "tok-123");
        store.storage.write(ROLE_KEY, "wizard");

        assert_eq!(store.role(), None);
        assert_eq!(store.session(), None);
    }

    #[test]
    fn empty_token_reads_as_signed_out() {
        let store = store();
        store.storage.write(TOKEN_KEY, "");
        store.storage.write(ROLE_KEY, "PATIENT");

        assert_eq!(store.token(), None);
        assert_eq!(store.session(), None);
    }

    #[test]
    fn clear_session_removes_all_keys_and_is_idempotent() {
        let store = store();
        store.set_session("tok-123", Role::Patient);
        store.set_selected_role(Role::Patient);

        store.clear_session();
        assert_eq!(store.session(), None);
        assert_eq!(store.selected_role(), None);

        // Clearing again must not fail.
        store.clear_session();
        assert_eq!(store.session(), None);
    }

    #[test]
    fn selected_role_survives_until_cleared() {
        let store = store();
        store.set_selected_role(Role::Institution);
        assert_eq!(store.selected_role(), Some(Role::Institution));

        store.set_session("tok-123", Role::Institution);
        assert_eq!(
            store.selected_role(),
            Some(Role::Institution),
            "login must not drop the landing-page selection"
        );
    }

    #[test]
    fn stored_role_accepts_legacy_lowercase_values() {
        let store = store();
        store.storage.write(TOKEN_KEY, "tok-123");
        store.storage.write(ROLE_KEY, "doctor");

        assert_eq!(store.role(), Some(Role::Doctor));
    }
}
