//! Browser `localStorage` backend for the persisted credential store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` seeds the session from here on startup and installs
//! [`sync_local_storage`] as the session change hook. Native builds see an
//! always-empty store so routing logic stays testable without a browser.

use session::{CredentialStore, Session, load_session, sync_store};

/// `window.localStorage`, or nothing when storage is unavailable.
#[derive(Debug, Default)]
pub struct LocalStorage {
    #[cfg(feature = "csr")]
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        #[cfg(feature = "csr")]
        {
            let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if inner.is_none() {
                log::warn!("localStorage unavailable; sessions will not survive reload");
            }
            Self { inner }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

impl CredentialStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            self.inner.as_ref()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = &self.inner {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = &self.inner {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Session persisted by a previous visit, if any.
pub fn load_local_session() -> Session {
    load_session(&LocalStorage::open())
}

/// Session change hook: mirror `session` into `localStorage`.
pub fn sync_local_storage(session: &Session) {
    sync_store(&mut LocalStorage::open(), session);
}
