//! Thin wrappers over browser storage.
//!
//! `local_*` is durable (`window.localStorage`, survives the tab);
//! `session_*` is tab-scoped (`window.sessionStorage`, used by the badge
//! cache). On non-wasm targets the same API is backed by thread-local maps
//! so the crate's logic tests run off-browser.

#[cfg(target_arch = "wasm32")]
mod imp {
    use gloo_storage::{LocalStorage, SessionStorage, Storage};

    pub fn local_get(key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    pub fn local_set(key: &str, value: &str) {
        if let Err(err) = LocalStorage::set(key, value) {
            tracing::warn!(%err, key, "no se pudo escribir en localStorage");
        }
    }

    pub fn local_delete(key: &str) {
        LocalStorage::delete(key);
    }

    pub fn session_get(key: &str) -> Option<String> {
        SessionStorage::get::<String>(key).ok()
    }

    pub fn session_set(key: &str, value: &str) {
        if let Err(err) = SessionStorage::set(key, value) {
            tracing::warn!(%err, key, "no se pudo escribir en sessionStorage");
        }
    }

    pub fn session_delete(key: &str) {
        SessionStorage::delete(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static LOCAL: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
        static SESSION: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn local_get(key: &str) -> Option<String> {
        LOCAL.with(|map| map.borrow().get(key).cloned())
    }

    pub fn local_set(key: &str, value: &str) {
        LOCAL.with(|map| {
            map.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn local_delete(key: &str) {
        LOCAL.with(|map| {
            map.borrow_mut().remove(key);
        });
    }

    pub fn session_get(key: &str) -> Option<String> {
        SESSION.with(|map| map.borrow().get(key).cloned())
    }

    pub fn session_set(key: &str, value: &str) {
        SESSION.with(|map| {
            map.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn session_delete(key: &str) {
        SESSION.with(|map| {
            map.borrow_mut().remove(key);
        });
    }
}

pub use imp::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_roundtrip() {
        local_set("prueba:token", "abc");
        assert_eq!(local_get("prueba:token"), Some("abc".to_string()));
        local_delete("prueba:token");
        assert_eq!(local_get("prueba:token"), None);
    }

    #[test]
    fn session_roundtrip() {
        session_set("prueba:badge", "3");
        assert_eq!(session_get("prueba:badge"), Some("3".to_string()));
        session_delete("prueba:badge");
        assert_eq!(session_get("prueba:badge"), None);
    }

    #[test]
    fn los_dos_almacenes_no_se_mezclan() {
        local_set("prueba:clave", "local");
        assert_eq!(session_get("prueba:clave"), None);
        local_delete("prueba:clave");
    }
}
