//! Session-scoped badge-count cache.
//!
//! Counts shown in the sidebar (today's appointments, the client's
//! appointments) are cheap to show stale but annoying to refetch on every
//! navigation, so they live in sessionStorage under a 60-second TTL.
//! Mutating operations must call the matching invalidation hook: scheduling
//! an appointment invalidates [`keys::MIS_CITAS`], completing one
//! invalidates [`keys::CITAS_HOY`]. Read-check-write with no locking is
//! acceptable only because the UI is single-threaded.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::storage;

/// How long a cached badge count stays fresh.
pub const BADGE_TTL_SECONDS: i64 = 60;

pub mod keys {
    pub const CITAS_HOY: &str = "badge:citas-hoy";
    pub const MIS_CITAS: &str = "badge:mis-citas";
}

/// A cached value with its write timestamp (epoch seconds).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheEntry<T> {
    pub value: T,
    pub stored_at: i64,
}

impl<T> CacheEntry<T> {
    /// Fresh while strictly younger than the TTL. A clock that moved
    /// backwards invalidates the entry rather than extending it.
    pub fn is_fresh(&self, now: i64) -> bool {
        now >= self.stored_at && now - self.stored_at < BADGE_TTL_SECONDS
    }
}

fn now_epoch() -> i64 {
    Utc::now().timestamp()
}

/// Read a fresh value, or `None` when missing, expired or unreadable.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    get_at(key, now_epoch())
}

pub fn get_at<T: DeserializeOwned>(key: &str, now: i64) -> Option<T> {
    let raw = storage::session_get(key)?;
    let entry: CacheEntry<T> = serde_json::from_str(&raw).ok()?;
    if entry.is_fresh(now) {
        Some(entry.value)
    } else {
        None
    }
}

/// Store a value stamped with the current time.
pub fn put<T: Serialize + Clone>(key: &str, value: &T) {
    put_at(key, value, now_epoch());
}

pub fn put_at<T: Serialize + Clone>(key: &str, value: &T, now: i64) {
    let entry = CacheEntry {
        value: value.clone(),
        stored_at: now,
    };
    match serde_json::to_string(&entry) {
        Ok(json) => storage::session_set(key, &json),
        Err(err) => tracing::warn!(%err, key, "no se pudo serializar la entrada de caché"),
    }
}

/// Drop one entry. The invalidation hooks below are the named call sites.
pub fn invalidate(key: &str) {
    storage::session_delete(key);
}

/// Invalidation hook for operations that change today's agenda
/// (completing or rescheduling an appointment).
pub fn invalidate_citas_hoy() {
    invalidate(keys::CITAS_HOY);
}

/// Invalidation hook for operations that change the client's appointment
/// list (scheduling a new appointment).
pub fn invalidate_mis_citas() {
    invalidate(keys::MIS_CITAS);
}

/// Drop every badge entry; called on logout.
pub fn clear() {
    invalidate(keys::CITAS_HOY);
    invalidate(keys::MIS_CITAS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entrega_valores_frescos() {
        put_at("prueba:fresco", &5i64, 1_000);
        assert_eq!(get_at::<i64>("prueba:fresco", 1_000), Some(5));
        assert_eq!(get_at::<i64>("prueba:fresco", 1_059), Some(5));
        invalidate("prueba:fresco");
    }

    #[test]
    fn expira_a_los_sesenta_segundos() {
        put_at("prueba:expira", &5i64, 1_000);
        assert_eq!(get_at::<i64>("prueba:expira", 1_060), None);
        assert_eq!(get_at::<i64>("prueba:expira", 2_000), None);
        invalidate("prueba:expira");
    }

    #[test]
    fn un_reloj_hacia_atras_invalida() {
        put_at("prueba:reloj", &5i64, 1_000);
        assert_eq!(get_at::<i64>("prueba:reloj", 999), None);
        invalidate("prueba:reloj");
    }

    #[test]
    fn invalidar_elimina_la_entrada() {
        put_at(keys::CITAS_HOY, &3i64, 1_000);
        invalidate_citas_hoy();
        assert_eq!(get_at::<i64>(keys::CITAS_HOY, 1_001), None);
    }

    #[test]
    fn clear_elimina_todas_las_insignias() {
        put_at(keys::CITAS_HOY, &3i64, 1_000);
        put_at(keys::MIS_CITAS, &7i64, 1_000);
        clear();
        assert_eq!(get_at::<i64>(keys::CITAS_HOY, 1_001), None);
        assert_eq!(get_at::<i64>(keys::MIS_CITAS, 1_001), None);
    }

    #[test]
    fn contenido_corrupto_cuenta_como_ausente() {
        crate::storage::session_set("prueba:corrupto", "esto no es json");
        assert_eq!(get_at::<i64>("prueba:corrupto", 1_000), None);
        invalidate("prueba:corrupto");
    }
}
