//! Guest-cart session token.
//!
//! Pre-login carts are identified by a client-generated token carried in a
//! custom header (not a cookie). The token is created lazily on first use,
//! persisted in client storage, and discarded after a successful merge
//! into the user's cart.

use shopfront_storage::ClientStorage;

pub const SESSION_KEY: &str = "cart_session_id";
pub const SESSION_HEADER: &str = "x-session-id";

/// Return the guest session token, generating and persisting one if absent.
pub fn session_id(storage: &dyn ClientStorage) -> String {
    if let Some(existing) = storage.get(SESSION_KEY) {
        return existing;
    }

    let token = format!("sess_{}", uuid::Uuid::now_v7().simple());
    if let Err(err) = storage.put(SESSION_KEY, &token) {
        tracing::warn!(%err, "failed to persist guest session token");
    }
    token
}

/// Discard the guest session token (after a successful cart merge).
pub fn clear_session(storage: &dyn ClientStorage) {
    if let Err(err) = storage.remove(SESSION_KEY) {
        tracing::warn!(%err, "failed to discard guest session token");
    }
}
