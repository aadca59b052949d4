//! Auth store scenarios: credential storage, persistence, startup checks.

mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use common::*;
use shopfront_api::{ApiError, TOKEN_KEY};
use shopfront_models::LoginRequest;
use shopfront_storage::ClientStorage;
use shopfront_storage::MemoryStorage;
use shopfront_stores::AuthStore;

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "ada@example.com".into(),
        password: "hunter2".into(),
    }
}

#[tokio::test]
async fn login_stores_the_credential_and_greets_by_name() {
    let api = Arc::new(FakeAuthApi::new(user_fixture("Ada"), "jwt-123"));
    let storage = Arc::new(MemoryStorage::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut auth = AuthStore::new(api, storage.clone(), notifier.clone());

    auth.login(&login_request()).await.unwrap();

    assert!(auth.is_authenticated());
    assert_eq!(auth.user().map(|u| u.first_name.as_str()), Some("Ada"));
    assert_eq!(storage.get(TOKEN_KEY), Some("jwt-123".to_string()));
    assert_eq!(notifier.successes(), vec!["Welcome back, Ada!".to_string()]);
}

#[tokio::test]
async fn failed_login_keeps_the_store_signed_out() {
    let api = Arc::new(FakeAuthApi::new(user_fixture("Ada"), "jwt-123"));
    let storage = Arc::new(MemoryStorage::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut auth = AuthStore::new(api.clone(), storage.clone(), notifier);

    api.fail_next();
    let err = auth.login(&login_request()).await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    assert!(!auth.is_authenticated());
    assert!(auth.error().is_some());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[tokio::test]
async fn auth_state_survives_a_store_rebuild() {
    let api = Arc::new(FakeAuthApi::new(user_fixture("Ada"), "jwt-123"));
    let storage = Arc::new(MemoryStorage::new());
    let notifier = Arc::new(RecordingNotifier::default());

    let mut auth = AuthStore::new(api.clone(), storage.clone(), notifier.clone());
    auth.login(&login_request()).await.unwrap();
    drop(auth);

    let rebuilt = AuthStore::new(api, storage, notifier);
    assert!(rebuilt.is_authenticated());
    assert_eq!(rebuilt.user().map(|u| u.first_name.as_str()), Some("Ada"));
}

#[tokio::test]
async fn logout_clears_credential_and_state() {
    let api = Arc::new(FakeAuthApi::new(user_fixture("Ada"), "jwt-123"));
    let storage = Arc::new(MemoryStorage::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut auth = AuthStore::new(api, storage.clone(), notifier.clone());

    auth.login(&login_request()).await.unwrap();
    auth.logout().await;

    assert!(!auth.is_authenticated());
    assert!(auth.user().is_none());
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert!(notifier.successes().contains(&"Logged out".to_string()));
}

#[tokio::test]
async fn startup_check_without_a_credential_stays_offline() {
    let api = Arc::new(FakeAuthApi::new(user_fixture("Ada"), "jwt-123"));
    let storage = Arc::new(MemoryStorage::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut auth = AuthStore::new(api.clone(), storage, notifier);

    auth.check_auth().await;

    assert!(!auth.is_authenticated());
    assert_eq!(api.me_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn startup_check_validates_a_persisted_credential() {
    let api = Arc::new(FakeAuthApi::new(user_fixture("Ada"), "jwt-123"));
    let storage = Arc::new(MemoryStorage::new());
    storage.put(TOKEN_KEY, "jwt-123").unwrap();
    let notifier = Arc::new(RecordingNotifier::default());
    let mut auth = AuthStore::new(api.clone(), storage.clone(), notifier);

    auth.check_auth().await;
    assert!(auth.is_authenticated());
    assert_eq!(api.me_calls.load(Ordering::SeqCst), 1);

    // a rejected credential flips the store back to signed out
    api.fail_next();
    auth.check_auth().await;
    assert!(!auth.is_authenticated());
    assert!(auth.user().is_none());
}
