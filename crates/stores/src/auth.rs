//! Auth store.
//!
//! Owns the signed-in account and the bearer credential's storage slot.
//! Session end is decided by the backend: the adapter clears the stored
//! credential on any 401, and `check_auth` re-validates the persisted
//! session against the whoami endpoint on startup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopfront_api::{ApiError, AuthApi, Notifier, TOKEN_KEY};
use shopfront_models::{LoginRequest, RegisterRequest, User};
use shopfront_storage::{ClientStorage, slice};

const SLICE_KEY: &str = "auth-storage";
const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct PersistedAuth {
    user: Option<User>,
    authenticated: bool,
}

pub struct AuthStore<A: AuthApi> {
    api: Arc<A>,
    storage: Arc<dyn ClientStorage>,
    notifier: Arc<dyn Notifier>,
    user: Option<User>,
    authenticated: bool,
    loading: bool,
    error: Option<String>,
}

impl<A: AuthApi> AuthStore<A> {
    pub fn new(api: Arc<A>, storage: Arc<dyn ClientStorage>, notifier: Arc<dyn Notifier>) -> Self {
        let persisted: PersistedAuth =
            slice::load_slice(storage.as_ref(), SLICE_KEY, SCHEMA_VERSION).unwrap_or_default();
        Self {
            api,
            storage,
            notifier,
            user: persisted.user,
            authenticated: persisted.authenticated,
            loading: false,
            error: None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn persist(&self) {
        let persisted = PersistedAuth {
            user: self.user.clone(),
            authenticated: self.authenticated,
        };
        if let Err(err) =
            slice::save_slice(self.storage.as_ref(), SLICE_KEY, SCHEMA_VERSION, &persisted)
        {
            tracing::warn!(%err, "failed to persist auth state");
        }
    }

    fn store_token(&self, token: &str) {
        if let Err(err) = self.storage.put(TOKEN_KEY, token) {
            tracing::warn!(%err, "failed to store credential");
        }
    }

    fn sign_in(&mut self, user: User, token: &str) {
        self.store_token(token);
        self.user = Some(user);
        self.authenticated = true;
        self.error = None;
        self.persist();
    }

    fn sign_out_locally(&mut self) {
        if let Err(err) = self.storage.remove(TOKEN_KEY) {
            tracing::warn!(%err, "failed to clear credential");
        }
        self.user = None;
        self.authenticated = false;
        self.error = None;
        self.persist();
    }

    pub async fn login(&mut self, req: &LoginRequest) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.api.login(req).await;
        self.loading = false;
        match result {
            Ok(session) => {
                let first_name = session.user.first_name.clone();
                self.sign_in(session.user, &session.access_token);
                self.notifier
                    .success(&format!("Welcome back, {first_name}!"));
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    pub async fn register(&mut self, req: &RegisterRequest) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.api.register(req).await;
        self.loading = false;
        match result {
            Ok(session) => {
                self.sign_in(session.user, &session.access_token);
                self.notifier.success("Account created successfully!");
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Sign out. The backend call is best effort; local state is cleared
    /// regardless so the client never stays signed in on its own.
    pub async fn logout(&mut self) {
        if let Err(err) = self.api.logout().await {
            tracing::warn!(%err, "logout request failed");
        }
        self.sign_out_locally();
        self.notifier.success("Logged out");
    }

    /// Re-validate the persisted session on startup. No stored credential
    /// means signed out without a network call; an invalid one is cleared
    /// by the adapter's 401 handling and reflected here.
    pub async fn check_auth(&mut self) {
        if self.storage.get(TOKEN_KEY).is_none() {
            self.user = None;
            self.authenticated = false;
            self.persist();
            return;
        }

        self.loading = true;
        match self.api.me().await {
            Ok(user) => {
                self.user = Some(user);
                self.authenticated = true;
                self.persist();
            }
            Err(err) => {
                tracing::debug!(%err, "persisted session rejected");
                self.user = None;
                self.authenticated = false;
                self.persist();
            }
        }
        self.loading = false;
    }
}
