//! Authentication endpoints.

use async_trait::async_trait;
use reqwest::Method;
use shopfront_models::user::{
    AuthSession, ForgotPasswordRequest, LoginRequest, MeResponse, RegisterRequest,
    ResetPasswordRequest, User,
};

use crate::client::ApiClient;
use crate::error::ApiError;

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, req: &LoginRequest) -> Result<AuthSession, ApiError>;

    async fn register(&self, req: &RegisterRequest) -> Result<AuthSession, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;

    /// The account behind the current bearer credential.
    async fn me(&self) -> Result<User, ApiError>;

    /// Request a password-reset email.
    async fn forgot_password(&self, email: &str) -> Result<(), ApiError>;

    /// Redeem an emailed reset token for a new password.
    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, req: &LoginRequest) -> Result<AuthSession, ApiError> {
        self.send(self.request(Method::POST, "/auth/login").json(req))
            .await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<AuthSession, ApiError> {
        self.send(self.request(Method::POST, "/auth/register").json(req))
            .await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::POST, "/auth/logout"))
            .await
    }

    async fn me(&self) -> Result<User, ApiError> {
        let response: MeResponse = self.send(self.request(Method::GET, "/auth/me")).await?;
        Ok(response.user)
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        self.send_unit(
            self.request(Method::POST, "/auth/forgot-password")
                .json(&ForgotPasswordRequest {
                    email: email.to_string(),
                }),
        )
        .await
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), ApiError> {
        self.send_unit(
            self.request(Method::POST, "/auth/reset-password")
                .json(&ResetPasswordRequest {
                    token: token.to_string(),
                    new_password: new_password.to_string(),
                }),
        )
        .await
    }
}
