use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use crate::client::services::api_client::{ApiClient, ApiError, ApiResult};
use crate::common::models::User;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub user: User,
}

#[derive(Debug, Clone)]
pub struct AuthService {
    api: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// POST /users/login/ — trades credentials for a bearer token and the
    /// signed-in user. Empty fields are rejected before any network call.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "Nom d'utilisateur et mot de passe requis".to_string(),
            ));
        }
        let response: LoginResponse = self
            .api
            .post(
                "/users/login/",
                &json!({ "username": username, "password": password }),
            )
            .await?;
        self.api.set_token(Some(response.access.clone()));
        Ok(response)
    }

    /// GET /users/me/ — validates the current token and returns the
    /// profile behind it. Used at startup to restore a saved session.
    pub async fn me(&self) -> ApiResult<User> {
        self.api.get("/users/me/", &[]).await
    }

    pub fn forget_token(&self) {
        self.api.set_token(None);
    }
}
