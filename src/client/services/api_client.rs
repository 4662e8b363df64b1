use std::sync::RwLock;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::config::ClientConfig;

/// Failure taxonomy of a backend call. Every 401 maps to `Unauthorized`
/// so callers can treat it as session invalidation, background polls
/// included.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("erreur de connexion au serveur: {0}")]
    Network(#[from] reqwest::Error),
    #[error("session expirée")]
    Unauthorized,
    #[error("erreur serveur ({status}): {message}")]
    Backend { status: u16, message: String },
    #[error("{0}")]
    Validation(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Clonable form of an `ApiError` suitable for GUI messages
/// (`reqwest::Error` is not `Clone`).
#[derive(Debug, Clone)]
pub struct ApiFailure {
    pub unauthorized: bool,
    pub message: String,
}

impl From<ApiError> for ApiFailure {
    fn from(e: ApiError) -> Self {
        ApiFailure {
            unauthorized: matches!(e, ApiError::Unauthorized),
            message: e.to_string(),
        }
    }
}

/// Thin HTTP wrapper: one `reqwest::Client`, the configured base URL and
/// the bearer token of the current session.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|g| g.clone())
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Map a non-2xx response to the error taxonomy, decoding the
    /// backend's `{"error": …}` / `{"detail": …}` payload when present.
    async fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message_from_body(&body)
                .unwrap_or_else(|| "Une erreur est survenue".to_string());
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let request = self.authed(self.http.get(self.url(path)).query(query));
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// GET where the backend signals "nothing" with 204 or an empty/null
    /// body (the active-stream endpoint does both).
    pub async fn get_opt<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Option<T>> {
        let request = self.authed(self.http.get(self.url(path)));
        let response = Self::check(request.send().await?).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let body = response.text().await?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(None);
        }
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| ApiError::Backend {
                status: 200,
                message: format!("réponse illisible: {}", e),
            })
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.authed(self.http.post(self.url(path)).json(body));
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// POST with no payload (action endpoints such as start/stop stream).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.authed(self.http.post(self.url(path)));
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        let request = self.authed(self.http.post(self.url(path)).multipart(form));
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.authed(self.http.patch(self.url(path)).json(body));
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        let request = self.authed(self.http.patch(self.url(path)).multipart(form));
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let request = self.authed(self.http.delete(self.url(path)));
        Self::check(request.send().await?).await?;
        Ok(())
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error", "detail", "message"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            return Some(text.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(
            join_url("http://x/api", "/chat/messages/"),
            "http://x/api/chat/messages/"
        );
        assert_eq!(join_url("http://x/api", "donations/"), "http://x/api/donations/");
    }

    #[test]
    fn error_message_decodes_known_shapes() {
        assert_eq!(
            error_message_from_body(r#"{"error": "Le montant est requis"}"#).as_deref(),
            Some("Le montant est requis")
        );
        assert_eq!(
            error_message_from_body(r#"{"detail": "Non autorisé"}"#).as_deref(),
            Some("Non autorisé")
        );
        assert_eq!(error_message_from_body("<html>oops</html>"), None);
    }

    #[test]
    fn failure_flags_unauthorized() {
        let f: ApiFailure = ApiError::Unauthorized.into();
        assert!(f.unauthorized);
        let f: ApiFailure = ApiError::Backend {
            status: 500,
            message: "boom".into(),
        }
        .into();
        assert!(!f.unauthorized);
    }
}
