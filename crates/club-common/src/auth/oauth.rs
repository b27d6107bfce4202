//! Social OAuth boundary client
//!
//! The provider is an external collaborator: the core performs exactly two
//! HTTP calls (authorization-code exchange, then profile fetch) and
//! consumes `{id, email}` from the result. Token issuance and validation
//! stay on the provider's side.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::OAuthConfig;
use crate::error::AppError;

/// Profile returned by the provider, reduced to what the core consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialProfile {
    /// Provider-scoped account identifier
    pub id: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
}

/// Boundary trait so services can be exercised without network access
#[async_trait]
pub trait SocialAuthClient: Send + Sync {
    /// Exchange an authorization code for the account's profile
    async fn exchange_code(&self, code: &str) -> Result<SocialProfile, AppError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Raw profile payload; providers differ in which fields they populate
#[derive(Debug, Deserialize)]
struct ProfileResponse {
    id: serde_json::Value,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// reqwest-backed implementation of the two-call exchange
#[derive(Clone)]
pub struct HttpOAuthClient {
    http: reqwest::Client,
    config: OAuthConfig,
}

impl HttpOAuthClient {
    /// Create a client for the configured provider
    #[must_use]
    pub fn new(config: OAuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn fetch_access_token(&self, code: &str) -> Result<String, AppError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("code", code),
        ];

        let response = self
            .http
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("token exchange failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("invalid token response: {e}")))?;

        Ok(token.access_token)
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<SocialProfile, AppError> {
        let response = self
            .http
            .get(&self.config.profile_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("profile fetch failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "profile endpoint returned {}",
                response.status()
            )));
        }

        let profile: ProfileResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("invalid profile response: {e}")))?;

        // Providers return the id as either a string or a number
        let id = match &profile.id {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            other => {
                return Err(AppError::ExternalService(format!(
                    "unexpected profile id: {other}"
                )))
            }
        };

        Ok(SocialProfile {
            id,
            email: profile.email,
            nickname: profile.nickname.or(profile.name),
        })
    }
}

#[async_trait]
impl SocialAuthClient for HttpOAuthClient {
    async fn exchange_code(&self, code: &str) -> Result<SocialProfile, AppError> {
        let access_token = self.fetch_access_token(code).await?;
        self.fetch_profile(&access_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_response_string_id() {
        let raw = r#"{"id": "abc-123", "email": "a@example.com", "nickname": "A"}"#;
        let profile: ProfileResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.id, serde_json::Value::String("abc-123".into()));
        assert_eq!(profile.email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn test_profile_response_numeric_id_and_name_fallback() {
        let raw = r#"{"id": 9182736, "name": "Jiyoon"}"#;
        let profile: ProfileResponse = serde_json::from_str(raw).unwrap();
        assert!(profile.email.is_none());
        assert!(profile.nickname.is_none());
        assert_eq!(profile.name.as_deref(), Some("Jiyoon"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpOAuthClient>();
    }
}
