//! Session token service
//!
//! Issues and verifies signed session tokens using the `jsonwebtoken`
//! crate. Claims carry the user's id, username, and nickname so handlers
//! can render identity without a user lookup; after a profile change the
//! token pair is reissued with fresh claims.

use chrono::{Duration, Utc};
use club_core::Snowflake;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Session claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Username at issue time
    pub username: String,
    /// Nickname at issue time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token type (access or refresh)
    pub token_type: TokenType,
}

impl Claims {
    /// Get the user ID as a Snowflake
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as a Snowflake
    pub fn user_id(&self) -> Result<Snowflake, AppError> {
        self.sub
            .parse::<i64>()
            .map(Snowflake::new)
            .map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Check if this is an access token
    #[must_use]
    pub fn is_access_token(&self) -> bool {
        self.token_type == TokenType::Access
    }

    /// Check if this is a refresh token
    #[must_use]
    pub fn is_refresh_token(&self) -> bool {
        self.token_type == TokenType::Refresh
    }
}

/// Token pair containing access and refresh tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Session service for encoding and decoding tokens
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
}

impl SessionService {
    /// Create a new session service with the given secret and expiry times
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64, refresh_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
            refresh_token_expiry,
        }
    }

    /// Generate a token pair carrying the given identity
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(
        &self,
        user_id: Snowflake,
        username: &str,
        nickname: Option<&str>,
    ) -> Result<TokenPair, AppError> {
        let access_token = self.encode_token(user_id, username, nickname, TokenType::Access)?;
        let refresh_token = self.encode_token(user_id, username, nickname, TokenType::Refresh)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiry,
        })
    }

    /// Encode a session token
    fn encode_token(
        &self,
        user_id: Snowflake,
        username: &str,
        nickname: Option<&str>,
        token_type: TokenType,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expiry = match token_type {
            TokenType::Access => self.access_token_expiry,
            TokenType::Refresh => self.refresh_token_expiry,
        };

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            nickname: nickname.map(ToString::to_string),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry)).timestamp(),
            token_type,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode session token")))
    }

    /// Decode and validate a session token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }

    /// Validate an access token and return the claims
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or not an access token
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if !claims.is_access_token() {
            return Err(AppError::InvalidToken);
        }

        Ok(claims)
    }

    /// Validate a refresh token and return the claims
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or not a refresh token
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if !claims.is_refresh_token() {
            return Err(AppError::InvalidToken);
        }

        Ok(claims)
    }

    /// Issue a fresh token pair from a valid refresh token
    ///
    /// Claims are carried over as-is; callers that changed the profile
    /// should use [`SessionService::issue`] with the new identity instead.
    ///
    /// # Errors
    /// Returns an error if the refresh token is invalid or expired
    pub fn refresh_tokens(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.validate_refresh_token(refresh_token)?;
        let user_id = claims.user_id()?;
        self.issue(user_id, &claims.username, claims.nickname.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService {
        SessionService::new("test-secret-key-for-session-tokens", 900, 604800)
    }

    #[test]
    fn test_issue_and_validate_access_token() {
        let svc = service();
        let pair = svc
            .issue(Snowflake::new(42), "jiyoon", Some("지윤"))
            .unwrap();

        let claims = svc.validate_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.user_id().unwrap(), Snowflake::new(42));
        assert_eq!(claims.username, "jiyoon");
        assert_eq!(claims.nickname.as_deref(), Some("지윤"));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let svc = service();
        let pair = svc.issue(Snowflake::new(1), "user", None).unwrap();

        assert!(svc.validate_access_token(&pair.refresh_token).is_err());
        assert!(svc.validate_refresh_token(&pair.refresh_token).is_ok());
        assert!(svc.validate_refresh_token(&pair.access_token).is_err());
    }

    #[test]
    fn test_refresh_carries_claims_forward() {
        let svc = service();
        let pair = svc.issue(Snowflake::new(7), "mina", Some("민아")).unwrap();

        let refreshed = svc.refresh_tokens(&pair.refresh_token).unwrap();
        let claims = svc.validate_access_token(&refreshed.access_token).unwrap();
        assert_eq!(claims.username, "mina");
        assert_eq!(claims.nickname.as_deref(), Some("민아"));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let svc = service();
        assert!(svc.validate_access_token("not.a.token").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let svc = service();
        let other = SessionService::new("a-different-secret-entirely", 900, 604800);
        let pair = svc.issue(Snowflake::new(1), "user", None).unwrap();

        assert!(other.validate_access_token(&pair.access_token).is_err());
    }
}
