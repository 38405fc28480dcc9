// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for authenticated users.
//!
//! Use the `Auth` extractor in handlers or middleware to require
//! authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is AuthenticatedUser
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, Validation};

use super::{AuthError, AuthenticatedUser, SessionClaims};
use crate::state::{AppState, AuthConfig};
use crate::storage::RecordStore;

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Extractor for authenticated users.
///
/// Reuses the user stored by [`super::require_auth`] when the middleware
/// already ran; otherwise verifies the `Authorization` header itself.
pub struct Auth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // First check if middleware already set the user
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>().cloned() {
            return Ok(Auth(user));
        }

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::InvalidAuthHeader)?;

        let user = authenticate(token, &state.auth_config, state.store())?;
        Ok(Auth(user))
    }
}

/// Verify a bearer token and resolve its session.
pub fn authenticate(
    token: &str,
    auth_config: &AuthConfig,
    store: &dyn RecordStore,
) -> Result<AuthenticatedUser, AuthError> {
    let claims = verify_token(token, auth_config)?;

    let session = store
        .find_session_by_token(token)
        .map_err(|e| {
            tracing::warn!(error = %e, "Session lookup failed, rejecting token");
            AuthError::SessionUnavailable
        })?
        .ok_or(AuthError::SessionNotFound)?;

    Ok(AuthenticatedUser::from_session(&claims, &session))
}

/// Check the token signature and expiry, returning its claims.
fn verify_token(token: &str, auth_config: &AuthConfig) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = CLOCK_SKEW_LEEWAY;
    // Sign-in tokens carry no `exp`; it is still checked when present.
    validation.required_spec_claims.clear();
    validation.validate_aud = false;

    let token_data = decode::<SessionClaims>(token, &auth_config.decoding_key(), &validation)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            _ => AuthError::MalformedToken,
        })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use crate::testing::{fixtures, issue_token, test_state, FailingStore, TEST_JWT_SECRET};
    use axum::http::Request;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/test");
        if let Some(value) = value {
            builder = builder.header("Authorization", value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    fn state_with_session(token: &str, user_id: i32) -> AppState {
        let mut store = InMemoryStore::new();
        store.insert_session(fixtures::session(1, user_id, token));
        test_state(store)
    }

    #[tokio::test]
    async fn auth_extractor_requires_auth_header() {
        let state = test_state(InMemoryStore::new());
        let mut parts = parts_with_auth(None);

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn auth_extractor_rejects_non_bearer_scheme() {
        let state = test_state(InMemoryStore::new());
        let mut parts = parts_with_auth(Some("Basic dXNlcjpwYXNz"));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[tokio::test]
    async fn auth_extractor_rejects_garbage_token() {
        let state = test_state(InMemoryStore::new());
        let mut parts = parts_with_auth(Some("Bearer lorem"));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MalformedToken)));
    }

    #[tokio::test]
    async fn auth_extractor_rejects_foreign_signature() {
        let token = encode(
            &Header::default(),
            &SessionClaims::new(5),
            &EncodingKey::from_secret(b"some-other-secret"),
        )
        .unwrap();
        let state = state_with_session(&token, 5);
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidSignature)));
    }

    #[tokio::test]
    async fn auth_extractor_rejects_expired_token() {
        let claims = SessionClaims {
            user_id: 5,
            iat: Some(1_600_000_000),
            exp: Some(1_600_000_600),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .unwrap();
        let state = state_with_session(&token, 5);
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn auth_extractor_requires_session() {
        let state = test_state(InMemoryStore::new());
        let token = issue_token(5);
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::SessionNotFound)));
    }

    #[tokio::test]
    async fn auth_extractor_rejects_when_session_store_fails() {
        let state = test_state(FailingStore);
        let token = issue_token(5);
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::SessionUnavailable)));
    }

    #[tokio::test]
    async fn auth_extractor_succeeds_with_session_token() {
        let token = issue_token(5);
        let state = state_with_session(&token, 5);
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));

        let Auth(user) = Auth::from_request_parts(&mut parts, &state)
            .await
            .expect("token is accepted");
        assert_eq!(user.user_id, 5);
        assert_eq!(user.session_id, 1);
    }

    #[tokio::test]
    async fn auth_extractor_prefers_extensions() {
        let state = test_state(InMemoryStore::new());
        let mut parts = parts_with_auth(None);
        parts.extensions.insert(fixtures::authenticated_user(77));

        let Auth(user) = Auth::from_request_parts(&mut parts, &state)
            .await
            .expect("extension user is used");
        assert_eq!(user.user_id, 77);
    }
}
