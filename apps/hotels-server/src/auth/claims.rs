// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session token claims and authenticated user representation.

use serde::{Deserialize, Serialize};

use crate::models::{Session, UserId};

/// Claims carried by a session token.
///
/// Tokens issued at sign-in only carry `userId` and `iat`; `exp` is honoured
/// when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Numeric user identifier
    #[serde(rename = "userId")]
    pub user_id: UserId,

    /// Issued at timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration timestamp (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl SessionClaims {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            iat: Some(chrono::Utc::now().timestamp()),
            exp: None,
        }
    }
}

/// Authenticated user information, resolved from a verified token and its
/// session.
///
/// This is the type handlers and the access gate receive through the
/// [`super::Auth`] extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// User the token was issued to
    pub user_id: UserId,

    /// Session holding the token
    pub session_id: i32,
}

impl AuthenticatedUser {
    /// Build from verified claims and the matching session.
    ///
    /// The session's user wins if the two disagree; the session row is the
    /// record of who signed in.
    pub fn from_session(claims: &SessionClaims, session: &Session) -> Self {
        if claims.user_id != session.user_id {
            tracing::warn!(
                claims_user_id = claims.user_id,
                session_user_id = session.user_id,
                "Token user does not match session user"
            );
        }
        Self {
            user_id: session.user_id,
            session_id: session.id,
        }
    }
}
