// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Bearer-token authentication for the hotels API.
//!
//! ## Auth Flow
//!
//! 1. The sign-in service issues an HS256 JWT carrying `userId` and records it
//!    as a session
//! 2. The client sends `Authorization: Bearer <token>`
//! 3. This server:
//!    - Verifies the signature with `JWT_SECRET` (and `exp`, when present)
//!    - Requires a session holding the exact token
//!    - Exposes the user as [`AuthenticatedUser`]
//!
//! ## Security
//!
//! - Every `/hotels` endpoint requires authentication
//! - Health and docs endpoints are public
//! - Clock skew tolerance is 60 seconds

pub mod claims;
pub mod error;
pub mod extractor;
pub mod middleware;

pub use claims::{AuthenticatedUser, SessionClaims};
pub use error::AuthError;
pub use extractor::Auth;
pub use middleware::require_auth;
