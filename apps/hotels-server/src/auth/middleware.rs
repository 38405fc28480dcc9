// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication middleware for Axum.
//!
//! Applies authentication to a whole router subtree. The resolved user is
//! stored in the request extensions, where the [`super::Auth`] extractor picks
//! it up without verifying the token a second time.
//!
//! ```rust,ignore
//! let app = Router::new()
//!     .route("/hotels", get(list_hotels))
//!     .route_layer(axum::middleware::from_fn_with_state(state.clone(), require_auth));
//! ```

use axum::{extract::Request, middleware::Next, response::Response};

use super::Auth;

/// Reject unauthenticated requests before any inner layer or handler runs.
pub async fn require_auth(Auth(user): Auth, mut request: Request, next: Next) -> Response {
    tracing::debug!(user_id = user.user_id, "Request authenticated");
    request.extensions_mut().insert(user);
    next.run(request).await
}
