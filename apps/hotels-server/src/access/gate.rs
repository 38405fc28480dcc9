// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Hotel access gate and its Axum middleware.
//!
//! ```rust,ignore
//! let hotels = Router::new()
//!     .route("/hotels", get(hotels::list_hotels))
//!     .route_layer(from_fn_with_state(state.clone(), require_hotel_access))
//!     .route_layer(from_fn_with_state(state.clone(), require_auth));
//! ```
//!
//! `require_auth` must be the outer layer: the gate reads the user it stored
//! in the request extensions.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::eligibility::is_eligible_for_hotel_access;
use crate::{
    auth::Auth,
    models::UserId,
    services::{ServiceError, TicketService},
    state::AppState,
    storage::RecordStore,
};

/// Result of evaluating the gate for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Ticket found and eligible
    Proceed,
    /// Ticket found but not eligible
    PaymentRequired,
    /// No enrollment or ticket (or the lookup failed)
    NotFound,
}

impl GateOutcome {
    /// Status to reply with when the request is blocked.
    pub fn rejection_status(self) -> Option<StatusCode> {
        match self {
            GateOutcome::Proceed => None,
            GateOutcome::PaymentRequired => Some(StatusCode::PAYMENT_REQUIRED),
            GateOutcome::NotFound => Some(StatusCode::NOT_FOUND),
        }
    }
}

/// Applies the eligibility rule to the current user's ticket.
pub struct HotelAccessGate<'a> {
    tickets: TicketService<'a>,
}

impl<'a> HotelAccessGate<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self {
            tickets: TicketService::new(store),
        }
    }

    /// Evaluate the gate for a user.
    ///
    /// Store failures are reported as `NotFound`, the same as a missing
    /// ticket, and logged so the cause stays visible.
    pub fn apply(&self, user_id: UserId) -> GateOutcome {
        match self.tickets.get_ticket_by_user_id(user_id) {
            Ok(ticket) if is_eligible_for_hotel_access(&ticket) => GateOutcome::Proceed,
            Ok(_) => GateOutcome::PaymentRequired,
            Err(ServiceError::NotFound(resource)) => {
                tracing::debug!(user_id, %resource, "No ticket for hotel access");
                GateOutcome::NotFound
            }
            Err(ServiceError::Storage(e)) => {
                tracing::warn!(
                    user_id,
                    error = %e,
                    "Ticket lookup failed, denying hotel access"
                );
                GateOutcome::NotFound
            }
        }
    }
}

/// Middleware enforcing hotel access before any hotel handler runs.
///
/// Blocked requests get a status-only response.
pub async fn require_hotel_access(
    State(state): State<AppState>,
    Auth(user): Auth,
    request: Request,
    next: Next,
) -> Response {
    let outcome = HotelAccessGate::new(state.store()).apply(user.user_id);
    tracing::debug!(user_id = user.user_id, outcome = ?outcome, "Hotel access gate evaluated");

    match outcome.rejection_status() {
        None => next.run(request).await,
        Some(status) => status.into_response(),
    }
}
