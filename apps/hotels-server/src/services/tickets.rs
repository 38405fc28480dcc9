// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ticket lookup by user.
//!
//! A user owns at most one enrollment and an enrollment at most one ticket,
//! so "the user's ticket" is the ticket of the user's enrollment.

use super::{ServiceError, ServiceResult};
use crate::models::{TicketWithType, UserId};
use crate::storage::RecordStore;

pub struct TicketService<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> TicketService<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// The ticket (joined with its type) belonging to a user.
    ///
    /// # Errors
    /// `ServiceError::NotFound` when the user has no enrollment, or the
    /// enrollment has no ticket.
    pub fn get_ticket_by_user_id(&self, user_id: UserId) -> ServiceResult<TicketWithType> {
        let enrollment = self
            .store
            .find_enrollment_by_user_id(user_id)?
            .ok_or_else(|| ServiceError::not_found(format!("Enrollment for user {user_id}")))?;

        self.store
            .find_ticket_by_enrollment_id(enrollment.id)?
            .ok_or_else(|| {
                ServiceError::not_found(format!("Ticket for enrollment {}", enrollment.id))
            })
    }
}
