// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Service layer between HTTP handlers and the record store.
//!
//! Services borrow the store for the duration of one request and turn
//! "no record" into [`ServiceError::NotFound`], so callers can tell a
//! legitimately absent resource from a store failure.

pub mod hotels;
pub mod tickets;

pub use hotels::HotelService;
pub use tickets::TicketService;

use crate::storage::StorageError;

/// Error type for service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The requested resource does not exist
    #[error("{0} not found")]
    NotFound(String),
    /// The record store failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ServiceError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        ServiceError::NotFound(resource.into())
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
