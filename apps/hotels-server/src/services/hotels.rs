// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Hotel queries.

use super::{ServiceError, ServiceResult};
use crate::models::{Hotel, HotelWithRooms};
use crate::storage::RecordStore;

/// Read-only hotel queries against the record store.
pub struct HotelService<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> HotelService<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// All hotels in store order. Store failures propagate untranslated.
    pub fn list_hotels(&self) -> ServiceResult<Vec<Hotel>> {
        Ok(self.store.find_hotels()?)
    }

    /// A hotel with its rooms.
    ///
    /// # Errors
    /// `ServiceError::NotFound` when no hotel has this id.
    pub fn get_hotel_by_id(&self, hotel_id: i32) -> ServiceResult<HotelWithRooms> {
        self.store
            .find_hotel_by_id(hotel_id)?
            .ok_or_else(|| ServiceError::not_found(format!("Hotel {hotel_id}")))
    }
}

/// Convert a path segment into a hotel id.
///
/// Anything that is not an `i32` cannot name a hotel, so it is reported as
/// not found rather than as a bad request.
pub fn parse_hotel_id(raw: &str) -> ServiceResult<i32> {
    raw.trim()
        .parse()
        .map_err(|_| ServiceError::not_found(format!("Hotel {raw}")))
}
