// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Record Store
//!
//! Read access to hotels, rooms, enrollments, tickets and sessions.
//!
//! The rest of the service only sees the [`RecordStore`] trait, injected
//! through [`crate::state::AppState`] as an `Arc<dyn RecordStore>`. Two
//! implementations ship with the server:
//!
//! - [`InMemoryStore`]: `BTreeMap`s keyed by id, used whenever `DATA_DIR` is
//!   unset (and by tests)
//! - [`JsonFileStore`]: one JSON document per record under `DATA_DIR`
//!
//! ## Storage Layout (`JsonFileStore`)
//!
//! ```text
//! {DATA_DIR}/
//!   hotels/{id}.json
//!   rooms/{id}.json
//!   enrollments/{id}.json
//!   tickets/{id}.json
//!   ticket_types/{id}.json
//!   sessions/{id}.json
//! ```

pub mod json_fs;
pub mod memory;
pub mod paths;
pub mod seed;

use std::io;

use crate::models::{
    Enrollment, Hotel, HotelWithRooms, Room, Session, Ticket, TicketType, TicketWithType, UserId,
};

pub use json_fs::JsonFileStore;
pub use memory::InMemoryStore;
pub use paths::StoragePaths;
pub use seed::SeedData;

/// Error type for record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Storage directories have not been created yet
    #[error("Storage not initialized")]
    NotInitialized,
    /// Backing store cannot serve requests right now
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Data access consumed by the access gate, ticket lookup and hotel queries.
///
/// Lookups that find nothing return `Ok(None)`; `Err` is reserved for the
/// store itself failing.
pub trait RecordStore: Send + Sync {
    /// All hotels, ordered by id.
    fn find_hotels(&self) -> StorageResult<Vec<Hotel>>;

    /// A hotel joined with its rooms (rooms ordered by id).
    fn find_hotel_by_id(&self, hotel_id: i32) -> StorageResult<Option<HotelWithRooms>>;

    /// The enrollment owned by a user, if any.
    fn find_enrollment_by_user_id(&self, user_id: UserId) -> StorageResult<Option<Enrollment>>;

    /// The ticket attached to an enrollment, joined with its type.
    fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> StorageResult<Option<TicketWithType>>;

    /// The session holding a bearer token.
    fn find_session_by_token(&self, token: &str) -> StorageResult<Option<Session>>;

    /// Check the store can serve reads.
    fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }
}

/// A record persisted under its own collection, keyed by integer id.
pub trait Record {
    /// Collection (directory) name.
    const COLLECTION: &'static str;

    fn id(&self) -> i32;
}

macro_rules! impl_record {
    ($($ty:ty => $collection:literal),* $(,)?) => {
        $(
            impl Record for $ty {
                const COLLECTION: &'static str = $collection;

                fn id(&self) -> i32 {
                    self.id
                }
            }
        )*
    };
}

impl_record! {
    Hotel => "hotels",
    Room => "rooms",
    Enrollment => "enrollments",
    Ticket => "tickets",
    TicketType => "ticket_types",
    Session => "sessions",
}

/// Join a hotel with the rooms that point at it, ordered by room id.
pub(crate) fn join_rooms<'a>(
    hotel: Hotel,
    rooms: impl IntoIterator<Item = &'a Room>,
) -> HotelWithRooms {
    let mut rooms: Vec<Room> = rooms
        .into_iter()
        .filter(|room| room.hotel_id == hotel.id)
        .cloned()
        .collect();
    rooms.sort_by_key(|room| room.id);
    HotelWithRooms { hotel, rooms }
}
