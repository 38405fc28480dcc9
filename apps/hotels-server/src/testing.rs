// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Shared test helpers: record fixtures, token minting and store doubles.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::auth::SessionClaims;
use crate::models::{
    Enrollment, Hotel, HotelWithRooms, Session, TicketWithType, UserId,
};
use crate::state::{AppState, AuthConfig};
use crate::storage::{InMemoryStore, RecordStore, StorageError, StorageResult};

pub const TEST_JWT_SECRET: &str = "test-secret";

/// App state over `store` using [`TEST_JWT_SECRET`].
pub fn test_state(store: impl RecordStore + 'static) -> AppState {
    AppState::new(store, AuthConfig::new(TEST_JWT_SECRET))
}

/// Mint a session token for a user, signed with [`TEST_JWT_SECRET`].
pub fn issue_token(user_id: UserId) -> String {
    encode(
        &Header::default(),
        &SessionClaims::new(user_id),
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("token encodes")
}

pub mod fixtures {
    use chrono::{DateTime, Utc};

    use crate::auth::AuthenticatedUser;
    use crate::models::{
        Enrollment, Hotel, Room, Session, Ticket, TicketStatus, TicketType, UserId,
    };

    fn timestamp() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    pub fn hotel(id: i32) -> Hotel {
        Hotel {
            id,
            name: format!("Hotel {id}"),
            image: format!("https://images.example/hotels/{id}.png"),
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    pub fn room(id: i32, hotel_id: i32) -> Room {
        Room {
            id,
            name: format!("A - {id}"),
            capacity: 3,
            hotel_id,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    pub fn enrollment(id: i32, user_id: UserId) -> Enrollment {
        Enrollment {
            id,
            user_id,
            name: format!("Attendee {user_id}"),
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    pub fn ticket_type(id: i32, is_remote: bool, includes_hotel: bool) -> TicketType {
        TicketType {
            id,
            name: format!("Ticket type {id}"),
            price: 25_000,
            is_remote,
            includes_hotel,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    pub fn ticket(id: i32, enrollment_id: i32, ticket_type_id: i32, status: TicketStatus) -> Ticket {
        Ticket {
            id,
            ticket_type_id,
            enrollment_id,
            status,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    pub fn session(id: i32, user_id: UserId, token: &str) -> Session {
        Session {
            id,
            user_id,
            token: token.to_string(),
            created_at: timestamp(),
        }
    }

    pub fn authenticated_user(user_id: UserId) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id,
            session_id: 1,
        }
    }
}

/// A store whose every read fails.
pub struct FailingStore;

impl FailingStore {
    fn unavailable<T>() -> StorageResult<T> {
        Err(StorageError::Unavailable("store offline".to_string()))
    }
}

impl RecordStore for FailingStore {
    fn find_hotels(&self) -> StorageResult<Vec<Hotel>> {
        Self::unavailable()
    }

    fn find_hotel_by_id(&self, _hotel_id: i32) -> StorageResult<Option<HotelWithRooms>> {
        Self::unavailable()
    }

    fn find_enrollment_by_user_id(&self, _user_id: UserId) -> StorageResult<Option<Enrollment>> {
        Self::unavailable()
    }

    fn find_ticket_by_enrollment_id(
        &self,
        _enrollment_id: i32,
    ) -> StorageResult<Option<TicketWithType>> {
        Self::unavailable()
    }

    fn find_session_by_token(&self, _token: &str) -> StorageResult<Option<Session>> {
        Self::unavailable()
    }

    fn health_check(&self) -> StorageResult<()> {
        Self::unavailable()
    }
}

/// Read counters shared with a [`ScriptedStore`] after it moves into app state.
#[derive(Clone, Default)]
pub struct ReadCounts {
    pub hotels: Arc<AtomicUsize>,
    pub enrollments: Arc<AtomicUsize>,
    pub tickets: Arc<AtomicUsize>,
    pub sessions: Arc<AtomicUsize>,
}

impl ReadCounts {
    pub fn hotels(&self) -> usize {
        self.hotels.load(Ordering::SeqCst)
    }

    pub fn enrollments(&self) -> usize {
        self.enrollments.load(Ordering::SeqCst)
    }

    pub fn tickets(&self) -> usize {
        self.tickets.load(Ordering::SeqCst)
    }

    pub fn sessions(&self) -> usize {
        self.sessions.load(Ordering::SeqCst)
    }
}

/// Wraps an in-memory store, counting reads and optionally failing hotel reads.
pub struct ScriptedStore {
    inner: InMemoryStore,
    fail_hotel_reads: bool,
    pub reads: ReadCounts,
}

impl ScriptedStore {
    pub fn new(inner: InMemoryStore) -> Self {
        Self {
            inner,
            fail_hotel_reads: false,
            reads: ReadCounts::default(),
        }
    }

    pub fn failing_hotel_reads(mut self) -> Self {
        self.fail_hotel_reads = true;
        self
    }

    fn record_hotel_read(&self) -> StorageResult<()> {
        self.reads.hotels.fetch_add(1, Ordering::SeqCst);
        if self.fail_hotel_reads {
            return Err(StorageError::Unavailable("hotel table locked".to_string()));
        }
        Ok(())
    }
}

impl RecordStore for ScriptedStore {
    fn find_hotels(&self) -> StorageResult<Vec<Hotel>> {
        self.record_hotel_read()?;
        self.inner.find_hotels()
    }

    fn find_hotel_by_id(&self, hotel_id: i32) -> StorageResult<Option<HotelWithRooms>> {
        self.record_hotel_read()?;
        self.inner.find_hotel_by_id(hotel_id)
    }

    fn find_enrollment_by_user_id(&self, user_id: UserId) -> StorageResult<Option<Enrollment>> {
        self.reads.enrollments.fetch_add(1, Ordering::SeqCst);
        self.inner.find_enrollment_by_user_id(user_id)
    }

    fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> StorageResult<Option<TicketWithType>> {
        self.reads.tickets.fetch_add(1, Ordering::SeqCst);
        self.inner.find_ticket_by_enrollment_id(enrollment_id)
    }

    fn find_session_by_token(&self, token: &str) -> StorageResult<Option<Session>> {
        self.reads.sessions.fetch_add(1, Ordering::SeqCst);
        self.inner.find_session_by_token(token)
    }
}
