// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory record store.
//!
//! Populated once at startup (or by a test) and then shared read-only behind
//! an `Arc`, so lookups take no locks.

use std::collections::BTreeMap;

use super::{join_rooms, seed::SeedData, RecordStore, StorageResult};
use crate::models::{
    Enrollment, Hotel, HotelWithRooms, Room, Session, Ticket, TicketType, TicketWithType, UserId,
};

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    hotels: BTreeMap<i32, Hotel>,
    rooms: BTreeMap<i32, Room>,
    enrollments: BTreeMap<i32, Enrollment>,
    tickets: BTreeMap<i32, Ticket>,
    ticket_types: BTreeMap<i32, TicketType>,
    sessions: BTreeMap<i32, Session>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_hotel(&mut self, hotel: Hotel) {
        self.hotels.insert(hotel.id, hotel);
    }

    pub fn insert_room(&mut self, room: Room) {
        self.rooms.insert(room.id, room);
    }

    pub fn insert_enrollment(&mut self, enrollment: Enrollment) {
        self.enrollments.insert(enrollment.id, enrollment);
    }

    pub fn insert_ticket(&mut self, ticket: Ticket) {
        self.tickets.insert(ticket.id, ticket);
    }

    pub fn insert_ticket_type(&mut self, ticket_type: TicketType) {
        self.ticket_types.insert(ticket_type.id, ticket_type);
    }

    pub fn insert_session(&mut self, session: Session) {
        self.sessions.insert(session.id, session);
    }

    /// Load every record of a seed fixture.
    pub fn import(&mut self, seed: SeedData) {
        seed.hotels.into_iter().for_each(|r| self.insert_hotel(r));
        seed.rooms.into_iter().for_each(|r| self.insert_room(r));
        seed.enrollments
            .into_iter()
            .for_each(|r| self.insert_enrollment(r));
        seed.ticket_types
            .into_iter()
            .for_each(|r| self.insert_ticket_type(r));
        seed.tickets.into_iter().for_each(|r| self.insert_ticket(r));
        seed.sessions.into_iter().for_each(|r| self.insert_session(r));
    }
}

impl From<SeedData> for InMemoryStore {
    fn from(seed: SeedData) -> Self {
        let mut store = Self::new();
        store.import(seed);
        store
    }
}

impl RecordStore for InMemoryStore {
    fn find_hotels(&self) -> StorageResult<Vec<Hotel>> {
        Ok(self.hotels.values().cloned().collect())
    }

    fn find_hotel_by_id(&self, hotel_id: i32) -> StorageResult<Option<HotelWithRooms>> {
        Ok(self
            .hotels
            .get(&hotel_id)
            .cloned()
            .map(|hotel| join_rooms(hotel, self.rooms.values())))
    }

    fn find_enrollment_by_user_id(&self, user_id: UserId) -> StorageResult<Option<Enrollment>> {
        Ok(self
            .enrollments
            .values()
            .find(|enrollment| enrollment.user_id == user_id)
            .cloned())
    }

    fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> StorageResult<Option<TicketWithType>> {
        Ok(self
            .tickets
            .values()
            .find(|ticket| ticket.enrollment_id == enrollment_id)
            .map(|ticket| TicketWithType {
                ticket: ticket.clone(),
                ticket_type: self.ticket_types.get(&ticket.ticket_type_id).cloned(),
            }))
    }

    fn find_session_by_token(&self, token: &str) -> StorageResult<Option<Session>> {
        Ok(self
            .sessions
            .values()
            .find(|session| session.token == token)
            .cloned())
    }
}
