// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Seed fixtures loaded at startup from `SEED_FILE`.
//!
//! ```json
//! {
//!   "hotels": [{ "id": 1, "name": "Seaside", "image": "...", "createdAt": "...", "updatedAt": "..." }],
//!   "rooms": [],
//!   "enrollments": [],
//!   "ticketTypes": [],
//!   "tickets": [],
//!   "sessions": []
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::StorageResult;
use crate::models::{Enrollment, Hotel, Room, Session, Ticket, TicketType};

/// Every record collection, as read from a seed file. Missing keys are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeedData {
    pub hotels: Vec<Hotel>,
    pub rooms: Vec<Room>,
    pub enrollments: Vec<Enrollment>,
    pub ticket_types: Vec<TicketType>,
    pub tickets: Vec<Ticket>,
    pub sessions: Vec<Session>,
}

impl SeedData {
    /// Read a seed fixture from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> StorageResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Total number of records across collections.
    pub fn len(&self) -> usize {
        self.hotels.len()
            + self.rooms.len()
            + self.enrollments.len()
            + self.ticket_types.len()
            + self.tickets.len()
            + self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
