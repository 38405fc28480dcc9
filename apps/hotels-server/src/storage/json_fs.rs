// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! File-backed record store.
//!
//! Each record is a pretty-printed JSON document at
//! `{DATA_DIR}/{collection}/{id}.json`. Lookups scan the collection directory,
//! which is fine for the handful of hotels and attendees an event carries.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use super::{
    join_rooms, seed::SeedData, Record, RecordStore, StorageError, StoragePaths, StorageResult,
};
use crate::models::{
    Enrollment, Hotel, HotelWithRooms, Room, Session, Ticket, TicketType, TicketWithType, UserId,
};

/// Record store backed by one JSON file per record.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    paths: StoragePaths,
    initialized: bool,
}

impl JsonFileStore {
    /// Create a new JsonFileStore.
    ///
    /// Does NOT create the directory structure. Call `initialize()` first.
    pub fn new(paths: StoragePaths) -> Self {
        Self {
            paths,
            initialized: false,
        }
    }

    /// Get the storage paths.
    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    /// Create every collection directory. Safe to call multiple times.
    pub fn initialize(&mut self) -> StorageResult<()> {
        let dirs = [
            self.paths.collection_dir::<Hotel>(),
            self.paths.collection_dir::<Room>(),
            self.paths.collection_dir::<Enrollment>(),
            self.paths.collection_dir::<Ticket>(),
            self.paths.collection_dir::<TicketType>(),
            self.paths.collection_dir::<Session>(),
        ];

        for dir in dirs {
            fs::create_dir_all(&dir)?;
        }

        self.initialized = true;
        Ok(())
    }

    /// Write a record, replacing any existing record with the same id.
    pub fn insert<R: Record + Serialize>(&self, record: &R) -> StorageResult<()> {
        self.write_json(self.paths.record::<R>(record.id()), record)
    }

    /// Write every record of a seed fixture.
    pub fn import(&self, seed: &SeedData) -> StorageResult<()> {
        seed.hotels.iter().try_for_each(|r| self.insert(r))?;
        seed.rooms.iter().try_for_each(|r| self.insert(r))?;
        seed.enrollments.iter().try_for_each(|r| self.insert(r))?;
        seed.ticket_types.iter().try_for_each(|r| self.insert(r))?;
        seed.tickets.iter().try_for_each(|r| self.insert(r))?;
        seed.sessions.iter().try_for_each(|r| self.insert(r))?;
        Ok(())
    }

    /// Read a single record by id.
    fn get<R: Record + DeserializeOwned>(&self, id: i32) -> StorageResult<Option<R>> {
        let path = self.paths.record::<R>(id);
        if !path.is_file() {
            return Ok(None);
        }
        self.read_json(path).map(Some)
    }

    /// Read every record in a collection, ordered by id.
    ///
    /// Files that fail to parse are skipped with a warning so one bad document
    /// does not take the whole listing down.
    fn load_all<R: Record + DeserializeOwned>(&self) -> StorageResult<Vec<R>> {
        let mut records = Vec::new();
        for id in self.list_ids(self.paths.collection_dir::<R>())? {
            match self.get::<R>(id) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(
                        collection = R::COLLECTION,
                        id,
                        error = %e,
                        "Skipping unreadable record"
                    );
                }
            }
        }
        records.sort_by_key(R::id);
        Ok(records)
    }

    fn read_json<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> StorageResult<T> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Write a JSON file (atomic write via rename).
    fn write_json<T: Serialize>(&self, path: impl AsRef<Path>, value: &T) -> StorageResult<()> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }

        fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Numeric ids of the `*.json` files in a directory.
    fn list_ids(&self, dir: impl AsRef<Path>) -> StorageResult<Vec<i32>> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            if let Some(id) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| stem.parse().ok())
            {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}

impl RecordStore for JsonFileStore {
    fn find_hotels(&self) -> StorageResult<Vec<Hotel>> {
        self.load_all()
    }

    fn find_hotel_by_id(&self, hotel_id: i32) -> StorageResult<Option<HotelWithRooms>> {
        let Some(hotel) = self.get::<Hotel>(hotel_id)? else {
            return Ok(None);
        };
        let rooms = self.load_all::<Room>()?;
        Ok(Some(join_rooms(hotel, &rooms)))
    }

    fn find_enrollment_by_user_id(&self, user_id: UserId) -> StorageResult<Option<Enrollment>> {
        Ok(self
            .load_all::<Enrollment>()?
            .into_iter()
            .find(|enrollment| enrollment.user_id == user_id))
    }

    fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> StorageResult<Option<TicketWithType>> {
        let Some(ticket) = self
            .load_all::<Ticket>()?
            .into_iter()
            .find(|ticket| ticket.enrollment_id == enrollment_id)
        else {
            return Ok(None);
        };
        let ticket_type = self.get::<TicketType>(ticket.ticket_type_id)?;
        Ok(Some(TicketWithType {
            ticket,
            ticket_type,
        }))
    }

    fn find_session_by_token(&self, token: &str) -> StorageResult<Option<Session>> {
        Ok(self
            .load_all::<Session>()?
            .into_iter()
            .find(|session| session.token == token))
    }

    /// Write-read-delete probe against the data directory.
    fn health_check(&self) -> StorageResult<()> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let probe = self.paths.root().join(".health_check");
        let data = b"health_check_data";
        fs::write(&probe, data)?;
        let read_back = fs::read(&probe)?;
        fs::remove_file(&probe)?;

        if read_back != data {
            return Err(StorageError::Unavailable(
                "Health check data mismatch".to_string(),
            ));
        }
        Ok(())
    }
}
