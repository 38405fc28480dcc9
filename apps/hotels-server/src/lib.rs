// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Hotels Service - Ticket-gated hotel listings
//!
//! Serves the event's partner hotels and their rooms to attendees whose
//! ticket is paid, in-person and bundles a hotel stay.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Bearer session-token authentication
//! - `access` - Hotel access eligibility rule and gate middleware
//! - `services` - Ticket lookup and hotel queries
//! - `storage` - Record store trait with in-memory and JSON file backends

pub mod access;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;
