// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Data Models
//!
//! Records read by the hotels service. Field names serialize in camelCase so
//! the JSON shape matches what the event frontend already consumes
//! (`createdAt`, `hotelId`, `isRemote`, ...).
//!
//! ## Model Categories
//!
//! - **Hotels**: [`Hotel`], [`Room`] and the detail view [`HotelWithRooms`]
//! - **Tickets**: [`Ticket`], [`TicketType`] and the joined [`TicketWithType`]
//! - **Identity**: [`Enrollment`] and [`Session`], used to resolve a user's ticket
//!   and to accept bearer tokens

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Numeric user identifier carried in the session token.
pub type UserId = i32;

// =============================================================================
// Hotel Models
// =============================================================================

/// A partner hotel offered to in-person attendees.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// Unique hotel identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Image URL shown on the hotel card.
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A room belonging to a hotel.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier.
    pub id: i32,
    /// Room label, e.g. `"A - 12"`.
    pub name: String,
    /// Number of guests the room holds (always positive).
    pub capacity: i32,
    /// Owning hotel.
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Hotel detail view: the hotel record plus its rooms.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct HotelWithRooms {
    #[serde(flatten)]
    pub hotel: Hotel,
    /// Rooms in store order.
    #[serde(rename = "Rooms")]
    pub rooms: Vec<Room>,
}

// =============================================================================
// Ticket Models
// =============================================================================

/// Payment status of a ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Ticket held but not yet paid.
    Reserved,
    /// Payment confirmed.
    Paid,
    /// Any status this service does not know about (cancelled, refunded, ...).
    #[serde(other)]
    Other,
}

/// Category of ticket. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: i32,
    pub name: String,
    /// Price in cents.
    pub price: i32,
    /// Remote tickets carry no in-person venue access.
    pub is_remote: bool,
    /// Whether the price bundles hotel access.
    pub includes_hotel: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user's registration purchase.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i32,
    pub ticket_type_id: i32,
    pub enrollment_id: i32,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A ticket joined with its type.
///
/// The type is optional: a dangling `ticketTypeId` yields `None` rather than a
/// lookup error, and callers treat it as "no hotel access".
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TicketWithType {
    #[serde(flatten)]
    pub ticket: Ticket,
    #[serde(rename = "TicketType", default)]
    pub ticket_type: Option<TicketType>,
}

// =============================================================================
// Identity Models
// =============================================================================

/// A user's event enrollment. Tickets hang off enrollments, not users.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i32,
    pub user_id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A sign-in session. A bearer token is accepted only while its session exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i32,
    pub user_id: UserId,
    pub token: String,
    pub created_at: DateTime<Utc>,
}
