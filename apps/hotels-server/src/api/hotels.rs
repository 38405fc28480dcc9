// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Hotel listing endpoints.
//!
//! Both routes sit behind `require_auth` and `require_hotel_access`, so the
//! handlers only run for users with an eligible ticket. Every handler error
//! is answered with 404.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::ApiError,
    models::{Hotel, HotelWithRooms},
    services::{hotels::parse_hotel_id, HotelService},
    state::AppState,
};

/// List every hotel.
#[utoipa::path(
    get,
    path = "/hotels",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All hotels", body = [Hotel]),
        (status = 401, description = "Missing or invalid token"),
        (status = 402, description = "Ticket unpaid, remote, or without hotel"),
        (status = 404, description = "No enrollment or ticket, or lookup failed")
    )
)]
pub async fn list_hotels(State(state): State<AppState>) -> Result<Json<Vec<Hotel>>, ApiError> {
    let hotels = HotelService::new(state.store()).list_hotels()?;
    tracing::debug!(count = hotels.len(), "Listed hotels");
    Ok(Json(hotels))
}

/// Get a hotel with its rooms.
#[utoipa::path(
    get,
    path = "/hotels/{hotel_id}",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    params(
        ("hotel_id" = String, Path, description = "Numeric hotel identifier")
    ),
    responses(
        (status = 200, description = "Hotel with rooms", body = HotelWithRooms),
        (status = 401, description = "Missing or invalid token"),
        (status = 402, description = "Ticket unpaid, remote, or without hotel"),
        (status = 404, description = "Unknown hotel, no ticket, or lookup failed")
    )
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<String>,
) -> Result<Json<HotelWithRooms>, ApiError> {
    let hotel_id = parse_hotel_id(&hotel_id)?;
    let hotel = HotelService::new(state.store()).get_hotel_by_id(hotel_id)?;
    tracing::debug!(hotel_id, rooms = hotel.rooms.len(), "Fetched hotel");
    Ok(Json(hotel))
}
