// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Hotel Access
//!
//! Hotel data is only served to attendees whose ticket is paid, in-person and
//! bundles a hotel stay.
//!
//! ## Request Flow
//!
//! 1. `require_auth` resolves the bearer token to a user (401 on failure)
//! 2. `require_hotel_access` loads the user's ticket and evaluates it:
//!    - no enrollment or ticket → 404
//!    - ticket not eligible → 402
//!    - eligible → the hotel handler runs
//!
//! The check runs on every request; eligibility is never cached.

pub mod eligibility;
pub mod gate;

pub use eligibility::is_eligible_for_hotel_access;
pub use gate::{require_hotel_access, GateOutcome, HotelAccessGate};
