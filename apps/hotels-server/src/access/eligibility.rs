// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Hotel access eligibility rule.

use crate::models::{TicketStatus, TicketWithType};

/// Whether a ticket grants access to hotel listings.
///
/// True iff the ticket is `PAID`, its type is not remote, and its type
/// includes a hotel stay. A ticket whose type could not be resolved is never
/// eligible.
pub fn is_eligible_for_hotel_access(ticket: &TicketWithType) -> bool {
    let Some(ticket_type) = &ticket.ticket_type else {
        return false;
    };

    ticket.ticket.status == TicketStatus::Paid
        && !ticket_type.is_remote
        && ticket_type.includes_hotel
}
