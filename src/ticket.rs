mod display;
mod record;

use chrono::{DateTime, Local};

use crate::fare::compute_fare;
use crate::journey::{JourneyType, Passenger, PurchaseRequest};

pub use record::TicketRecord;

/// Layout of C's `ctime`, used for both the printed ticket and the log record.
pub const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Upper bound (exclusive) of the random offset added to the issuance timestamp.
pub const TICKET_ID_SPREAD: i64 = 10_000;

/// A purchased ticket. Built once from a validated request, never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    ticket_id: i64,
    journey_type: JourneyType,
    start: usize,
    end: usize,
    passengers: Vec<Passenger>,
    total_fare: u32,
    issued_at: DateTime<Local>,
}

impl Ticket {
    /// Issues a ticket for an already validated request. `id_offset` is added to the issuance
    /// timestamp (in whole seconds) to form the ticket id.
    pub fn new(request: PurchaseRequest, issued_at: DateTime<Local>, id_offset: i64) -> Self {
        let PurchaseRequest {
            journey_type,
            start,
            end,
            passengers,
        } = request;

        // Truncated, not rounded.
        let total_fare = compute_fare(start, end, journey_type, &passengers) as u32;

        Self {
            ticket_id: issued_at.timestamp() + id_offset,
            journey_type,
            start,
            end,
            passengers,
            total_fare,
            issued_at,
        }
    }

    // Getters/Setters

    pub fn ticket_id(&self) -> i64 {
        self.ticket_id
    }

    pub fn journey_type(&self) -> JourneyType {
        self.journey_type
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn total_fare(&self) -> u32 {
        self.total_fare
    }

    pub fn issued_at(&self) -> DateTime<Local> {
        self.issued_at
    }

    // Functions

    fn issued_at_ctime(&self) -> String {
        self.issued_at.format(CTIME_FORMAT).to_string()
    }
}
