use chrono::Local;
use rand::Rng;

use crate::fare::compute_fare;
use crate::journey::{JourneyType, Passenger, PurchaseRequest};
use crate::ticket::{TICKET_ID_SPREAD, Ticket};
use crate::ticket_log::TicketLog;
use crate::{MAX_PASSENGERS, RError, RResult, StationCatalog};

// ------------------------------------------------------------------------------------------------
// --- Validation
// ------------------------------------------------------------------------------------------------

pub fn validate_start(catalog: &StationCatalog, start: usize) -> RResult<()> {
    if catalog.contains(start) {
        Ok(())
    } else {
        Err(RError::InvalidStation(start))
    }
}

pub fn validate_end(catalog: &StationCatalog, start: usize, end: usize) -> RResult<()> {
    if catalog.contains(end) && end != start {
        Ok(())
    } else {
        Err(RError::InvalidDestination(end))
    }
}

pub fn validate_passenger_count(count: usize) -> RResult<()> {
    if (1..=MAX_PASSENGERS).contains(&count) {
        Ok(())
    } else {
        Err(RError::InvalidPassengerCount(count))
    }
}

/// Checks a request in the order the console asks for it: start station, destination,
/// passenger count, then each passenger name. The first failure wins.
pub fn validate_request(catalog: &StationCatalog, request: &PurchaseRequest) -> RResult<()> {
    validate_start(catalog, request.start)?;
    validate_end(catalog, request.start, request.end)?;
    validate_passenger_count(request.passengers.len())?;
    request
        .passengers
        .iter()
        .try_for_each(Passenger::validate_name)
}

// ------------------------------------------------------------------------------------------------
// --- Purchase
// ------------------------------------------------------------------------------------------------

/// Outcome of a successful purchase. A failed log append does not undo the purchase: the
/// ticket is still valid and `log_error` carries the persistence failure.
#[derive(Debug)]
pub struct Purchase {
    ticket: Ticket,
    display: String,
    record: String,
    log_error: Option<RError>,
}

impl Purchase {
    // Getters/Setters

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn record(&self) -> &str {
        &self.record
    }

    pub fn log_error(&self) -> Option<&RError> {
        self.log_error.as_ref()
    }

    // Functions

    pub fn is_persisted(&self) -> bool {
        self.log_error.is_none()
    }
}

// ------------------------------------------------------------------------------------------------
// --- TicketService
// ------------------------------------------------------------------------------------------------

pub struct TicketService<'a, L, R> {
    catalog: &'a StationCatalog,
    ticket_log: L,
    rng: R,
}

impl<'a, L: TicketLog, R: Rng> TicketService<'a, L, R> {
    pub fn new(catalog: &'a StationCatalog, ticket_log: L, rng: R) -> Self {
        Self {
            catalog,
            ticket_log,
            rng,
        }
    }

    // Getters/Setters

    pub fn catalog(&self) -> &'a StationCatalog {
        self.catalog
    }

    pub fn ticket_log(&self) -> &L {
        &self.ticket_log
    }

    pub fn into_ticket_log(self) -> L {
        self.ticket_log
    }

    // Functions

    /// Validates the request, issues the ticket, renders it and appends it to the ticket log.
    pub fn purchase(&mut self, request: PurchaseRequest) -> RResult<Purchase> {
        validate_request(self.catalog, &request)?;
        log::debug!("Purchase request: {request}");

        let issued_at = Local::now();
        let id_offset = self.rng.random_range(0..TICKET_ID_SPREAD);
        let ticket = Ticket::new(request, issued_at, id_offset);

        let display = ticket.display(self.catalog);
        let record = ticket.to_record(self.catalog);

        let log_error = self.ticket_log.append(&record).err();
        match &log_error {
            Some(e) => log::warn!("Ticket {} was not saved: {e}", ticket.ticket_id()),
            None => log::info!(
                "Ticket {} issued, {} -> {} ({}), fare: {}",
                ticket.ticket_id(),
                ticket.start(),
                ticket.end(),
                ticket.journey_type(),
                ticket.total_fare()
            ),
        }

        Ok(Purchase {
            ticket,
            display,
            record,
            log_error,
        })
    }

    /// Fare of a journey in whole currency units, without issuing a ticket.
    pub fn quote(
        &self,
        journey_type: JourneyType,
        start: usize,
        end: usize,
        adults: usize,
        students: usize,
    ) -> RResult<u32> {
        validate_start(self.catalog, start)?;
        validate_end(self.catalog, start, end)?;
        let count = adults
            .checked_add(students)
            .ok_or(RError::InvalidPassengerCount(usize::MAX))?;
        validate_passenger_count(count)?;

        let passengers: Vec<_> = (0..count)
            .map(|i| Passenger::new(format!("Passenger {}", i + 1), i >= adults))
            .collect();

        Ok(compute_fare(start, end, journey_type, &passengers) as u32)
    }
}
