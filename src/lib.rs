mod app;
mod catalog;
mod cli;
mod console;
mod error;
mod fare;
mod journey;
mod service;
mod ticket;
mod ticket_log;

/// Maximum number of stations in the catalog.
pub const MAX_STATIONS: usize = 50;
/// Maximum length, in characters, of a station or passenger name.
pub const MAX_NAME_LEN: usize = 31;
/// Maximum number of passengers on a single ticket.
pub const MAX_PASSENGERS: usize = 10;

pub use app::{run_menu, run_quote};
pub use catalog::{Station, StationCatalog};
pub use cli::{Cli, Mode};
pub use console::Console;
pub use error::{RError, RResult};
pub use fare::{
    BASE_FARE, RATE_PER_STATION, RETURN_DISCOUNT, STUDENT_DISCOUNT, compute_fare, distance,
    segment_fare,
};
pub use journey::{JourneyType, Passenger, PurchaseRequest};
pub use service::{Purchase, TicketService, validate_request};
pub use ticket::{Ticket, TicketRecord};
pub use ticket_log::{FileTicketLog, TicketLog};
