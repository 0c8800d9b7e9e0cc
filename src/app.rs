use std::io::{BufRead, Write};

use rand::Rng;

use crate::console::{CYAN, Console, GREEN, RED, YELLOW, parse_number, parse_yes};
use crate::fare::RETURN_DISCOUNT;
use crate::journey::{JourneyType, Passenger, PurchaseRequest};
use crate::service::{TicketService, validate_end, validate_passenger_count, validate_start};
use crate::ticket_log::TicketLog;
use crate::{MAX_PASSENGERS, RError, RResult, StationCatalog};

/// Runs the interactive menu until the user exits or the input is closed.
pub fn run_menu<I, O, L, R>(
    console: &mut Console<I, O>,
    service: &mut TicketService<'_, L, R>,
) -> RResult<()>
where
    I: BufRead,
    O: Write,
    L: TicketLog,
    R: Rng,
{
    loop {
        match run_menu_once(console, service) {
            Ok(true) => continue,
            Ok(false) => return Ok(()),
            Err(RError::InputClosed) => {
                log::info!("Input closed, leaving the menu");
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}

/// Prints the fare of a journey without issuing a ticket.
pub fn run_quote<L: TicketLog, R: Rng>(
    service: &TicketService<'_, L, R>,
    journey_type: JourneyType,
    start: usize,
    end: usize,
    adults: usize,
    students: usize,
) -> RResult<u32> {
    let fare = service.quote(journey_type, start, end, adults, students)?;

    let catalog = service.catalog();
    println!(
        "{} -> {} ({}), {} passenger(s): Rs {:.2}",
        catalog.name_of(start),
        catalog.name_of(end),
        journey_type.label(),
        adults.saturating_add(students),
        f64::from(fare)
    );
    Ok(fare)
}

fn run_menu_once<I, O, L, R>(
    console: &mut Console<I, O>,
    service: &mut TicketService<'_, L, R>,
) -> RResult<bool>
where
    I: BufRead,
    O: Write,
    L: TicketLog,
    R: Rng,
{
    console.clear_screen()?;
    display_menu(console)?;

    match parse_number(&console.prompt("\nChoose an option: ")?) {
        1 => {
            buy_ticket(console, service)?;
            let text = console.paint(GREEN, "\nPress Enter to continue...");
            console.print(&text)?;
            console.read_line()?;
            Ok(true)
        }
        2 => {
            console.print_colored(YELLOW, "Thank you for using Mumbai Metro Online Ticketing!")?;
            Ok(false)
        }
        _ => {
            console.print_colored(RED, "Invalid option!")?;
            console.print("Press Enter to continue...")?;
            console.read_line()?;
            Ok(true)
        }
    }
}

fn display_menu<I: BufRead, O: Write>(console: &mut Console<I, O>) -> RResult<()> {
    console.print_colored(
        CYAN,
        "-------------------------------------------\n\
         |    Mumbai Metro Online Ticketing System |\n\
         -------------------------------------------",
    )?;
    console.println("1. Buy Ticket")?;
    console.println("2. Exit")
}

fn display_stations<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    catalog: &StationCatalog,
) -> RResult<()> {
    console.print_colored(GREEN, "Stations:")?;
    for station in catalog.iter() {
        console.println(&format!("{:2}. {}", station.ordinal(), station.name()))?;
    }
    Ok(())
}

fn buy_ticket<I, O, L, R>(
    console: &mut Console<I, O>,
    service: &mut TicketService<'_, L, R>,
) -> RResult<()>
where
    I: BufRead,
    O: Write,
    L: TicketLog,
    R: Rng,
{
    let purchase = collect_request(console, service.catalog())
        .and_then(|request| service.purchase(request));

    let purchase = match purchase {
        Ok(purchase) => purchase,
        Err(e) if e.is_rejection() => {
            log::debug!("Purchase rejected: {e}");
            return console.print_colored(RED, rejection_message(&e));
        }
        Err(e) => return Err(e),
    };

    console.println("")?;
    let ticket = paint_ticket(console, purchase.display());
    console.print(&ticket)?;

    match purchase.log_error() {
        None => {
            let text = format!("\nTicket has been saved to '{}'.", service.ticket_log());
            console.print_colored(YELLOW, &text)
        }
        Some(e) => console.print_colored(RED, &format!("\nWarning: {e}")),
    }
}

/// Asks for the journey one question at a time. A bad answer ends the purchase right away.
fn collect_request<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    catalog: &StationCatalog,
) -> RResult<PurchaseRequest> {
    console.print_colored(CYAN, "\nSelect Journey Type:")?;
    console.println("1. One-way")?;
    console.println(&format!(
        "2. Return ({:.0}% discount)",
        RETURN_DISCOUNT * 100.0
    ))?;
    let choice = parse_number(&console.prompt("\nEnter choice: ")?);
    let journey_type = JourneyType::from_choice(choice)?;

    display_stations(console, catalog)?;
    let start = parse_number(&console.prompt("\nSelect starting station number: ")?);
    validate_start(catalog, start)?;

    let end = parse_number(&console.prompt("Select destination station number: ")?);
    validate_end(catalog, start, end)?;

    let count = parse_number(&console.prompt(&format!(
        "\nEnter number of passengers (max {MAX_PASSENGERS}): "
    ))?);
    validate_passenger_count(count)?;

    let mut passengers = Vec::with_capacity(count);
    for i in 1..=count {
        let name = console.prompt(&format!("Enter passenger #{i} name: "))?;
        let is_student = parse_yes(&console.prompt(&format!("Is {name} a student (Y/N)? "))?);

        let passenger = Passenger::new(name, is_student);
        passenger.validate_name()?;
        passengers.push(passenger);
    }

    Ok(PurchaseRequest {
        journey_type,
        start,
        end,
        passengers,
    })
}

fn rejection_message(e: &RError) -> &'static str {
    match e {
        RError::InvalidJourneyType(_) => "Invalid journey type.",
        RError::InvalidStation(_) => "Invalid selection.",
        RError::InvalidDestination(_) => "Invalid destination.",
        RError::InvalidPassengerCount(_) => "Invalid number.",
        RError::InvalidPassengerName(_) => "Invalid name.",
        _ => "Invalid input.",
    }
}

/// Colors the frame, title and fare of a rendered ticket.
fn paint_ticket<I: BufRead, O: Write>(console: &Console<I, O>, ticket: &str) -> String {
    ticket
        .lines()
        .map(|line| {
            let color = if line.starts_with("---") {
                Some(CYAN)
            } else if line.starts_with('|') {
                Some(YELLOW)
            } else if line.starts_with("Total Fare") {
                Some(GREEN)
            } else {
                None
            };
            let line = color.map_or_else(|| line.to_string(), |c| console.paint(c, line));
            line + "\n"
        })
        .collect()
}
