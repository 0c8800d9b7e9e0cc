use std::error::Error;
use std::io::{self, IsTerminal};
use std::process;

use clap::Parser;
use log::LevelFilter;
use metro_ticketing::{
    Cli, Console, FileTicketLog, Mode, StationCatalog, TicketService, run_menu, run_quote,
};

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Off)
        .with_module_level("metro_ticketing", LevelFilter::Warn)
        .env()
        .init()?;

    let cli = Cli::parse();

    // Nothing can be sold without the station list.
    let catalog = match StationCatalog::load(&cli.stations) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let ticket_log = FileTicketLog::new(&cli.tickets);
    let mut service = TicketService::new(&catalog, ticket_log, rand::rng());

    match cli.mode.unwrap_or(Mode::Menu) {
        Mode::Menu => {
            let clear = io::stdout().is_terminal();
            let mut console =
                Console::new(io::stdin().lock(), io::stdout().lock(), !cli.no_color, clear);
            run_menu(&mut console, &mut service)?;
        }
        Mode::Quote {
            journey_type,
            from,
            to,
            adults,
            students,
        } => {
            if let Err(e) = run_quote(&service, journey_type, from, to, adults, students) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }

    Ok(())
}
