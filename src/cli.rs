use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::journey::JourneyType;

#[derive(Subcommand, Debug, Clone)]
pub enum Mode {
    /// Interactive ticket purchase menu
    Menu,
    /// Prints the fare of a journey without issuing a ticket
    Quote {
        /// Journey type: one-way or return
        #[arg(short, long, default_value_t = JourneyType::OneWay)]
        journey_type: JourneyType,
        /// Starting station number
        #[arg(short, long)]
        from: usize,
        /// Destination station number
        #[arg(short, long)]
        to: usize,
        /// Number of full fare passengers
        #[arg(short, long, default_value_t = 1)]
        adults: usize,
        /// Number of student passengers
        #[arg(short, long, default_value_t = 0)]
        students: usize,
    },
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Station list, one name per line
    #[arg(long, default_value = "stations.txt")]
    pub stations: PathBuf,
    /// File the issued tickets are appended to
    #[arg(long, default_value = "tickets.txt")]
    pub tickets: PathBuf,
    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
    /// What mode is used, defaults to the interactive menu
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["metro-ticketing"]);
        assert_eq!(cli.stations, PathBuf::from("stations.txt"));
        assert_eq!(cli.tickets, PathBuf::from("tickets.txt"));
        assert!(!cli.no_color);
        assert!(cli.mode.is_none());
    }

    #[test]
    fn test_quote() {
        let cli = Cli::parse_from([
            "metro-ticketing",
            "--stations",
            "line1.txt",
            "quote",
            "--journey-type",
            "return",
            "--from",
            "1",
            "--to",
            "4",
            "--students",
            "2",
        ]);
        assert_eq!(cli.stations, PathBuf::from("line1.txt"));

        let Some(Mode::Quote {
            journey_type,
            from,
            to,
            adults,
            students,
        }) = cli.mode
        else {
            panic!("expected quote mode");
        };
        assert_eq!(journey_type, JourneyType::Return);
        assert_eq!((from, to, adults, students), (1, 4, 1, 2));
    }
}
