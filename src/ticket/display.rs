use std::fmt::Write;

use crate::StationCatalog;
use crate::fare::STUDENT_DISCOUNT;

use super::Ticket;

pub const SEPARATOR: &str = "-------------------------------------------";

impl Ticket {
    /// Renders the ticket as shown to the passenger after a purchase.
    #[rustfmt::skip]
    pub fn display(&self, catalog: &StationCatalog) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "{SEPARATOR}");
        let _ = writeln!(out, "|           YOUR TICKET                   |");
        let _ = writeln!(out, "{SEPARATOR}");
        let _ = writeln!(out, "From Station   : {}", catalog.name_of(self.start));
        let _ = writeln!(out, "To Station     : {}", catalog.name_of(self.end));
        let _ = writeln!(out, "Journey Type   : {}", self.journey_type.label());
        let _ = writeln!(out, "No. Passengers : {}", self.passengers.len());
        let _ = writeln!(out, "Passengers     :");
        for passenger in &self.passengers {
            let _ = write!(out, "  - {}", passenger.name());
            if passenger.is_student() {
                let _ = write!(out, " (Student, {:.0}% off)", STUDENT_DISCOUNT * 100.0);
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "Total Fare     : Rs {:.2}", f64::from(self.total_fare));
        let _ = writeln!(out, "Date/Time      : {}", self.issued_at_ctime());
        let _ = writeln!(out, "Ticket ID      : {}", self.ticket_id);
        let _ = writeln!(out, "Journey must start within 60 minutes.");
        let _ = writeln!(out, "Thank you for choosing Mumbai Metro!");
        let _ = writeln!(out, "{SEPARATOR}");

        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::journey::{JourneyType, Passenger};
    use crate::ticket::tests::{create_issued_at, create_test_catalog, create_test_ticket};

    #[test]
    fn test_display() {
        let ticket = create_test_ticket(
            JourneyType::Return,
            vec![Passenger::new("Ravi", false), Passenger::new("Meera", true)],
        );
        let expected = format!(
            "\
-------------------------------------------
|           YOUR TICKET                   |
-------------------------------------------
From Station   : Versova
To Station     : Chakala
Journey Type   : Return
No. Passengers : 2
Passengers     :
  - Ravi
  - Meera (Student, 20% off)
Total Fare     : Rs 122.00
Date/Time      : Mon Mar 16 09:05:03 2026
Ticket ID      : {}
Journey must start within 60 minutes.
Thank you for choosing Mumbai Metro!
-------------------------------------------
",
            create_issued_at(16).timestamp() + 42
        );

        assert_eq!(ticket.display(&create_test_catalog()), expected);
    }

    #[test]
    fn test_display_one_way_label() {
        let ticket = create_test_ticket(JourneyType::OneWay, vec![Passenger::new("Ravi", false)]);
        let text = ticket.display(&create_test_catalog());
        assert!(text.contains("Journey Type   : One-way\n"));
        assert!(text.contains("Total Fare     : Rs 40.00\n"));
        assert!(!text.contains("Student"));
    }
}
