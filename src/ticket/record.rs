use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::journey::{JourneyType, Passenger, STUDENT_MARKER};
use crate::{RError, RResult, StationCatalog};

use super::Ticket;

const FIELD_DELIMITER: &str = " | ";
const NAME_DELIMITER: &str = ", ";

impl Ticket {
    /// Renders the single line appended to the ticket log, without the trailing newline.
    ///
    /// `TicketID: <id> | From: <a> | To: <b> | Type: <Oneway|Return> | Passengers: <n> |
    /// Names: <name>[(S)], ... | Fare: Rs <fare> | Date: <ctime>`
    pub fn to_record(&self, catalog: &StationCatalog) -> String {
        let names = self
            .passengers
            .iter()
            .map(|p| {
                if p.is_student() {
                    format!("{}{STUDENT_MARKER}", p.name())
                } else {
                    p.name().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(NAME_DELIMITER);

        [
            format!("TicketID: {}", self.ticket_id),
            format!("From: {}", catalog.name_of(self.start)),
            format!("To: {}", catalog.name_of(self.end)),
            format!("Type: {}", self.journey_type.record_label()),
            format!("Passengers: {}", self.passengers.len()),
            format!("Names: {names}"),
            format!("Fare: Rs {:.2}", f64::from(self.total_fare)),
            format!("Date: {}", self.issued_at_ctime()),
        ]
        .join(FIELD_DELIMITER)
    }
}

// ------------------------------------------------------------------------------------------------
// --- TicketRecord
// ------------------------------------------------------------------------------------------------

/// A ticket as read back from one line of the ticket log.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRecord {
    ticket_id: i64,
    from: String,
    to: String,
    journey_type: JourneyType,
    passengers: Vec<Passenger>,
    fare: f64,
    issued_at: NaiveDateTime,
}

impl TicketRecord {
    // Getters/Setters

    pub fn ticket_id(&self) -> i64 {
        self.ticket_id
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn journey_type(&self) -> JourneyType {
        self.journey_type
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn fare(&self) -> f64 {
        self.fare
    }

    pub fn issued_at(&self) -> NaiveDateTime {
        self.issued_at
    }
}

impl FromStr for TicketRecord {
    type Err = RError;

    fn from_str(line: &str) -> RResult<Self> {
        let malformed = || RError::MalformedRecord(line.to_string());

        let fields: Vec<_> = line
            .trim_end_matches(['\r', '\n'])
            .split(FIELD_DELIMITER)
            .collect();
        let [id, from, to, journey_type, count, names, fare, date] = fields[..] else {
            return Err(malformed());
        };

        let ticket_id = field(id, "TicketID")
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;
        let from = field(from, "From").ok_or_else(malformed)?.to_string();
        let to = field(to, "To").ok_or_else(malformed)?.to_string();
        let journey_type = field(journey_type, "Type")
            .and_then(JourneyType::from_record_label)
            .ok_or_else(malformed)?;
        let count: usize = field(count, "Passengers")
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;

        let passengers: Vec<_> = field(names, "Names")
            .ok_or_else(malformed)?
            .split(NAME_DELIMITER)
            .map(|name| match name.strip_suffix(STUDENT_MARKER) {
                Some(name) => Passenger::new(name, true),
                None => Passenger::new(name, false),
            })
            .collect();
        if passengers.len() != count {
            return Err(malformed());
        }

        let fare = field(fare, "Fare")
            .and_then(|v| v.strip_prefix("Rs "))
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;

        // ctime pads single digit days with a space.
        let date = field(date, "Date")
            .ok_or_else(malformed)?
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let issued_at = NaiveDateTime::parse_from_str(&date, "%a %b %d %H:%M:%S %Y")
            .map_err(|_| malformed())?;

        Ok(Self {
            ticket_id,
            from,
            to,
            journey_type,
            passengers,
            fare,
            issued_at,
        })
    }
}

fn field<'a>(raw: &'a str, key: &str) -> Option<&'a str> {
    raw.strip_prefix(key)?.strip_prefix(": ")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ticket::tests::{create_issued_at, create_test_catalog, create_test_ticket};

    #[test]
    fn test_to_record() {
        let ticket = create_test_ticket(
            JourneyType::OneWay,
            vec![Passenger::new("Ravi", false), Passenger::new("Meera", true)],
        );
        let expected = format!(
            "TicketID: {} | From: Versova | To: Chakala | Type: Oneway | Passengers: 2 | Names: Ravi, Meera(S) | Fare: Rs 72.00 | Date: Mon Mar 16 09:05:03 2026",
            create_issued_at(16).timestamp() + 42
        );
        assert_eq!(ticket.to_record(&create_test_catalog()), expected);
    }

    #[test]
    fn test_record_fields_are_recoverable() {
        let ticket = create_test_ticket(
            JourneyType::Return,
            vec![
                Passenger::new("Meera", true),
                Passenger::new("Ravi Kumar", false),
                Passenger::new("Asha", true),
            ],
        );
        let line = format!("{}\n", ticket.to_record(&create_test_catalog()));
        let record: TicketRecord = line.parse().unwrap();

        assert_eq!(record.ticket_id(), ticket.ticket_id());
        assert_eq!(record.from(), "Versova");
        assert_eq!(record.to(), "Chakala");
        assert_eq!(record.journey_type(), JourneyType::Return);
        assert_eq!(record.passengers(), ticket.passengers());
        assert_eq!(record.fare(), f64::from(ticket.total_fare()));
        assert_eq!(record.issued_at(), ticket.issued_at().naive_local());
    }

    #[test]
    fn test_parse_single_digit_day() {
        let line = "TicketID: 1772701503 | From: Andheri | To: Ghatkopar | Type: Oneway | Passengers: 1 | Names: Ravi | Fare: Rs 20.00 | Date: Thu Mar  5 09:05:03 2026";
        let record: TicketRecord = line.parse().unwrap();

        assert_eq!(
            record.issued_at(),
            NaiveDate::from_ymd_opt(2026, 3, 5)
                .unwrap()
                .and_hms_opt(9, 5, 3)
                .unwrap()
        );
        assert_eq!(record.passengers(), &[Passenger::new("Ravi", false)]);
        assert_eq!(record.fare(), 20.0);
    }

    #[test]
    fn test_parse_malformed() {
        let lines = [
            "",
            "TicketID: 12 | From: Andheri",
            // Passenger count does not match the names.
            "TicketID: 12 | From: A | To: B | Type: Oneway | Passengers: 2 | Names: Ravi | Fare: Rs 20.00 | Date: Thu Mar  5 09:05:03 2026",
            "TicketID: 12 | From: A | To: B | Type: One-way | Passengers: 1 | Names: Ravi | Fare: Rs 20.00 | Date: Thu Mar  5 09:05:03 2026",
            "TicketID: x | From: A | To: B | Type: Oneway | Passengers: 1 | Names: Ravi | Fare: Rs 20.00 | Date: Thu Mar  5 09:05:03 2026",
            "TicketID: 12 | From: A | To: B | Type: Oneway | Passengers: 1 | Names: Ravi | Fare: 20.00 | Date: Thu Mar  5 09:05:03 2026",
            "TicketID: 12 | From: A | To: B | Type: Oneway | Passengers: 1 | Names: Ravi | Fare: Rs 20.00 | Date: yesterday",
        ];

        for line in lines {
            assert!(
                matches!(line.parse::<TicketRecord>(), Err(RError::MalformedRecord(_))),
                "{line}"
            );
        }
    }
}
