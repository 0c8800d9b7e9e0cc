use std::fmt::Display;

use strum_macros::EnumString;

use crate::{MAX_NAME_LEN, RError, RResult};

/// Marker appended to student names in the ticket log.
pub const STUDENT_MARKER: &str = "(S)";

// ------------------------------------------------------------------------------------------------
// --- JourneyType
// ------------------------------------------------------------------------------------------------

#[derive(Debug, EnumString, PartialEq, Eq, Clone, Copy)]
pub enum JourneyType {
    #[strum(serialize = "one-way", serialize = "oneway")]
    OneWay,
    #[strum(serialize = "return")]
    Return,
}

impl JourneyType {
    /// Maps a journey menu choice (1 or 2) to its journey type.
    pub fn from_choice(choice: usize) -> RResult<Self> {
        match choice {
            1 => Ok(Self::OneWay),
            2 => Ok(Self::Return),
            _ => Err(RError::InvalidJourneyType(choice.to_string())),
        }
    }

    /// Label shown on the printed ticket.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneWay => "One-way",
            Self::Return => "Return",
        }
    }

    /// Label written to the ticket log.
    pub fn record_label(&self) -> &'static str {
        match self {
            Self::OneWay => "Oneway",
            Self::Return => "Return",
        }
    }

    pub fn from_record_label(label: &str) -> Option<Self> {
        match label {
            "Oneway" => Some(Self::OneWay),
            "Return" => Some(Self::Return),
            _ => None,
        }
    }
}

impl Display for JourneyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OneWay => write!(f, "one-way"),
            Self::Return => write!(f, "return"),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// --- Passenger
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    name: String,
    is_student: bool,
}

impl Passenger {
    pub fn new(name: impl Into<String>, is_student: bool) -> Self {
        Self {
            name: name.into(),
            is_student,
        }
    }

    // Getters/Setters

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_student(&self) -> bool {
        self.is_student
    }

    // Functions

    /// A name must survive the trip through the ticket log: it cannot be blank, exceed
    /// `MAX_NAME_LEN` characters, contain a record delimiter or a control character, or end
    /// with the student marker.
    pub fn validate_name(&self) -> RResult<()> {
        let name = &self.name;
        let valid = !name.trim().is_empty()
            && name.chars().count() <= MAX_NAME_LEN
            && !name.contains(['|', ','])
            && !name.chars().any(char::is_control)
            && !name.ends_with(STUDENT_MARKER);

        if valid {
            Ok(())
        } else {
            Err(RError::InvalidPassengerName(name.clone()))
        }
    }
}

// ------------------------------------------------------------------------------------------------
// --- PurchaseRequest
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PurchaseRequest {
    pub journey_type: JourneyType,
    pub start: usize,
    pub end: usize,
    pub passengers: Vec<Passenger>,
}

impl Display for PurchaseRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "journey_type: {}, start: {}, end: {}, passengers: {}",
            self.journey_type,
            self.start,
            self.end,
            self.passengers.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_from_choice() {
        assert_eq!(JourneyType::from_choice(1).unwrap(), JourneyType::OneWay);
        assert_eq!(JourneyType::from_choice(2).unwrap(), JourneyType::Return);
        assert!(matches!(
            JourneyType::from_choice(3),
            Err(RError::InvalidJourneyType(_))
        ));
        assert!(matches!(
            JourneyType::from_choice(0),
            Err(RError::InvalidJourneyType(_))
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(JourneyType::from_str("one-way").unwrap(), JourneyType::OneWay);
        assert_eq!(JourneyType::from_str("oneway").unwrap(), JourneyType::OneWay);
        assert_eq!(JourneyType::from_str("return").unwrap(), JourneyType::Return);
        assert!(JourneyType::from_str("round-trip").is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(JourneyType::OneWay.label(), "One-way");
        assert_eq!(JourneyType::OneWay.record_label(), "Oneway");
        assert_eq!(JourneyType::Return.label(), "Return");
        assert_eq!(
            JourneyType::from_record_label(JourneyType::Return.record_label()),
            Some(JourneyType::Return)
        );
        assert_eq!(JourneyType::from_record_label("One-way"), None);
    }

    #[test]
    fn test_validate_name() {
        assert!(Passenger::new("Asha Patil", true).validate_name().is_ok());
        assert!(Passenger::new("A".repeat(MAX_NAME_LEN), false).validate_name().is_ok());

        let invalid = [
            "",
            "   ",
            "Ravi | Kumar",
            "Kumar, Ravi",
            "Ravi(S)",
            "Ravi\nKumar",
            "Ravi\tKumar",
            "Ravi\r",
            "\x1b[31mRavi",
        ];
        for name in invalid {
            assert!(
                matches!(
                    Passenger::new(name, false).validate_name(),
                    Err(RError::InvalidPassengerName(_))
                ),
                "{name:?}"
            );
        }
        assert!(Passenger::new("A".repeat(MAX_NAME_LEN + 1), false)
            .validate_name()
            .is_err());
    }
}
