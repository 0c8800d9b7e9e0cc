use crate::journey::{JourneyType, Passenger};

pub const BASE_FARE: f64 = 10.0;
pub const RATE_PER_STATION: f64 = 10.0;
pub const STUDENT_DISCOUNT: f64 = 0.20;
pub const RETURN_DISCOUNT: f64 = 0.15;

/// Number of stations travelled between two ordinals.
pub fn distance(start: usize, end: usize) -> usize {
    start.abs_diff(end)
}

/// Fare for one direction of travel, for a single full-price passenger.
pub fn segment_fare(distance: usize) -> f64 {
    BASE_FARE + distance as f64 * RATE_PER_STATION
}

/// Computes the total fare of a journey, before truncation to whole currency units.
///
/// Every passenger pays the same segment fare, students get `STUDENT_DISCOUNT` off their own
/// share. For a return journey the subtotal is doubled first and the doubled amount is then
/// reduced by `RETURN_DISCOUNT`.
///
/// `passengers` must not be empty.
pub fn compute_fare(
    start: usize,
    end: usize,
    journey_type: JourneyType,
    passengers: &[Passenger],
) -> f64 {
    debug_assert!(!passengers.is_empty(), "a fare needs at least one passenger");

    let fare = segment_fare(distance(start, end));

    let student_count = passengers.iter().filter(|p| p.is_student()).count();
    let normal_count = passengers.len() - student_count;

    let mut total_fare =
        fare * normal_count as f64 + fare * (1.0 - STUDENT_DISCOUNT) * student_count as f64;

    if journey_type == JourneyType::Return {
        total_fare *= 2.0;
        total_fare *= 1.0 - RETURN_DISCOUNT;
    }

    total_fare
}
