// Flight-search business rules
//
// Ordered evaluation of the booking constraints over a raw search request.
// The order is fixed and evaluation stops at the first failing rule, so the
// returned violation always names the earliest rule that fired. A request
// that clears every rule comes back as a fully normalized snapshot; the
// caller decides what to do with it.

use chrono::NaiveDate;

use crate::search::date;
use crate::search::error::RuleViolation;
use crate::search::models::{Airport, SearchRequest, SearchSnapshot, SeatingClass};

const MIN_TOTAL_PASSENGERS: u32 = 1;
const MAX_TOTAL_PASSENGERS: u32 = 9;
const MAX_CHILDREN_PER_ADULT: u32 = 2;
const MAX_INFANTS_PER_ADULT: u32 = 1;

/// Absent strings count as empty, and surrounding whitespace never matters
fn trimmed(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("").trim()
}

/// Evaluate every business rule against a raw request
///
/// `today` anchors the not-in-the-past check; departing today is allowed.
/// Returns the normalized snapshot on acceptance or the first violated rule
/// otherwise. Pure: the caller owns any state change.
pub fn evaluate(request: &SearchRequest, today: NaiveDate) -> Result<SearchSnapshot, RuleViolation> {
    let seating_class = SeatingClass::from_name(trimmed(&request.seating_class))
        .map_err(|_| RuleViolation::UnsupportedSeatingClass(trimmed(&request.seating_class).to_string()))?;

    // Emergency rows are an economy-only product
    if request.emergency_row_seating && seating_class != SeatingClass::Economy {
        return Err(RuleViolation::EmergencyRowRequiresEconomy);
    }

    let departure_airport = Airport::from_code(trimmed(&request.departure_airport_code))
        .map_err(|_| invalid_airport(trimmed(&request.departure_airport_code)))?;
    let destination_airport = Airport::from_code(trimmed(&request.destination_airport_code))
        .map_err(|_| invalid_airport(trimmed(&request.destination_airport_code)))?;
    if departure_airport == destination_airport {
        return Err(RuleViolation::InvalidAirports(
            "departure and destination are the same".to_string(),
        ));
    }

    let departure_date =
        date::parse_strict_dmy(trimmed(&request.departure_date)).map_err(RuleViolation::MalformedDate)?;
    let return_date =
        date::parse_strict_dmy(trimmed(&request.return_date)).map_err(RuleViolation::MalformedDate)?;

    if departure_date < today {
        return Err(RuleViolation::DepartureInPast);
    }
    if return_date < departure_date {
        return Err(RuleViolation::ReturnBeforeDeparture);
    }

    let total = request
        .adult_count
        .saturating_add(request.child_count)
        .saturating_add(request.infant_count);
    if !(MIN_TOTAL_PASSENGERS..=MAX_TOTAL_PASSENGERS).contains(&total) {
        return Err(RuleViolation::PassengerCountOutOfRange(total));
    }

    // Counts are each at most 9 from here on, so the ratio products cannot overflow
    if request.child_count > 0
        && (request.adult_count < 1
            || request.child_count > MAX_CHILDREN_PER_ADULT * request.adult_count)
    {
        return Err(RuleViolation::TooManyChildrenPerAdult);
    }
    if request.infant_count > 0
        && (request.adult_count < 1
            || request.infant_count > MAX_INFANTS_PER_ADULT * request.adult_count)
    {
        return Err(RuleViolation::TooManyInfantsPerAdult);
    }

    if request.child_count > 0
        && (request.emergency_row_seating || seating_class == SeatingClass::First)
    {
        return Err(RuleViolation::ChildSeatingRestricted);
    }
    if request.infant_count > 0
        && (request.emergency_row_seating || seating_class == SeatingClass::Business)
    {
        return Err(RuleViolation::InfantSeatingRestricted);
    }

    Ok(SearchSnapshot {
        departure_date,
        return_date,
        emergency_row_seating: request.emergency_row_seating,
        departure_airport_code: departure_airport,
        destination_airport_code: destination_airport,
        seating_class,
        adult_count: request.adult_count,
        child_count: request.child_count,
        infant_count: request.infant_count,
    })
}

fn invalid_airport(code: &str) -> RuleViolation {
    RuleViolation::InvalidAirports(format!("unknown code {:?}", code))
}
