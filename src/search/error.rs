// Rejection taxonomy for flight-search validation
// One variant per business rule; evaluation reports the first rule that
// failed in the fixed rule order.

use thiserror::Error;

/// A business rule the submitted search request violated
///
/// The library-level boolean contract collapses all of these to a plain
/// rejection; the structured channel and the HTTP error body carry the
/// variant so callers can tell the rules apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// Seating class is not one of the offered classes
    #[error("Unsupported seating class: {0}")]
    UnsupportedSeatingClass(String),

    /// Emergency-row seating was requested outside economy
    #[error("Emergency row seating is only offered in economy")]
    EmergencyRowRequiresEconomy,

    /// An airport code is outside the served network, or departure and
    /// destination are the same port
    #[error("Invalid airport selection: {0}")]
    InvalidAirports(String),

    /// A date string is not a real calendar date in dd/mm/yyyy form
    #[error("{0}")]
    MalformedDate(String),

    /// Departure lies before today
    #[error("Departure date is in the past")]
    DepartureInPast,

    /// Return lies before departure
    #[error("Return date is before the departure date")]
    ReturnBeforeDeparture,

    /// Total passengers outside the bookable range
    #[error("Total passenger count must be between 1 and 9, got {0}")]
    PassengerCountOutOfRange(u32),

    /// Children present without enough accompanying adults
    #[error("Children must travel with an adult, at most two children per adult")]
    TooManyChildrenPerAdult,

    /// Infants present without enough accompanying adults
    #[error("Infants must travel with an adult, at most one infant per adult")]
    TooManyInfantsPerAdult,

    /// Children cannot sit in an emergency row or in first class
    #[error("Children cannot be seated in an emergency row or in first class")]
    ChildSeatingRestricted,

    /// Infants cannot sit in an emergency row or in business class
    #[error("Infants cannot be seated in an emergency row or in business class")]
    InfantSeatingRestricted,
}

impl RuleViolation {
    /// Stable machine-readable code used in HTTP error bodies
    pub fn code(&self) -> &'static str {
        match self {
            RuleViolation::UnsupportedSeatingClass(_) => "UNSUPPORTED_SEATING_CLASS",
            RuleViolation::EmergencyRowRequiresEconomy => "EMERGENCY_ROW_REQUIRES_ECONOMY",
            RuleViolation::InvalidAirports(_) => "INVALID_AIRPORTS",
            RuleViolation::MalformedDate(_) => "MALFORMED_DATE",
            RuleViolation::DepartureInPast => "DEPARTURE_IN_PAST",
            RuleViolation::ReturnBeforeDeparture => "RETURN_BEFORE_DEPARTURE",
            RuleViolation::PassengerCountOutOfRange(_) => "PASSENGER_COUNT_OUT_OF_RANGE",
            RuleViolation::TooManyChildrenPerAdult => "TOO_MANY_CHILDREN_PER_ADULT",
            RuleViolation::TooManyInfantsPerAdult => "TOO_MANY_INFANTS_PER_ADULT",
            RuleViolation::ChildSeatingRestricted => "CHILD_SEATING_RESTRICTED",
            RuleViolation::InfantSeatingRestricted => "INFANT_SEATING_RESTRICTED",
        }
    }
}
