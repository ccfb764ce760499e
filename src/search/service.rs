// Search state service
//
// Owns the single snapshot of the last accepted search request and the
// commit step. Rule evaluation itself is pure; this is the only place the
// snapshot is ever written.

use chrono::{Local, NaiveDate};

use crate::search::date;
use crate::search::error::RuleViolation;
use crate::search::models::{Airport, SearchRequest, SearchSnapshot, SeatingClass};
use crate::search::rules;

/// Validates flight-search requests and holds the last accepted one
///
/// The snapshot starts empty and is replaced wholesale each time a request
/// clears every rule; a rejected request leaves it untouched. One instance
/// is meant for one caller at a time; concurrent callers need their own
/// instance or an external lock around it.
pub struct SearchValidator {
    current: Option<SearchSnapshot>,
}

impl SearchValidator {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Validate a request against today's calendar date and commit on success
    ///
    /// Returns the committed snapshot, or the first rule the request
    /// violated. The held state changes only on `Ok`.
    pub fn submit(&mut self, request: &SearchRequest) -> Result<&SearchSnapshot, RuleViolation> {
        self.submit_as_of(request, Local::now().date_naive())
    }

    /// Same as [`submit`](Self::submit) with an explicit "today"
    ///
    /// Lets callers with their own clock (and tests) pin the date the
    /// departure-not-in-the-past rule is anchored to.
    pub fn submit_as_of(
        &mut self,
        request: &SearchRequest,
        today: NaiveDate,
    ) -> Result<&SearchSnapshot, RuleViolation> {
        match rules::evaluate(request, today) {
            Ok(snapshot) => {
                tracing::info!(
                    "Accepted flight search {} -> {} departing {}",
                    snapshot.departure_airport_code,
                    snapshot.destination_airport_code,
                    date::format_dmy(snapshot.departure_date)
                );
                Ok(self.current.insert(snapshot))
            }
            Err(violation) => {
                tracing::debug!("Rejected flight search: {}", violation);
                Err(violation)
            }
        }
    }

    /// Boolean entry point for form-handler callers
    ///
    /// Every rejection, malformed dates included, collapses to `false`;
    /// nothing is raised. On `true` the request has been committed.
    pub fn validate(
        &mut self,
        departure_date: &str,
        return_date: &str,
        emergency_row_seating: bool,
        departure_airport_code: &str,
        destination_airport_code: &str,
        seating_class: &str,
        adult_count: u32,
        child_count: u32,
        infant_count: u32,
    ) -> bool {
        let request = SearchRequest {
            departure_date: Some(departure_date.to_string()),
            return_date: Some(return_date.to_string()),
            emergency_row_seating,
            departure_airport_code: Some(departure_airport_code.to_string()),
            destination_airport_code: Some(destination_airport_code.to_string()),
            seating_class: Some(seating_class.to_string()),
            adult_count,
            child_count,
            infant_count,
        };
        self.submit(&request).is_ok()
    }

    /// The last accepted snapshot, if any request has ever passed
    pub fn current(&self) -> Option<&SearchSnapshot> {
        self.current.as_ref()
    }

    /// Departure date in canonical dd/mm/yyyy form
    pub fn departure_date(&self) -> Option<String> {
        self.current.as_ref().map(|s| date::format_dmy(s.departure_date))
    }

    /// Return date in canonical dd/mm/yyyy form
    pub fn return_date(&self) -> Option<String> {
        self.current.as_ref().map(|s| date::format_dmy(s.return_date))
    }

    pub fn departure_airport_code(&self) -> Option<Airport> {
        self.current.as_ref().map(|s| s.departure_airport_code)
    }

    pub fn destination_airport_code(&self) -> Option<Airport> {
        self.current.as_ref().map(|s| s.destination_airport_code)
    }

    pub fn emergency_row_seating(&self) -> Option<bool> {
        self.current.as_ref().map(|s| s.emergency_row_seating)
    }

    pub fn seating_class(&self) -> Option<SeatingClass> {
        self.current.as_ref().map(|s| s.seating_class)
    }

    pub fn adult_count(&self) -> Option<u32> {
        self.current.as_ref().map(|s| s.adult_count)
    }

    pub fn child_count(&self) -> Option<u32> {
        self.current.as_ref().map(|s| s.child_count)
    }

    pub fn infant_count(&self) -> Option<u32> {
        self.current.as_ref().map(|s| s.infant_count)
    }
}

impl Default for SearchValidator {
    fn default() -> Self {
        Self::new()
    }
}
