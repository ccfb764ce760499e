// Domain types for flight search validation
// Closed vocabularies are parsed once at the boundary; internal logic only
// ever sees the enum values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::search::date;

/// Airports the search service accepts
///
/// The supported network is a fixed set of seven ports. Codes on the wire
/// are matched case-insensitively and always serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Airport {
    Syd,
    Mel,
    Lax,
    Cdg,
    Del,
    Pvg,
    Doh,
}

impl Airport {
    /// Canonical lowercase code
    pub fn as_str(&self) -> &'static str {
        match self {
            Airport::Syd => "syd",
            Airport::Mel => "mel",
            Airport::Lax => "lax",
            Airport::Cdg => "cdg",
            Airport::Del => "del",
            Airport::Pvg => "pvg",
            Airport::Doh => "doh",
        }
    }

    /// Parse an airport code, ignoring case
    pub fn from_code(code: &str) -> Result<Self, String> {
        match code.to_lowercase().as_str() {
            "syd" => Ok(Airport::Syd),
            "mel" => Ok(Airport::Mel),
            "lax" => Ok(Airport::Lax),
            "cdg" => Ok(Airport::Cdg),
            "del" => Ok(Airport::Del),
            "pvg" => Ok(Airport::Pvg),
            "doh" => Ok(Airport::Doh),
            _ => Err(format!("Unknown airport code: {}", code)),
        }
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Seating class offered on a booking
///
/// Wire strings match the booking vocabulary exactly, including the space
/// in "premium economy". Parsing ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeatingClass {
    Economy,
    #[serde(rename = "premium economy")]
    PremiumEconomy,
    Business,
    First,
}

impl SeatingClass {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatingClass::Economy => "economy",
            SeatingClass::PremiumEconomy => "premium economy",
            SeatingClass::Business => "business",
            SeatingClass::First => "first",
        }
    }

    /// Parse a seating class name, ignoring case
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name.to_lowercase().as_str() {
            "economy" => Ok(SeatingClass::Economy),
            "premium economy" => Ok(SeatingClass::PremiumEconomy),
            "business" => Ok(SeatingClass::Business),
            "first" => Ok(SeatingClass::First),
            _ => Err(format!("Unknown seating class: {}", name)),
        }
    }
}

impl fmt::Display for SeatingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw flight-search request as submitted by the caller
///
/// String fields arrive untrimmed and in whatever case the form produced;
/// absent or null strings are treated as empty rather than rejected outright,
/// so they fall through to the relevant business rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Departure date in dd/mm/yyyy form
    #[serde(default)]
    #[schema(example = "24/12/2026")]
    pub departure_date: Option<String>,
    /// Return date in dd/mm/yyyy form
    #[serde(default)]
    #[schema(example = "31/12/2026")]
    pub return_date: Option<String>,
    #[schema(example = false)]
    pub emergency_row_seating: bool,
    #[serde(default)]
    #[schema(example = "pvg")]
    pub departure_airport_code: Option<String>,
    #[serde(default)]
    #[schema(example = "mel")]
    pub destination_airport_code: Option<String>,
    #[serde(default)]
    #[schema(example = "economy")]
    pub seating_class: Option<String>,
    #[schema(example = 1)]
    pub adult_count: u32,
    #[schema(example = 0)]
    pub child_count: u32,
    #[schema(example = 0)]
    pub infant_count: u32,
}

/// The normalized snapshot of the last accepted search
///
/// A snapshot only ever exists for a request that passed every business
/// rule: dates are real calendar dates in order, airports and class come
/// from the closed vocabularies, and passenger counts satisfy the bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SearchSnapshot {
    #[serde(with = "date::dmy")]
    #[schema(value_type = String, example = "24/12/2026")]
    pub departure_date: NaiveDate,
    #[serde(with = "date::dmy")]
    #[schema(value_type = String, example = "31/12/2026")]
    pub return_date: NaiveDate,
    pub emergency_row_seating: bool,
    pub departure_airport_code: Airport,
    pub destination_airport_code: Airport,
    pub seating_class: SeatingClass,
    pub adult_count: u32,
    pub child_count: u32,
    pub infant_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airport_display() {
        assert_eq!(Airport::Syd.to_string(), "syd");
        assert_eq!(Airport::Pvg.to_string(), "pvg");
        assert_eq!(Airport::Doh.to_string(), "doh");
    }

    #[test]
    fn test_airport_from_code_case_insensitive() {
        assert_eq!(Airport::from_code("mel").unwrap(), Airport::Mel);
        assert_eq!(Airport::from_code("MEL").unwrap(), Airport::Mel);
        assert_eq!(Airport::from_code("Lax").unwrap(), Airport::Lax);
        assert!(Airport::from_code("xyz").is_err());
        assert!(Airport::from_code("").is_err());
    }

    #[test]
    fn test_seating_class_display() {
        assert_eq!(SeatingClass::Economy.to_string(), "economy");
        assert_eq!(SeatingClass::PremiumEconomy.to_string(), "premium economy");
        assert_eq!(SeatingClass::Business.to_string(), "business");
        assert_eq!(SeatingClass::First.to_string(), "first");
    }

    #[test]
    fn test_seating_class_from_name() {
        assert_eq!(
            SeatingClass::from_name("premium economy").unwrap(),
            SeatingClass::PremiumEconomy
        );
        assert_eq!(
            SeatingClass::from_name("FIRST").unwrap(),
            SeatingClass::First
        );
        assert!(SeatingClass::from_name("ultra").is_err());
        assert!(SeatingClass::from_name("premium  economy").is_err());
    }

    #[test]
    fn test_serialization() {
        let airport = Airport::Cdg;
        assert_eq!(serde_json::to_string(&airport).unwrap(), "\"cdg\"");

        let class = SeatingClass::PremiumEconomy;
        assert_eq!(serde_json::to_string(&class).unwrap(), "\"premium economy\"");
    }

    #[test]
    fn test_deserialization() {
        let airport: Airport = serde_json::from_str("\"doh\"").unwrap();
        assert_eq!(airport, Airport::Doh);

        let class: SeatingClass = serde_json::from_str("\"premium economy\"").unwrap();
        assert_eq!(class, SeatingClass::PremiumEconomy);
    }

    #[test]
    fn test_search_request_null_strings_deserialize_as_none() {
        let request: SearchRequest = serde_json::from_str(
            r#"{
                "departure_date": null,
                "emergency_row_seating": false,
                "adult_count": 1,
                "child_count": 0,
                "infant_count": 0
            }"#,
        )
        .unwrap();

        assert!(request.departure_date.is_none());
        assert!(request.return_date.is_none());
        assert!(request.seating_class.is_none());
    }
}
