use std::fmt;

use thiserror::Error;

/// Required fields of [`crate::BirthDetails`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BirthField {
    Date,
    Time,
    Place,
}

impl fmt::Display for BirthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BirthField::Date => "date",
            BirthField::Time => "time",
            BirthField::Place => "place",
        };
        write!(f, "{}", name)
    }
}

fn join_fields(fields: &[BirthField]) -> String {
    fields
        .iter()
        .map(|field| field.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The only failure a caller of [`crate::compute_kundali`] can observe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Birth details are incomplete: missing {}", join_fields(.0))]
    MissingFields(Vec<BirthField>),
}

impl ValidationError {
    pub fn missing_fields(&self) -> &[BirthField] {
        match self {
            ValidationError::MissingFields(fields) => fields,
        }
    }
}

/// Internal numeric or parsing failure.
///
/// These are recovered at the chart assembler boundary and replaced by the
/// fallback chart; they are public so the individual stages can be driven
/// directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    #[error("Invalid time {0:?}: expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Ascendant is undefined at latitude {latitude}")]
    DegenerateAscendant { latitude: f64 },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("{0} missing from computed planet list")]
    MissingPlanet(&'static str),
}

pub type CalculationResult<T> = Result<T, ComputationError>;
