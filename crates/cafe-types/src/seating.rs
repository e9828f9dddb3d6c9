//! Seating categories

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How many seats a cafe offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seating {
    #[serde(rename = "Less than 3")]
    LessThanThree,
    #[serde(rename = "3 to 5")]
    ThreeToFive,
    #[serde(rename = "5 to 10")]
    FiveToTen,
    #[serde(rename = "More than 10")]
    MoreThanTen,
}

impl Seating {
    /// All categories, in the order the form offers them
    pub const ALL: [Seating; 4] = [
        Seating::LessThanThree,
        Seating::ThreeToFive,
        Seating::FiveToTen,
        Seating::MoreThanTen,
    ];

    /// Display and storage label
    pub fn label(self) -> &'static str {
        match self {
            Seating::LessThanThree => "Less than 3",
            Seating::ThreeToFive => "3 to 5",
            Seating::FiveToTen => "5 to 10",
            Seating::MoreThanTen => "More than 10",
        }
    }
}

impl std::fmt::Display for Seating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown seating category: {0:?}")]
pub struct ParseSeatingError(pub String);

impl FromStr for Seating {
    type Err = ParseSeatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Seating::ALL
            .into_iter()
            .find(|seating| seating.label() == s)
            .ok_or_else(|| ParseSeatingError(s.to_string()))
    }
}
