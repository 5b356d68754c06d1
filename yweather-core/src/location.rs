use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Identifier accepted by the weather feed.
///
/// A WOEID is numeric and selects the standard two-day feed. A LID (e.g. `USNC0558`)
/// selects the extended five-day feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationId {
    Woeid(String),
    Lid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationIdError {
    #[error("location code is empty")]
    Empty,
}

impl LocationId {
    pub fn as_str(&self) -> &str {
        match self {
            LocationId::Woeid(code) | LocationId::Lid(code) => code,
        }
    }

    pub fn is_lid(&self) -> bool {
        matches!(self, LocationId::Lid(_))
    }
}

impl FromStr for LocationId {
    type Err = LocationIdError;

    /// Codes starting with a letter are LIDs, anything else is treated as a WOEID.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let first = code.chars().next().ok_or(LocationIdError::Empty)?;

        if first.is_alphabetic() {
            Ok(LocationId::Lid(code.to_string()))
        } else {
            Ok(LocationId::Woeid(code.to_string()))
        }
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pull the LID out of a feed permalink such as
/// `http://us.rd.yahoo.com/.../*http://weather.yahoo.com/forecast/USNC0558_f.html`.
///
/// The feed has no dedicated LID element, so this depends on the permalink layout.
pub fn lid_from_permalink(link: &str) -> Option<String> {
    let tail = link.split("/forecast/").nth(1)?;
    let lid = tail.split('_').next()?;

    if lid.is_empty() { None } else { Some(lid.to_string()) }
}
