use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 16 principal compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompassPoint {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

/// Inclusive upper bound of every sector after north, in compass order.
const SECTORS: [(f64, CompassPoint); 15] = [
    (33.75, CompassPoint::Nne),
    (56.25, CompassPoint::Ne),
    (78.75, CompassPoint::Ene),
    (101.25, CompassPoint::E),
    (123.75, CompassPoint::Ese),
    (146.25, CompassPoint::Se),
    (168.75, CompassPoint::Sse),
    (191.25, CompassPoint::S),
    (213.75, CompassPoint::Ssw),
    (236.25, CompassPoint::Sw),
    (258.75, CompassPoint::Wsw),
    (281.25, CompassPoint::W),
    (303.75, CompassPoint::Wnw),
    (326.25, CompassPoint::Nw),
    (348.75, CompassPoint::Nnw),
];

impl CompassPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::Nne => "NNE",
            CompassPoint::Ne => "NE",
            CompassPoint::Ene => "ENE",
            CompassPoint::E => "E",
            CompassPoint::Ese => "ESE",
            CompassPoint::Se => "SE",
            CompassPoint::Sse => "SSE",
            CompassPoint::S => "S",
            CompassPoint::Ssw => "SSW",
            CompassPoint::Sw => "SW",
            CompassPoint::Wsw => "WSW",
            CompassPoint::W => "W",
            CompassPoint::Wnw => "WNW",
            CompassPoint::Nw => "NW",
            CompassPoint::Nnw => "NNW",
        }
    }

    /// Map a bearing in degrees to its compass point.
    ///
    /// Returns `None` outside `[0, 360]` (and for NaN). North covers both
    /// `[0, 11.25]` and `(348.75, 360]`.
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        if !(0.0..=360.0).contains(&degrees) {
            return None;
        }

        if degrees <= 11.25 || degrees > 348.75 {
            return Some(CompassPoint::N);
        }

        SECTORS
            .iter()
            .find(|(upper, _)| degrees <= *upper)
            .map(|(_, point)| *point)
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a textual degree value (as found in feed attributes) to a compass point.
pub fn degrees_to_direction(value: &str) -> Option<CompassPoint> {
    let degrees: f64 = value.trim().parse().ok()?;
    CompassPoint::from_degrees(degrees)
}
