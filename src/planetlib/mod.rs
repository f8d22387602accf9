//! Planetary bodies and heliocentric positions
//!
//! Heliocentric coordinates come from one of two sources: the periodic
//! series in [`series`] (served through a [`provider::SeriesProvider`]) or
//! the low-precision orbital elements in [`kepler`].

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::coordinates::angle::Angle;
use crate::coordinates::cartesian::Cartesian3;
use crate::EphemerisError;

pub mod kepler;
pub mod provider;
pub mod series;
mod vsop87_data;

pub use kepler::OrbitalElements;
pub use provider::{EmbeddedSeries, SeriesProvider};
pub use series::{SeriesFrame, SeriesTable};

/// The bodies the ephemeris knows by name
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
        }
    }

    /// True for bodies that orbit the Sun
    pub fn is_planet(&self) -> bool {
        !matches!(self, Body::Sun | Body::Moon)
    }
}

lazy_static! {
    /// Map from lowercase names and two-letter abbreviations to bodies
    static ref BODY_NAMES: HashMap<&'static str, Body> = {
        let mut m = HashMap::new();
        for &(name, body) in BODY_NAME_PAIRS.iter() {
            m.insert(name, body);
        }
        m
    };
}

const BODY_NAME_PAIRS: [(&str, Body); 20] = [
    ("sun", Body::Sun),
    ("su", Body::Sun),
    ("moon", Body::Moon),
    ("mo", Body::Moon),
    ("mercury", Body::Mercury),
    ("me", Body::Mercury),
    ("venus", Body::Venus),
    ("ve", Body::Venus),
    ("earth", Body::Earth),
    ("ea", Body::Earth),
    ("mars", Body::Mars),
    ("ma", Body::Mars),
    ("jupiter", Body::Jupiter),
    ("ju", Body::Jupiter),
    ("saturn", Body::Saturn),
    ("sa", Body::Saturn),
    ("uranus", Body::Uranus),
    ("ur", Body::Uranus),
    ("neptune", Body::Neptune),
    ("ne", Body::Neptune),
];

impl FromStr for Body {
    type Err = EphemerisError;

    /// Parse a body name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BODY_NAMES
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| EphemerisError::InvalidBodyIdentifier(s.to_string()))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Heliocentric ecliptic coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricPosition {
    /// Longitude, normalized to `[0, 2π)`
    pub l: Angle,
    /// Latitude
    pub b: Angle,
    /// Distance from the Sun in AU
    pub r: f64,
}

impl HeliocentricPosition {
    pub fn new(l: Angle, b: Angle, r: f64) -> Self {
        Self { l, b, r }
    }

    /// Rectangular ecliptic coordinates in AU
    pub fn to_cartesian(&self) -> Cartesian3 {
        Cartesian3::from_spherical(self.l, self.b, self.r)
    }
}
