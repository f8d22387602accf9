//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Time constants
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub const JULIAN_CENTURY: f64 = 36_525.0;
/// Days in a Julian year
pub const JULIAN_YEAR: f64 = 365.25;
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Epoch of the Keplerian element sets (1999-12-31 0h TT)
pub const KEPLER_EPOCH: f64 = 2_451_543.5;

// Angles
/// Arcseconds to radians conversion factor
pub const ASEC2RAD: f64 = 4.848_136_811_095_36e-6;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Seconds of time to radians (one second of time is 15 arcseconds)
pub const SEC2RAD: f64 = 15.0 * ASEC2RAD;

// Light and aberration
/// Light-time in days per astronomical unit
pub const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;
/// Constant of aberration in arcseconds
pub const ABERRATION_ASEC: f64 = 20.495_52;

// Parallax
/// Equatorial horizontal parallax of a body at 1 AU, in arcseconds
pub const HORIZONTAL_PARALLAX_ASEC: f64 = 8.794;

// Earth constants
/// IAU 1976 equatorial radius of the Earth in kilometers
pub const EARTH_RADIUS_KM: f64 = 6_378.14;
/// IAU 1976 inverse flattening of the Earth
pub const EARTH_INVERSE_FLATTENING: f64 = 298.257;

// Calendar constants
/// First day of Gregorian calendar in Julian day number (1582-10-15)
pub const GREGORIAN_START: i64 = 2_299_161;
