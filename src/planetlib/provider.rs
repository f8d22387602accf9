//! Sources of heliocentric series tables

use lazy_static::lazy_static;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::series::SeriesTable;
use super::vsop87_data::{EARTH, JUPITER, MARS, SATURN, VENUS};
use super::Body;
use crate::{EphemerisError, Result};

/// Anything that can hand out the series table of a body
///
/// The ephemeris borrows a provider only while it is built and keeps the
/// `Arc<SeriesTable>` handles it returns, so tables outlive the provider
/// and are shared between threads.
pub trait SeriesProvider: Send + Sync {
    /// The series for `body`
    ///
    /// # Errors
    ///
    /// [`EphemerisError::DataUnavailable`] when the provider has no table for
    /// the body.
    fn series(&self, body: Body) -> Result<Arc<SeriesTable>>;
}

lazy_static! {
    static ref EMBEDDED_TABLES: BTreeMap<Body, Arc<SeriesTable>> = {
        let mut m = BTreeMap::new();
        m.insert(Body::Venus, Arc::new(VENUS.to_table()));
        m.insert(Body::Earth, Arc::new(EARTH.to_table()));
        m.insert(Body::Mars, Arc::new(MARS.to_table()));
        m.insert(Body::Jupiter, Arc::new(JUPITER.to_table()));
        m.insert(Body::Saturn, Arc::new(SATURN.to_table()));
        m
    };
}

/// The tables compiled into the crate: Venus, Earth, Mars, Jupiter, Saturn
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSeries;

impl EmbeddedSeries {
    pub fn new() -> Self {
        EmbeddedSeries
    }

    /// Bodies this provider has a table for
    pub fn bodies(&self) -> impl Iterator<Item = Body> {
        EMBEDDED_TABLES.keys().copied()
    }
}

impl SeriesProvider for EmbeddedSeries {
    fn series(&self, body: Body) -> Result<Arc<SeriesTable>> {
        EMBEDDED_TABLES
            .get(&body)
            .cloned()
            .ok_or_else(|| EphemerisError::DataUnavailable {
                body: body.name().to_string(),
                reason: "no embedded series".to_string(),
            })
    }
}

/// A provider backed by tables supplied at run time
#[derive(Debug, Clone, Default)]
pub struct TableSeries {
    tables: BTreeMap<Body, Arc<SeriesTable>>,
}

impl TableSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, body: Body, table: SeriesTable) -> Self {
        self.tables.insert(body, Arc::new(table));
        self
    }
}

impl SeriesProvider for TableSeries {
    fn series(&self, body: Body) -> Result<Arc<SeriesTable>> {
        self.tables
            .get(&body)
            .cloned()
            .ok_or_else(|| EphemerisError::DataUnavailable {
                body: body.name().to_string(),
                reason: "no table registered".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::angle::Angle;
    use crate::planetlib::series::SeriesFrame;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_venus_1992_december_20() {
        // Meeus example 32.a
        let venus = EmbeddedSeries.series(Body::Venus).unwrap();
        assert_eq!(venus.frame(), SeriesFrame::OfDate);
        let pos = venus.position(2448976.5);
        assert_abs_diff_eq!(pos.l.degrees(), 26.11428, epsilon = 1e-5);
        assert_abs_diff_eq!(pos.b.degrees(), -2.62070, epsilon = 1e-5);
        assert_abs_diff_eq!(pos.r, 0.724603, epsilon = 1e-6);
    }

    #[test]
    fn test_earth_1992_december_20() {
        let earth = EmbeddedSeries.series(Body::Earth).unwrap();
        let pos = earth.position(2448976.5);
        assert_abs_diff_eq!(pos.l.degrees(), 88.35704, epsilon = 1e-5);
        assert_abs_diff_eq!(pos.b.degrees(), 0.00014, epsilon = 1e-5);
        assert_abs_diff_eq!(pos.r, 0.983824, epsilon = 1e-6);
    }

    #[rstest]
    #[case(Body::Mars)]
    #[case(Body::Jupiter)]
    #[case(Body::Saturn)]
    fn test_outer_planets_are_j2000(#[case] body: Body) {
        let table = EmbeddedSeries.series(body).unwrap();
        assert_eq!(table.frame(), SeriesFrame::J2000);
        let pos = table.position(2459599.349056);
        assert!((0.0..std::f64::consts::TAU).contains(&pos.l.radians()));
        assert!(pos.b.abs() < Angle::from_degrees(3.0));
        assert!(pos.r > 1.3 && pos.r < 10.1);
    }

    #[rstest]
    #[case(Body::Jupiter, 2459599.349056, -1.1309)]
    #[case(Body::Saturn, 2459599.349056, -0.9135)]
    #[case(Body::Mars, 2459599.349056, -0.5078)]
    #[case(Body::Jupiter, 2451545.0, -1.1734)]
    #[case(Body::Saturn, 2451545.0, -2.3065)]
    #[case(Body::Mars, 2451545.0, -1.4195)]
    fn test_outer_planet_latitude(#[case] body: Body, #[case] jde: f64, #[case] expected: f64) {
        // J2000 latitudes from the JPL mean orbital elements
        let (_, b, _) = EmbeddedSeries.series(body).unwrap().evaluate(jde);
        assert_abs_diff_eq!(b.to_degrees(), expected, epsilon = 0.005);
    }

    #[rstest]
    #[case(Body::Mercury)]
    #[case(Body::Uranus)]
    #[case(Body::Neptune)]
    #[case(Body::Moon)]
    fn test_missing_series(#[case] body: Body) {
        let err = EmbeddedSeries.series(body).unwrap_err();
        assert!(matches!(err, EphemerisError::DataUnavailable { .. }));
    }

    #[test]
    fn test_tables_are_shared() {
        let a = EmbeddedSeries.series(Body::Saturn).unwrap();
        let b = EmbeddedSeries.series(Body::Saturn).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(EmbeddedSeries.bodies().count(), 5);
    }

    #[test]
    fn test_table_series() {
        let earth = EARTH.to_table();
        let provider = TableSeries::new().with_table(Body::Earth, earth.clone());
        assert_eq!(*provider.series(Body::Earth).unwrap(), earth);
        assert!(provider.series(Body::Venus).is_err());
    }
}
