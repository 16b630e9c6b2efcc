//! Composite query construction.
//!
//! Resolves requested identifiers against the airport directory and folds
//! the survivors into a single multi-point request description. Resolution
//! happens entirely before any network activity.

use airport_directory::AirportDirectory;
use common::{Error, Result};

/// One resolved airport in a query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPoint {
    pub ident: String,
    pub longitude: f64,
    pub latitude: f64,
}

/// A composite NOTAM request: one point per resolved airport plus the
/// shared search radius.
#[derive(Debug, Clone, PartialEq)]
pub struct NotamQuery {
    /// Points in input order.
    pub points: Vec<QueryPoint>,
    /// Search radius in nautical miles around each point.
    pub radius_nm: u32,
}

impl NotamQuery {
    /// Render the query as a GET URL against the given endpoint.
    ///
    /// Each point becomes a `point={lon},{lat},{ident},site` parameter
    /// ("site" is the fixed search mode); `alpha=notam` and the radius are
    /// shared across all points.
    pub fn to_url(&self, base_url: &str) -> String {
        let mut url = String::from(base_url);
        url.push('?');
        for point in &self.points {
            url.push_str(&format!(
                "point={},{},{},site&",
                point.longitude, point.latitude, point.ident
            ));
        }
        url.push_str(&format!("alpha=notam&radius={}", self.radius_nm));
        url
    }
}

/// Build a query for the given identifiers.
///
/// Identifiers that do not resolve are collected (uppercased, first
/// occurrence order) and excluded from the query; they never fail the
/// build. A zero radius is rejected before any network activity.
pub fn build_query(
    directory: &AirportDirectory,
    idents: &[String],
    radius_nm: u32,
) -> Result<(NotamQuery, Vec<String>)> {
    if radius_nm == 0 {
        return Err(Error::InvalidParameter(
            "radius must be a positive number of nautical miles".into(),
        ));
    }

    let mut points = Vec::with_capacity(idents.len());
    let mut unresolved: Vec<String> = Vec::new();

    for raw in idents {
        let ident = raw.trim().to_uppercase();
        match directory.resolve(&ident) {
            Some(airport) => points.push(QueryPoint {
                ident: airport.ident.clone(),
                longitude: airport.longitude,
                latitude: airport.latitude,
            }),
            None => {
                if !unresolved.contains(&ident) {
                    unresolved.push(ident);
                }
            }
        }
    }

    Ok((NotamQuery { points, radius_nm }, unresolved))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
id,latitude_deg,longitude_deg,gps_code
1,45.3225,-75.6692,CYOW
2,43.6772,-79.6306,CYYZ
";

    fn directory() -> AirportDirectory {
        AirportDirectory::from_reader(SAMPLE_CSV.as_bytes()).expect("sample should load")
    }

    fn idents(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_known_airports_and_collects_unknown() {
        let (query, unresolved) =
            build_query(&directory(), &idents(&["cyow", "CYYZ", "ZZZZ"]), 20)
                .expect("build should succeed");

        assert_eq!(query.radius_nm, 20);
        assert_eq!(query.points.len(), 2);
        assert_eq!(query.points[0].ident, "CYOW");
        assert_eq!(query.points[1].ident, "CYYZ");
        assert_eq!(unresolved, vec!["ZZZZ".to_string()]);
    }

    #[test]
    fn zero_radius_is_rejected() {
        let err = build_query(&directory(), &idents(&["CYOW"]), 0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn empty_input_yields_empty_point_set() {
        let (query, unresolved) = build_query(&directory(), &[], 25).expect("build should succeed");

        assert!(query.points.is_empty());
        assert!(unresolved.is_empty());
    }

    #[test]
    fn duplicate_unknown_identifiers_reported_once() {
        let (query, unresolved) =
            build_query(&directory(), &idents(&["zzzz", " ZZZZ ", "CYOW"]), 25)
                .expect("build should succeed");

        assert_eq!(query.points.len(), 1);
        assert_eq!(unresolved, vec!["ZZZZ".to_string()]);
    }

    #[test]
    fn url_encodes_every_point_with_shared_radius() {
        let (query, _) = build_query(&directory(), &idents(&["CYOW", "CYYZ"]), 20)
            .expect("build should succeed");
        let url = query.to_url("https://plan.navcanada.ca/weather/api/alpha/");

        assert_eq!(
            url,
            "https://plan.navcanada.ca/weather/api/alpha/\
             ?point=-75.6692,45.3225,CYOW,site\
             &point=-79.6306,43.6772,CYYZ,site\
             &alpha=notam&radius=20"
        );
    }
}
