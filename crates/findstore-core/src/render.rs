//! Human-readable and JSON renderings of a [`SearchResult`].

use serde::Serialize;

use crate::geo::DistanceUnit;
use crate::search::SearchResult;
use crate::store::StoreRecord;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    store: &'a StoreRecord,
    #[serde(rename = "Distance")]
    distance: f64,
    #[serde(rename = "Distance Units")]
    units: &'static str,
}

/// Five-line summary: name, location, street, city line, distance.
///
/// The distance is converted to `unit` and rounded to two decimals.
#[must_use]
pub fn render_text(result: &SearchResult, unit: DistanceUnit) -> String {
    let store = &result.store;
    let distance = unit.from_miles(result.distance_miles);
    [
        format!("{} Location", store.name),
        store.location.clone(),
        store.address.clone(),
        format!("{}, {} {}", store.city, store.state, store.zip_code),
        format!("{distance:.2} {unit}"),
    ]
    .join("\n")
}

/// JSON object with every dataset column plus `Distance` (converted, not
/// rounded) and `Distance Units`.
///
/// # Errors
///
/// Returns the `serde_json` error if serialization fails.
pub fn render_json(result: &SearchResult, unit: DistanceUnit) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        store: &result.store,
        distance: unit.from_miles(result.distance_miles),
        units: unit.as_str(),
    };
    serde_json::to_string(&report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crystal_result() -> SearchResult {
        SearchResult {
            store: StoreRecord {
                name: "Crystal".to_string(),
                location: "SWC Broadway & Bass Lake Rd".to_string(),
                address: "5537 W Broadway Ave".to_string(),
                city: "Crystal".to_string(),
                state: "MN".to_string(),
                zip_code: "55428-3507".to_string(),
                latitude: 45.052_153_9,
                longitude: -93.364_854,
                county: "Hennepin County".to_string(),
            },
            distance_miles: 6_382.990_265_653_763,
        }
    }

    #[test]
    fn text_in_miles() {
        let text = render_text(&crystal_result(), DistanceUnit::Miles);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Crystal Location",
                "SWC Broadway & Bass Lake Rd",
                "5537 W Broadway Ave",
                "Crystal, MN 55428-3507",
                "6382.99 mi",
            ]
        );
    }

    #[test]
    fn text_in_kilometers() {
        let text = render_text(&crystal_result(), DistanceUnit::Kilometers);
        assert_eq!(text.lines().last(), Some("10271.79 km"));
    }

    #[test]
    fn json_carries_all_columns_and_distance() {
        let json = render_json(&crystal_result(), DistanceUnit::Kilometers).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["Store Name"], "Crystal");
        assert_eq!(value["Store Location"], "SWC Broadway & Bass Lake Rd");
        assert_eq!(value["Address"], "5537 W Broadway Ave");
        assert_eq!(value["City"], "Crystal");
        assert_eq!(value["State"], "MN");
        assert_eq!(value["Zip Code"], "55428-3507");
        assert_eq!(value["County"], "Hennepin County");
        assert_eq!(value["Latitude"].as_f64(), Some(45.052_153_9));
        assert_eq!(value["Longitude"].as_f64(), Some(-93.364_854));
        assert_eq!(value["Distance Units"], "km");

        let distance = value["Distance"].as_f64().expect("numeric distance");
        assert!((distance - 10271.79).abs() < 0.01, "got {distance}");
        assert_eq!(value.as_object().map(serde_json::Map::len), Some(11));
    }

    #[test]
    fn json_distance_is_not_rounded() {
        let json = render_json(&crystal_result(), DistanceUnit::Miles).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Distance"].as_f64(), Some(6_382.990_265_653_763));
        assert_eq!(value["Distance Units"], "mi");
    }
}
