use crate::geo::Coordinate;
use crate::store::StoreRecord;

/// Starting value for the running minimum; no haversine result reaches it.
const UNREACHABLE_DISTANCE_MI: f64 = f64::INFINITY;

/// The store closest to a search origin.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub store: StoreRecord,
    /// Great-circle distance from the origin, always in miles.
    pub distance_miles: f64,
}

/// Linear nearest-neighbour scan over `stores` in iteration order.
///
/// A store replaces the current best only when strictly closer, so the first
/// of several equidistant stores wins. Returns `None` for an empty input.
pub fn nearest_store<'a, I>(origin: Coordinate, stores: I) -> Option<SearchResult>
where
    I: IntoIterator<Item = &'a StoreRecord>,
{
    let (best, distance_miles) = stores.into_iter().fold(
        (None, UNREACHABLE_DISTANCE_MI),
        |(best, best_distance), store| {
            let distance = origin.distance_miles(&store.coordinate());
            if distance < best_distance {
                (Some(store), distance)
            } else {
                (best, best_distance)
            }
        },
    );

    best.map(|store| SearchResult {
        store: store.clone(),
        distance_miles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(name: &str, latitude: f64, longitude: f64) -> StoreRecord {
        StoreRecord {
            name: name.to_string(),
            location: format!("{name} plaza"),
            address: "1 Main St".to_string(),
            city: name.to_string(),
            state: "MN".to_string(),
            zip_code: "55428".to_string(),
            latitude,
            longitude,
            county: "Test County".to_string(),
        }
    }

    fn sample_stores() -> Vec<StoreRecord> {
        vec![
            store("Crystal", 45.052_153_9, -93.364_854),
            store("Mission Viejo", 33.606_329_7, -117.688_165_6),
        ]
    }

    #[test]
    fn finds_crystal_from_null_island() {
        let stores = sample_stores();
        let result = nearest_store(Coordinate::new(0.0, 0.0), &stores).expect("non-empty");

        assert_eq!(result.store.name, "Crystal");
        assert!(
            (result.distance_miles - 6382.99).abs() < 0.01,
            "got {}",
            result.distance_miles
        );
    }

    #[test]
    fn finds_mission_viejo_from_southern_california() {
        let stores = sample_stores();
        let irvine = Coordinate::new(33.684_6, -117.826_5);
        let result = nearest_store(irvine, &stores).expect("non-empty");
        assert_eq!(result.store.name, "Mission Viejo");
        assert!(result.distance_miles < 15.0);
    }

    #[test]
    fn first_of_equidistant_stores_wins() {
        let stores = vec![
            store("First", 10.0, 20.0),
            store("Second", 10.0, 20.0),
            store("Far", -40.0, 100.0),
        ];
        let result = nearest_store(Coordinate::new(11.0, 21.0), &stores).expect("non-empty");
        assert_eq!(result.store.name, "First");
    }

    #[test]
    fn exact_match_has_zero_distance() {
        let stores = sample_stores();
        let origin = stores[1].coordinate();
        let result = nearest_store(origin, &stores).expect("non-empty");
        assert_eq!(result.store.name, "Mission Viejo");
        assert!(result.distance_miles.abs() < 1e-9);
    }

    #[test]
    fn antipodal_single_store_is_still_found() {
        let stores = vec![store("Antipode", 0.0, 180.0)];
        let result = nearest_store(Coordinate::new(0.0, 0.0), &stores).expect("non-empty");
        assert_eq!(result.store.name, "Antipode");
    }

    #[test]
    fn antipodal_store_off_the_equator_is_found() {
        let stores = vec![store("Antipode", -12.0, -170.0)];
        let result = nearest_store(Coordinate::new(12.0, 10.0), &stores).expect("non-empty");
        assert_eq!(result.store.name, "Antipode");
        assert!(result.distance_miles.is_finite());
        assert!(
            (result.distance_miles - crate::geo::EARTH_RADIUS_MI * std::f64::consts::PI).abs() < 0.01,
            "got {}",
            result.distance_miles
        );
    }

    #[test]
    fn empty_dataset_has_no_result() {
        let stores: Vec<StoreRecord> = Vec::new();
        assert!(nearest_store(Coordinate::new(0.0, 0.0), &stores).is_none());
    }
}
