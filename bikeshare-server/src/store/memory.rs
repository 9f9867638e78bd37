//! In-memory trip store.

use std::collections::HashMap;

use crate::domain::{CoordinatePair, Sex, TripRecord};

use super::{DestinationAggregate, StoreError, TripSource};

/// Read-only, in-memory collection of historical trips.
///
/// Records are indexed by start station at construction so that per-query
/// work is proportional to the trips leaving one station. The store is
/// immutable after construction and can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct TripStore {
    records: Vec<TripRecord>,
    /// Start station name to indices into `records`, in file order.
    by_start: HashMap<String, Vec<usize>>,
}

impl TripStore {
    /// Build a store that owns `records`.
    pub fn new(records: Vec<TripRecord>) -> Self {
        let mut by_start: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            by_start
                .entry(record.start_location.clone())
                .or_default()
                .push(idx);
        }

        Self { records, by_start }
    }

    /// All records, in load order.
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    /// Number of stored trips.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no trips.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Trips leaving `start`, in load order.
    fn trips_from<'a>(&'a self, start: &str) -> impl Iterator<Item = &'a TripRecord> + 'a {
        self.by_start
            .get(start)
            .into_iter()
            .flatten()
            .map(|&idx| &self.records[idx])
    }

    /// Group the durations of trips leaving `start` by destination.
    ///
    /// `sex = None` applies no filter. An unknown station yields an empty
    /// aggregate.
    pub fn group_endpoints_by_start(&self, start: &str, sex: Option<Sex>) -> DestinationAggregate {
        let mut aggregate = DestinationAggregate::new();
        for trip in self.trips_from(start).filter(|t| t.matches_sex(sex)) {
            aggregate.push(&trip.end_location, trip.duration_secs);
        }
        aggregate
    }

    /// Coordinates of every trip from `start` to `end`.
    pub fn coordinates_for(&self, start: &str, end: &str) -> Vec<CoordinatePair> {
        self.trips_from(start)
            .filter(|t| t.end_location == end)
            .map(TripRecord::coordinates)
            .collect()
    }

    /// Distinct start station names, sorted ascending.
    pub fn distinct_start_stations(&self) -> Vec<String> {
        let mut stations: Vec<String> = self.by_start.keys().cloned().collect();
        stations.sort();
        stations
    }
}

impl From<Vec<TripRecord>> for TripStore {
    fn from(records: Vec<TripRecord>) -> Self {
        Self::new(records)
    }
}

impl TripSource for TripStore {
    fn endpoints_by_start(
        &self,
        start: &str,
        sex: Option<Sex>,
    ) -> Result<DestinationAggregate, StoreError> {
        Ok(self.group_endpoints_by_start(start, sex))
    }

    fn coordinates_for(&self, start: &str, end: &str) -> Result<Vec<CoordinatePair>, StoreError> {
        Ok(TripStore::coordinates_for(self, start, end))
    }

    fn start_stations(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.distinct_start_stations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    fn coord(lat: f64, lng: f64) -> Option<Coordinate> {
        Coordinate::new(lat, lng).ok()
    }

    fn sample_store() -> TripStore {
        TripStore::new(vec![
            TripRecord::new("Hilltop", "Market", 300).with_sex(Sex::Female),
            TripRecord::new("Hilltop", "Market", 420).with_sex(Sex::Male),
            TripRecord::new("Hilltop", "Park", 900).with_sex(Sex::Male),
            TripRecord::new("Hilltop", "Market", 600),
            TripRecord::new("Market", "Hilltop", 480).with_sex(Sex::Other),
            TripRecord::new("Depot", "Market", 60)
                .with_coordinates(coord(40.0, -74.0), coord(40.1, -74.1)),
        ])
    }

    #[test]
    fn groups_all_trips_without_filter() {
        let store = sample_store();
        let aggregate = store.group_endpoints_by_start("Hilltop", None);

        assert_eq!(aggregate.len(), 2);
        assert_eq!(aggregate.get("Market"), Some(&[300, 420, 600][..]));
        assert_eq!(aggregate.get("Park"), Some(&[900][..]));
    }

    #[test]
    fn groups_with_sex_filter() {
        let store = sample_store();

        let male = store.group_endpoints_by_start("Hilltop", Some(Sex::Male));
        assert_eq!(male.get("Market"), Some(&[420][..]));
        assert_eq!(male.get("Park"), Some(&[900][..]));

        let female = store.group_endpoints_by_start("Hilltop", Some(Sex::Female));
        assert_eq!(female.len(), 1);
        assert_eq!(female.get("Market"), Some(&[300][..]));

        let other = store.group_endpoints_by_start("Hilltop", Some(Sex::Other));
        assert!(other.is_empty());
    }

    #[test]
    fn unknown_station_is_empty() {
        let store = sample_store();
        assert!(store.group_endpoints_by_start("Nowhere", None).is_empty());
        assert!(store.coordinates_for("Nowhere", "Market").is_empty());
    }

    #[test]
    fn direction_matters() {
        let store = sample_store();
        let from_market = store.group_endpoints_by_start("Market", None);
        assert_eq!(from_market.len(), 1);
        assert_eq!(from_market.get("Hilltop"), Some(&[480][..]));
    }

    #[test]
    fn coordinates_include_missing_pairs() {
        let store = sample_store();

        let pairs = store.coordinates_for("Hilltop", "Market");
        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|p| p.both().is_none()));

        let pairs = store.coordinates_for("Depot", "Market");
        assert_eq!(
            pairs,
            vec![CoordinatePair::new(coord(40.0, -74.0), coord(40.1, -74.1))]
        );
    }

    #[test]
    fn distinct_start_stations_sorted() {
        let store = sample_store();
        assert_eq!(
            store.distinct_start_stations(),
            vec!["Depot".to_string(), "Hilltop".to_string(), "Market".to_string()]
        );
    }

    #[test]
    fn empty_store() {
        let store = TripStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.distinct_start_stations().is_empty());
    }

    #[test]
    fn trip_source_matches_inherent_methods() {
        let store = sample_store();
        let source: &dyn TripSource = &store;

        assert_eq!(
            source.endpoints_by_start("Hilltop", Some(Sex::Male)).unwrap(),
            store.group_endpoints_by_start("Hilltop", Some(Sex::Male))
        );
        assert_eq!(
            source.coordinates_for("Depot", "Market").unwrap(),
            store.coordinates_for("Depot", "Market")
        );
        assert_eq!(
            source.start_stations().unwrap(),
            store.distinct_start_stations()
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn sex_strategy() -> impl Strategy<Value = Option<Sex>> {
        prop_oneof![
            Just(None),
            Just(Some(Sex::Female)),
            Just(Some(Sex::Male)),
            Just(Some(Sex::Other)),
        ]
    }

    fn records_strategy() -> impl Strategy<Value = Vec<TripRecord>> {
        prop::collection::vec(
            ("[A-C]", "[A-C]", 0u32..3600, sex_strategy()).prop_map(|(s, e, d, sex)| {
                let mut record = TripRecord::new(s, e, d);
                record.sex = sex;
                record
            }),
            0..40,
        )
    }

    proptest! {
        /// Every trip from a station lands in exactly one group, and filtered
        /// groupings are contained in the unfiltered one
        #[test]
        fn grouping_accounts_for_every_trip(records in records_strategy(), filter in sex_strategy()) {
            let store = TripStore::new(records.clone());

            for start in ["A", "B", "C"] {
                let all = store.group_endpoints_by_start(start, None);
                let expected = records.iter().filter(|r| r.start_location == start).count();
                prop_assert_eq!(all.sample_count(), expected);

                let filtered = store.group_endpoints_by_start(start, filter);
                let expected = records
                    .iter()
                    .filter(|r| r.start_location == start && r.matches_sex(filter))
                    .count();
                prop_assert_eq!(filtered.sample_count(), expected);
                prop_assert!(filtered.len() <= all.len());
            }
        }
    }
}
