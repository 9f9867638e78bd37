//! Per-query grouping of trip durations by destination.

use std::collections::BTreeMap;

/// Observed durations (seconds) grouped by destination station.
///
/// Built fresh for each query from the trips leaving one start station.
/// Groups only come into existence through [`push`](Self::push), so every
/// destination present has at least one sample. Iteration is in ascending
/// destination-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationAggregate {
    groups: BTreeMap<String, Vec<u32>>,
}

impl DestinationAggregate {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observed trip duration to `destination`.
    pub fn push(&mut self, destination: &str, duration_secs: u32) {
        match self.groups.get_mut(destination) {
            Some(samples) => samples.push(duration_secs),
            None => {
                self.groups
                    .insert(destination.to_string(), vec![duration_secs]);
            }
        }
    }

    /// Durations observed for a destination, in insertion order.
    pub fn get(&self, destination: &str) -> Option<&[u32]> {
        self.groups.get(destination).map(Vec::as_slice)
    }

    /// Iterate over `(destination, durations)` groups.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.groups
            .iter()
            .map(|(name, samples)| (name.as_str(), samples.as_slice()))
    }

    /// Number of distinct destinations.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no trips were grouped.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of duration samples across all destinations.
    pub fn sample_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for DestinationAggregate {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut aggregate = Self::new();
        for (destination, duration) in iter {
            aggregate.push(destination.as_ref(), duration);
        }
        aggregate
    }
}
