use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of the input array. Only the `name` field matters here; the
/// rest (`symbol`, ...) is carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    pub fn new(data: serde_json::Map<String, serde_json::Value>) -> Self {
        Self { data }
    }

    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.data.get(field)
    }

    /// The `name` field when it is present and a string.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(serde_json::Value::as_str)
    }
}

/// Occurrence count per distinct name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTally {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl NameTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, name: &str) {
        match self.index.get(name) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(name.to_string(), self.counts.len());
                self.counts.push((name.to_string(), 1));
            }
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.index
            .get(name)
            .map(|&slot| self.counts[slot].1)
            .unwrap_or(0)
    }

    /// Sum of all counts; equals the number of names fed in.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl<'a> FromIterator<&'a str> for NameTally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = NameTally::new();
        for name in iter {
            tally.increment(name);
        }
        tally
    }
}

/// Names seen more than once, with their counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DuplicateSet {
    entries: Vec<(String, usize)>,
}

impl DuplicateSet {
    pub fn from_tally(tally: &NameTally) -> Self {
        let entries = tally
            .iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, count)| *count)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_record_name_lookup() {
        assert_eq!(
            record(json!({"name": "grinning", "symbol": "😀"})).name(),
            Some("grinning")
        );
        assert_eq!(record(json!({"symbol": "😀"})).name(), None);
        assert_eq!(record(json!({"name": 7})).name(), None);
    }

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let tally: NameTally = ["b", "a", "b", "c", "a", "b"].into_iter().collect();

        let order: Vec<&str> = tally.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
        assert_eq!(tally.count("b"), 3);
        assert_eq!(tally.count("a"), 2);
        assert_eq!(tally.count("missing"), 0);
        assert_eq!(tally.total(), 6);
        assert_eq!(tally.len(), 3);
    }

    #[test]
    fn test_names_are_compared_exactly() {
        let tally: NameTally = ["Smile", "smile", "smile ", "smile"].into_iter().collect();
        assert_eq!(tally.len(), 3);
        assert_eq!(tally.count("smile"), 2);
    }

    #[test]
    fn test_duplicate_set_only_keeps_repeats() {
        let tally: NameTally = ["x", "y", "x", "z", "z", "z"].into_iter().collect();
        let dupes = DuplicateSet::from_tally(&tally);

        assert_eq!(dupes.len(), 2);
        assert_eq!(dupes.get("x"), Some(2));
        assert_eq!(dupes.get("z"), Some(3));
        assert!(!dupes.contains("y"));
    }

    #[test]
    fn test_empty_tally_has_no_duplicates() {
        let tally = NameTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
        assert!(DuplicateSet::from_tally(&tally).is_empty());
    }
}
