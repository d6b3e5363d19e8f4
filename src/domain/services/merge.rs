//! Folding `(key, value)` records into one aggregate per key.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeSet, HashMap};

/// Insertion-ordered mapping from a string key to an aggregate.
///
/// Iteration follows the order keys were first seen. Equality compares
/// content only, so two groupings built from the same records in a
/// different order are equal.
#[derive(Debug, Clone)]
pub struct Grouping<A> {
    entries: Vec<(String, A)>,
    index: HashMap<String, usize>,
}

impl<A> Default for Grouping<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<A> Grouping<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&A> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Sets the aggregate for `key`, keeping its original position if present.
    /// Returns the aggregate it replaced.
    pub fn insert(&mut self, key: String, value: A) -> Option<A> {
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &A> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &A)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_or_default(&mut self, key: String) -> &mut A
    where
        A: Default,
    {
        let i = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.clone(), i);
                self.entries.push((key, A::default()));
                i
            }
        };
        &mut self.entries[i].1
    }
}

impl<A> IntoIterator for Grouping<A> {
    type Item = (String, A);
    type IntoIter = std::vec::IntoIter<(String, A)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, A> FromIterator<(K, A)> for Grouping<A> {
    fn from_iter<I: IntoIterator<Item = (K, A)>>(iter: I) -> Self {
        let mut grouping = Self::new();
        for (key, value) in iter {
            grouping.insert(key.into(), value);
        }
        grouping
    }
}

impl<A: PartialEq> PartialEq for Grouping<A> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<A: Serialize> Serialize for Grouping<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Folds every record into the aggregate of its key with `combine`.
pub fn merge_with<V, A, I, F>(records: I, mut combine: F) -> Grouping<A>
where
    A: Default,
    I: IntoIterator<Item = (String, V)>,
    F: FnMut(&mut A, V),
{
    let mut merged = Grouping::new();
    for (key, value) in records {
        combine(merged.entry_or_default(key), value);
    }
    merged
}

/// `union-set` policy: duplicate values collapse.
pub fn merge_into_sets<V, I>(records: I) -> Grouping<BTreeSet<V>>
where
    V: Ord,
    I: IntoIterator<Item = (String, V)>,
{
    merge_with(records, |set: &mut BTreeSet<V>, value| {
        set.insert(value);
    })
}

/// `ordered-unique-list` policy: a value already listed under its key is
/// skipped, first-seen order is kept.
pub fn merge_into_unique_lists<V, I>(records: I) -> Grouping<Vec<V>>
where
    V: PartialEq,
    I: IntoIterator<Item = (String, V)>,
{
    merge_with(records, |list: &mut Vec<V>, value| {
        if !list.contains(&value) {
            list.push(value);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_union_set_collapses_duplicates() {
        let merged = merge_into_sets(records(&[("a", "x"), ("b", "y"), ("a", "x")]));

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("a"), Some(&set(&["x"])));
        assert_eq!(merged.get("b"), Some(&set(&["y"])));
    }

    #[test]
    fn test_union_set_ignores_input_order() {
        let forward = merge_into_sets(records(&[("a", "x"), ("b", "y"), ("a", "x")]));
        let backward = merge_into_sets(records(&[("a", "x"), ("b", "y"), ("a", "x")]).into_iter().rev());

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_union_set_groups_people_by_food() {
        let merged = merge_into_sets(records(&[
            ("fish", "Danielle Ren"),
            ("eggs", "Cristiana Lusitano"),
            ("pasta", "Cristiana Lusitano"),
            ("bread", "Karol Drewno"),
            ("pasta", "Karol Drewno"),
            ("mexican", "Rosie Curran"),
        ]));

        let expected: Grouping<BTreeSet<String>> = vec![
            ("fish", set(&["Danielle Ren"])),
            ("eggs", set(&["Cristiana Lusitano"])),
            ("pasta", set(&["Karol Drewno", "Cristiana Lusitano"])),
            ("bread", set(&["Karol Drewno"])),
            ("mexican", set(&["Rosie Curran"])),
        ]
        .into_iter()
        .collect();

        assert_eq!(merged, expected);
    }

    #[test]
    fn test_unique_list_keeps_first_order() {
        let merged = merge_into_unique_lists(records(&[("V", "r1"), ("V", "r1"), ("V", "r2")]));

        assert_eq!(merged.get("V"), Some(&vec!["r1".to_string(), "r2".to_string()]));
    }

    #[test]
    fn test_unique_list_keeps_key_order() {
        let merged = merge_into_unique_lists(records(&[
            ("Twin Dynasty", "There is nothing for Wen to eat."),
            ("Spirit House", "There is nothing for Tom to drink."),
            ("Spirit House", "There is nothing for Tom to drink."),
            ("Spirit House", "There is nothing for Tom to drink."),
            ("Spirit House", "There is nothing for Paul to drink."),
            ("Arms Gardens", "There is nothing for Paul to drink."),
            ("Fabrique", "There is nothing for Wen to drink."),
        ]));

        let keys: Vec<&str> = merged.keys().collect();
        assert_eq!(keys, vec!["Twin Dynasty", "Spirit House", "Arms Gardens", "Fabrique"]);
        assert_eq!(
            merged.get("Spirit House"),
            Some(&vec![
                "There is nothing for Tom to drink.".to_string(),
                "There is nothing for Paul to drink.".to_string(),
            ])
        );
    }

    #[test]
    fn test_empty_input_gives_empty_grouping() {
        let merged = merge_into_sets(Vec::<(String, String)>::new());
        assert!(merged.is_empty());

        let merged = merge_into_unique_lists(Vec::<(String, String)>::new());
        assert!(merged.is_empty());
    }
}
