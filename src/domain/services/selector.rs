use crate::domain::services::lookup::{normalize, CaseInsensitiveMap};
use std::collections::HashSet;

/// Returns the entries of `table` named in `requested`, in table order.
///
/// Names missing from the table are logged and ignored.
pub fn select_subset<S, V>(requested: &[S], table: &CaseInsensitiveMap<V>) -> CaseInsensitiveMap<V>
where
    S: AsRef<str>,
    V: Clone,
{
    let mut wanted = HashSet::new();
    for name in requested {
        let name = name.as_ref();
        if table.contains_key(name) {
            wanted.insert(normalize(name));
        } else {
            tracing::warn!(
                "provided entry with the name - {} is not valid, it will be disregarded",
                name
            );
        }
    }

    table
        .iter()
        .filter(|(key, _)| wanted.contains(&normalize(key)))
        .map(|(key, value)| (key, value.clone()))
        .collect()
}
