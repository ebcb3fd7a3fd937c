// ---------------------------------------------------------------------------
// Generic group-by-key primitive
// ---------------------------------------------------------------------------

/// Group `items` by the key returned from `key_fn`, preserving the first-seen
/// order of keys and the original order of items within each group.
///
/// Key sets here are small (terms, years, (year, term) pairs), so a linear
/// key scan beats hashing and keeps keys free of `Hash`/`Ord` bounds.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, key_fn: F) -> Vec<(K, Vec<T>)>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let key = key_fn(&item);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(item),
            None => groups.push((key, vec![item])),
        }
    }
    groups
}

/// Arithmetic mean over the values `value_fn` extracts from a group.
///
/// Groups produced by [`group_by`] are never empty, but an empty slice still
/// maps to 0.0 rather than NaN so callers never see a poisoned value.
pub fn mean_of<T, F>(items: &[T], value_fn: F) -> f64
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return 0.0;
    }
    items.iter().map(value_fn).sum::<f64>() / items.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_first_seen_key_order() {
        let groups = group_by(vec!["b", "a", "b", "c", "a"], |s| s.to_string());
        let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(groups[0].1, vec!["b", "b"]);
        assert_eq!(groups[1].1, vec!["a", "a"]);
    }

    #[test]
    fn members_keep_source_order() {
        let groups = group_by(vec![(1, "x"), (2, "y"), (1, "z")], |&(n, _)| n);
        assert_eq!(groups[0].1, vec![(1, "x"), (1, "z")]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups: Vec<(i32, Vec<i32>)> = group_by(Vec::<i32>::new(), |&n| n);
        assert!(groups.is_empty());
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean_of(&[1.0, 2.0, 3.0], |&v| v), 2.0);
        assert_eq!(mean_of(&[7.5], |&v| v), 7.5);
        assert_eq!(mean_of(&[] as &[f64], |&v| v), 0.0);
    }
}
