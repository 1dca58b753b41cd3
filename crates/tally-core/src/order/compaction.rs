use std::collections::HashMap;

/// Collapses repeated occurrences into counted display lines.
///
/// One line per distinct item, in first-occurrence order: `"<count> <item>s"`
/// when the item repeats, the bare item otherwise. Pluralization only appends
/// `s`.
///
/// # Examples
///
/// ```
/// use tally_core::order::compact;
///
/// let lines = compact(&["Hamburger", "Hamburger", "Pizza"]);
/// assert_eq!(lines, vec!["2 Hamburgers", "Pizza"]);
/// ```
pub fn compact<S: AsRef<str>>(occurrences: &[S]) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for item in occurrences {
        let item = item.as_ref();
        match positions.get(item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                positions.insert(item, counts.len());
                counts.push((item, 1));
            }
        }
    }

    counts
        .into_iter()
        .map(|(item, count)| {
            if count > 1 {
                format!("{} {}s", count, item)
            } else {
                item.to_string()
            }
        })
        .collect()
}
