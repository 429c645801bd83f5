use crate::{FacetGroup, FacetRow, TagValue, TopValue};
use indexmap::IndexMap;

/// Group engine rows by standardized tag key, attaching display labels.
///
/// Single order-preserving pass: groups come out in first-seen-key order and
/// values keep the engine's per-key ranking. No re-sorting, de-duplication
/// or truncation happens here; the engine already limits rows per key.
pub fn aggregate_facets<K, L>(rows: Vec<FacetRow>, standardize: K, label: L) -> Vec<FacetGroup>
where
    K: Fn(&str) -> String,
    L: Fn(&str, &TagValue) -> String,
{
    let mut groups: IndexMap<String, FacetGroup> = IndexMap::new();
    for row in rows {
        let std_key = standardize(&row.key);
        let group = groups
            .entry(std_key.clone())
            .or_insert_with(|| FacetGroup {
                key: std_key,
                top_values: Vec::new(),
            });
        group.top_values.push(TopValue {
            name: label(&row.key, &row.value),
            value: row.value,
            count: row.count,
        });
    }
    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagstore;

    fn row(key: &str, value: impl Into<TagValue>, count: u64) -> FacetRow {
        FacetRow {
            key: key.to_string(),
            value: value.into(),
            count,
        }
    }

    fn aggregate(rows: Vec<FacetRow>) -> Vec<FacetGroup> {
        aggregate_facets(rows, tagstore::standardize_key, tagstore::tag_value_label)
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate(Vec::new()).is_empty());
    }

    #[test]
    fn groups_follow_first_seen_key_order() {
        let groups = aggregate(vec![
            row("browser", "Chrome", 10),
            row("os", "Linux", 7),
            row("browser", "Firefox", 4),
            row("os", "macOS", 2),
        ]);
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["browser", "os"]);
        let browsers: Vec<&str> = groups[0]
            .top_values
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(browsers, ["Chrome", "Firefox"]);
    }

    #[test]
    fn every_key_lands_in_exactly_one_group() {
        let groups = aggregate(vec![
            row("browser", "Chrome", 10),
            row("os", "Linux", 7),
            row("browser", "Safari", 1),
        ]);
        assert_eq!(groups.len(), 2);
        let total: usize = groups.iter().map(|g| g.top_values.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn aliased_raw_keys_merge_into_one_group() {
        let groups = aggregate(vec![
            row("sys:release", "1.0.0", 5),
            row("release", "1.0.1", 3),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "release");
        assert_eq!(groups[0].top_values.len(), 2);
    }

    #[test]
    fn raw_values_survive_labeling() {
        let groups = aggregate(vec![row("sys:user", "id:42", 9)]);
        assert_eq!(groups[0].key, "user");
        assert_eq!(groups[0].top_values[0].name, "42");
        assert_eq!(groups[0].top_values[0].value, TagValue::from("id:42"));
        assert_eq!(groups[0].top_values[0].count, 9);
    }

    #[test]
    fn numeric_values_are_preserved() {
        let groups = aggregate(vec![row("project", 5u64, 3)]);
        assert_eq!(groups[0].top_values[0].value, TagValue::Number(5));
        assert_eq!(groups[0].top_values[0].name, "5");
    }
}
