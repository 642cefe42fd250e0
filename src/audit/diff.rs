//! Change summaries for audit entries

use serde_json::Value;

/// Fields that change on every write and say nothing about the edit
const BOOKKEEPING_FIELDS: &[&str] = &["updated_at"];

/// Describe the top-level fields that differ between two record states,
/// e.g. `budget: 5000.0 -> 6000.0, name: "Food" -> "Groceries"`
pub fn summarize_changes(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return (before != after).then(|| format!("{} -> {}", before, after));
    };

    let mut changes: Vec<String> = before_obj
        .iter()
        .filter(|(key, _)| !BOOKKEEPING_FIELDS.contains(&key.as_str()))
        .filter_map(|(key, old)| match after_obj.get(key) {
            Some(new) if new == old => None,
            Some(new) => Some(format!("{}: {} -> {}", key, old, new)),
            None => Some(format!("{}: {} -> (removed)", key, old)),
        })
        .collect();

    changes.extend(
        after_obj
            .iter()
            .filter(|(key, _)| !before_obj.contains_key(*key))
            .map(|(key, new)| format!("{}: (added) -> {}", key, new)),
    );

    if changes.is_empty() {
        None
    } else {
        changes.sort();
        Some(changes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Food", "budget": 10.0});
        assert_eq!(summarize_changes(&value, &value), None);
    }

    #[test]
    fn test_changed_fields_sorted() {
        let before = json!({"name": "Food", "budget": 10.0, "updated_at": "a"});
        let after = json!({"name": "Groceries", "budget": 20.0, "updated_at": "b"});

        assert_eq!(
            summarize_changes(&before, &after).as_deref(),
            Some(r#"budget: 10.0 -> 20.0, name: "Food" -> "Groceries""#)
        );
    }

    #[test]
    fn test_added_and_removed() {
        let before = json!({"old": 1});
        let after = json!({"new": 2});

        assert_eq!(
            summarize_changes(&before, &after).as_deref(),
            Some("new: (added) -> 2, old: 1 -> (removed)")
        );
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            summarize_changes(&json!(1), &json!(2)).as_deref(),
            Some("1 -> 2")
        );
    }
}
