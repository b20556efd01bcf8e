// Template variable schema: cleanup and duplicate detection before save.

use std::collections::{BTreeMap, BTreeSet};

use taskdesk_common::types::VariableSpec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariableError {
    #[error("duplicate variable key: {key}")]
    DuplicateKey { key: String },
}

/// Clean a template's variable list before it is persisted.
///
/// Trims key, label, and placeholder; drops entries missing a key or a
/// label; rejects the whole list on the first duplicate key (no partial
/// save). Surviving entries keep their original order — it is both the
/// display and substitution order.
pub fn sanitize_variables(raw: Vec<VariableSpec>) -> Result<Vec<VariableSpec>, VariableError> {
    let mut clean = Vec::with_capacity(raw.len());
    for spec in raw {
        let key = spec.key.trim().to_string();
        let label = spec.label.trim().to_string();
        if key.is_empty() || label.is_empty() {
            continue;
        }
        let placeholder = spec
            .placeholder
            .as_deref()
            .map(str::trim)
            .filter(|hint| !hint.is_empty())
            .map(str::to_string);
        clean.push(VariableSpec { key, label, placeholder, required: spec.required });
    }

    let mut seen = BTreeSet::new();
    for spec in &clean {
        if !seen.insert(spec.key.as_str()) {
            return Err(VariableError::DuplicateKey { key: spec.key.clone() });
        }
    }

    Ok(clean)
}

/// Reconcile entered values with the variable list of a newly selected
/// template: keys that disappeared are dropped, new keys start empty, and
/// values for keys that survive the switch are kept.
pub fn sync_variable_values(
    specs: &[VariableSpec],
    values: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut next = BTreeMap::new();
    for spec in specs {
        let key = spec.key.trim();
        if key.is_empty() {
            continue;
        }
        let value = values.get(key).cloned().unwrap_or_default();
        next.insert(key.to_string(), value);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(key: &str, label: &str) -> VariableSpec {
        VariableSpec { key: key.into(), label: label.into(), placeholder: None, required: false }
    }

    #[test]
    fn trims_and_keeps_order() {
        let clean = sanitize_variables(vec![spec("  topic ", " Topic "), spec("output", "Output")])
            .unwrap();
        assert_eq!(clean.len(), 2);
        assert_eq!(clean[0].key, "topic");
        assert_eq!(clean[0].label, "Topic");
        assert_eq!(clean[1].key, "output");
    }

    #[test]
    fn drops_entries_missing_key_or_label() {
        let clean = sanitize_variables(vec![
            spec("", "No key"),
            spec("no_label", "  "),
            spec("ok", "Ok"),
        ])
        .unwrap();
        assert_eq!(clean.len(), 1);
        assert_eq!(clean[0].key, "ok");
    }

    #[test]
    fn duplicate_key_rejects_the_whole_list() {
        let err = sanitize_variables(vec![spec("x", "First"), spec("x", "Second")]).unwrap_err();
        assert_eq!(err, VariableError::DuplicateKey { key: "x".into() });
    }

    #[test]
    fn duplicate_detection_runs_after_trimming() {
        let err = sanitize_variables(vec![spec("x", "First"), spec(" x ", "Second")]).unwrap_err();
        assert_eq!(err, VariableError::DuplicateKey { key: "x".into() });
    }

    #[test]
    fn blank_placeholder_becomes_none() {
        let mut raw = spec("k", "K");
        raw.placeholder = Some("   ".into());
        let clean = sanitize_variables(vec![raw]).unwrap();
        assert_eq!(clean[0].placeholder, None);
    }

    #[test]
    fn sync_keeps_surviving_values_and_seeds_new_keys() {
        let values: BTreeMap<String, String> =
            [("topic".to_string(), "Q1".to_string()), ("stale".to_string(), "x".to_string())]
                .into_iter()
                .collect();
        let next = sync_variable_values(&[spec("topic", "Topic"), spec("output", "Output")], &values);

        assert_eq!(next.get("topic").map(String::as_str), Some("Q1"));
        assert_eq!(next.get("output").map(String::as_str), Some(""));
        assert!(!next.contains_key("stale"));
    }

    #[test]
    fn sync_with_no_specs_clears_everything() {
        let values: BTreeMap<String, String> =
            [("topic".to_string(), "Q1".to_string())].into_iter().collect();
        assert!(sync_variable_values(&[], &values).is_empty());
    }
}
