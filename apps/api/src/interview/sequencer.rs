//! The step sequencer: decides which profile field to ask for next.
//!
//! `find_next_step` is a pure function of the collected data — no side
//! effects, deterministic, idempotent. `None` means the sequence is finished
//! (the wire protocol encodes it as -1).

use serde_json::{Map, Value};

use crate::interview::catalog::{StepRole, RESUME_STEPS};

/// In-progress profile data, keyed by step field name.
/// Travels in the request/response payload; the server keeps no copy.
pub type CollectedData = Map<String, Value>;

/// Returns the catalog index of the first mandatory field that is still
/// missing. Once every mandatory field is populated, returns the terminal
/// step's index on every call until the caller submits. The terminal step is
/// never selected for being unanswered — it is not mandatory — only by the
/// explicit all-mandatory-present check.
pub fn find_next_step(collected: &CollectedData) -> Option<usize> {
    for (i, step) in RESUME_STEPS.iter().enumerate() {
        if step.mandatory && !is_filled(collected, step.field) {
            return Some(i);
        }
        if step.role == StepRole::Terminal
            && RESUME_STEPS
                .iter()
                .filter(|s| s.mandatory)
                .all(|s| is_filled(collected, s.field))
        {
            return Some(i);
        }
    }
    None
}

/// A field counts as filled only for a non-empty value. Extraction can seed
/// the map with nulls, empty strings or empty lists; those all count as
/// missing so the interview still asks for them.
pub fn is_filled(collected: &CollectedData, field: &str) -> bool {
    match collected.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MANDATORY: &[&str] = &[
        "full_name",
        "email",
        "phone",
        "experience_level",
        "domain",
        "job_title",
        "skills",
        "summary",
    ];

    fn filled(fields: &[&str]) -> CollectedData {
        let mut data = CollectedData::new();
        for f in fields {
            data.insert(f.to_string(), json!(format!("value for {f}")));
        }
        data
    }

    #[test]
    fn test_empty_data_asks_for_full_name() {
        assert_eq!(find_next_step(&CollectedData::new()), Some(0));
    }

    #[test]
    fn test_advances_to_email_after_name() {
        assert_eq!(find_next_step(&filled(&["full_name"])), Some(1));
    }

    #[test]
    fn test_returns_exactly_the_missing_field() {
        for (skip, expected) in MANDATORY.iter().zip(0usize..) {
            let others: Vec<&str> = MANDATORY.iter().filter(|f| *f != skip).copied().collect();
            assert_eq!(
                find_next_step(&filled(&others)),
                Some(expected),
                "missing field {skip}"
            );
        }
    }

    #[test]
    fn test_complete_data_reaches_terminal_step() {
        let data = filled(MANDATORY);
        assert_eq!(find_next_step(&data), Some(8));
        // The terminal step is served repeatedly until the caller submits.
        assert_eq!(find_next_step(&data), Some(8));
    }

    #[test]
    fn test_terminal_answer_does_not_advance_past_terminal() {
        let mut data = filled(MANDATORY);
        data.insert("critique".to_string(), json!("looks good"));
        assert_eq!(find_next_step(&data), Some(8));
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut data = filled(MANDATORY);
        data.insert("email".to_string(), json!(""));
        assert_eq!(find_next_step(&data), Some(1));
    }

    #[test]
    fn test_null_and_empty_list_count_as_missing() {
        let mut data = filled(MANDATORY);
        data.insert("skills".to_string(), json!([]));
        assert_eq!(find_next_step(&data), Some(6));
        data.insert("skills".to_string(), json!(null));
        assert_eq!(find_next_step(&data), Some(6));
    }

    #[test]
    fn test_zero_counts_as_missing() {
        let mut data = filled(MANDATORY);
        data.insert("phone".to_string(), json!(0));
        assert_eq!(find_next_step(&data), Some(2));
        data.insert("phone".to_string(), json!(7025550123u64));
        assert_eq!(find_next_step(&data), Some(8));
    }

    #[test]
    fn test_skills_list_counts_as_filled() {
        let mut data = filled(MANDATORY);
        data.insert("skills".to_string(), json!(["Rust", "SQL"]));
        assert_eq!(find_next_step(&data), Some(8));
    }
}
