use serde_json::Value;

use crate::diff::{AggregateKind, Operation};

/// A single-instance aggregate that is compared and written whole.
pub trait Aggregate {
    const KIND: AggregateKind;

    /// Normalized representation used for equality and as the write payload.
    fn canonical_payload(&self) -> Value;
}

/// Compares the canonical forms of a scalar aggregate and emits at most one
/// whole-aggregate update. Partial patches are never produced; the payload is
/// always the full normalized draft aggregate.
pub fn diff_aggregate<A: Aggregate>(baseline: &A, draft: &A) -> Option<Operation> {
    let payload = draft.canonical_payload();
    if baseline.canonical_payload() == payload {
        None
    } else {
        Some(Operation::UpdateAggregate {
            aggregate: A::KIND,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PublicProfile;

    fn make_profile() -> PublicProfile {
        PublicProfile {
            display_name: "Ada Lovelace".to_string(),
            headline: Some("Analyst".to_string()),
            bio: None,
            birth_date: None,
            location: Some("London".to_string()),
            open_to_work: true,
        }
    }

    #[test]
    fn test_unchanged_aggregate_emits_nothing() {
        let baseline = make_profile();
        let draft = baseline.clone();
        assert!(diff_aggregate(&baseline, &draft).is_none());
    }

    #[test]
    fn test_one_field_change_writes_whole_aggregate() {
        let baseline = make_profile();
        let mut draft = baseline.clone();
        draft.location = Some("Paris".to_string());

        let op = diff_aggregate(&baseline, &draft).expect("expected an update");
        let Operation::UpdateAggregate { aggregate, payload } = op else {
            panic!("expected UpdateAggregate");
        };
        assert_eq!(aggregate, AggregateKind::PublicProfile);
        // The payload carries every field, not just the changed one.
        assert_eq!(payload["location"], "Paris");
        assert_eq!(payload["display_name"], "Ada Lovelace");
        assert_eq!(payload["open_to_work"], true);
    }

    #[test]
    fn test_whitespace_only_edit_is_not_a_change() {
        let baseline = make_profile();
        let mut draft = baseline.clone();
        draft.display_name = "  Ada Lovelace  ".to_string();
        assert!(diff_aggregate(&baseline, &draft).is_none());
    }

    #[test]
    fn test_cleared_field_equals_never_set() {
        let mut baseline = make_profile();
        baseline.headline = None;
        let mut draft = make_profile();
        draft.headline = Some("   ".to_string());
        assert!(diff_aggregate(&baseline, &draft).is_none());
    }
}
