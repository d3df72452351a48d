use std::collections::BTreeSet;

use uuid::Uuid;

use crate::diff::Operation;
use crate::models::Skill;

/// Diffs the unordered skill membership.
///
/// Removals are emitted before additions so the server never sees a
/// transient duplicate membership; within each group the order is sorted by
/// id for reproducibility. Set members have no update operation.
pub fn diff_skills(baseline: &[Skill], draft: &[Skill]) -> Vec<Operation> {
    let before: BTreeSet<Uuid> = baseline.iter().map(|s| s.id).collect();
    let after: BTreeSet<Uuid> = draft.iter().map(|s| s.id).collect();

    let mut ops: Vec<Operation> = before
        .difference(&after)
        .map(|id| Operation::RemoveSkill { skill_id: *id })
        .collect();
    ops.extend(
        after
            .difference(&before)
            .map(|id| Operation::AddSkill { skill_id: *id }),
    );
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_skill(name: &str) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_unchanged_membership_emits_nothing() {
        let baseline = vec![make_skill("rust"), make_skill("sql")];
        let draft = baseline.clone();
        assert!(diff_skills(&baseline, &draft).is_empty());
    }

    #[test]
    fn test_membership_swap_emits_remove_then_add() {
        let ts = make_skill("typescript");
        let react = make_skill("react");
        let go = make_skill("go");
        let baseline = vec![ts.clone(), react.clone()];
        let draft = vec![react, go.clone()];

        let ops = diff_skills(&baseline, &draft);
        assert_eq!(
            ops,
            vec![
                Operation::RemoveSkill { skill_id: ts.id },
                Operation::AddSkill { skill_id: go.id },
            ]
        );
    }

    #[test]
    fn test_order_within_set_is_irrelevant() {
        let a = make_skill("a");
        let b = make_skill("b");
        let baseline = vec![a.clone(), b.clone()];
        let draft = vec![b, a];
        assert!(diff_skills(&baseline, &draft).is_empty());
    }
}
