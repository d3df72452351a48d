use std::collections::{HashMap, HashSet};

use serde_json::Value;
use uuid::Uuid;

use crate::diff::{CollectionKind, Operation};
use crate::models::ItemId;

/// An item of an ordered profile collection, as seen by reconciliation.
pub trait CollectionItem: Clone {
    const KIND: CollectionKind;

    fn id(&self) -> ItemId;

    fn set_id(&mut self, id: ItemId);

    /// Normalized write payload for this item at the given array position.
    /// `sort_order` must come from the position, never from a stored field,
    /// so that reordering is always detected and re-synced.
    fn canonical_payload(&self, sort_order: usize) -> Value;
}

/// Diffs one ordered collection between baseline and draft.
///
/// Emits deletions first (in baseline order), then creates and updates in a
/// single pass over the draft array. Deletions-first is policy, not an
/// accident: it lets `sort_order` values be assigned without transient
/// collisions when the server enforces a per-user uniqueness constraint on a
/// slot.
pub fn diff_collection<T: CollectionItem>(baseline: &[T], draft: &[T]) -> Vec<Operation> {
    let baseline_index: HashMap<Uuid, usize> = baseline
        .iter()
        .enumerate()
        .filter_map(|(pos, item)| item.id().persisted().map(|id| (id, pos)))
        .collect();

    // Draft identities, excluding never-persisted items. New items can never
    // share an identity with a baseline row, but the filter keeps that
    // assumption out of the deletion pass entirely.
    let draft_ids: HashSet<Uuid> = draft
        .iter()
        .filter_map(|item| item.id().persisted())
        .collect();

    let mut ops = Vec::new();

    for item in baseline {
        if let Some(id) = item.id().persisted() {
            if !draft_ids.contains(&id) {
                ops.push(Operation::Delete {
                    collection: T::KIND,
                    id,
                });
            }
        }
    }

    for (position, item) in draft.iter().enumerate() {
        let payload = item.canonical_payload(position);
        let counterpart = item
            .id()
            .persisted()
            .and_then(|id| baseline_index.get(&id).map(|pos| (id, *pos)));
        match counterpart {
            None => ops.push(Operation::Create {
                collection: T::KIND,
                local_id: item.id(),
                payload,
            }),
            Some((id, baseline_pos)) => {
                if baseline[baseline_pos].canonical_payload(baseline_pos) != payload {
                    ops.push(Operation::Update {
                        collection: T::KIND,
                        id,
                        payload,
                    });
                }
            }
        }
    }

    ops
}
