//! The editing session: owns the draft/baseline pair, tracks dirtiness, and
//! runs the sync executor.
//!
//! Execution is strictly sequential — each remote call is awaited before the
//! next is issued — so a failure always leaves a well-defined, inspectable
//! prefix of applied changes. After each individual operation succeeds, the
//! baseline is updated to reflect it; a failed save therefore leaves the
//! baseline mirroring exactly what the server already holds, and a retry
//! re-plans only the remaining operations.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::canonical;
use crate::diff::{build_sync_plan, AggregateKind, CollectionItem, CollectionKind, Operation};
use crate::errors::{RemoteError, SyncError};
use crate::models::{ItemId, ProfileDraft};
use crate::remote::ProfileRemote;

/// Result of a fully successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Number of remote operations the plan contained and applied.
    pub operations_applied: usize,
}

/// One profile-editing session: a draft the UI mutates freely and a baseline
/// reflecting the engine's best knowledge of persisted state.
///
/// The pair is owned exclusively by this session; the draft is discarded on
/// navigation away without save.
pub struct EditSession {
    baseline: ProfileDraft,
    draft: ProfileDraft,
}

impl EditSession {
    /// Starts a session from a server-fetched snapshot. The snapshot becomes
    /// both the baseline and the initial draft (independent deep copies).
    pub fn new(snapshot: ProfileDraft) -> Self {
        EditSession {
            baseline: snapshot.clone(),
            draft: snapshot,
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// The UI mutation surface. Field edits, add-row, remove-row and reorder
    /// all go through here.
    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    pub fn baseline(&self) -> &ProfileDraft {
        &self.baseline
    }

    /// True iff the draft's canonical form differs from the baseline's.
    ///
    /// Recomputed from scratch on every call — no caching of prior diff
    /// results, which keeps the invariant trivially correct. Drives save
    /// enablement and the exit/navigation guard.
    pub fn is_dirty(&self) -> bool {
        canonical::snapshot(&self.baseline) != canonical::snapshot(&self.draft)
    }

    /// Throws away unsaved edits, resetting the draft to the baseline.
    pub fn discard(&mut self) {
        self.draft = self.baseline.clone();
    }

    /// The operation plan a save would execute right now, without executing
    /// it. Useful for inspection and logging.
    pub fn plan(&self) -> Vec<Operation> {
        build_sync_plan(&self.baseline, &self.draft)
    }

    /// Reconciles the draft against the baseline and flushes the resulting
    /// plan to the remote, one awaited operation at a time.
    ///
    /// The exclusive borrow guarantees at most one save per session is in
    /// flight; a second save cannot start until this one returns. Dropping
    /// the returned future mid-flight (timeout, task abort) leaves the
    /// session fully usable: the baseline keeps whatever prefix was applied,
    /// and the next save re-plans the remainder.
    ///
    /// A clean session saves as a no-op. A failure halts the plan at the
    /// first failing operation: the applied prefix stays committed to the
    /// baseline, the draft is left exactly as the user edited it, and the
    /// remote's error is surfaced verbatim for display. Retrying re-plans
    /// from the updated baseline and re-issues only what is still unsynced.
    pub async fn save<R: ProfileRemote + ?Sized>(
        &mut self,
        remote: &R,
    ) -> Result<SaveOutcome, SyncError> {
        if !self.is_dirty() {
            return Ok(SaveOutcome {
                operations_applied: 0,
            });
        }

        match self.run_plan(remote).await {
            Ok(applied) => {
                // Sever aliasing: the baseline becomes a fresh deep copy of
                // the just-saved draft, clearing dirty state.
                self.baseline = self.draft.clone();
                info!("profile sync complete: {applied} operation(s) applied");
                Ok(SaveOutcome {
                    operations_applied: applied,
                })
            }
            Err(err) => {
                warn!("profile sync halted: {err}");
                Err(err)
            }
        }
    }

    async fn run_plan<R: ProfileRemote + ?Sized>(
        &mut self,
        remote: &R,
    ) -> Result<usize, SyncError> {
        let plan = build_sync_plan(&self.baseline, &self.draft);
        let total = plan.len();
        debug!("executing sync plan of {total} operation(s)");

        for (applied, op) in plan.into_iter().enumerate() {
            let label = op.to_string();
            debug!("sync op {}/{total}: {label}", applied + 1);
            self.apply_one(remote, op)
                .await
                .map_err(|source| SyncError {
                    operation: label,
                    applied,
                    source,
                })?;
        }
        Ok(total)
    }

    /// Executes one operation and, on success, folds it into the baseline so
    /// that the baseline always mirrors what the server has accepted.
    async fn apply_one<R: ProfileRemote + ?Sized>(
        &mut self,
        remote: &R,
        op: Operation,
    ) -> Result<(), RemoteError> {
        match op {
            Operation::UpdateAggregate { aggregate, payload } => match aggregate {
                AggregateKind::PublicProfile => {
                    remote.update_profile(&payload).await?;
                    self.baseline.profile = self.draft.profile.clone();
                }
                AggregateKind::ContactInfo => {
                    remote.update_contact(&payload).await?;
                    self.baseline.contact = self.draft.contact.clone();
                }
            },
            Operation::AddSkill { skill_id } => {
                remote.add_skill(skill_id).await?;
                if let Some(skill) = self.draft.skills.iter().find(|s| s.id == skill_id) {
                    self.baseline.skills.push(skill.clone());
                }
            }
            Operation::RemoveSkill { skill_id } => {
                remote.remove_skill(skill_id).await?;
                self.baseline.skills.retain(|s| s.id != skill_id);
            }
            Operation::Delete { collection, id } => {
                remote.delete_item(collection, id).await?;
                self.delete_in_baseline(collection, id);
            }
            Operation::Create {
                collection,
                local_id,
                payload,
            } => {
                let server_id = remote.add_item(collection, &payload).await?;
                self.promote_created(collection, local_id, server_id);
            }
            Operation::Update {
                collection,
                id,
                payload,
            } => {
                remote.update_item(collection, id, &payload).await?;
                self.refresh_in_baseline(collection, id);
            }
        }
        Ok(())
    }

    fn delete_in_baseline(&mut self, collection: CollectionKind, id: Uuid) {
        match collection {
            CollectionKind::Career => delete_item(&mut self.baseline.careers, id),
            CollectionKind::Education => delete_item(&mut self.baseline.educations, id),
            CollectionKind::Certification => delete_item(&mut self.baseline.certifications, id),
            CollectionKind::Language => delete_item(&mut self.baseline.languages, id),
            CollectionKind::Url => delete_item(&mut self.baseline.urls, id),
        }
    }

    /// Swaps the draft item's placeholder identity for the server-issued one
    /// and folds the item into the baseline. Without the promotion, a second
    /// save in the same session would re-create the item.
    fn promote_created(&mut self, collection: CollectionKind, local_id: ItemId, server_id: Uuid) {
        match collection {
            CollectionKind::Career => promote_item(
                &mut self.draft.careers,
                &mut self.baseline.careers,
                local_id,
                server_id,
            ),
            CollectionKind::Education => promote_item(
                &mut self.draft.educations,
                &mut self.baseline.educations,
                local_id,
                server_id,
            ),
            CollectionKind::Certification => promote_item(
                &mut self.draft.certifications,
                &mut self.baseline.certifications,
                local_id,
                server_id,
            ),
            CollectionKind::Language => promote_item(
                &mut self.draft.languages,
                &mut self.baseline.languages,
                local_id,
                server_id,
            ),
            CollectionKind::Url => promote_item(
                &mut self.draft.urls,
                &mut self.baseline.urls,
                local_id,
                server_id,
            ),
        }
    }

    fn refresh_in_baseline(&mut self, collection: CollectionKind, id: Uuid) {
        match collection {
            CollectionKind::Career => {
                refresh_item(&self.draft.careers, &mut self.baseline.careers, id)
            }
            CollectionKind::Education => {
                refresh_item(&self.draft.educations, &mut self.baseline.educations, id)
            }
            CollectionKind::Certification => refresh_item(
                &self.draft.certifications,
                &mut self.baseline.certifications,
                id,
            ),
            CollectionKind::Language => {
                refresh_item(&self.draft.languages, &mut self.baseline.languages, id)
            }
            CollectionKind::Url => refresh_item(&self.draft.urls, &mut self.baseline.urls, id),
        }
    }
}

fn delete_item<T: CollectionItem>(items: &mut Vec<T>, id: Uuid) {
    items.retain(|item| item.id().persisted() != Some(id));
}

fn promote_item<T: CollectionItem>(
    draft: &mut [T],
    baseline: &mut Vec<T>,
    local_id: ItemId,
    server_id: Uuid,
) {
    if let Some(item) = draft.iter_mut().find(|item| item.id() == local_id) {
        item.set_id(ItemId::from_server(server_id));
        baseline.push(item.clone());
    }
}

fn refresh_item<T: CollectionItem>(draft: &[T], baseline: &mut [T], id: Uuid) {
    let Some(updated) = draft.iter().find(|item| item.id().persisted() == Some(id)) else {
        return;
    };
    if let Some(slot) = baseline
        .iter_mut()
        .find(|item| item.id().persisted() == Some(id))
    {
        *slot = updated.clone();
    }
}
