//! Reconciliation planning: compares a baseline and a draft and produces the
//! ordered list of remote operations that moves persisted state to the draft.

pub mod collection;
pub mod scalar;
pub mod set;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{ItemId, ProfileDraft};

pub use collection::{diff_collection, CollectionItem};
pub use scalar::{diff_aggregate, Aggregate};
pub use set::diff_skills;

/// The two single-instance aggregates a profile carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateKind {
    PublicProfile,
    ContactInfo,
}

impl AggregateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateKind::PublicProfile => "public_profile",
            AggregateKind::ContactInfo => "contact_info",
        }
    }
}

/// The five ordered child collections of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Career,
    Education,
    Certification,
    Language,
    Url,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Career => "career",
            CollectionKind::Education => "education",
            CollectionKind::Certification => "certification",
            CollectionKind::Language => "language",
            CollectionKind::Url => "url",
        }
    }
}

/// One remote mutation in a sync plan. Payloads are canonical JSON objects
/// and always carry the whole item or aggregate, never a partial patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    UpdateAggregate {
        aggregate: AggregateKind,
        payload: Value,
    },
    Create {
        collection: CollectionKind,
        /// The draft item's placeholder identity, kept so the executor can
        /// promote it to the server-issued id once the create succeeds.
        local_id: ItemId,
        payload: Value,
    },
    Update {
        collection: CollectionKind,
        id: Uuid,
        payload: Value,
    },
    Delete {
        collection: CollectionKind,
        id: Uuid,
    },
    AddSkill {
        skill_id: Uuid,
    },
    RemoveSkill {
        skill_id: Uuid,
    },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::UpdateAggregate { aggregate, .. } => {
                write!(f, "update {}", aggregate.as_str())
            }
            Operation::Create { collection, .. } => write!(f, "create {}", collection.as_str()),
            Operation::Update { collection, id, .. } => {
                write!(f, "update {} {id}", collection.as_str())
            }
            Operation::Delete { collection, id } => {
                write!(f, "delete {} {id}", collection.as_str())
            }
            Operation::AddSkill { skill_id } => write!(f, "add skill {skill_id}"),
            Operation::RemoveSkill { skill_id } => write!(f, "remove skill {skill_id}"),
        }
    }
}

/// Builds the full operation plan for one save.
///
/// The sequence is fixed: public profile, contact info, skill set, then each
/// ordered collection. The order itself is arbitrary, but it must stay fixed
/// so that a partial failure always leaves the same well-defined prefix of
/// applied changes.
pub fn build_sync_plan(baseline: &ProfileDraft, draft: &ProfileDraft) -> Vec<Operation> {
    let mut plan = Vec::new();
    plan.extend(diff_aggregate(&baseline.profile, &draft.profile));
    plan.extend(diff_aggregate(&baseline.contact, &draft.contact));
    plan.extend(diff_skills(&baseline.skills, &draft.skills));
    plan.extend(diff_collection(&baseline.careers, &draft.careers));
    plan.extend(diff_collection(&baseline.educations, &draft.educations));
    plan.extend(diff_collection(
        &baseline.certifications,
        &draft.certifications,
    ));
    plan.extend(diff_collection(&baseline.languages, &draft.languages));
    plan.extend(diff_collection(&baseline.urls, &draft.urls));
    plan
}
