//! Profile-edit reconciliation engine.
//!
//! A user edits a nested, multi-collection draft of their profile in memory.
//! On save, this crate computes the minimal set of remote mutations needed to
//! bring persisted state in line with the draft, executes them strictly
//! sequentially against a [`ProfileRemote`] boundary, and tracks "unsaved
//! changes" for navigation guards.
//!
//! The engine assumes a single editor with no concurrent remote writers
//! during an edit session. It is not an operational-transform or CRDT system.

pub mod canonical;
pub mod diff;
pub mod errors;
pub mod models;
pub mod remote;
pub mod session;

pub use diff::{build_sync_plan, AggregateKind, CollectionKind, Operation};
pub use errors::{RemoteError, SyncError};
pub use models::{
    Career, Certification, ContactInfo, Education, ItemId, Language, LanguageLevel, ProfileDraft,
    PublicProfile, Skill, UrlEntry,
};
pub use remote::ProfileRemote;
pub use session::{EditSession, SaveOutcome};
