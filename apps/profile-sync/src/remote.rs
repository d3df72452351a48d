//! The engine's only external boundary: one remote mutation call per
//! aggregate/collection kind. Implementations own the transport and
//! persistence details; the engine only sequences the calls.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::diff::CollectionKind;
use crate::errors::RemoteError;

/// Remote mutation surface the sync executor drives.
///
/// Every call is awaited to completion before the next is issued. Expected
/// business failures come back as [`RemoteError`], never as panics.
#[async_trait]
pub trait ProfileRemote: Send + Sync {
    /// Writes the whole public-profile aggregate.
    async fn update_profile(&self, payload: &Value) -> Result<(), RemoteError>;

    /// Writes the whole contact-info aggregate.
    async fn update_contact(&self, payload: &Value) -> Result<(), RemoteError>;

    /// Creates one collection item and returns the server-issued identity,
    /// which the executor uses to promote the item's placeholder id.
    async fn add_item(&self, collection: CollectionKind, payload: &Value)
        -> Result<Uuid, RemoteError>;

    async fn update_item(
        &self,
        collection: CollectionKind,
        id: Uuid,
        payload: &Value,
    ) -> Result<(), RemoteError>;

    async fn delete_item(&self, collection: CollectionKind, id: Uuid) -> Result<(), RemoteError>;

    async fn add_skill(&self, skill_id: Uuid) -> Result<(), RemoteError>;

    async fn remove_skill(&self, skill_id: Uuid) -> Result<(), RemoteError>;
}
