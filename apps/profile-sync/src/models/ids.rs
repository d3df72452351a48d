use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of an item in an ordered profile collection.
///
/// Items the user adds in the editor carry a `New` identity (a locally
/// generated placeholder) until the first successful save persists them.
/// Rows loaded from the server always carry `Persisted`. The two variants
/// cannot collide, so classifying an item as new never needs to consult the
/// baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemId {
    New { local: Uuid },
    Persisted { id: Uuid },
}

impl ItemId {
    /// Mints a placeholder identity for an item created in the editor.
    pub fn new_local() -> Self {
        ItemId::New {
            local: Uuid::new_v4(),
        }
    }

    /// Wraps a server-issued identity.
    pub fn from_server(id: Uuid) -> Self {
        ItemId::Persisted { id }
    }

    /// True iff the item has never been persisted.
    pub fn is_new(&self) -> bool {
        matches!(self, ItemId::New { .. })
    }

    /// The server-issued identity, if the item has one.
    pub fn persisted(&self) -> Option<Uuid> {
        match self {
            ItemId::Persisted { id } => Some(*id),
            ItemId::New { .. } => None,
        }
    }
}
