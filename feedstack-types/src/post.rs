use crate::{OwnerId, PostId};
use serde::{Deserialize, Serialize};

/// A single feed post.
///
/// The wire format matches the upstream feed API: the owner is serialized
/// as `userId`, and any extra payload fields (`body` and friends) are
/// ignored on deserialize. Posts are replaced wholesale, never mutated in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(rename = "userId")]
    pub owner_id: OwnerId,
}

impl Post {
    /// Creates a post with an already-assigned id.
    #[must_use]
    pub fn new(id: PostId, title: impl Into<String>, owner_id: OwnerId) -> Self {
        Self {
            id,
            title: title.into(),
            owner_id,
        }
    }

    /// Creates a post the store has not assigned an id to yet.
    #[must_use]
    pub fn draft(title: impl Into<String>, owner_id: OwnerId) -> Self {
        Self {
            id: PostId::UNASSIGNED,
            title: title.into(),
            owner_id,
        }
    }
}
