/// Wire representations for the post resource
///
/// The posts table carries bookkeeping columns that never leave the service.
/// The types here bind the `Post` entity to its public representation:
/// `PostRepr` projects a row down to exactly `id` and `title` on the way out,
/// and `PostWrite` accepts only `title` on the way in. `id` is assigned by
/// the database and cannot be written by clients; an `id` key in an incoming
/// payload is dropped during deserialization.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Post;

/// Outbound shape of a post: exactly `id` and `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRepr {
    pub id: i64,
    pub title: String,
}

impl From<Post> for PostRepr {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
        }
    }
}

impl From<&Post> for PostRepr {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
        }
    }
}

/// Inbound shape of a post. `title` is the only writable field.
///
/// Length bounds are enforced by the derive; whitespace-only titles are
/// caught by the service layer after normalization.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostWrite {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: String,
}

impl PostWrite {
    /// The title as it will be persisted, surrounding whitespace removed.
    pub fn normalized_title(&self) -> &str {
        self.title.trim()
    }
}
