/// HTTP handlers for the post resource
pub mod posts;

// Re-export handler functions at module level
pub use posts::{create_post, delete_post, get_post, list_posts, update_post};
