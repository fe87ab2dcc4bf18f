/// Post service - validation, persistence and pagination for the post resource
use sqlx::PgPool;
use validator::Validate;

use crate::config::PaginationConfig;
use crate::db::post_repo;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::Post;
use crate::serializers::PostWrite;

/// A clamped page request.
///
/// `page` is 1-based. `limit` is bounded by the configured maximum so a
/// client cannot request unbounded result sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub limit: u32,
}

impl Page {
    /// Build a page request from raw query parameters, applying defaults
    /// and bounds from configuration.
    pub fn clamped(page: Option<u32>, limit: Option<u32>, config: &PaginationConfig) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = limit
            .unwrap_or(config.default_limit)
            .clamp(1, config.max_limit);

        Self { page, limit }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }
}

/// Reject payloads the derive-level constraints or the blank check fail.
fn validate_write(write: &PostWrite) -> Result<()> {
    write
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    if write.normalized_title().is_empty() {
        return Err(AppError::ValidationError(
            "title must not be blank".to_string(),
        ));
    }

    Ok(())
}

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new post from a validated write payload.
    pub async fn create_post(&self, write: &PostWrite) -> Result<Post> {
        validate_write(write)?;

        let post = post_repo::create_post(&self.pool, write.normalized_title()).await?;

        metrics::POSTS_CREATED_TOTAL.inc();
        tracing::info!(post_id = post.id, "post created");

        Ok(post)
    }

    /// Get a post by ID.
    pub async fn get_post(&self, post_id: i64) -> Result<Option<Post>> {
        let post = post_repo::find_post_by_id(&self.pool, post_id).await?;
        Ok(post)
    }

    /// List one page of posts, newest first, along with the total count.
    pub async fn list_posts(&self, page: Page) -> Result<(Vec<Post>, i64)> {
        let posts = post_repo::list_posts(&self.pool, i64::from(page.limit), page.offset()).await?;
        let total = post_repo::count_posts(&self.pool).await?;

        Ok((posts, total))
    }

    /// Update a post's title. Returns `None` if the post does not exist.
    pub async fn update_post(&self, post_id: i64, write: &PostWrite) -> Result<Option<Post>> {
        validate_write(write)?;

        let post = post_repo::update_post_title(&self.pool, post_id, write.normalized_title())
            .await?;

        if post.is_some() {
            tracing::info!(post_id, "post updated");
        }

        Ok(post)
    }

    /// Delete a post. Returns whether a row was removed.
    pub async fn delete_post(&self, post_id: i64) -> Result<bool> {
        let deleted = post_repo::delete_post(&self.pool, post_id).await?;

        if deleted {
            metrics::POSTS_DELETED_TOTAL.inc();
            tracing::info!(post_id, "post deleted");
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination() -> PaginationConfig {
        PaginationConfig {
            default_limit: 20,
            max_limit: 100,
        }
    }

    #[test]
    fn test_page_defaults() {
        let page = Page::clamped(None, None, &pagination());
        assert_eq!(page, Page { page: 1, limit: 20 });
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_page_zero_is_clamped_to_first() {
        let page = Page::clamped(Some(0), Some(10), &pagination());
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_limit_is_capped() {
        let page = Page::clamped(Some(1), Some(1_000), &pagination());
        assert_eq!(page.limit, 100);

        let page = Page::clamped(Some(1), Some(0), &pagination());
        assert_eq!(page.limit, 1);
    }

    #[test]
    fn test_offset_math() {
        let page = Page::clamped(Some(3), Some(25), &pagination());
        assert_eq!(page.offset(), 50);
    }

    #[test]
    fn test_validate_write_accepts_normal_title() {
        let write = PostWrite {
            title: "Hello".to_string(),
        };
        assert!(validate_write(&write).is_ok());
    }

    #[test]
    fn test_validate_write_rejects_blank_title() {
        let write = PostWrite {
            title: "   ".to_string(),
        };
        match validate_write(&write) {
            Err(AppError::ValidationError(_)) => {}
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_write_rejects_oversized_title() {
        let write = PostWrite {
            title: "a".repeat(256),
        };
        assert!(validate_write(&write).is_err());
    }
}
