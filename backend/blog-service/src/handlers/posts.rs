/// Post handlers - HTTP endpoints for post operations
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::config::PaginationConfig;
use crate::error::Result;
use crate::serializers::{PostRepr, PostWrite};
use crate::services::{Page, PostService};

/// Pagination query parameters for the listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Response envelope for the paginated listing
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostRepr>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
}

/// List posts, newest first
/// GET /api/v1/posts
pub async fn list_posts(
    pool: web::Data<PgPool>,
    pagination: web::Data<PaginationConfig>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let page = Page::clamped(query.page, query.limit, pagination.get_ref());

    let (posts, total) = service.list_posts(page).await?;

    Ok(HttpResponse::Ok().json(PostListResponse {
        posts: posts.iter().map(PostRepr::from).collect(),
        total,
        page: page.page,
        limit: page.limit,
    }))
}

/// Create a new post
/// POST /api/v1/posts
pub async fn create_post(
    pool: web::Data<PgPool>,
    req: web::Json<PostWrite>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service.create_post(&req).await?;

    Ok(HttpResponse::Created().json(PostRepr::from(post)))
}

/// Get a post by ID
/// GET /api/v1/posts/{post_id}
pub async fn get_post(pool: web::Data<PgPool>, post_id: web::Path<i64>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    match service.get_post(*post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(PostRepr::from(post))),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Update a post's title
/// PUT/PATCH /api/v1/posts/{post_id}
pub async fn update_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<i64>,
    req: web::Json<PostWrite>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    match service.update_post(*post_id, &req).await? {
        Some(post) => Ok(HttpResponse::Ok().json(PostRepr::from(post))),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Delete a post
/// DELETE /api/v1/posts/{post_id}
pub async fn delete_post(pool: web::Data<PgPool>, post_id: web::Path<i64>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let deleted = service.delete_post(*post_id).await?;

    if deleted {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().finish())
    }
}
