//! Integration Tests: Post Wire Contract
//!
//! Tests the public serialization surface of the service.
//!
//! Coverage:
//! - Outbound projection: a post serializes to exactly {id, title}
//! - Inbound writes: only title is writable; id in input is dropped
//! - Required-field and length validation on write payloads
//! - Round-trip: representation fed back through the write path
//! - Paginated listing envelope shape
//! - JSON error body shape and status codes

use actix_web::body::to_bytes;
use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use blog_service::config::PaginationConfig;
use blog_service::error::AppError;
use blog_service::handlers::posts::PostListResponse;
use blog_service::models::Post;
use blog_service::serializers::{PostRepr, PostWrite};
use blog_service::services::Page;
use chrono::Utc;
use validator::Validate;

fn sample_post(id: i64, title: &str) -> Post {
    let now = Utc::now();
    Post {
        id,
        title: title.to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn post_serializes_to_exactly_id_and_title() {
    let post = sample_post(7, "Hello");
    let value = serde_json::to_value(PostRepr::from(post)).unwrap();

    assert_eq!(value, serde_json::json!({"id": 7, "title": "Hello"}));
    assert_eq!(value.as_object().unwrap().len(), 2);
}

#[test]
fn write_payload_accepts_only_title() {
    let write: PostWrite =
        serde_json::from_str(r#"{"id": 42, "title": "World", "author": "nobody"}"#).unwrap();
    assert_eq!(write.title, "World");
    assert!(write.validate().is_ok());
}

#[test]
fn write_payload_without_title_is_rejected() {
    assert!(serde_json::from_str::<PostWrite>(r#"{"id": 42}"#).is_err());
}

#[test]
fn representation_round_trips_through_write_path() {
    let post = sample_post(7, "Hello");

    let mut value = serde_json::to_value(PostRepr::from(&post)).unwrap();
    value.as_object_mut().unwrap().remove("id");

    let write: PostWrite = serde_json::from_value(value).unwrap();
    assert_eq!(write.normalized_title(), post.title);
}

#[test]
fn listing_envelope_has_expected_shape() {
    let response = PostListResponse {
        posts: vec![
            PostRepr::from(sample_post(2, "second")),
            PostRepr::from(sample_post(1, "first")),
        ],
        total: 2,
        page: 1,
        limit: 20,
    };

    let value = serde_json::to_value(&response).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert_eq!(object["total"], 2);
    assert_eq!(object["page"], 1);
    assert_eq!(object["limit"], 20);
    assert_eq!(
        object["posts"],
        serde_json::json!([
            {"id": 2, "title": "second"},
            {"id": 1, "title": "first"}
        ])
    );
}

#[test]
fn page_request_is_clamped_to_configured_bounds() {
    let config = PaginationConfig {
        default_limit: 20,
        max_limit: 100,
    };

    let page = Page::clamped(Some(4), Some(500), &config);
    assert_eq!(page.page, 4);
    assert_eq!(page.limit, 100);
    assert_eq!(page.offset(), 300);

    let page = Page::clamped(None, None, &config);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 20);
}

#[actix_web::test]
async fn validation_error_produces_json_400() {
    let err = AppError::ValidationError("title must not be blank".to_string());
    let resp = err.error_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(resp.into_body()).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], 400);
    assert!(value["error"]
        .as_str()
        .unwrap()
        .contains("title must not be blank"));
}

#[actix_web::test]
async fn not_found_error_produces_json_404() {
    let err = AppError::NotFound("post 12 not found".to_string());
    let resp = err.error_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(resp.into_body()).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], 404);
}
