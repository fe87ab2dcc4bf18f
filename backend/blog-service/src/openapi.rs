/// OpenAPI documentation for the blog service
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog Service API",
        version = "1.0.0",
        description = "Blog post management service. Posts expose a two-field public representation (id, title); listings are paginated.",
        contact(
            name = "Journal Team",
            email = "team@journal.dev"
        ),
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "posts", description = "Post creation, retrieval, updates, and deletion"),
    )
)]
pub struct ApiDoc;
