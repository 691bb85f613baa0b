//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, issuances, publishers, readers, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteka API",
        version = "1.0.0",
        description = "Library Records Service REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Users
        users::get_user,
        users::create_user,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        // Publishing houses
        publishers::list_publishers,
        publishers::create_publishing,
        publishers::update_publishing,
        // Readers
        readers::get_reader,
        readers::create_reader,
        readers::overdue_readers,
        // Issuances
        issuances::create_issuance,
        issuances::list_reader_issuances,
        issuances::return_issuance,
    ),
    components(
        schemas(
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Publishing houses
            crate::models::publisher::Publishing,
            crate::models::publisher::CreatePublishing,
            crate::models::publisher::UpdatePublishing,
            // Readers
            crate::models::reader::Reader,
            crate::models::reader::CreateReader,
            // Issuances
            crate::models::issuance::Issuance,
            crate::models::issuance::CreateIssuance,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User management"),
        (name = "books", description = "Book catalog"),
        (name = "publishing", description = "Publishing houses"),
        (name = "readers", description = "Reader management"),
        (name = "issuances", description = "Issuance records")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
