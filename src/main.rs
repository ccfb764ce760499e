mod error;
mod search;

use std::sync::{Arc, Mutex};

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use search::handlers;
use search::models::{Airport, SearchRequest, SearchSnapshot, SeatingClass};
use search::service::SearchValidator;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        search::handlers::submit_search,
        search::handlers::current_search,
    ),
    components(
        schemas(SearchRequest, SearchSnapshot, Airport, SeatingClass)
    ),
    tags(
        (name = "search", description = "Flight-search validation endpoints")
    ),
    info(
        title = "Flight Search API",
        version = "1.0.0",
        description = "Validates flight-search requests against the booking business rules and keeps the last accepted search"
    )
)]
struct ApiDoc;

/// Application state shared across handlers
///
/// The validator itself is single-threaded; the mutex is the external
/// mutual-exclusion boundary that makes it safe to share between handlers.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<Mutex<SearchValidator>>,
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
fn create_router() -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let state = AppState {
        search: Arc::new(Mutex::new(SearchValidator::new())),
    };

    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()))
        // API routes
        .route("/api/search", post(handlers::submit_search))
        .route("/api/search", get(handlers::current_search))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Flight Search API - Starting...");

    // Get configuration from environment variables
    let host = std::env::var("HOST")
        .unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string());

    // Create the application router
    let app = create_router();

    // Start the Axum server
    let addr = format!("{}:{}", host, port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Flight Search API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
