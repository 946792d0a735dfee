// HikerHunger API v0.1
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod errors;
mod helpers;
mod routes;
mod services;

use config::AppConfig;

/// HikerHunger API — OpenAPI specification.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HikerHunger API",
        version = "0.1.0",
        description = "Backend API for HikerHunger - a calorie calculator for hikers. \
            Estimates per-day and trip-total calorie and macronutrient requirements \
            from biometrics, trip parameters and environmental modifiers, using \
            Mifflin-St Jeor BMR and Pandolf-based hiking energy expenditure.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Calories", description = "Calorie and macronutrient estimation"),
        (name = "Meals", description = "Meal recommendations"),
    ),
    paths(
        routes::health::root,
        routes::health::health_check,
        routes::calories::calculate_calories,
        routes::meals::recommend_meals,
    ),
    components(
        schemas(
            routes::health::RootResponse,
            routes::health::HealthResponse,
            services::calorie::CalorieResult,
            services::calorie::DailyBreakdown,
            services::calorie::MacroBreakdown,
            routes::meals::MealRecommendationRequest,
            routes::meals::MealRecommendationResponse,
            routes::meals::DailyRequirement,
            errors::ErrorResponse,
        )
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hikerhunger_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    // CORS — public calculator API; GET for calculations, POST for the meal stub
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers(Any);

    // Build router — every handler is stateless, so no shared state to wire
    let app = Router::new()
        .route("/", get(routes::health::root))
        .route("/v1/api/health", get(routes::health::health_check))
        .route(
            "/v1/api/calculate-calories",
            get(routes::calories::calculate_calories),
        )
        .route(
            "/v1/api/recommend-meals",
            post(routes::meals::recommend_meals),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("API server listening on {}", addr);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger-ui/",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind TCP listener");
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
