use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod auth;
mod config;
mod error;
mod features;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::scores::handlers::create_score,
        features::scores::handlers::delete_score,
        features::scores::handlers::get_score,
        features::scores::handlers::list_recent_scores,
        features::courses::handlers::list_courses,
        features::courses::handlers::create_course,
        features::courses::handlers::update_course,
        features::courses::handlers::delete_course,
        features::users::handlers::register,
        features::users::handlers::login,
        features::users::handlers::list_pending_users,
        features::users::handlers::approve_user,
        features::users::handlers::deny_user,
        features::users::handlers::recompute_handicap,
        features::tee_offs::handlers::create_tee_off,
        features::tee_offs::handlers::list_tee_offs,
        features::tee_offs::handlers::add_golfer,
        features::tee_offs::handlers::remove_golfer,
        features::leaderboard::handlers::get_leaderboard,
    ),
    components(
        schemas(
            storage::dto::score::CreateScoreRequest,
            storage::dto::score::DeleteScoreRequest,
            storage::dto::score::ScoreResponse,
            storage::dto::score::CreateScoreResponse,
            storage::dto::score::DeleteScoreResponse,
            storage::dto::score::RecomputeHandicapResponse,
            storage::dto::score::RecentScoreEntry,
            storage::dto::score::RecentScoresResponse,
            storage::dto::course::CreateCourseRequest,
            storage::dto::course::UpdateCourseRequest,
            storage::dto::course::CourseResponse,
            storage::dto::user::RegisterRequest,
            storage::dto::user::LoginRequest,
            storage::dto::user::UserResponse,
            storage::dto::user::LoginResponse,
            storage::dto::tee_off::CreateTeeOffRequest,
            storage::dto::tee_off::AddGolferRequest,
            storage::dto::tee_off::RemoveGolferRequest,
            storage::dto::tee_off::TeeOffResponse,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::common::PaginationMeta,
            storage::models::Golfer,
        )
    ),
    tags(
        (name = "scores", description = "Round logging and the handicap lifecycle"),
        (name = "courses", description = "Course administration"),
        (name = "users", description = "Membership and credentials"),
        (name = "tee-offs", description = "Tee-off scheduling"),
        (name = "leaderboard", description = "Club standings"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting golf club API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    features::users::services::ensure_admin(db.pool(), &config)
        .await
        .context("Failed to bootstrap admin account")?;

    let bind_address = format!("{}:{}", config.host, config.port);
    let state = AppState::new(db, config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api/scores", features::scores::routes::routes())
        .nest("/api/courses", features::courses::routes::routes())
        .nest("/api/users", features::users::routes::routes())
        .nest("/api/tee-offs", features::tee_offs::routes::routes())
        .nest("/api/leaderboard", features::leaderboard::routes::routes())
        .layer(cors)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;

    axum::serve(listener, app).await?;

    Ok(())
}
