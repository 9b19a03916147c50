use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::competitions::handlers::list_competitions,
        features::competitions::handlers::get_competition,
        features::competitions::handlers::create_competition,
        features::competitions::handlers::update_competition,
        features::competitions::handlers::delete_competition,
        features::competitions::handlers::list_competition_cube_types,
        features::competitions::handlers::set_competition_cube_types,
        features::competitors::handlers::register_competitor,
        features::competitors::handlers::list_competitors,
        features::competitors::handlers::verify_competitor,
        features::competitors::handlers::cancel_competitor,
        features::competitors::handlers::list_competitor_cube_types,
        features::competitors::handlers::set_competitor_cube_types,
        features::cube_types::handlers::list_cube_types,
        features::cube_types::handlers::create_cube_type,
        features::users::handlers::create_user,
        features::users::handlers::get_user,
        features::rounds::handlers::create_round,
        features::rounds::handlers::list_rounds,
        features::rounds::handlers::get_round,
        features::rounds::handlers::delete_round,
        features::results::handlers::generate_results,
        features::results::handlers::list_results,
        features::results::handlers::save_solves,
        features::results::handlers::finish_round,
        features::records::handlers::list_records,
        features::records::handlers::list_cube_type_records,
        features::records::handlers::create_record,
        features::scrambles::handlers::generate_scrambles,
        features::scrambles::handlers::list_scramble_groups,
        features::invoices::handlers::create_invoice,
        features::invoices::handlers::get_invoice,
        features::invoices::handlers::payment_callback,
    ),
    components(
        schemas(
            storage::dto::competition::CreateCompetitionRequest,
            storage::dto::competition::UpdateCompetitionRequest,
            storage::dto::competition::SetCubeTypesRequest,
            storage::dto::competition::CompetitionResponse,
            storage::dto::competitor::RegisterCompetitorRequest,
            storage::dto::competitor::SetCompetitorCubeTypesRequest,
            storage::dto::competitor::CompetitorResponse,
            storage::dto::round::CreateRoundRequest,
            storage::dto::round::RoundResponse,
            storage::dto::result::SolveInput,
            storage::dto::result::SaveSolvesRequest,
            storage::dto::result::ResultResponse,
            storage::dto::record::CreateRecordRequest,
            storage::dto::record::RecordResponse,
            storage::dto::invoice::PaymentCallbackRequest,
            storage::dto::invoice::InvoiceResponse,
            features::cube_types::handlers::CreateCubeTypeRequest,
            features::users::handlers::CreateUserRequest,
            storage::models::Competition,
            storage::models::CubeType,
            storage::models::User,
            storage::models::Competitor,
            storage::models::Round,
            storage::models::RoundResult,
            storage::models::Record,
            storage::models::ScrambleGroup,
            storage::models::Invoice,
        )
    ),
    tags(
        (name = "competitions", description = "Competition management"),
        (name = "competitors", description = "Registration and verification"),
        (name = "cube-types", description = "Puzzle catalogue"),
        (name = "users", description = "User accounts"),
        (name = "rounds", description = "Competition rounds"),
        (name = "results", description = "Result sheets and solve entry"),
        (name = "records", description = "Record tracking"),
        (name = "scrambles", description = "Scramble generation"),
        (name = "invoices", description = "Registration payments"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

fn api_routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .merge(features::competitions::routes::routes(api_keys.clone()))
        .merge(features::competitors::routes::routes(api_keys.clone()))
        .merge(features::cube_types::routes::routes(api_keys.clone()))
        .merge(features::users::routes::routes())
        .merge(features::rounds::routes::routes(api_keys.clone()))
        .merge(features::results::routes::routes(api_keys.clone()))
        .merge(features::records::routes::routes(api_keys.clone()))
        .merge(features::scrambles::routes::routes(api_keys))
        .merge(features::invoices::routes::routes())
}

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

    tracing::info!("Starting cube competition API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let cors = CorsLayer::permissive();

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes(api_keys))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await?;

    Ok(())
}
