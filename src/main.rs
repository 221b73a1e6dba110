use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hisab::application::services::UserService;
use hisab::infrastructure::config::{run_migrations, AppConfig};
use hisab::infrastructure::driven::database::PostgresUserRepository;
use hisab::infrastructure::driving::web::api::{auth_routes, user_routes, AppState};

async fn index() -> impl Responder {
    HttpResponse::Ok().body("Welcome to Hisab!")
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging; the fmt subscriber also bridges `log` records from
    // the actix Logger middleware.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Starting application...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Configuration loaded successfully");

    // Set up database connection pool
    let pool = match PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database.url)
        .await
    {
        Ok(pool) => {
            info!("Database connection established");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // Run database migrations
    if let Err(e) = run_migrations(&pool).await {
        error!("Failed to run database migrations: {}", e);
        std::process::exit(1);
    }

    // Create shared components
    let db_pool = Arc::new(pool);
    let user_repo = Arc::new(PostgresUserRepository::new(db_pool.clone()));
    let user_service = Arc::new(UserService::new(
        user_repo,
        config.auth.jwt_secret.clone(),
        config.auth.token_expiration_hours,
    ));

    let app_state = web::Data::new(AppState {
        user_service: user_service.clone(),
    });

    let server_config = config.server.clone();

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(app_state.clone())
            .service(auth_routes())
            .service(user_routes())
            .route("/", web::get().to(index))
    })
    .bind((server_config.host.clone(), server_config.port))?
    .run();

    info!(
        "Server listening on {}:{}",
        server_config.host, server_config.port
    );

    server.await?;

    info!("Application shutting down");
    Ok(())
}
