use sea_orm::Database;
use tracing::info;

use emlak_api::config::ApiConfig;
use emlak_api::infra::mail::SmtpMailer;
use emlak_api::infra::storage::S3ImageStore;
use emlak_api::router::build_router;
use emlak_api::state::AppState;

#[tokio::main]
async fn main() {
    emlak_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let storage = S3ImageStore::new(
        aws_sdk_s3::Client::new(&aws_config),
        config.s3_bucket.clone(),
        config.s3_public_base_url.clone(),
    );

    let mailer = SmtpMailer::new(&config.mail).expect("failed to build SMTP transport");

    let state = AppState {
        db,
        storage,
        mailer,
        jwt_secret: config.jwt_secret.clone(),
        cookie_domain: config.cookie_domain.clone(),
    };

    let router = build_router(state, &config.allowed_origins);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
