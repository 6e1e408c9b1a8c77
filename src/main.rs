use pgprobe::{app, config::DbConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pgprobe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let app = app(DbConfig::from_env());

    let listener = TcpListener::bind("0.0.0.0:8000").await.unwrap();
    info!("Server starting at http://0.0.0.0:8000");

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
