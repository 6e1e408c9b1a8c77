#![allow(dead_code)]

use std::sync::Once;

use pgprobe::config::DbConfig;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("pgprobe=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the application with the given probe configuration and returns its
/// base address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(db_config: DbConfig) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, pgprobe::app(db_config)).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client.get(format!("{address}/")).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    address
}

/// Probe configuration pointing at a host that can never resolve.
///
/// `.invalid` is reserved by RFC 2606, so the connection attempt fails at DNS
/// resolution without touching the network.
pub fn unreachable_config() -> DbConfig {
    DbConfig {
        host: "db.invalid".into(),
        user: "probe".into(),
        password: "probe".into(),
        dbname: "probe".into(),
    }
}
