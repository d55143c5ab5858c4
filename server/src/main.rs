mod config;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();
    let store = store::FileStore::new(config.users_file.clone());
    let signer = services::session::TokenSigner::new(&config.session_secret);
    let state = state::AppState::new(Arc::new(store), signer, config.bcrypt_cost);

    let app = routes::app(state, &config.client_origin);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, users_file = %config.users_file.display(), "vitrine credential service listening");
    axum::serve(listener, app).await.expect("server failed");
}
