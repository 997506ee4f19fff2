use sea_orm::Database;

use stockroom_core::tracing::init_tracing;
use stockroom_inventory::config::InventoryConfig;
use stockroom_inventory::router::build_router;
use stockroom_inventory::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = InventoryConfig::from_env();
    let db = Database::connect(&config.database_url)
        .await
        .expect("database connection");

    let state = AppState {
        db: std::sync::Arc::new(db),
        session_secret: config.session_secret,
        cookie_domain: config.cookie_domain,
    };
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.inventory_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("bind listener");
    tracing::info!(%addr, "inventory service listening");
    axum::serve(listener, app).await.expect("serve");
}
