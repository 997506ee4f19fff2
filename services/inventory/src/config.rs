/// Inventory service configuration loaded from environment variables.
#[derive(Debug)]
pub struct InventoryConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing session tokens.
    pub session_secret: String,
    /// Cookie domain attribute (root domain, e.g. "example.com").
    pub cookie_domain: String,
    /// TCP port to listen on (default 3115). Env var: `INVENTORY_PORT`.
    pub inventory_port: u16,
}

impl InventoryConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            session_secret: std::env::var("SESSION_SECRET").expect("SESSION_SECRET"),
            cookie_domain: std::env::var("COOKIE_DOMAIN").expect("COOKIE_DOMAIN"),
            inventory_port: std::env::var("INVENTORY_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3115),
        }
    }
}
