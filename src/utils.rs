use poem_openapi::Tags;
use std::env;
use std::path::PathBuf;

#[derive(Tags)]
pub enum ApiTags {
    /// Health check endpoints
    HealthCheck,
}

/// Port the server binds to. Defaults to 3000 when PORT is unset or not a number.
pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000)
}

/// Directory the migrate CLI reads and writes. Defaults to ./migrations.
pub fn migrations_dir() -> PathBuf {
    let dir = env::var("MIGRATIONS_DIR").unwrap_or("migrations".to_string());
    return PathBuf::from(dir);
}
