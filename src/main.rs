#[deny(clippy::all)]
use dotenv::dotenv;
use poem::{
    get,
    listener::TcpListener,
    middleware::{Cors, Tracing},
    EndpointExt, Route, Server,
};
use poem_openapi::OpenApiService;
use starterkit::{health, shell, utils};
use tokio::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    dotenv().ok(); // This line loads the environment variables from the ".env" file.
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("RUST_LOG"))
        .init();

    let port = utils::get_port();

    let health_api = health::health_checks().await;

    let api_service = OpenApiService::new(health_api, "Starterkit", "1.0")
        .server(format!("http://localhost:{}/api", port));
    let ui = api_service.swagger_ui();

    let route = Route::new()
        .at("/", get(shell::app_shell))
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .with(Cors::new())
        .with(Tracing);

    info!("Server running at http://localhost:{}", port);

    Server::new(TcpListener::bind(format!("0.0.0.0:{}", port)))
        .run_with_graceful_shutdown(
            route,
            async move {
                let _ = tokio::signal::ctrl_c().await;
            },
            Some(Duration::from_secs(5)),
        )
        .await
}
