use actix_web::{web, App, HttpServer};
use mastermind::config::game::GameConfig;
use mastermind::config::server::ServerConfig;
use mastermind::infra::state::build_state;
use mastermind::middleware::cors::cors_middleware;
use mastermind::middleware::request_trace::RequestTrace;
use mastermind::middleware::structured_logger::StructuredLogger;
use mastermind::middleware::trace_span::TraceSpan;
use mastermind::routes;
use mastermind::services::spawn_idle_sweeper;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let server = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "Invalid server configuration");
            std::process::exit(1);
        }
    };
    let game = match GameConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "Invalid game configuration");
            std::process::exit(1);
        }
    };

    info!(
        inactivity_timeout_secs = game.inactivity_timeout.as_secs(),
        sweep_interval_secs = game.sweep_interval.as_secs(),
        results_dir = %game.results_dir.display(),
        seeded = game.rng_seed.is_some(),
        "Game configuration loaded"
    );

    let app_state = build_state().with_game_config(game.clone()).build();

    let shutdown = CancellationToken::new();
    let sweeper = spawn_idle_sweeper(
        app_state.engine.clone(),
        game.sweep_interval,
        shutdown.clone(),
    );

    let data = web::Data::new(app_state);

    info!(host = %server.host, port = server.port, "Starting Mastermind server");

    let result = HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await;

    shutdown.cancel();
    if let Err(e) = sweeper.await {
        error!(error = %e, "Idle sweeper task failed");
    }
    info!("Server stopped");

    result
}
