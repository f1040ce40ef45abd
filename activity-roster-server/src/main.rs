use std::num::NonZeroU16;
use std::path::PathBuf;
use std::sync::Arc;

use activity_roster_server::roster::{CapacityPolicy, RosterService};
use activity_roster_server::routes;
use activity_roster_server::store::ActivityStore;
use axum::routing::get;
use clap::{Parser, ValueHint};
use log::LevelFilter;
use tokio::signal;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .filter(Some("tower_http"), LevelFilter::Debug)
        .filter(Some("activity_roster_server"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    let CliArgs {
        host,
        port,
        static_dir,
        enforce_capacity,
    } = CliArgs::parse();

    log::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_version = activity_roster_api::api::VERSION;
        "Initializing server"
    );

    if !static_dir.is_dir() {
        log::warn!(
            path:debug = static_dir,
            cwd:debug = std::env::current_dir().ok();
            "static directory not found relative to the working directory, front-end will 404, set --static-dir"
        );
    }

    let capacity = if enforce_capacity {
        CapacityPolicy::Enforce
    } else {
        CapacityPolicy::Unenforced
    };
    log::info!(capacity:debug; "seeding activity store");
    let service = RosterService::new(ActivityStore::seeded(), capacity);
    let state = Arc::new(RwLock::new(service));

    let router = routes::routes(state, &static_dir)
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!(
        addr:display = host,
        port = port.get();
        "listening to TCP"
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

#[derive(Parser)]
struct CliArgs {
    /// The host address for the activity roster server.
    #[arg(
        long,
        value_name = "URI",
        value_hint = ValueHint::Hostname,
        default_value = "0.0.0.0",
        env = "ACTIVITY_ROSTER_HOST",
    )]
    host: String,
    /// The host port for the activity roster server.
    #[arg(
        short,
        long,
        value_name = "PORT",
        value_hint = ValueHint::Other,
        default_value = "8000",
        env = "ACTIVITY_ROSTER_PORT",
    )]
    port: NonZeroU16,
    /// Directory served under `/static`, containing the front-end.
    ///
    /// A relative path is resolved against the current working directory,
    /// the bundled front-end lives in `activity-roster-server/static`.
    #[arg(
        long,
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        default_value = "static",
        env = "ACTIVITY_ROSTER_STATIC_DIR",
    )]
    static_dir: PathBuf,
    /// Reject signups once an activity has `max_participants` participants.
    #[arg(long, env = "ACTIVITY_ROSTER_ENFORCE_CAPACITY")]
    enforce_capacity: bool,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT (ctrl+c) handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => log::info!("received SIGINT (ctrl+c), shutting down"),
        () = terminate => log::info!("received SIGTERM, shutting down"),
    }
}
