mod core;
mod features;
mod shared;


use crate::core::config::Config;
use crate::core::database;
use crate::core::router::{build_router, AppServices};
use crate::core::seed::Seeder;
use crate::features::auth::repositories::{AdminRepository, PgAdminRepository};
use crate::features::auth::services::AuthService;
use crate::features::auth::SessionManager;
use crate::features::departments::repositories::{DepartmentRepository, PgDepartmentRepository};
use crate::features::departments::DepartmentService;
use crate::features::reports::repositories::{PgReportRepository, ReportRepository};
use crate::features::reports::ReportService;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    if config.session.uses_placeholder_secret() {
        tracing::warn!("JWT_SECRET is not set, sessions are signed with the placeholder secret");
    }

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    database::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    // Repositories
    let department_repository: Arc<dyn DepartmentRepository> =
        Arc::new(PgDepartmentRepository::new(pool.clone()));
    let admin_repository: Arc<dyn AdminRepository> =
        Arc::new(PgAdminRepository::new(pool.clone()));
    let report_repository: Arc<dyn ReportRepository> =
        Arc::new(PgReportRepository::new(pool.clone()));

    if config.seed.enabled {
        let seeder = Seeder::new(
            Arc::clone(&department_repository),
            Arc::clone(&admin_repository),
            Arc::clone(&report_repository),
        );
        seeder
            .run(&config.seed)
            .await
            .map_err(|e| anyhow::anyhow!("Seeding failed: {}", e))?;
    } else {
        tracing::info!("Demo data seeding disabled");
    }

    // Services
    let sessions = Arc::new(SessionManager::new(&config.session));
    let services = AppServices {
        auth: Arc::new(AuthService::new(
            Arc::clone(&department_repository),
            Arc::clone(&admin_repository),
            Arc::clone(&sessions),
        )),
        departments: Arc::new(DepartmentService::new(Arc::clone(&department_repository))),
        reports: Arc::new(ReportService::new(Arc::clone(&report_repository))),
        sessions,
    };
    tracing::info!("Services initialized");

    let app = build_router(&services, &config.app, &config.swagger);

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, closing database pool");
    pool.close().await;

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
