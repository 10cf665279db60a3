/// Vision Server - user CRUD API over an in-memory store
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use vision_core::UserService;
use vision_server::{
    config::ServerConfig,
    create_router, logging,
    state::{build_user_service, AppState},
};

#[derive(Parser)]
#[command(name = "vision-server")]
#[command(about = "Vision API user service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "VISION_CONFIG")]
        config: Option<PathBuf>,
        /// Start without the sample users
        #[arg(long)]
        empty: bool,
    },
    /// Print the users the server would start with
    ListUsers {
        /// Configuration file path
        #[arg(short, long, env = "VISION_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, empty } => {
            serve(config, empty).await?;
        }
        Commands::ListUsers { config } => {
            list_users(config).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>, empty: bool) -> anyhow::Result<()> {
    // Load configuration
    let mut config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;
    if empty {
        config.store.seed = false;
    }

    let _log_guard = logging::init(&config.logging)?;

    tracing::info!("Starting Vision Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Logs: {}", config.logging.directory.display());

    let users = Arc::new(build_user_service(&config.store));
    tracing::info!(
        "User store initialized with {} users",
        users.store().len().await
    );

    let app = create_router(AppState::new(users));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_users(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    let service = build_user_service(&config.store);

    println!("Users:");
    for user in service.list_users().await? {
        println!(
            "  {} - {} <{}>{}",
            user.id,
            user.name.as_deref().unwrap_or("-"),
            user.email,
            if user.is_active { "" } else { " (inactive)" }
        );
    }

    Ok(())
}
