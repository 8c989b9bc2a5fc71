/// Roster Server - User registration API
use clap::{Parser, Subcommand};
use roster_server::{config::ServerConfig, create_router, state::AppState};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user registration server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// List all stored users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load_from(cli.config.as_deref())?;
    config.validate()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await?,
        Commands::ListUsers => list_users(config).await?,
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let app_state = AppState::from_settings(&config.storage).await;
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        "Server is running in {} mode on port {}",
        config.server.mode,
        config.server.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_users(config: ServerConfig) -> anyhow::Result<()> {
    let app_state = AppState::from_settings(&config.storage).await;

    let users = app_state.store.list_users().await?;

    println!("Users:");
    for user in users {
        println!(
            "  {} - {} {} <{}> ({}) created {}",
            user.id,
            user.name.as_deref().unwrap_or("-"),
            user.last_name.as_deref().unwrap_or("-"),
            user.email.as_deref().unwrap_or("-"),
            user.city.as_deref().unwrap_or("-"),
            user.created_at.to_rfc3339(),
        );
    }

    Ok(())
}
