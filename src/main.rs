use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use conops_builder::{api, db, export};

#[derive(Parser)]
#[command(name = "conops")]
#[command(about = "ConOps builder: merges mission concept-of-operations input onto a baseline spec")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the ConOps builder server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "conops_builder=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let port = match cli.command {
        Some(Commands::Serve { port }) => port,
        None => 3000,
    };

    tracing::info!("Starting ConOps builder server on port {}", port);

    let db = db::Database::open_default()?;
    db.migrate()?;
    let exporter = export::Exporter::default_dirs()?;

    let app = api::create_router(db, exporter);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("ConOps builder listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
