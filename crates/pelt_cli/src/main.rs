use clap::{Parser, Subcommand};
use pelt_assets::FileSystemSkins;
use pelt_client::PeltClient;
use pelt_mojang::{MojangClient, MojangConfig};
use pelt_server::PeltServer;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pelt")]
#[command(about = "Minecraft skin resolver and proxy")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the skin proxy server
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "0.0.0.0:3000", env = "PELT_ADDR")]
        addr: String,

        /// Directory containing the steve.png/alex.png fallback skins
        #[arg(long, default_value = "./assets", env = "PELT_ASSETS")]
        assets: PathBuf,
    },
    /// Fetch a player's skin through a running server
    Fetch {
        /// Player name or UUID
        player: String,

        /// Server URL
        #[arg(short, long, default_value = "http://localhost:3000")]
        url: String,

        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { addr, assets } => {
            let profiles = MojangClient::new(MojangConfig::default());
            let skins = FileSystemSkins::new(assets);

            let app = PeltServer::default().build(profiles, skins);

            println!("Server listening on http://{addr}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
        Commands::Fetch {
            player,
            url,
            output,
        } => {
            println!("Fetching skin for '{player}'...");

            let client = PeltClient::new(url.trim_end_matches('/'));
            let image = client.fetch_skin(&player).await?;

            if let Some(parent) = output.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&output, &image.bytes).await?;

            println!("✅ Saved to {output:?} ({})", image.content_type);
        }
    }

    Ok(())
}
