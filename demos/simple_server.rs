use pelt::prelude::*;
use std::env;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Providers
    let profiles = MojangClient::new(MojangConfig::default());
    let skins = FileSystemSkins::new("./assets");

    // Build App
    let app = PeltServer::default().build(profiles, skins);

    // Serve
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    println!("Server listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
