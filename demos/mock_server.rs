use pelt::prelude::*;
use std::env;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Canned players only, no outbound calls. Useful for poking at the
    // endpoint offline.
    let profiles = StaticProfiles::new().with_player("Notch", "069a79f444e94726a5befca90e38aaf5");
    let skins = StaticSkins;

    let app = PeltServer::default().build(profiles, skins);

    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    println!("Server listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
