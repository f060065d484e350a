use pelt_core::traits::{ProfileService, SkinStore};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

mod api;

pub mod state;

use state::AppState;

/// The builder for the pelt server.
#[derive(Clone, Debug, Default)]
pub struct PeltServer {
    config: PeltServerConfig,
}

impl PeltServer {
    pub fn new(config: PeltServerConfig) -> Self {
        Self { config }
    }
}

#[derive(Clone, Debug)]
pub struct PeltServerConfig {
    /// Route serving the skin endpoint.
    ///
    /// Defaults to `/skin`.
    pub route: String,
}

impl Default for PeltServerConfig {
    fn default() -> Self {
        Self {
            route: "/skin".to_string(),
        }
    }
}

impl PeltServer {
    pub fn build<P: ProfileService, S: SkinStore>(self, profiles: P, skins: S) -> Router {
        let PeltServerConfig { route } = self.config;
        let state = AppState { profiles, skins };

        Router::new()
            .route("/health", get(|| async { "OK" }))
            .route(route.as_str(), get(api::get_skin))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

pub mod prelude {
    pub use crate::PeltServer;
    pub use crate::PeltServerConfig;
    pub use crate::state::*;
}
