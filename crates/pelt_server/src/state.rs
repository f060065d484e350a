use pelt_core::traits::{ProfileService, SkinStore};

#[derive(Clone)]
pub struct AppState<P: ProfileService, S: SkinStore> {
    pub profiles: P,
    pub skins: S,
}
