pub use pelt_core::*;

#[cfg(feature = "server")]
pub mod server {
    pub use pelt_server::*;
}

#[cfg(feature = "client")]
pub mod client {
    pub use pelt_client::*;
}

#[cfg(feature = "fs")]
pub mod fs {
    pub use pelt_assets::*;
}

#[cfg(feature = "mojang")]
pub mod mojang {
    pub use pelt_mojang::*;
}

#[cfg(feature = "mock_profiles")]
pub mod mock {
    pub use pelt_mock::*;
}

pub mod prelude {
    pub use pelt_core::prelude::*;

    #[cfg(feature = "server")]
    pub use pelt_server::prelude::*;

    #[cfg(feature = "client")]
    pub use pelt_client::PeltClient;

    #[cfg(feature = "fs")]
    pub use pelt_assets::FileSystemSkins;

    #[cfg(feature = "mojang")]
    pub use pelt_mojang::{MojangClient, MojangConfig};

    #[cfg(feature = "mock_profiles")]
    pub use pelt_mock::{StaticProfiles, StaticSkins};
}
