pub mod error;
pub mod identity;
pub mod skin;
pub mod texture;
pub mod traits;

pub mod prelude {
    pub use super::error::*;
    pub use super::identity::*;
    pub use super::skin::*;
    pub use super::texture::*;
    pub use super::traits::*;
}
