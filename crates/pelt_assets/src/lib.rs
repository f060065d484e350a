//! # Pelt filesystem skins
//!
//! A local directory backend for the built-in fallback skins.
//!
//! This crate implements the [`SkinStore`] trait, reading the
//! `steve.png` / `alex.png` images from a configured directory. The
//! vanilla textures are Mojang assets and are not bundled; point the
//! store at a directory containing the two files.
//!
//! ## Usage
//!
//! ```no_run
//! use pelt_assets::FileSystemSkins;
//!
//! let skins = FileSystemSkins::new("./assets");
//! ```

use pelt_core::prelude::*;

use bytes::Bytes;
use std::path::PathBuf;
use tokio::fs;

#[derive(Clone)]
pub struct FileSystemSkins {
    root: PathBuf,
}

impl FileSystemSkins {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { root: path.into() }
    }

    fn get_path(&self, skin: DefaultSkin) -> PathBuf {
        self.root.join(skin.file_name())
    }
}

impl SkinStore for FileSystemSkins {
    async fn read_default(&self, skin: DefaultSkin) -> Result<SkinImage, AssetError> {
        let path = self.get_path(skin);
        match fs::read(&path).await {
            Ok(data) => Ok(SkinImage {
                bytes: Bytes::from(data),
                content_type: "image/png".to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AssetError::NotFound(path.to_string_lossy().to_string()))
            }
            Err(e) => Err(AssetError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_the_model_specific_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("steve.png"), b"steve-bytes").unwrap();
        std::fs::write(dir.path().join("alex.png"), b"alex-bytes").unwrap();

        let skins = FileSystemSkins::new(dir.path());

        let steve = skins.read_default(DefaultSkin::Steve).await.unwrap();
        assert_eq!(steve.bytes.as_ref(), b"steve-bytes");
        assert_eq!(steve.content_type, "image/png");

        let alex = skins.read_default(DefaultSkin::Alex).await.unwrap();
        assert_eq!(alex.bytes.as_ref(), b"alex-bytes");
    }

    #[tokio::test]
    async fn missing_asset_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let skins = FileSystemSkins::new(dir.path());

        let err = skins.read_default(DefaultSkin::Steve).await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }
}
