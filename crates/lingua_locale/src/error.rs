use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::CatalogParseError;

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error(transparent)]
    Catalog(#[from] CatalogParseError),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
