use std::path::PathBuf;

use thiserror::Error;

use crate::ThemeVariantKind;

/// Errors raised while loading or applying a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("could not parse theme: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read theme file \"{path}\": {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("theme \"{theme}\" has no {kind:?} variant")]
    MissingVariant {
        theme: String,
        kind: ThemeVariantKind,
    },
}
