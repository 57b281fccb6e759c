use std::path::PathBuf;

/// Everything that can stop a run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("could not rewrite page: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),

    #[error("could not find id for {0}")]
    ProgramNotFound(String),

    #[error("cache {}: {source}", path.display())]
    Cache {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} cannot be expressed as a file:// URL", .0.display())]
    NotAFileUrl(PathBuf),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
