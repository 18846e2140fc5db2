use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdaterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("JSON (de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Updating {dataset} from {url} failed: {source}")]
    Stage {
        dataset: String,
        url: String,
        #[source]
        source: Box<UpdaterError>,
    },
}

impl UpdaterError {
    /// Wrap a failure with the identity of the stage it happened in
    pub fn in_stage(self, dataset: &str, url: &str) -> Self {
        UpdaterError::Stage {
            dataset: dataset.to_string(),
            url: url.to_string(),
            source: Box::new(self),
        }
    }

    /// Name of the dataset whose stage failed, if this is a stage failure
    pub fn dataset(&self) -> Option<&str> {
        match self {
            UpdaterError::Stage { dataset, .. } => Some(dataset),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, UpdaterError>;
