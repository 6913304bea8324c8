// Pipeline error taxonomy
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("readings request failed with status {0}")]
    Status(u16),

    #[error("readings request could not be sent")]
    Transport(#[source] reqwest::Error),

    #[error("readings request could not be built: {0}")]
    InvalidRequest(String),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("readings response is not valid JSON or lacks an `items` list")]
    Body(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("display surface has no element with id `{0}`")]
    MissingElement(String),

    #[error("chart configuration could not be serialized")]
    Config(#[from] serde_json::Error),

    #[error("failed to write chart page to '{path}'")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
