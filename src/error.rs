use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("API Error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Generation Failed: {0}")]
    GenerationFailed(String),
}
