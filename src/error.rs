use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartisanError {
    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartisanError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
