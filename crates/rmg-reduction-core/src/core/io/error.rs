use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },

    #[error("Invalid reaction #{index}: {message}")]
    InvalidReaction { index: usize, message: String },

    #[error("Duplicate concentration for species '{label}' in '{path}'")]
    DuplicateConcentration { path: String, label: String },
}
