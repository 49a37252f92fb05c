use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("DatasetError: The dataset contains no countries")]
    Empty,

    #[error("DatasetError: Could not parse dataset ({0})")]
    Malformed(#[from] serde_json::Error),

    #[error("DatasetError: Could not read dataset file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("DatasetError: Invalid country code (code: {code})")]
    InvalidCode { code: String },

    #[error("DatasetError: No display name resolvable (code: {code}, translation: {translation})")]
    MissingDisplayName { code: String, translation: String },
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("NameResolutionError: No display name for translation {translation}")]
pub struct NameResolutionError {
    pub translation: String,
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("UnknownRecordError: Record was not taken from this index")]
pub struct UnknownRecordError;

/// Union of the index's error kinds, for callers chaining several operations.
#[derive(Error, Debug)]
pub enum CountryError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    NameResolution(#[from] NameResolutionError),

    #[error(transparent)]
    UnknownRecord(#[from] UnknownRecordError),

    #[error("CountryError: Unknown country code (code: {code})")]
    UnknownCode { code: String },
}
