use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("participant query failed: {0}")]
    Database(String),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("serialized participants are malformed: {0}")]
    Malformed(String),
    #[error("participant {id} belongs to training {owner}")]
    Conflict { id: String, owner: String },
    #[error("participant write failed: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for FetchError {
    fn from(e: rusqlite::Error) -> Self {
        FetchError::Database(e.to_string())
    }
}

impl From<rusqlite::Error> for SaveError {
    fn from(e: rusqlite::Error) -> Self {
        SaveError::Database(e.to_string())
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Malformed(e.to_string())
    }
}
